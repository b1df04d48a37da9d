//! Simple command that prints one or '-n count' UUIDv4 strings, or checks a string with
//! '--check STR'

use std::{env, io, io::Write, process::ExitCode};

use uuid4::Uuid;

enum Command {
    Generate(usize),
    Check(String),
}

fn main() -> io::Result<ExitCode> {
    let command = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-n count | --check uuid]",
                    program.as_deref().unwrap_or("uuid4")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    match command {
        Command::Generate(count) => {
            let mut buf = io::BufWriter::new(io::stdout());
            for _ in 0..count {
                match uuid4::uuid4() {
                    Ok(uuid) => writeln!(buf, "{}", uuid)?,
                    Err(err) => {
                        buf.flush()?;
                        eprintln!("Error: {}", err);
                        return Ok(ExitCode::FAILURE);
                    }
                }
            }
            buf.flush()?;
        }
        Command::Check(text) => match text.parse::<Uuid>() {
            Ok(uuid) => {
                let kind = if uuid.is_v4() { "v4" } else { "other" };
                println!("{} ({})", uuid, kind);
            }
            Err(err) => {
                eprintln!("Error: '{}': {}", text, err);
                return Ok(ExitCode::FAILURE);
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut command = None;
    while let Some(arg) = args.next() {
        if command.is_some() {
            return Err(format!("unexpected argument '{}'", arg));
        }
        match arg.as_str() {
            "-n" => {
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                command.replace(Command::Generate(c));
            }
            "--check" => {
                let Some(text) = args.next() else {
                    return Err("argument to option 'check' missing".to_owned());
                };
                command.replace(Command::Check(text));
            }
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }
    Ok(command.unwrap_or(Command::Generate(1)))
}
