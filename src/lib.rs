//! A Rust implementation of random UUID version 4
//!
//! ```rust
//! use uuid4::{uuid4, Uuid};
//!
//! let uuid = uuid4()?;
//! println!("{}", uuid); // e.g. "F044A856-FF7F-40E5-8170-419100000000"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte array in text order
//!
//! let parsed = uuid.to_string().parse::<Uuid>()?;
//! assert_eq!(parsed, uuid);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            random_a                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          random_a             |  ver  |       random_b        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                       random_c                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           random_c                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 4-bit `ver` field (high nibble of byte 6) is set at `0100`.
//! - The 2-bit `var` field (top bits of byte 8) is set at `10`.
//! - The remaining 122 bits are taken from the entropy source.
//!
//! # Text form
//!
//! UUIDs are written as 36 characters, `XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX`, with uppercase
//! hexadecimal digits and bytes in storage order. Parsing accepts digits in either case and
//! rejects everything else, including braces, `urn:uuid:` prefixes and the form without hyphens.
//! Parsing does not check the version or variant; use [`Uuid::is_v4`] where only random UUIDs
//! are acceptable.
//!
//! # Entropy sources
//!
//! [`uuid4`] reads from the operating system. [`V4Generator`] takes any [`EntropySource`],
//! including `rand` (v0.8) generators via [`V4Generator::with_rand08`] and random device files
//! via [`DevUrandom`](entropy::DevUrandom). Generation fails with
//! [`EntropyUnavailable`](entropy::EntropyUnavailable) when the source cannot supply all 16
//! bytes.
//!
//! # Crate features
//!
//! - `global_gen` (default): the [`uuid4`] entry point.
//! - `serde`: serialization as the canonical string, or as 16 bytes for non-human-readable
//!   formats.
//! - `uuid`: conversions to and from [`uuid::Uuid`](https://docs.rs/uuid).

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{ParseError, Uuid, Variant};

pub mod entropy;
pub use entropy::EntropySource;

pub mod generator;
#[doc(inline)]
pub use generator::V4Generator;

mod v4;
#[cfg(feature = "global_gen")]
pub use v4::uuid4;
