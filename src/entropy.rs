//! Sources of random bytes for UUID generation.

use std::{error, fs, io::Read, path};

/// A trait that defines the minimum entropy source interface for
/// [`V4Generator`](crate::V4Generator).
pub trait EntropySource {
    /// Fills the whole of `dest` with random bytes.
    ///
    /// Implementations must return an error instead of leaving any part of `dest` unfilled.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyUnavailable>;
}

impl<T: EntropySource + ?Sized> EntropySource for &mut T {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyUnavailable> {
        (**self).fill_bytes(dest)
    }
}

/// Error returned when an entropy source cannot supply the requested number of bytes.
///
/// The failure is specific to the call that returned it; the caller may retry.
#[derive(Debug, thiserror::Error)]
#[error("entropy source could not supply {requested} random bytes")]
pub struct EntropyUnavailable {
    requested: usize,
    #[source]
    source: Box<dyn error::Error + Send + Sync + 'static>,
}

impl EntropyUnavailable {
    /// Creates an error for a request of `requested` bytes that failed because of `source`.
    pub fn new<E>(requested: usize, source: E) -> Self
    where
        E: Into<Box<dyn error::Error + Send + Sync + 'static>>,
    {
        Self {
            requested,
            source: source.into(),
        }
    }

    /// Returns the number of bytes that were requested.
    pub fn requested(&self) -> usize {
        self.requested
    }
}

/// An entropy source that reads a random device file such as `/dev/urandom`.
///
/// Every call opens the file, reads exactly the requested number of bytes and closes it again.
/// A read that ends early is reported as [`EntropyUnavailable`].
///
/// # Examples
///
/// ```rust,no_run
/// use uuid4::{entropy::DevUrandom, V4Generator};
///
/// let mut g = V4Generator::new(DevUrandom::default());
/// println!("{}", g.generate()?);
/// # Ok::<(), uuid4::entropy::EntropyUnavailable>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct DevUrandom {
    path: path::PathBuf,
}

impl DevUrandom {
    /// Creates a source that reads from the file at `path`.
    pub fn with_path(path: impl Into<path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the file read by this source.
    pub fn path(&self) -> &path::Path {
        &self.path
    }
}

impl Default for DevUrandom {
    fn default() -> Self {
        Self::with_path("/dev/urandom")
    }
}

impl EntropySource for DevUrandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyUnavailable> {
        // the handle is dropped, and so closed, on both the success and the error path
        let mut file =
            fs::File::open(&self.path).map_err(|e| EntropyUnavailable::new(dest.len(), e))?;
        file.read_exact(dest)
            .map_err(|e| EntropyUnavailable::new(dest.len(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::{DevUrandom, EntropySource, EntropyUnavailable};
    use std::{error::Error, io, io::Write};

    /// Fills buffer from file with enough bytes
    #[test]
    fn fills_buffer_from_file_with_enough_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&(0u8..32).collect::<Vec<_>>()).unwrap();

        let mut source = DevUrandom::with_path(file.path());
        let mut dest = [0u8; 16];
        source.fill_bytes(&mut dest).unwrap();
        assert_eq!(dest, std::array::from_fn::<u8, 16, _>(|i| i as u8));
    }

    /// Reports short read as unavailable entropy
    #[test]
    fn reports_short_read_as_unavailable_entropy() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xa5; 10]).unwrap();

        let mut source = DevUrandom::with_path(file.path());
        let mut dest = [0u8; 16];
        let err = source.fill_bytes(&mut dest).unwrap_err();
        assert_eq!(err.requested(), 16);

        let cause = err.source().unwrap().downcast_ref::<io::Error>().unwrap();
        assert_eq!(cause.kind(), io::ErrorKind::UnexpectedEof);
    }

    /// Reports missing device as unavailable entropy
    #[test]
    fn reports_missing_device_as_unavailable_entropy() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = DevUrandom::with_path(dir.path().join("no-such-device"));
        let err = source.fill_bytes(&mut [0u8; 16]).unwrap_err();
        assert_eq!(err.requested(), 16);
        assert_eq!(
            err.to_string(),
            "entropy source could not supply 16 random bytes"
        );
    }

    /// Reads from system random device
    #[cfg(unix)]
    #[test]
    fn reads_from_system_random_device() {
        let mut source = DevUrandom::default();
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        source.fill_bytes(&mut a).unwrap();
        source.fill_bytes(&mut b).unwrap();
        assert_ne!(a, b);
    }

    /// Wraps arbitrary error types
    #[test]
    fn wraps_arbitrary_error_types() {
        let err = EntropyUnavailable::new(16, "device busy");
        assert_eq!(err.source().unwrap().to_string(), "device busy");
    }
}
