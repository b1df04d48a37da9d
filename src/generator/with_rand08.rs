//! Integration with `rand` (v0.8) crate.

use super::V4Generator;
use crate::entropy::{EntropySource, EntropyUnavailable};
use rand::RngCore;

/// An adapter that implements [`EntropySource`] for [`RngCore`] types.
///
/// Bytes are requested through [`RngCore::try_fill_bytes`], so a generator that reports an
/// error (such as [`OsRng`](rand::rngs::OsRng) when the operating system source fails) yields
/// [`EntropyUnavailable`] rather than a panic.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> EntropySource for Adapter<T> {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyUnavailable> {
        self.0
            .try_fill_bytes(dest)
            .map_err(|e| EntropyUnavailable::new(dest.len(), e))
    }
}

impl<T: RngCore> V4Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}
