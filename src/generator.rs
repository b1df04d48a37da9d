//! UUIDv4 generator and related types.

use crate::entropy::{EntropySource, EntropyUnavailable};
use crate::Uuid;

pub mod with_rand08;

/// Represents a UUIDv4 generator that draws random bytes from an injected entropy source.
///
/// This type provides the interface to customize the source of randomness, e.g. to plug in a
/// seeded random number generator for reproducible identifiers in tests or a specific device
/// file. The [`uuid4`](crate::uuid4) function covers the common case of using the operating
/// system's source.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use uuid4::V4Generator;
///
/// let mut g = V4Generator::with_rand08(OsRng);
/// let uuid = g.generate()?;
/// assert!(uuid.is_v4());
/// # Ok::<(), uuid4::entropy::EntropyUnavailable>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<E> {
    /// The entropy source used by the generator.
    entropy: E,
}

impl<E: EntropySource> V4Generator<E> {
    /// Creates a generator instance.
    pub const fn new(entropy: E) -> Self {
        Self { entropy }
    }

    /// Generates a new UUIDv4 object.
    ///
    /// All 16 bytes are taken from the entropy source before the version and variant bits are
    /// set. If the source cannot supply them, no UUID is produced and the source's error is
    /// returned.
    pub fn generate(&mut self) -> Result<Uuid, EntropyUnavailable> {
        let mut bytes = [0u8; 16];
        self.entropy.fill_bytes(&mut bytes)?;
        bytes[6] = 0x40 | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Ok(Uuid::from(bytes))
    }

    /// Consumes the generator and returns the entropy source inside.
    pub fn into_inner(self) -> E {
        self.entropy
    }
}

/// Supports operations as an infinite iterator that produces the result of
/// [`generate`](V4Generator::generate) for each call of `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid4::V4Generator;
///
/// let uuids = V4Generator::with_rand08(rand::thread_rng())
///     .take(4)
///     .collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(uuids.len(), 4);
/// # Ok::<(), uuid4::entropy::EntropyUnavailable>(())
/// ```
impl<E: EntropySource> Iterator for V4Generator<E> {
    type Item = Result<Uuid, EntropyUnavailable>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<E: EntropySource> std::iter::FusedIterator for V4Generator<E> {}
