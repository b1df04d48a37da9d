//! Default entry point backed by the operating system's random source.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use crate::entropy::EntropyUnavailable;
use crate::{Uuid, V4Generator};
use rand::rngs::OsRng;

/// Generates a UUIDv4 object.
///
/// Each call reads 16 fresh bytes from the operating system's random source. An error is
/// returned if the source is unavailable; a UUID is never built from fewer random bytes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4::uuid4()?;
/// println!("{}", uuid); // e.g., "2CA4B2CE-6C13-40D4-BCCF-37D222820F6F"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte array in text order
///
/// let uuid_string: String = uuid4::uuid4()?.to_string();
/// # Ok::<(), uuid4::entropy::EntropyUnavailable>(())
/// ```
pub fn uuid4() -> Result<Uuid, EntropyUnavailable> {
    V4Generator::with_rand08(OsRng).generate()
}
