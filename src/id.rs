use std::{cmp, fmt, hash, str};

use fstr::FStr;

/// Represents a Universally Unique IDentifier.
///
/// The value holds the 16 bytes in the order they appear in the canonical text form, together
/// with the two big-endian 64-bit words derived from those bytes at construction. The words are
/// only a fast path for comparison; both views always describe the same 128 bits.
#[derive(Copy, Clone)]
pub struct Uuid {
    bytes: [u8; 16],
    words: (u64, u64),
}

/// Character positions of the hyphens in the 8-4-4-4-12 text form.
const SEPARATORS: [usize; 4] = [8, 13, 18, 23];

/// Length of the 8-4-4-4-12 text form in characters.
const ENCODED_LEN: usize = 36;

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self::from_bytes([0x00; 16]);

    /// Max UUID (FFFFFFFF-FFFF-FFFF-FFFF-FFFFFFFFFFFF)
    pub const MAX: Self = Self::from_bytes([0xff; 16]);

    /// Creates an object from a 16-byte array in text (network) order.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        let hi = u64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]);
        let lo = u64::from_be_bytes([
            bytes[8], bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
        ]);
        Self {
            bytes,
            words: (hi, lo),
        }
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// Returns the high (bytes 0..8) and low (bytes 8..16) halves as big-endian words.
    pub const fn as_words(&self) -> (u64, u64) {
        self.words
    }

    /// Returns the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.bytes[8] >> 5 {
            0b000..=0b011 => Variant::Var0,
            0b100..=0b101 => Variant::Var10,
            0b110 => Variant::Var110,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID, or `None` if the UUID does not have the
    /// variant field value of `10`.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.bytes[6] >> 4),
            _ => None,
        }
    }

    /// Returns `true` if the UUID carries both the version 4 and the variant `10` markers.
    ///
    /// Parsing accepts any version and variant, so callers that only deal in random UUIDs can
    /// use this to reject others after [`parse`](str::parse).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::Uuid;
    ///
    /// let x = "F044A856-FF7F-40E5-8170-419100000000".parse::<Uuid>()?;
    /// assert!(x.is_v4());
    ///
    /// let y = "017F22E2-79B0-7CC3-98C4-DC0C0C07398F".parse::<Uuid>()?;
    /// assert!(!y.is_v4());
    /// # Ok::<(), uuid4::ParseError>(())
    /// ```
    pub const fn is_v4(&self) -> bool {
        matches!(self.version(), Some(4))
    }

    /// Returns a 64-bit digest of the 16 bytes.
    ///
    /// Bytes are folded in one at a time with add, shift and xor steps, and the result goes
    /// through a fixed finalization mix. This is the value fed to [`Hash`](hash::Hash). It is
    /// not a cryptographic hash.
    pub fn digest(&self) -> u64 {
        let mut h = 0u64;
        for &e in &self.bytes {
            h = h.wrapping_add(e as u64);
            h = h.wrapping_add(h << 10);
            h ^= h >> 6;
        }
        h = h.wrapping_add(h << 3);
        h ^= h >> 11;
        h.wrapping_add(h << 15)
    }

    /// Returns the 8-4-4-4-12 uppercase hexadecimal string representation stored in a
    /// stack-allocated string type.
    ///
    /// Use the [`fmt::Display`] trait usually to get the canonical string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::Uuid;
    ///
    /// let x = "f044a856-ff7f-40e5-8170-419100000000".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "F044A856-FF7F-40E5-8170-419100000000");
    /// assert_eq!(format!("{}", y), "F044A856-FF7F-40E5-8170-419100000000");
    /// # Ok::<(), uuid4::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut buffer = [0u8; ENCODED_LEN];
        let mut pos = 0;
        for (i, &e) in self.bytes.iter().enumerate() {
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[pos] = b'-';
                pos += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer consists of ASCII hex digits and hyphens only
        unsafe { FStr::from_inner_unchecked(buffer) }
    }
}

impl Default for Uuid {
    fn default() -> Self {
        Self::NIL
    }
}

impl PartialEq for Uuid {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for Uuid {}

impl PartialOrd for Uuid {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uuid {
    /// Compares big-endian words, which orders UUIDs the same way as their bytes.
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.words.cmp(&other.words)
    }
}

impl hash::Hash for Uuid {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.digest());
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({})", self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Hexadecimal digits are accepted in either case. The length is checked first, then the
    /// hyphen positions, then the digits; the error reports the first check that fails.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let len = src.chars().count();
        if len != ENCODED_LEN {
            return Err(ParseError::MalformedLength(len));
        }

        for (i, c) in src.chars().enumerate() {
            if SEPARATORS.contains(&i) && c != '-' {
                return Err(ParseError::MalformedSeparator(i));
            }
        }

        let mut dst = [0u8; 16];
        let digits = src
            .chars()
            .enumerate()
            .filter(|(i, _)| !SEPARATORS.contains(i));
        for (n, (i, c)) in digits.enumerate() {
            let nibble = c.to_digit(16).ok_or(ParseError::InvalidHexDigit(i))? as u8;
            dst[n / 2] |= if n % 2 == 0 { nibble << 4 } else { nibble };
        }
        Ok(Self::from_bytes(dst))
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.bytes
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self::from_bytes(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        ((src.words.0 as u128) << 64) | (src.words.1 as u128)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self::from_bytes(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// The variant field of a UUID, taken from the top bits of byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0xx`: reserved for NCS backward compatibility.
    Var0,
    /// `10x`: the layout used by random (version 4) UUIDs.
    Var10,
    /// `110`: reserved for Microsoft backward compatibility.
    Var110,
    /// `111`: reserved for future definition.
    VarReserved,
}

/// Error parsing an invalid string representation of UUID.
///
/// Each variant carries the zero-based character position it refers to, except
/// [`MalformedLength`](ParseError::MalformedLength), which carries the length found.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum ParseError {
    /// The input is not exactly 36 characters long.
    #[error("invalid length: expected 36 characters, found {0}")]
    MalformedLength(usize),

    /// A hyphen is missing at one of the positions 8, 13, 18 and 23.
    #[error("invalid separator at position {0}: expected '-'")]
    MalformedSeparator(usize),

    /// A non-hyphen position holds something other than a hexadecimal digit.
    #[error("invalid hexadecimal digit at position {0}")]
    InvalidHexDigit(usize),
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.bytes)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self::from_bytes(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_de_tokens, assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "F044A856-FF7F-40E5-8170-419100000000",
                    &[
                        0xf0, 0x44, 0xa8, 0x56, 0xff, 0x7f, 0x40, 0xe5, 0x81, 0x70, 0x41, 0x91, 0,
                        0, 0, 0,
                    ],
                ),
                (
                    "2CA4B2CE-6C13-40D4-BCCF-37D222820F6F",
                    &[
                        0x2c, 0xa4, 0xb2, 0xce, 0x6c, 0x13, 0x40, 0xd4, 0xbc, 0xcf, 0x37, 0xd2,
                        0x22, 0x82, 0x0f, 0x6f,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }

        /// Deserializes lowercase string representation
        #[test]
        fn deserializes_lowercase_string_representation() {
            let e = "2ca4b2ce-6c13-40d4-bccf-37d222820f6f".parse::<Uuid>().unwrap();
            assert_de_tokens(
                &e.readable(),
                &[Token::Str("2ca4b2ce-6c13-40d4-bccf-37d222820f6f")],
            );
        }
    }
}
