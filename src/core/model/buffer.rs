use anyhow::Context;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

/// A capability interface for an ordered, indexable byte sequence.
///
/// The comparators in this crate are written against this trait so that any
/// conforming sequence type can be compared, not just [`Buffer`].
#[cfg_attr(test, unimock::unimock(api = ByteSeqMock))]
pub trait ByteSeq {
    /// Returns the number of bytes in the sequence.
    fn length(&self) -> usize;

    /// Returns the byte at the given index.
    /// Panics if `index >= length()`.
    fn byte_at(&self, index: usize) -> u8;
}

/// A fixed-content, indexable, ordered byte sequence.
///
/// Buffer is a plain value holder: it is filled at construction time and never
/// mutated afterwards. Callers own the returned value outright.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer(Vec<u8>);

impl Buffer {
    /// Creates a Buffer holding a copy of the given bytes.
    ///
    /// # Arguments
    ///
    /// * `bytes` - A byte slice to be copied into the Buffer.
    ///
    /// # Returns
    ///
    /// * `Buffer` - A Buffer owning a copy of the input.
    pub fn from_bytes(bytes: &[u8]) -> Buffer {
        Buffer(bytes.to_vec())
    }

    /// Creates a Buffer that takes ownership of the given vector, without copying.
    pub fn from_vec(bytes: Vec<u8>) -> Buffer {
        Buffer(bytes)
    }

    /// Converts the input hex string into a Buffer.
    ///
    /// # Arguments
    ///
    /// * `s` - A hex string to be converted.
    ///
    /// # Returns
    ///
    /// * `anyhow::Result<Buffer>` - The resulting Buffer or an error if the input is not valid hex.
    pub fn from_string(s: &str) -> anyhow::Result<Buffer> {
        let bytes = hex::decode(s).context("Failed to decode hex string")?;
        Ok(Buffer(bytes))
    }

    /// Returns the number of bytes held by the Buffer.
    pub fn length(&self) -> usize {
        self.0.len()
    }

    /// Returns the byte at the given index.
    /// Panics if `index` is out of range.
    pub fn byte_at(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Returns a reference to the underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Copies the Buffer content into a new vector.
    ///
    /// Consider using `as_bytes()` if you don't need ownership.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl ByteSeq for Buffer {
    fn length(&self) -> usize {
        self.0.len()
    }

    fn byte_at(&self, index: usize) -> u8 {
        self.0[index]
    }
}

impl ByteSeq for [u8] {
    fn length(&self) -> usize {
        self.len()
    }

    fn byte_at(&self, index: usize) -> u8 {
        self[index]
    }
}

impl ByteSeq for Vec<u8> {
    fn length(&self) -> usize {
        self.len()
    }

    fn byte_at(&self, index: usize) -> u8 {
        self[index]
    }
}

impl Display for Buffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

// Override Debug to also call Display
impl Debug for Buffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // This ensures both {:?} and {:#?} produce the same output as Display.
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::testutil::fixtures::seeded_source;

    #[test]
    fn test_buffer_from_bytes() {
        let bytes = [1u8, 2, 3, 4, 5];
        let buf = Buffer::from_bytes(&bytes);
        assert_eq!(buf.length(), 5);
        assert_eq!(buf.as_bytes(), &bytes);
        assert_eq!(buf.to_bytes(), bytes.to_vec());

        // an empty slice yields an empty buffer
        let buf = Buffer::from_bytes(&[]);
        assert_eq!(buf.length(), 0);
        assert_eq!(buf.as_bytes(), &[] as &[u8]);
    }

    #[test]
    fn test_buffer_from_vec_takes_ownership() {
        let bytes = vec![9u8, 8, 7];
        let buf = Buffer::from_vec(bytes.clone());
        assert_eq!(buf.to_bytes(), bytes);
    }

    #[test]
    fn test_buffer_from_string() {
        let buf = Buffer::from_string("00ff10").unwrap();
        assert_eq!(buf.to_bytes(), vec![0x00, 0xff, 0x10]);

        // round trip through Display
        let mut source = seeded_source(42);
        let original = source.buffer(32);
        let decoded = Buffer::from_string(&original.to_string()).unwrap();
        assert_eq!(original, decoded);

        // invalid hex should return an error
        assert!(Buffer::from_string("zz").is_err());
        // odd number of hex digits should return an error
        assert!(Buffer::from_string("abc").is_err());
    }

    #[test]
    fn test_buffer_byte_at() {
        let buf = Buffer::from_bytes(&[10, 20, 30]);
        assert_eq!(buf.byte_at(0), 10);
        assert_eq!(buf.byte_at(1), 20);
        assert_eq!(buf.byte_at(2), 30);
    }

    #[test]
    #[should_panic]
    fn test_buffer_byte_at_out_of_range_panics() {
        let buf = Buffer::from_bytes(&[1, 2, 3]);
        buf.byte_at(3);
    }

    #[test]
    fn test_buffer_display_is_hex() {
        let buf = Buffer::from_bytes(&[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(format!("{buf}"), "deadbeef");
        assert_eq!(format!("{buf:?}"), "deadbeef");
    }
}
