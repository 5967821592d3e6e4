//! SipHash keys.

use std::convert::TryFrom;
use std::hash::BuildHasher;

use byteorder::{ByteOrder, LittleEndian};

use crate::stream::SipHasher;

/// The length of a key in bytes.
pub const KEY_LEN: usize = 16;

quick_error! {
    /// A key construction error.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Error {
        /// The key was not exactly 128 bits.
        ///
        /// This is triggered when constructing a key from a byte buffer of the wrong length. `len` is
        /// the length of the rejected buffer.
        InvalidKeyLength {
            len: usize,
        } {
            display("Invalid key length {} (expected {} bytes).", len, KEY_LEN)
            description("Invalid key length.")
        }
    }
}

/// A 128-bit secret key.
///
/// The key is made up of two 64-bit words. When read from bytes, the first 8 bytes form `k0` and
/// the last 8 bytes form `k1`, both in little-endian.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Key {
    /// The low word.
    k0: u64,
    /// The high word.
    k1: u64,
}

impl Key {
    /// Create a key from its two words.
    pub fn from_words(k0: u64, k1: u64) -> Key {
        Key {
            k0: k0,
            k1: k1,
        }
    }

    /// Create a key from 16 bytes.
    ///
    /// This fails with `Error::InvalidKeyLength` if `bytes` is not exactly 16 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Key, Error> {
        if bytes.len() != KEY_LEN {
            return Err(Error::InvalidKeyLength {
                len: bytes.len(),
            });
        }

        let mut buf = [0; KEY_LEN];
        buf.copy_from_slice(bytes);

        Ok(Key::from(buf))
    }

    /// The low word of the key.
    pub fn k0(&self) -> u64 {
        self.k0
    }

    /// The high word of the key.
    pub fn k1(&self) -> u64 {
        self.k1
    }

    /// Encode the key into its byte representation.
    pub fn to_bytes(&self) -> [u8; KEY_LEN] {
        let mut buf = [0; KEY_LEN];
        LittleEndian::write_u64(&mut buf[..8], self.k0);
        LittleEndian::write_u64(&mut buf[8..], self.k1);

        buf
    }
}

impl From<[u8; KEY_LEN]> for Key {
    fn from(bytes: [u8; KEY_LEN]) -> Key {
        Key::from_words(LittleEndian::read_u64(&bytes[..8]), LittleEndian::read_u64(&bytes[8..]))
    }
}

impl<'a> TryFrom<&'a [u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &'a [u8]) -> Result<Key, Error> {
        Key::from_bytes(bytes)
    }
}

impl BuildHasher for Key {
    type Hasher = SipHasher;

    fn build_hasher(&self) -> SipHasher {
        SipHasher::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes() {
        let key = Key::from_bytes(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]).unwrap();

        assert_eq!(key.k0(), 0x0706050403020100);
        assert_eq!(key.k1(), 0x0f0e0d0c0b0a0908);
        assert_eq!(key, Key::from_words(0x0706050403020100, 0x0f0e0d0c0b0a0908));
    }

    #[test]
    fn high_bit_bytes() {
        let key = Key::from_bytes(&[0xFF, 0x80, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x90]).unwrap();

        assert_eq!(key.k0(), 0x80FF);
        assert_eq!(key.k1(), 0x9000000000000000);
    }

    #[test]
    fn invalid_length() {
        assert_eq!(Key::from_bytes(&[]), Err(Error::InvalidKeyLength { len: 0 }));
        assert_eq!(Key::from_bytes(&[0; 15]), Err(Error::InvalidKeyLength { len: 15 }));
        assert_eq!(Key::from_bytes(&[0; 17]), Err(Error::InvalidKeyLength { len: 17 }));
        assert_eq!(Key::try_from(&[0u8; 8][..]), Err(Error::InvalidKeyLength { len: 8 }));
    }

    #[test]
    fn rejected_length_is_reported() {
        for len in [0, 1, 8, 15, 17, 32].iter().cloned() {
            let buf = vec![0u8; len];

            match Key::from_bytes(&buf) {
                Err(Error::InvalidKeyLength { len: found }) => assert_eq!(found, len),
                Ok(_) => panic!("accepted a key of {} bytes", len),
            }
        }
    }

    #[test]
    fn from_bytes_agrees_with_from_array() {
        let mut bytes = [0u8; KEY_LEN];
        for i in 0..64u8 {
            for (j, b) in bytes.iter_mut().enumerate() {
                *b = i.wrapping_mul(31).wrapping_add(j as u8 * 17) ^ 0x80;
            }

            let key = Key::from_bytes(&bytes).unwrap();
            assert_eq!(key, Key::from(bytes));
            assert_eq!(key.k0(), LittleEndian::read_u64(&bytes[..8]));
            assert_eq!(key.k1(), LittleEndian::read_u64(&bytes[8..]));
        }
    }

    #[test]
    fn error_display() {
        let err = Key::from_bytes(&[1, 2, 3]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid key length 3 (expected 16 bytes).");
    }

    #[test]
    fn bytes_words_agree() {
        let bytes = [0xde, 0xad, 0xbe, 0xef, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0xa, 0xb, 0xc];
        let key = Key::from(bytes);

        assert_eq!(key.to_bytes(), bytes);
        assert_eq!(Key::from_bytes(&bytes).unwrap(), key);
        assert_eq!(Key::from_words(key.k0(), key.k1()), key);
    }
}
