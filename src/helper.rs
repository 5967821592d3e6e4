//! Helper functions.

use byteorder::{ByteOrder, LittleEndian};

/// Read a buffer of at most 8 bytes into an integer in little-endian.
///
/// The bytes are treated as unsigned, so the high bit of a byte never leaks into the bytes above
/// it. Missing high bytes are zero.
#[inline(always)]
pub fn read_int(buf: &[u8]) -> u64 {
    debug_assert!(buf.len() <= 8, "The buffer does not fit into an u64.");

    match buf.len() {
        0 => 0,
        n => LittleEndian::read_uint(buf, n),
    }
}

/// Read a little-endian 64-bit integer from the first 8 bytes of some buffer.
#[inline(always)]
pub fn read_u64(buf: &[u8]) -> u64 {
    LittleEndian::read_u64(buf)
}

/// Build the final, padded block of a message.
///
/// The excessive bytes (less than 8) fill the low bytes, and the low byte of the total message
/// length goes into the most significant byte.
#[inline(always)]
pub fn last_block(excessive: &[u8], len: u64) -> u64 {
    read_int(excessive) | (len & 0xFF) << 56
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_int_() {
        assert_eq!(read_int(&[]), 0);
        assert_eq!(read_int(&[2, 3]), 770);
        assert_eq!(read_int(&[3, 2]), 515);
        assert_eq!(read_int(&[3, 2, 5]), 328195);
        assert_eq!(read_int(&[1, 2, 3, 4, 5, 6, 7, 8]), 0x0807060504030201);
    }

    #[test]
    fn high_bit_bytes() {
        assert_eq!(read_int(&[0x80]), 0x80);
        assert_eq!(read_int(&[0xFF, 0x01]), 0x01FF);
        assert_eq!(read_int(&[0xD3, 0x9D, 0xAB]), 0xAB9DD3);
        assert_eq!(read_u64(&[0xFF; 8]), !0);
    }

    #[test]
    fn read_u64_() {
        assert_eq!(read_u64(&[1, 0, 0, 0, 0, 0, 0, 0]), 1);
        assert_eq!(read_u64(&[2, 1, 0, 0, 0, 0, 0, 0, 9]), 258);
    }

    #[test]
    fn last_block_length_byte() {
        assert_eq!(last_block(&[], 0), 0);
        assert_eq!(last_block(&[], 8), 8 << 56);
        assert_eq!(last_block(b"a", 1), 0x0100000000000061);
        assert_eq!(last_block(&[1, 2, 3, 4, 5, 6, 7], 263), 0x0707060504030201);
        // Only the low byte of the length is kept.
        assert_eq!(last_block(&[], 256), 0);
        assert_eq!(last_block(&[], 1000000), 0x40 << 56);
    }
}
