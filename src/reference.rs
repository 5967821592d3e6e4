//! A slow, but clear reference implementation of SipHash-2-4.

use std::num::Wrapping as W;

use crate::Key;

/// A hash state.
struct State {
    /// The state vector, `v0` to `v3`.
    vec: [W<u64>; 4],
    /// The number of bytes written into the state.
    written: u64,
}

impl State {
    /// Initialize the state with some key.
    fn new(key: &Key) -> State {
        State {
            vec: [
                W(key.k0() ^ 0x736f6d6570736575),
                W(key.k1() ^ 0x646f72616e646f6d),
                W(key.k0() ^ 0x6c7967656e657261),
                W(key.k1() ^ 0x7465646279746573),
            ],
            written: 0,
        }
    }

    /// Apply a single SipRound to the state vector.
    fn round(&mut self) {
        let [mut v0, mut v1, mut v2, mut v3] = self.vec;

        // The first half: mix `v1` into `v0` and `v3` into `v2`.
        v0 += v1;
        v1 = W(v1.0.rotate_left(13));
        v1 ^= v0;
        v0 = W(v0.0.rotate_left(32));
        v2 += v3;
        v3 = W(v3.0.rotate_left(16));
        v3 ^= v2;

        // The second half: the same thing with the pairs swapped.
        v0 += v3;
        v3 = W(v3.0.rotate_left(21));
        v3 ^= v0;
        v2 += v1;
        v1 = W(v1.0.rotate_left(17));
        v1 ^= v2;
        v2 = W(v2.0.rotate_left(32));

        self.vec = [v0, v1, v2, v3];
    }

    /// Write a 64-bit message word to the state.
    fn write_u64(&mut self, x: u64) {
        self.vec[3] ^= W(x);
        self.round();
        self.round();
        self.vec[0] ^= W(x);
    }

    /// Write a byte to the state.
    ///
    /// Bytes are collected into words, least significant byte first. Once a word is complete, it
    /// is written to the state.
    fn write_u8(&mut self, word: &mut u64, byte: u8) {
        *word |= (byte as u64) << (8 * (self.written % 8));
        self.written += 1;

        if self.written % 8 == 0 {
            self.write_u64(*word);
            *word = 0;
        }
    }

    /// Calculate the final hash.
    fn finish(mut self, excessive: u64) -> u64 {
        // The length goes into the top byte of the last, partial word.
        let last = excessive | (self.written % 256) << 56;
        self.write_u64(last);

        self.vec[2] ^= W(0xff);
        for _ in 0..4 {
            self.round();
        }

        (self.vec[0] ^ self.vec[1] ^ self.vec[2] ^ self.vec[3]).0
    }
}

/// A reference implementation of SipHash-2-4.
///
/// This feeds the buffer into the state one byte at a time, and only has one goal: to make the
/// algorithm readable and understandable.
pub fn hash(key: &Key, buf: &[u8]) -> u64 {
    // Initialize the state.
    let mut state = State::new(key);
    // The word currently being assembled.
    let mut word = 0;

    for &byte in buf {
        state.write_u8(&mut word, byte);
    }

    // Whatever is left in `word` are the excessive bytes.
    state.finish(word)
}
