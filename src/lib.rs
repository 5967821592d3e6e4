//! SipHash-2-4: a fast keyed hash function.
//!
//! SipHash is a pseudorandom function designed by Jean-Philippe Aumasson and Daniel J. Bernstein.
//! It maps a 128-bit secret key and a message of arbitrary length to a 64-bit digest. As long as
//! the key is unknown to an attacker, the output cannot be predicted, which makes it a good choice
//! for keying hash tables that are exposed to untrusted input (hash flooding).
//!
//! This crate implements the 2-4 variant (2 compression rounds per word, 4 finalization rounds)
//! with 64-bit output.
//!
//! ```
//! use siphash24::Key;
//!
//! let key = Key::from_words(0x0706050403020100, 0x0f0e0d0c0b0a0908);
//! assert_eq!(siphash24::hash(&key, b""), 0x726fdb47dd0e0e31);
//! ```
//!
//! # Construction
//!
//! The state consists of four 64-bit words initialized by XORing the key into the constant
//! "somepseudorandomlyinitializedstate". The message is then read as little-endian words. Each
//! word is XORed into `v3`, followed by two rounds of the ARX permutation ("SipRound"), and then
//! into `v0`. The last (possibly empty) partial word is padded with zeros and gets the low byte of
//! the message length as its most significant byte, after which it is compressed like any other
//! word. Finally, `0xff` is XORed into `v2`, four more rounds are applied, and the XOR of the four
//! words is the digest.

#[macro_use]
extern crate quick_error;

#[macro_use]
mod macros;
mod helper;

pub mod key;
pub mod reference;
pub mod stream;

pub use key::{Error, Key};
pub use stream::SipHasher;

/// The number of rounds applied per compressed word.
const C_ROUNDS: usize = 2;
/// The number of rounds applied in the finalization.
const D_ROUNDS: usize = 4;

/// The internal state of SipHash.
///
/// This is the four-word ARX state. It only lives for the duration of a single hash computation.
#[derive(Clone, Copy)]
struct State {
    v0: u64,
    v1: u64,
    v2: u64,
    v3: u64,
}

impl State {
    /// Initialize the state from a key.
    #[inline(always)]
    fn new(key: &Key) -> State {
        State {
            // "somepseudorandomlyinitializedstate", read as little-endian words.
            v0: key.k0() ^ 0x736f6d6570736575,
            v1: key.k1() ^ 0x646f72616e646f6d,
            v2: key.k0() ^ 0x6c7967656e657261,
            v3: key.k1() ^ 0x7465646279746573,
        }
    }

    /// Run `n` SipRounds.
    #[inline(always)]
    fn rounds(&mut self, n: usize) {
        for _ in 0..n {
            sipround!(self.v0, self.v1, self.v2, self.v3);
        }
    }

    /// Compress a single message word into the state.
    #[inline(always)]
    fn compress(&mut self, m: u64) {
        self.v3 ^= m;
        self.rounds(C_ROUNDS);
        self.v0 ^= m;
    }

    /// Finalize the state and produce the digest.
    #[inline(always)]
    fn finish(mut self) -> u64 {
        self.v2 ^= 0xff;
        self.rounds(D_ROUNDS);

        self.v0 ^ self.v1 ^ self.v2 ^ self.v3
    }
}

/// Hash some buffer with a key.
///
/// This is a pure function: it never fails, and the same key and buffer always give the same
/// digest.
pub fn hash(key: &Key, buf: &[u8]) -> u64 {
    let mut state = State::new(key);

    // Compress every full 8-byte word in order.
    let mut words = buf.chunks_exact(8);
    for word in &mut words {
        state.compress(helper::read_u64(word));
    }

    state.compress(helper::last_block(words.remainder(), buf.len() as u64));

    state.finish()
}
