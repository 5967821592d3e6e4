//! The streaming version of the algorithm.

use std::cmp;
use std::hash::Hasher;

use crate::helper;
use crate::{Key, State};

/// A keyed SipHash-2-4 hasher.
///
/// Writes are concatenated, so the digest of a sequence of writes is the digest of the bytes
/// written, no matter how they are split up. In particular, writing a whole buffer and calling
/// `finish` gives the same value as `hash`.
///
/// Note that the integer writes of `Hasher` are in native byte order, so hashes of integers are
/// not portable across architectures.
#[derive(Clone)]
pub struct SipHasher {
    /// The state of the hasher.
    state: State,
    /// The pending bytes not yet making up a full word, in little-endian.
    tail: u64,
    /// The number of valid bytes in `tail`.
    ntail: usize,
    /// The total number of bytes written.
    length: u64,
}

impl SipHasher {
    /// Create a new hasher keyed by some key.
    pub fn new(key: &Key) -> SipHasher {
        SipHasher {
            state: State::new(key),
            tail: 0,
            ntail: 0,
            length: 0,
        }
    }
}

impl Hasher for SipHasher {
    fn write(&mut self, mut msg: &[u8]) {
        self.length = self.length.wrapping_add(msg.len() as u64);

        // Fill up the pending word first.
        if self.ntail != 0 {
            let needed = cmp::min(8 - self.ntail, msg.len());
            self.tail |= helper::read_int(&msg[..needed]) << (8 * self.ntail);
            self.ntail += needed;
            msg = &msg[needed..];

            if self.ntail < 8 {
                return;
            }

            self.state.compress(self.tail);
            self.tail = 0;
            self.ntail = 0;
        }

        let mut words = msg.chunks_exact(8);
        for word in &mut words {
            self.state.compress(helper::read_u64(word));
        }

        let excessive = words.remainder();
        self.tail = helper::read_int(excessive);
        self.ntail = excessive.len();
    }

    fn finish(&self) -> u64 {
        let mut state = self.state;
        state.compress(self.tail | (self.length & 0xFF) << 56);

        state.finish()
    }
}
