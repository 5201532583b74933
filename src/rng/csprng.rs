//! ChaCha20-based CSPRNG
//!
//! This module implements the cryptographically secure pseudorandom number
//! generator behind the secure source. It:
//! - relies on the operating system for initial entropy
//! - expands its key into a ChaCha20 keystream, one block at a time
//! - serves 64-bit words out of a buffered block
//! - provides forward secrecy via periodic rekeying
//!
//! `Csprng` is a plain value with `&mut self` methods. The process-wide
//! instance used by [`secure`](super::secure) wraps it in a mutex.

use crate::error::SecureError;
use crate::os::sys_random;
use crate::rng::chacha20;
use crate::rng::seed;

/// Number of keystream blocks served before the key is replaced.
const REKEY_INTERVAL: u32 = 16;

const BLOCK_LEN: usize = 64;

/// Cryptographically secure pseudorandom number generator.
///
/// Internally, it maintains a secret key, a nonce, a block counter, and the
/// unread part of the current keystream block.
///
/// After [`REKEY_INTERVAL`] blocks, and after every bulk
/// [`fill_bytes`](Csprng::fill_bytes), the generator rekeys itself:
/// compromise of the internal state does not reveal past outputs.
pub struct Csprng {
    /// Internal ChaCha20 key (256-bit)
    key: [u8; 32],

    /// Nonce value (96-bit, fixed to zero for DRBG usage)
    nonce: [u8; 12],

    /// Block counter, reset on every rekey
    counter: u32,

    /// Current keystream block
    block: [u8; BLOCK_LEN],

    /// Read position inside `block`; `BLOCK_LEN` means exhausted
    cursor: usize,
}

impl Csprng {
    /// Creates a new CSPRNG seeded from the operating system.
    ///
    /// Falls back to a time-derived seed when the OS source is unavailable.
    /// Use [`Csprng::try_from_os`] to observe that failure instead.
    pub fn from_os() -> Self {
        Self::from_seed(seed::entropy())
    }

    /// Creates a new CSPRNG from operating system entropy, reporting failure.
    pub fn try_from_os() -> Result<Self, SecureError> {
        let mut seed = [0u8; 32];
        sys_random(&mut seed)?;

        Ok(Self::from_seed(seed))
    }

    /// Creates a new CSPRNG from a caller-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable. Two generators
    /// built from the same seed produce the same stream.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.fill(0);

        Self {
            key,
            nonce: [0u8; 12],
            counter: 0,
            block: [0u8; BLOCK_LEN],
            cursor: BLOCK_LEN,
        }
    }

    /// Returns the next 64 bits of keystream.
    ///
    /// This is the single state advance guarded by the secure source's lock.
    pub fn next_u64(&mut self) -> u64 {
        if self.cursor + 8 > BLOCK_LEN {
            self.refill();
        }

        let mut word = [0u8; 8];
        word.copy_from_slice(&self.block[self.cursor..self.cursor + 8]);
        self.block[self.cursor..self.cursor + 8].fill(0);
        self.cursor += 8;

        u64::from_le_bytes(word)
    }

    /// Fills the provided buffer with cryptographically secure random bytes.
    ///
    /// Bytes are taken directly from fresh keystream blocks, bypassing the
    /// word buffer. Once the buffer is filled, the generator rekeys itself.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(BLOCK_LEN) {
            let block = self.next_block();
            chunk.copy_from_slice(&block[..chunk.len()]);
        }

        self.rekey();
    }

    fn refill(&mut self) {
        self.block = self.next_block();
        self.cursor = 0;
    }

    fn next_block(&mut self) -> [u8; BLOCK_LEN] {
        if self.counter >= REKEY_INTERVAL {
            self.rekey();
        }

        let block = chacha20::block(&self.key, self.counter, &self.nonce);
        self.counter += 1;

        block
    }

    /// Rekeys the generator to provide forward secrecy.
    ///
    /// A fresh ChaCha20 block is generated and its first 32 bytes become
    /// the new key. The buffered block is discarded.
    fn rekey(&mut self) {
        let block = chacha20::block(&self.key, self.counter, &self.nonce);

        self.key.copy_from_slice(&block[..32]);
        self.counter = 0;
        self.block.fill(0);
        self.cursor = BLOCK_LEN;
    }
}

impl Default for Csprng {
    /// Creates a default CSPRNG instance seeded from the operating system.
    fn default() -> Self {
        Self::from_os()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_follow_the_first_keystream_block() {
        let seed = [7u8; 32];
        let mut rng = Csprng::from_seed(seed);

        let expected = chacha20::block(&seed, 0, &[0u8; 12]);

        for chunk in expected.chunks_exact(8) {
            let word = u64::from_le_bytes(chunk.try_into().unwrap());
            assert_eq!(rng.next_u64(), word);
        }
    }

    #[test]
    fn rekeys_after_interval() {
        let seed = [9u8; 32];
        let mut rng = Csprng::from_seed(seed);

        let words_per_block = BLOCK_LEN / 8;
        for _ in 0..(REKEY_INTERVAL as usize * words_per_block) {
            rng.next_u64();
        }
        assert_eq!(rng.counter, REKEY_INTERVAL);

        rng.next_u64();
        assert_eq!(rng.counter, 1);
        assert_ne!(rng.key, seed);
    }
}
