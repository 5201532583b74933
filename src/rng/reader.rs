//! Byte-stream adapter over a raw 64-bit draw function.

use std::fmt;
use std::io;

/// Pull-style byte source backed by one of the two raw generators.
///
/// Each 64-bit word is written in little-endian order; the final partial
/// word contributes only the bytes still needed. Reading never fails and
/// always fills the whole buffer.
///
/// ```
/// use std::io::Read;
///
/// let mut buf = [0u8; 13];
/// randomizer::rng::fast_reader().read_exact(&mut buf).unwrap();
/// ```
#[derive(Clone, Copy)]
pub struct RandReader {
    next: fn() -> u64,
}

impl RandReader {
    pub(crate) const fn new(next: fn() -> u64) -> Self {
        Self { next }
    }

    /// Fills `buf` completely.
    pub fn fill(&self, buf: &mut [u8]) {
        let mut chunks = buf.chunks_exact_mut(8);

        for chunk in &mut chunks {
            chunk.copy_from_slice(&(self.next)().to_le_bytes());
        }

        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let word = (self.next)().to_le_bytes();
            tail.copy_from_slice(&word[..tail.len()]);
        }
    }

    /// Returns `len` fresh bytes. `len == 0` yields an empty vector.
    pub fn bytes(&self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.fill(&mut out);
        out
    }
}

impl io::Read for RandReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.fill(buf);
        Ok(buf.len())
    }
}

impl fmt::Debug for RandReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandReader").finish_non_exhaustive()
    }
}
