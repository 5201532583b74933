//! Byte alphabets used for charset draws.

use std::fmt;
use std::sync::Arc;

pub const NULL: &[u8] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
pub const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
pub const ALPHABET_LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const ALPHABET_UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPACE: &[u8] = b" ";
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ALPHABET_DIGITS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Letters, digits and ASCII punctuation. The fallback alphabet of the
/// template engine.
pub const ALL: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// An ordered, non-empty byte alphabet.
///
/// Duplicated bytes are kept and raise the probability of that byte being
/// drawn. Cloning is cheap.
#[derive(Clone, PartialEq, Eq)]
pub struct Charset(Arc<[u8]>);

impl Charset {
    /// Builds a charset, or `None` when `bytes` is empty.
    pub fn new(bytes: impl AsRef<[u8]>) -> Option<Self> {
        let bytes = bytes.as_ref();
        if bytes.is_empty() {
            return None;
        }
        Some(Self(Arc::from(bytes)))
    }

    /// Builds a charset from a built-in constant.
    ///
    /// # Panics
    /// Panics if `bytes` is empty.
    pub fn from_static(bytes: &'static [u8]) -> Self {
        Self::new(bytes).expect("randomizer: charset must not be empty")
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Charset({:?})", String::from_utf8_lossy(&self.0))
    }
}

/// Converts a finished byte buffer to text once, replacing invalid UTF-8.
pub(crate) fn into_text(buf: Vec<u8>) -> String {
    match String::from_utf8(buf) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
