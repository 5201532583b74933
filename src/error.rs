//! Error types for the secure generation surface.
//!
//! The fast surface treats contract violations as programmer errors and
//! panics. The secure surface reports the same violations, plus entropy
//! failures, as values of [`SecureError`] so callers in security-sensitive
//! paths can decide how to react.

use std::io;

use thiserror::Error;

/// Errors returned by the secure generator and its derived operations.
#[derive(Debug, Error)]
pub enum SecureError {
    /// An exclusive upper bound of zero was requested.
    #[error("randomizer: bound must be positive")]
    ZeroBound,

    /// The lower end of a range is greater than its upper end.
    #[error("randomizer: invalid secure range [{min}, {max}]")]
    InvalidRange { min: String, max: String },

    /// A draw was requested from an empty charset.
    #[error("randomizer: charset must not be empty")]
    EmptyCharset,

    /// A string of length zero was requested.
    #[error("randomizer: length must be positive")]
    ZeroLength,

    /// A choice was requested from an empty slice or map.
    #[error("randomizer: cannot choose from an empty collection")]
    EmptyChoice,

    /// The operating system entropy source could not be read.
    #[error("randomizer: failed to read operating system entropy: {0}")]
    Entropy(#[from] io::Error),
}

impl SecureError {
    pub(crate) fn invalid_range<T: std::fmt::Display>(min: T, max: T) -> Self {
        SecureError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}
