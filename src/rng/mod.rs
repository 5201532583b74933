//! Random number generation module
//!
//! Two independent process-wide sources share one set of derived
//! operations:
//!
//! - [`fast`]: lock-free SplitMix64 over an atomic counter. Statistically
//!   strong, not cryptographic. Contract violations panic.
//! - [`secure`]: ChaCha20 keystream ([`Csprng`]) behind a mutex. Invalid
//!   arguments are returned as [`SecureError`](crate::SecureError).
//!
//! Both are seeded lazily on first use from operating system entropy, with
//! a time-derived fallback. Neither offers seed replay.
//!
//! Bounded draws go through a single wide-multiply rejection step, and
//! byte output goes through [`RandReader`].

pub(crate) mod chacha20;
mod csprng;
pub mod fast;
mod number;
mod reader;
pub mod secure;
mod seed;
mod uniform;

pub use csprng::Csprng;
pub use number::Number;
pub use reader::RandReader;

/// Byte-stream view of the fast source.
pub fn fast_reader() -> RandReader {
    fast::reader()
}

/// Byte-stream view of the secure source.
pub fn secure_reader() -> RandReader {
    secure::reader()
}

/// Sets the version nibble of byte 6 to `0100` and the top bits of
/// byte 8 to `10`.
pub(crate) fn uuid_fixup(uuid: &mut [u8; 16]) {
    uuid[6] = (uuid[6] & 0x0f) | 0x40;
    uuid[8] = (uuid[8] & 0x3f) | 0x80;
}
