//! Fast and secure random values, and a template randomizer built on them.
//!
//! # Module overview
//!
//! - `rng`
//!   Two process-wide random sources with the same set of derived
//!   operations (bounded integers, floats, bytes, hex, charset strings,
//!   UUIDs, IP addresses, choice and shuffle):
//!
//!   - [`rng::fast`] is a lock-free SplitMix64 generator over an atomic
//!     counter. It never blocks and treats contract violations as panics.
//!   - [`rng::secure`] is a ChaCha20 keystream generator behind a mutex.
//!     It reports invalid arguments as [`SecureError`] values.
//!
//!   Both sources are seeded once from operating system entropy, falling
//!   back to a time-derived seed (with a `tracing` warning) when the OS
//!   source is unavailable.
//!
//! - `template`
//!   Replaces `{RAND;LENGTH;KEYWORD}` placeholders in arbitrary text with
//!   random content. See the module documentation for the grammar.
//!
//! - `charset`
//!   Built-in byte alphabets and the [`Charset`] type.
//!
//! - `uuid`
//!   Text formatting of UUID bytes.
//!
//! # Non-goals
//!
//! The process-wide sources cannot be re-seeded or replayed, and their
//! state is never persisted.

mod error;
mod os;

pub mod charset;
pub mod rng;
pub mod template;
pub mod uuid;

pub use charset::Charset;
pub use error::SecureError;
