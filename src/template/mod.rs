//! Template randomizer.
//!
//! Scans text for `{RAND...}` placeholders and replaces each with random
//! content drawn from the fast source:
//!
//! ```text
//! {RAND}                 default charset, default length
//! {RAND;8;DIGIT}         8 digits
//! {RANDOM;5-9;ABL}       5 to 9 lowercase letters
//! {RAND;4,8;ABU,DIGIT}   4 or 8 characters, uppercase or digits
//! {RAND;UUID}            a v4 UUID
//! ```
//!
//! Resolution runs in four stages: delimiter normalization (URL and HTML
//! encoded markers), scanning into literal and tag segments, tag grammar
//! parsing against the engine's [`Config`], and keyword dispatch. Literal
//! text passes through the configured [`OutputEncoding`].
//!
//! Nothing in this module returns an error. Malformed tags degrade to a
//! documented default instead of aborting the surrounding text.

mod config;
mod encode;
mod engine;
mod grammar;
mod keyword;
mod normalize;
mod scanner;

use once_cell::sync::Lazy;

pub use config::{
    Config, ConfigBuilder, InputEncoding, KeywordGenerator, OutputEncoding, default_mail_providers,
};
pub use engine::Engine;
pub use grammar::{KeywordSpec, LengthSpec, Tag};
pub use keyword::Keyword;

/// Canonical start marker.
pub(crate) const START_TAG: &[u8] = b"{RAND";
/// Optional suffix of the start marker (`{RANDOM`).
pub(crate) const START_TAG_SUFFIX: &[u8] = b"OM";
pub(crate) const END_TAG: u8 = b'}';
/// Field separator inside a tag.
pub(crate) const SEPARATOR: u8 = b';';

static DEFAULT_ENGINE: Lazy<Engine> = Lazy::new(Engine::default);

/// Process-wide engine with the default configuration.
///
/// Applications that need custom settings should build their own
/// [`Engine`] and pass it around instead.
pub fn default_engine() -> &'static Engine {
    &DEFAULT_ENGINE
}

/// Resolves `input` with [`default_engine`].
pub fn resolve(input: &[u8]) -> Vec<u8> {
    DEFAULT_ENGINE.resolve(input)
}

/// Resolves `input` with [`default_engine`].
pub fn resolve_str(input: &str) -> String {
    DEFAULT_ENGINE.resolve_str(input)
}
