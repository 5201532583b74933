//! Engine configuration.
//!
//! A [`Config`] is built once from defaults by an ordered sequence of
//! [`ConfigBuilder`] calls and is read-only afterwards. Later calls
//! override earlier ones. Only per-field checks are applied: zero lengths
//! are ignored, and keyword names are upper-cased.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::ops::BitOr;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::charset::Charset;
use crate::template::keyword::Keyword;

/// Mail provider domains shipped with the crate, one per line.
static MAIL_PROVIDERS: Lazy<Arc<[String]>> = Lazy::new(|| {
    include_str!("../../resources/mail_providers.txt")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
});

/// Default mail providers used by the `EMAIL` keyword.
pub fn default_mail_providers() -> &'static [String] {
    &MAIL_PROVIDERS
}

/// User-supplied generator for a custom keyword.
///
/// Receives the resolved length; the returned bytes are emitted verbatim.
pub type KeywordGenerator = Arc<dyn Fn(usize) -> Vec<u8> + Send + Sync>;

/// Set of alternate delimiter encodings accepted in input text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InputEncoding(u8);

impl InputEncoding {
    /// Canonical delimiters only.
    pub const NONE: Self = Self(0);
    /// `%7BRAND`, `%7D`, `%3B`
    pub const URL: Self = Self(1 << 0);
    /// `&lbrace;RAND`, `&rbrace;`, `&semi;`
    pub const HTML: Self = Self(1 << 1);

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for InputEncoding {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Encoding applied to literal text on output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputEncoding {
    /// Verbatim copy.
    #[default]
    None,
    /// Percent-encoding of every byte outside `A-Z a-z 0-9 - . _ ~`.
    Url,
    /// Escaping of `& < > " '`.
    Html,
}

/// Immutable settings of one [`Engine`](crate::template::Engine).
#[derive(Clone)]
pub struct Config {
    pub(crate) default_length: usize,
    pub(crate) min_length: usize,
    pub(crate) max_length: usize,
    pub(crate) input_encoding: InputEncoding,
    pub(crate) output_encoding: OutputEncoding,
    pub(crate) ranges_enabled: bool,
    pub(crate) length_choices_enabled: bool,
    pub(crate) keyword_choices_enabled: bool,
    pub(crate) disabled_keywords: HashSet<Keyword>,
    pub(crate) custom_charsets: HashMap<String, Charset>,
    pub(crate) custom_keywords: HashMap<String, KeywordGenerator>,
    pub(crate) mail_providers: Arc<[String]>,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn default_length(&self) -> usize {
        self.default_length
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn input_encoding(&self) -> InputEncoding {
        self.input_encoding
    }

    pub fn output_encoding(&self) -> OutputEncoding {
        self.output_encoding
    }

    pub fn mail_providers(&self) -> &[String] {
        &self.mail_providers
    }

    /// Whether a built-in keyword is enabled.
    pub fn is_enabled(&self, keyword: Keyword) -> bool {
        !self.disabled_keywords.contains(&keyword)
    }

    /// Alphabet for a built-in keyword, honoring custom overrides.
    pub(crate) fn charset<'a>(&'a self, keyword: Keyword, fallback: &'static [u8]) -> &'a [u8] {
        self.custom_charsets
            .get(keyword.name())
            .map_or(fallback, Charset::as_bytes)
    }

    /// Custom generator registered under `name` (already upper-cased).
    pub(crate) fn custom_keyword(&self, name: &str) -> Option<&KeywordGenerator> {
        self.custom_keywords.get(name)
    }
}

impl Default for Config {
    /// Default lengths 16 / 1 / 99, every keyword enabled, URL and HTML
    /// input delimiters accepted, no output encoding, all grammar
    /// extensions on.
    fn default() -> Self {
        Self {
            default_length: 16,
            min_length: 1,
            max_length: 99,
            input_encoding: InputEncoding::URL | InputEncoding::HTML,
            output_encoding: OutputEncoding::None,
            ranges_enabled: true,
            length_choices_enabled: true,
            keyword_choices_enabled: true,
            disabled_keywords: HashSet::new(),
            custom_charsets: HashMap::new(),
            custom_keywords: HashMap::new(),
            mail_providers: Arc::clone(&MAIL_PROVIDERS),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut custom: Vec<&String> = self.custom_keywords.keys().collect();
        custom.sort();

        f.debug_struct("Config")
            .field("default_length", &self.default_length)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("input_encoding", &self.input_encoding)
            .field("output_encoding", &self.output_encoding)
            .field("ranges_enabled", &self.ranges_enabled)
            .field("length_choices_enabled", &self.length_choices_enabled)
            .field("keyword_choices_enabled", &self.keyword_choices_enabled)
            .field("disabled_keywords", &self.disabled_keywords)
            .field("custom_charsets", &self.custom_charsets)
            .field("custom_keywords", &custom)
            .field("mail_providers", &self.mail_providers.len())
            .finish()
    }
}

/// Ordered mutations applied to [`Config::default`].
///
/// ```
/// use randomizer::template::{Config, OutputEncoding};
///
/// let config = Config::builder()
///     .default_length(8)
///     .output_encoding(OutputEncoding::Html)
///     .disable_keywords(["email"])
///     .build();
///
/// assert_eq!(config.default_length(), 8);
/// ```
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Length used when a tag does not name one. Zero is ignored.
    pub fn default_length(mut self, length: usize) -> Self {
        if length > 0 {
            self.config.default_length = length;
        }
        self
    }

    /// Smallest accepted length. Zero is ignored.
    pub fn min_length(mut self, length: usize) -> Self {
        if length > 0 {
            self.config.min_length = length;
        }
        self
    }

    /// Largest accepted length in a tag. Zero is ignored.
    pub fn max_length(mut self, length: usize) -> Self {
        if length > 0 {
            self.config.max_length = length;
        }
        self
    }

    /// Disables built-in keywords by case-insensitive name. Unknown names
    /// are ignored.
    pub fn disable_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.disabled_keywords.extend(
            keywords
                .into_iter()
                .filter_map(|name| Keyword::parse(name.as_ref().as_bytes())),
        );
        self
    }

    /// Replaces the mail provider list. An empty list makes `EMAIL` use
    /// the fallback domain.
    pub fn mail_providers<I, S>(mut self, providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.mail_providers = providers.into_iter().map(Into::into).collect();
        self
    }

    /// Overrides the alphabet of a charset keyword (`ABL`, `ABU`, `ABR`,
    /// `DIGIT`, `NULL`).
    pub fn custom_charset(mut self, keyword: &str, charset: Charset) -> Self {
        self.config
            .custom_charsets
            .insert(keyword.to_ascii_uppercase(), charset);
        self
    }

    /// Registers a custom keyword. It takes priority over a built-in of
    /// the same name.
    pub fn custom_keyword<F>(mut self, keyword: &str, generator: F) -> Self
    where
        F: Fn(usize) -> Vec<u8> + Send + Sync + 'static,
    {
        self.config
            .custom_keywords
            .insert(keyword.to_ascii_uppercase(), Arc::new(generator));
        self
    }

    pub fn input_encoding(mut self, encoding: InputEncoding) -> Self {
        self.config.input_encoding = encoding;
        self
    }

    pub fn output_encoding(mut self, encoding: OutputEncoding) -> Self {
        self.config.output_encoding = encoding;
        self
    }

    /// Toggles `min-max` length ranges.
    pub fn ranges(mut self, enabled: bool) -> Self {
        self.config.ranges_enabled = enabled;
        self
    }

    /// Toggles comma-separated length choices.
    pub fn length_choices(mut self, enabled: bool) -> Self {
        self.config.length_choices_enabled = enabled;
        self
    }

    /// Toggles comma-separated keyword choices.
    pub fn keyword_choices(mut self, enabled: bool) -> Self {
        self.config.keyword_choices_enabled = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_providers_are_trimmed() {
        let providers = default_mail_providers();

        assert!(!providers.is_empty());
        assert!(providers.iter().all(|p| !p.is_empty() && p.trim() == p));
    }

    #[test]
    fn zero_lengths_are_ignored() {
        let config = Config::builder()
            .default_length(0)
            .min_length(0)
            .max_length(0)
            .build();

        assert_eq!(config.default_length(), 16);
        assert_eq!(config.min_length(), 1);
        assert_eq!(config.max_length(), 99);
    }

    #[test]
    fn later_mutations_win() {
        let config = Config::builder()
            .default_length(4)
            .default_length(12)
            .ranges(false)
            .ranges(true)
            .build();

        assert_eq!(config.default_length(), 12);
        assert!(config.ranges_enabled);
    }

    #[test]
    fn disabling_is_case_insensitive() {
        let config = Config::builder().disable_keywords(["hex", "Uuid", "nope"]).build();

        assert!(!config.is_enabled(Keyword::Hex));
        assert!(!config.is_enabled(Keyword::Uuid));
        assert!(config.is_enabled(Keyword::Email));
        assert_eq!(config.disabled_keywords.len(), 2);
    }
}
