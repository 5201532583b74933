//! Template resolution.

use std::borrow::Cow;

use crate::charset;
use crate::rng::fast;
use crate::template::config::{Config, OutputEncoding};
use crate::template::grammar::{self, KeywordSpec, Tag};
use crate::template::keyword::Keyword;
use crate::template::scanner::{Scanner, Segment};
use crate::template::{encode, normalize};

/// Domain used by `EMAIL` when the provider list is empty.
const FALLBACK_MAIL_DOMAIN: &str = "gmail.com";

/// Minimum local-part length of a generated address.
const MIN_MAIL_USER_LEN: usize = 8;

/// Replaces `{RAND...}` tags in text with random content.
///
/// An engine owns an immutable [`Config`] and can be shared between
/// threads; each call to [`resolve`](Engine::resolve) works on its own
/// output buffer. Content is drawn from the fast source.
///
/// ```
/// use randomizer::template::Engine;
///
/// let engine = Engine::default();
/// let out = engine.resolve_str("pin={RAND;4;DIGIT}");
///
/// assert_eq!(out.len(), 8);
/// assert!(out[4..].bytes().all(|b| b.is_ascii_digit()));
/// ```
#[derive(Debug, Default)]
pub struct Engine {
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        tracing::debug!(
            default_length = config.default_length,
            min_length = config.min_length,
            max_length = config.max_length,
            output_encoding = ?config.output_encoding,
            custom_keywords = config.custom_keywords.len(),
            "template engine created"
        );

        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Discards every customization and restores the default configuration.
    pub fn reset(&mut self) {
        tracing::debug!("template engine reset to defaults");
        self.config = Config::default();
    }

    /// Resolves every tag in `input`.
    ///
    /// Malformed tags never fail: unrecognized ones and unterminated ones
    /// are copied as literal text, unknown keywords produce a default
    /// charset draw.
    pub fn resolve(&self, input: &[u8]) -> Vec<u8> {
        let config = &self.config;

        if config.output_encoding == OutputEncoding::None
            && !input.iter().any(|&b| matches!(b, b'{' | b'%' | b'&'))
        {
            return input.to_vec();
        }

        let payload: Cow<'_, [u8]> = if normalize::needed(input, config.input_encoding) {
            Cow::Owned(normalize::normalize(input, config.input_encoding))
        } else {
            Cow::Borrowed(input)
        };

        let mut out = Vec::with_capacity(payload.len());

        for segment in Scanner::new(&payload) {
            match segment {
                Segment::Literal(text) => encode::write(&mut out, text, config.output_encoding),
                Segment::Tag { span, body } => match grammar::parse(body, config) {
                    Some(tag) => self.expand(&tag, &mut out),
                    None => {
                        tracing::trace!(
                            tag = %String::from_utf8_lossy(span),
                            "unrecognized tag emitted as literal"
                        );
                        encode::write(&mut out, span, config.output_encoding);
                    }
                },
            }
        }

        out
    }

    /// [`resolve`](Engine::resolve) for text. Bytes that are not valid
    /// UTF-8 (from `BYTES`, `NULL` or custom generators) are replaced with
    /// U+FFFD.
    pub fn resolve_str(&self, input: &str) -> String {
        charset::into_text(self.resolve(input.as_bytes()))
    }

    fn expand(&self, tag: &Tag<'_>, out: &mut Vec<u8>) {
        let config = &self.config;
        let length = tag.length.resolve();
        let name = tag.keyword.as_ref().map_or(&b""[..], KeywordSpec::resolve);

        if let Some(generator) = grammar::custom_key(name)
            .as_deref()
            .and_then(|key| config.custom_keyword(key))
        {
            out.extend_from_slice(&generator(length));
            return;
        }

        match Keyword::parse(name).filter(|&kw| config.is_enabled(kw)) {
            Some(keyword) => self.expand_keyword(keyword, length, out),
            None => out.extend_from_slice(&fast::pick(length, charset::ALL)),
        }
    }

    fn expand_keyword(&self, keyword: Keyword, length: usize, out: &mut Vec<u8>) {
        let config = &self.config;

        match keyword {
            Keyword::Abl | Keyword::Abu | Keyword::Abr | Keyword::Digit | Keyword::Null => {
                let set = config.charset(keyword, keyword.charset().unwrap_or(charset::ALL));
                out.extend_from_slice(&fast::pick(length, set));
            }
            Keyword::Space => out.resize(out.len() + length, b' '),
            Keyword::Hex => out.extend_from_slice(fast::hex(length).as_bytes()),
            Keyword::Uuid => out.extend_from_slice(&crate::uuid::encode(&fast::uuid())),
            Keyword::Bytes => out.extend_from_slice(&fast::bytes(length)),
            Keyword::Ipv4 => out.extend_from_slice(fast::ipv4().to_string().as_bytes()),
            Keyword::Ipv6 => out.extend_from_slice(fast::ipv6().to_string().as_bytes()),
            Keyword::Email => self.email(length, out),
        }
    }

    fn email(&self, length: usize, out: &mut Vec<u8>) {
        let config = &self.config;
        let length = if length == 0 { MIN_MAIL_USER_LEN } else { length };

        let user = fast::pick(length, config.charset(Keyword::Abl, charset::ALPHABET_LOWER));
        let provider = match config.mail_providers() {
            [] => FALLBACK_MAIL_DOMAIN,
            providers => fast::choice(providers).as_str(),
        };

        out.reserve(user.len() + 1 + provider.len());
        out.extend_from_slice(&user);
        out.push(b'@');
        out.extend_from_slice(provider.as_bytes());
    }
}
