//! Tag-body grammar.
//!
//! ```text
//! body    := "" | ";" field [ ";" keyword ]
//! field   := length | keyword
//! length  := n | n "-" n | n ("," n)+        n := 1 or 2 ASCII digits
//! keyword := name | name ("," name)+
//! ```
//!
//! A one-field body is a length when it parses as one, otherwise it is
//! the keyword. Invalid lengths fall back to the default length, raised to
//! the minimum length; they never make the tag unrecognized. Only a
//! non-empty body that does not start with the separator does. An empty
//! body always uses the default length as configured.

use crate::rng::fast;
use crate::template::SEPARATOR;
use crate::template::config::Config;
use crate::template::keyword::Keyword;

/// Requested length of a tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LengthSpec {
    Fixed(usize),
    /// Inclusive range.
    Range(usize, usize),
    /// Non-empty list of candidates.
    Choice(Vec<usize>),
}

impl LengthSpec {
    /// Draws the concrete length.
    pub fn resolve(&self) -> usize {
        match self {
            LengthSpec::Fixed(n) => *n,
            LengthSpec::Range(min, max) => fast::number(*min, *max),
            LengthSpec::Choice(options) => *fast::choice(options),
        }
    }
}

/// Requested keyword of a tag, as written (case preserved).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeywordSpec<'a> {
    Single(&'a [u8]),
    /// Non-empty list of candidates, each a known keyword.
    Choice(Vec<&'a [u8]>),
}

impl<'a> KeywordSpec<'a> {
    /// Draws the concrete keyword name.
    pub fn resolve(&self) -> &'a [u8] {
        match self {
            KeywordSpec::Single(name) => *name,
            KeywordSpec::Choice(options) => *fast::choice(options),
        }
    }
}

/// A parsed tag occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag<'a> {
    pub length: LengthSpec,
    /// `None` when the tag names no keyword.
    pub keyword: Option<KeywordSpec<'a>>,
}

/// Parses a tag body, or returns `None` when the body is unrecognized and
/// the tag must be emitted as literal text.
pub(crate) fn parse<'a>(body: &'a [u8], config: &Config) -> Option<Tag<'a>> {
    if body.is_empty() {
        return Some(Tag {
            length: LengthSpec::Fixed(config.default_length),
            keyword: None,
        });
    }

    let fields = body.strip_prefix(&[SEPARATOR])?;

    let (length_field, mut keyword_field) = match fields.iter().position(|&b| b == SEPARATOR) {
        Some(i) => (&fields[..i], Some(&fields[i + 1..])),
        None => (fields, None),
    };

    let length = match parse_length(length_field, config) {
        Some(length) => length,
        None => {
            if keyword_field.is_none() {
                keyword_field = Some(length_field);
            }
            // Only this fallback can fall below the minimum; parsed
            // lengths are already bounds-checked.
            LengthSpec::Fixed(config.default_length.max(config.min_length))
        }
    };

    Some(Tag {
        length,
        keyword: keyword_field.map(|field| parse_keyword(field, config)),
    })
}

fn parse_length(field: &[u8], config: &Config) -> Option<LengthSpec> {
    let in_bounds = |n: &usize| (config.min_length..=config.max_length).contains(n);

    if config.length_choices_enabled && field.contains(&b',') {
        let options: Vec<usize> = field
            .split(|&b| b == b',')
            .filter_map(parse_number)
            .filter(in_bounds)
            .collect();

        if !options.is_empty() {
            return Some(LengthSpec::Choice(options));
        }
    }

    if config.ranges_enabled
        && let Some(i) = field.iter().position(|&b| b == b'-')
        && let (Some(min), Some(max)) = (parse_number(&field[..i]), parse_number(&field[i + 1..]))
        && min >= config.min_length
        && min <= max
        && max <= config.max_length
    {
        return Some(LengthSpec::Range(min, max));
    }

    parse_number(field).filter(in_bounds).map(LengthSpec::Fixed)
}

fn parse_keyword<'a>(field: &'a [u8], config: &Config) -> KeywordSpec<'a> {
    if config.keyword_choices_enabled && field.contains(&b',') {
        let options: Vec<&[u8]> = field
            .split(|&b| b == b',')
            .filter(|name| is_known(name, config))
            .collect();

        if !options.is_empty() {
            return KeywordSpec::Choice(options);
        }
    }

    KeywordSpec::Single(field)
}

/// A registered custom keyword or an enabled built-in.
fn is_known(name: &[u8], config: &Config) -> bool {
    custom_key(name).is_some_and(|key| config.custom_keyword(&key).is_some())
        || Keyword::parse(name).is_some_and(|kw| config.is_enabled(kw))
}

/// Upper-cased lookup key for the custom keyword table.
pub(crate) fn custom_key(name: &[u8]) -> Option<String> {
    std::str::from_utf8(name).ok().map(str::to_ascii_uppercase)
}

/// One or two ASCII digits.
fn parse_number(field: &[u8]) -> Option<usize> {
    match *field {
        [d] if d.is_ascii_digit() => Some((d - b'0') as usize),
        [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => {
            Some(((a - b'0') * 10 + (b - b'0')) as usize)
        }
        _ => None,
    }
}
