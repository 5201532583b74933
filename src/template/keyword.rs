//! Built-in tag keywords.

use std::fmt;

use crate::charset;

/// A built-in keyword. Names match case-insensitively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// Lowercase letters.
    Abl,
    /// Uppercase letters.
    Abu,
    /// Mixed-case letters.
    Abr,
    Digit,
    /// Lowercase hex of `length` random bytes.
    Hex,
    /// A run of spaces.
    Space,
    /// Version 4 UUID text; length is ignored.
    Uuid,
    /// Bytes drawn from the 16 lowest byte values.
    Null,
    Ipv4,
    Ipv6,
    /// Raw random bytes.
    Bytes,
    Email,
}

impl Keyword {
    pub const ALL: [Keyword; 12] = [
        Keyword::Abl,
        Keyword::Abu,
        Keyword::Abr,
        Keyword::Digit,
        Keyword::Hex,
        Keyword::Space,
        Keyword::Uuid,
        Keyword::Null,
        Keyword::Ipv4,
        Keyword::Ipv6,
        Keyword::Bytes,
        Keyword::Email,
    ];

    /// Canonical upper-case name, as written in tags.
    pub const fn name(self) -> &'static str {
        match self {
            Keyword::Abl => "ABL",
            Keyword::Abu => "ABU",
            Keyword::Abr => "ABR",
            Keyword::Digit => "DIGIT",
            Keyword::Hex => "HEX",
            Keyword::Space => "SPACE",
            Keyword::Uuid => "UUID",
            Keyword::Null => "NULL",
            Keyword::Ipv4 => "IPV4",
            Keyword::Ipv6 => "IPV6",
            Keyword::Bytes => "BYTES",
            Keyword::Email => "EMAIL",
        }
    }

    /// Built-in alphabet of a charset keyword.
    pub const fn charset(self) -> Option<&'static [u8]> {
        match self {
            Keyword::Abl => Some(charset::ALPHABET_LOWER),
            Keyword::Abu => Some(charset::ALPHABET_UPPER),
            Keyword::Abr => Some(charset::ALPHABET),
            Keyword::Digit => Some(charset::DIGITS),
            Keyword::Null => Some(charset::NULL),
            _ => None,
        }
    }

    /// Case-insensitive exact match.
    pub fn parse(name: &[u8]) -> Option<Keyword> {
        Keyword::ALL
            .into_iter()
            .find(|kw| kw.name().as_bytes().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
