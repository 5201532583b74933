//! Splits template text into literal and tag segments.

use crate::template::{END_TAG, START_TAG, START_TAG_SUFFIX};

/// One piece of scanned input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// Text to copy through output encoding.
    Literal(&'a [u8]),
    /// A complete tag. `span` covers both markers; `body` is what follows
    /// `{RAND` (and an optional `OM`) up to the closing `}`.
    Tag { span: &'a [u8], body: &'a [u8] },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Literal,
    InTag,
}

/// Two-state scanner over canonical (already normalized) input.
///
/// A tag runs from `{RAND` to the first following `}`. A start marker
/// without a closing `}` is yielded, together with the rest of the input,
/// as a literal.
pub(crate) struct Scanner<'a> {
    input: &'a [u8],
    cursor: usize,
    state: State,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            cursor: 0,
            state: State::Literal,
        }
    }

    fn rest(&mut self) -> &'a [u8] {
        let rest = &self.input[self.cursor..];
        self.cursor = self.input.len();
        rest
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        loop {
            if self.cursor >= self.input.len() {
                return None;
            }

            match self.state {
                State::Literal => match find(&self.input[self.cursor..], START_TAG) {
                    None => return Some(Segment::Literal(self.rest())),
                    Some(0) => self.state = State::InTag,
                    Some(offset) => {
                        let start = self.cursor;
                        self.cursor += offset;
                        self.state = State::InTag;
                        return Some(Segment::Literal(&self.input[start..self.cursor]));
                    }
                },
                State::InTag => {
                    let start = self.cursor;
                    let Some(offset) = self.input[start..].iter().position(|&b| b == END_TAG)
                    else {
                        tracing::trace!(position = start, "unterminated tag emitted as literal");
                        return Some(Segment::Literal(self.rest()));
                    };

                    let end = start + offset;
                    let body = &self.input[start + START_TAG.len()..end];
                    let body = body.strip_prefix(START_TAG_SUFFIX).unwrap_or(body);

                    self.cursor = end + 1;
                    self.state = State::Literal;

                    return Some(Segment::Tag {
                        span: &self.input[start..=end],
                        body,
                    });
                }
            }
        }
    }
}

/// Position of the first occurrence of `needle` in `haystack`.
pub(crate) fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
