//! Rewrites encoded delimiters to their canonical form.
//!
//! Only exact matches of the encoded start marker, end marker and field
//! separator are rewritten, and only for the encodings enabled in the
//! input mask. Every other byte is copied unchanged.

use crate::template::config::InputEncoding;
use crate::template::{END_TAG, SEPARATOR, START_TAG};

const URL_FORMS: [(&[u8], &[u8]); 3] = [
    (b"%7BRAND", START_TAG),
    (b"%7D", &[END_TAG]),
    (b"%3B", &[SEPARATOR]),
];

const HTML_FORMS: [(&[u8], &[u8]); 3] = [
    (b"&lbrace;RAND", START_TAG),
    (b"&rbrace;", &[END_TAG]),
    (b"&semi;", &[SEPARATOR]),
];

/// Whether [`normalize`] could change `input` under `encoding`.
pub(crate) fn needed(input: &[u8], encoding: InputEncoding) -> bool {
    let url = encoding.contains(InputEncoding::URL);
    let html = encoding.contains(InputEncoding::HTML);

    (url || html)
        && input
            .iter()
            .any(|&b| (url && b == b'%') || (html && b == b'&'))
}

pub(crate) fn normalize(input: &[u8], encoding: InputEncoding) -> Vec<u8> {
    let url = encoding.contains(InputEncoding::URL);
    let html = encoding.contains(InputEncoding::HTML);

    let mut out = Vec::with_capacity(input.len());
    let mut cursor = 0;

    while cursor < input.len() {
        let Some(offset) = input[cursor..]
            .iter()
            .position(|&b| b == b'%' || b == b'&')
        else {
            out.extend_from_slice(&input[cursor..]);
            break;
        };

        out.extend_from_slice(&input[cursor..cursor + offset]);
        cursor += offset;

        let forms: &[(&[u8], &[u8])] = match input[cursor] {
            b'%' if url => &URL_FORMS,
            b'&' if html => &HTML_FORMS,
            _ => &[],
        };

        match forms
            .iter()
            .find(|(encoded, _)| input[cursor..].starts_with(encoded))
        {
            Some((encoded, canonical)) => {
                out.extend_from_slice(canonical);
                cursor += encoded.len();
            }
            None => {
                out.push(input[cursor]);
                cursor += 1;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: InputEncoding = InputEncoding::URL.union(InputEncoding::HTML);

    #[test]
    fn rewrites_url_markers() {
        assert_eq!(
            normalize(b"a%7BRAND%3B5%3BABL%7Db", BOTH),
            b"a{RAND;5;ABL}b".to_vec()
        );
    }

    #[test]
    fn rewrites_html_markers() {
        assert_eq!(
            normalize(b"&lbrace;RAND&semi;3&rbrace;", BOTH),
            b"{RAND;3}".to_vec()
        );
    }

    #[test]
    fn leaves_other_escapes_alone() {
        assert_eq!(normalize(b"50%20off &amp; more", BOTH), b"50%20off &amp; more".to_vec());
    }

    #[test]
    fn respects_disabled_encodings() {
        assert_eq!(
            normalize(b"%7BRAND%7D &lbrace;RAND&rbrace;", InputEncoding::URL),
            b"{RAND} &lbrace;RAND&rbrace;".to_vec()
        );
        assert!(!needed(b"%7BRAND%7D", InputEncoding::HTML));
        assert!(!needed(b"anything", BOTH));
    }
}
