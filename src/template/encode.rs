//! Output encoding of literal text.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};

use crate::template::config::OutputEncoding;

/// Everything except RFC 3986 unreserved characters.
const URL_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Appends `data` to `out` using `encoding`.
pub(crate) fn write(out: &mut Vec<u8>, data: &[u8], encoding: OutputEncoding) {
    if data.is_empty() {
        return;
    }

    match encoding {
        OutputEncoding::None => out.extend_from_slice(data),
        OutputEncoding::Url => {
            for chunk in percent_encode(data, URL_ESCAPE) {
                out.extend_from_slice(chunk.as_bytes());
            }
        }
        OutputEncoding::Html => {
            for &b in data {
                match b {
                    b'&' => out.extend_from_slice(b"&amp;"),
                    b'<' => out.extend_from_slice(b"&lt;"),
                    b'>' => out.extend_from_slice(b"&gt;"),
                    b'"' => out.extend_from_slice(b"&#34;"),
                    b'\'' => out.extend_from_slice(b"&#39;"),
                    _ => out.push(b),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(data: &[u8], encoding: OutputEncoding) -> Vec<u8> {
        let mut out = Vec::new();
        write(&mut out, data, encoding);
        out
    }

    #[test]
    fn url_escapes_reserved_bytes() {
        assert_eq!(encoded(b"a b&c=d~e", OutputEncoding::Url), b"a%20b%26c%3Dd~e");
        assert_eq!(encoded(&[0xff], OutputEncoding::Url), b"%FF");
    }

    #[test]
    fn html_escapes_five_characters() {
        assert_eq!(
            encoded(b"<a href=\"x\">'&'</a>", OutputEncoding::Html),
            b"&lt;a href=&#34;x&#34;&gt;&#39;&amp;&#39;&lt;/a&gt;".to_vec()
        );
    }

    #[test]
    fn none_is_verbatim() {
        assert_eq!(encoded(b"a b<", OutputEncoding::None), b"a b<");
    }
}
