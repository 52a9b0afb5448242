//! Tolerant byte-to-UTF-8 decoding of page bodies.
//!
//! Resolution order: byte-order mark, an explicit charset (typically from the
//! HTTP `Content-Type` header), a `<meta>` declaration in the first 1024 bytes,
//! then UTF-8. Undecodable bytes become U+FFFD; decoding never fails.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// How far into the document to look for a `<meta>` charset declaration.
const META_SCAN_BYTES: usize = 1024;

/// `charset=...` inside a `<meta>` tag, covering both `<meta charset>` and
/// the `http-equiv="Content-Type"` form.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?charset\s*=\s*["']?\s*([A-Za-z0-9._:\-]+)"#)
        .expect("valid regex")
});

/// `charset=...` parameter of a MIME type.
#[allow(clippy::expect_used)]
static MIME_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([A-Za-z0-9._:\-]+)"#).expect("valid regex")
});

/// Charset label from a `Content-Type` value such as `text/html; charset=ISO-8859-1`.
#[must_use]
pub fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    let label = MIME_CHARSET_RE.captures(content_type)?.get(1)?;
    Encoding::for_label(label.as_str().as_bytes())
}

/// Charset declared by a `<meta>` tag near the start of the document.
#[must_use]
pub fn sniff_meta_charset(html: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&html[..html.len().min(META_SCAN_BYTES)]);
    let label = META_CHARSET_RE.captures(&head)?.get(1)?;
    let encoding = Encoding::for_label(label.as_str().as_bytes())?;
    // A meta tag cannot truthfully declare a UTF-16 family encoding.
    Some(encoding.output_encoding())
}

/// Decide the encoding of a document.
#[must_use]
pub fn detect_encoding(html: &[u8], declared: Option<&'static Encoding>) -> &'static Encoding {
    Encoding::for_bom(html)
        .map(|(encoding, _)| encoding)
        .or(declared)
        .or_else(|| sniff_meta_charset(html))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// # Example
///
/// ```rust
/// use rs_signpost::encoding::decode_html;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert!(decode_html(html, None).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8], declared: Option<&'static Encoding>) -> String {
    let encoding = detect_encoding(html, declared);
    // `decode` strips a BOM and replaces malformed sequences.
    let (text, _, _) = encoding.decode(html);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{UTF_16LE, WINDOWS_1252};

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(detect_encoding(b"<p>plain</p>", None), UTF_8);
    }

    #[test]
    fn test_meta_charset_forms() {
        assert_eq!(
            sniff_meta_charset(br#"<META CHARSET="iso-8859-1">"#),
            Some(WINDOWS_1252)
        );
        assert_eq!(sniff_meta_charset(b"<meta charset=utf-8>"), Some(UTF_8));
        assert_eq!(
            sniff_meta_charset(
                br#"<meta http-equiv="Content-Type" content="text/html; charset=windows-1252">"#
            ),
            Some(WINDOWS_1252)
        );
        assert_eq!(sniff_meta_charset(br#"<meta charset="no-such-thing">"#), None);
    }

    #[test]
    fn test_meta_beyond_scan_window_ignored() {
        let mut html = vec![b' '; META_SCAN_BYTES];
        html.extend_from_slice(br#"<meta charset="windows-1252">"#);
        assert_eq!(sniff_meta_charset(&html), None);
    }

    #[test]
    fn test_meta_utf16_label_means_utf8() {
        assert_eq!(sniff_meta_charset(br#"<meta charset="utf-16">"#), Some(UTF_8));
    }

    #[test]
    fn test_content_type_header() {
        assert_eq!(
            charset_from_content_type("text/html; charset=\"ISO-8859-1\""),
            Some(WINDOWS_1252)
        );
        assert_eq!(charset_from_content_type("text/html"), None);
    }

    #[test]
    fn test_declared_beats_meta_bom_beats_declared() {
        let html = br#"<meta charset="windows-1252"><p>x</p>"#;
        assert_eq!(detect_encoding(html, Some(UTF_8)), UTF_8);

        let mut bom = vec![0xFF, 0xFE];
        bom.extend("<p>hi</p>".encode_utf16().flat_map(u16::to_le_bytes));
        assert_eq!(detect_encoding(&bom, Some(WINDOWS_1252)), UTF_16LE);
        assert_eq!(decode_html(&bom, None), "<p>hi</p>");
    }

    #[test]
    fn test_decode_windows1252_quotes() {
        let html = b"<meta charset=\"windows-1252\"><p>\x93Hello\x94</p>";
        assert!(decode_html(html, None).contains("\u{201C}Hello\u{201D}"));
    }

    #[test]
    fn test_decode_invalid_utf8_is_lossy() {
        let text = decode_html(b"<p>Test \xFF\xFE Invalid</p>", None);
        assert!(text.contains("Test"));
        assert!(text.contains('\u{FFFD}'));
        assert!(text.contains("Invalid"));
    }

    #[test]
    fn test_utf8_bom_stripped() {
        assert_eq!(decode_html(b"\xEF\xBB\xBF<p>x</p>", None), "<p>x</p>");
    }
}
