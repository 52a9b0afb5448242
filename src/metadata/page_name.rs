//! Page display name: the first `<h1>` in the body, or a name derived from
//! the URL.

use dom_query::Document;

use crate::dom;
use crate::extractor::SignpostExtractor;
use crate::options::ExtractOptions;
use crate::text::collapse_whitespace;
use crate::url_utils;

/// Path segment after which the page name sits two segments later
/// (`/destinations/<region>/<name>`).
pub const DESTINATIONS_SEGMENT: &str = "destinations";

/// Name used when the URL has neither a path nor a host.
pub const DEFAULT_PAGE_NAME: &str = "Page";

/// Text of the first `<h1>` under `<body>`, breaks kept then collapsed to
/// single spaces. `None` when there is no `<h1>` or it is blank.
#[must_use]
pub fn first_h1_text(doc: &Document) -> Option<String> {
    let h1 = dom::first_node(&doc.select("body h1"))?;
    let raw = SignpostExtractor::from_options(&ExtractOptions::default()).preserved_text(&h1);
    let text = collapse_whitespace(&raw);
    (!text.is_empty()).then_some(text)
}

/// Page name derived from a URL.
///
/// In priority order: the segment two after a literal `destinations`
/// segment, the last path segment, the host name, then `"Page"`. Slugs are
/// title-cased with hyphens turned into spaces.
///
/// # Example
///
/// ```rust
/// use rs_signpost::metadata::page_name::fallback_from_url;
///
/// assert_eq!(fallback_from_url("https://x.com/en/destinations/region/paris-guide"), "Paris Guide");
/// assert_eq!(fallback_from_url("https://x.com/blog/top-ten-tips/"), "Top Ten Tips");
/// ```
#[must_use]
pub fn fallback_from_url(url: &str) -> String {
    let segments = url_utils::path_segments(url);

    if let Some(i) = segments.iter().position(|s| s == DESTINATIONS_SEGMENT) {
        if let Some(name) = segments.get(i + 2) {
            return url_utils::slug_to_name(name);
        }
    }

    let base = segments
        .last()
        .cloned()
        .or_else(|| url_utils::hostname(url))
        .unwrap_or_else(|| DEFAULT_PAGE_NAME.to_string());
    url_utils::slug_to_name(&base)
}

/// First `<h1>` text, else [`fallback_from_url`].
#[must_use]
pub fn page_name(doc: &Document, url: &str) -> String {
    first_h1_text(doc).unwrap_or_else(|| fallback_from_url(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_h1_collapses_breaks() {
        let doc = dom::parse("<h1>\n  Paris<br>City   Guide\n</h1><h1>Second</h1>");
        assert_eq!(first_h1_text(&doc), Some("Paris City Guide".to_string()));
    }

    #[test]
    fn test_first_h1_never_annotates_links() {
        let doc = dom::parse(r#"<h1><a href="/p">Paris</a> Guide</h1>"#);
        assert_eq!(first_h1_text(&doc), Some("Paris Guide".to_string()));
    }

    #[test]
    fn test_blank_h1_falls_back() {
        let doc = dom::parse("<h1>  </h1>");
        assert_eq!(first_h1_text(&doc), None);
        assert_eq!(page_name(&doc, "https://x.com/about-us"), "About Us");
    }

    #[test]
    fn test_destinations_rule() {
        assert_eq!(
            fallback_from_url("https://x.com/en/destinations/region/paris-guide"),
            "Paris Guide"
        );
        assert_eq!(
            fallback_from_url("https://x.com/destinations/france/lyon/food"),
            "Lyon"
        );
    }

    #[test]
    fn test_destinations_too_short_uses_last_segment() {
        assert_eq!(fallback_from_url("https://x.com/destinations/france"), "France");
    }

    #[test]
    fn test_host_and_default() {
        assert_eq!(fallback_from_url("https://example.com/"), "Example.Com");
        assert_eq!(fallback_from_url(""), "Page");
    }

    #[test]
    fn test_unparsable_url_treated_as_path() {
        assert_eq!(fallback_from_url("/guides/lake-district?x=1"), "Lake District");
    }
}
