//! URL Utility Functions
//!
//! Path and host helpers for the URL-derived page-name fallback, plus the
//! absolute-URL check used before fetching.

use url::Url;

/// Parse `s` as an absolute http(s) URL with a host.
///
/// # Example
///
/// ```rust
/// use rs_signpost::url_utils::absolute_url;
///
/// assert!(absolute_url("https://example.com/a").is_some());
/// assert!(absolute_url("/relative/path").is_none());
/// assert!(absolute_url("ftp://example.com").is_none());
/// ```
#[must_use]
pub fn absolute_url(s: &str) -> Option<Url> {
    let url = Url::parse(s.trim()).ok()?;
    let web = matches!(url.scheme(), "http" | "https");
    (web && url.host().is_some()).then_some(url)
}

/// Non-empty path segments of a URL.
///
/// Strings that do not parse as URLs are treated as a bare path (query and
/// fragment dropped). Segments are returned as written, without
/// percent-decoding.
#[must_use]
pub fn path_segments(url: &str) -> Vec<String> {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    };
    path.split('/')
        .filter(|seg| !seg.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lower-case host name of a URL, if it has one.
#[must_use]
pub fn hostname(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .filter(|h| !h.is_empty())
}

/// Title-case every run of letters: first letter upper, the rest lower.
///
/// Any non-letter starts a new word, so `"o'neil"` becomes `"O'Neil"` and
/// `"2nd"` becomes `"2Nd"`.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// `"paris-guide"` -> `"Paris Guide"`.
#[must_use]
pub fn slug_to_name(slug: &str) -> String {
    title_case(slug.replace('-', " ").trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url() {
        assert!(absolute_url(" https://x.com ").is_some());
        assert!(absolute_url("http://localhost:8080/a").is_some());
        assert!(absolute_url("mailto:a@b.com").is_none());
        assert!(absolute_url("").is_none());
    }

    #[test]
    fn test_path_segments() {
        assert_eq!(
            path_segments("https://x.com/en/destinations/region/paris-guide/?q=1#top"),
            vec!["en", "destinations", "region", "paris-guide"]
        );
        assert!(path_segments("https://x.com").is_empty());
        assert_eq!(path_segments("/a//b?x=1"), vec!["a", "b"]);
    }

    #[test]
    fn test_hostname() {
        assert_eq!(hostname("https://WWW.Example.com/a"), Some("www.example.com".to_string()));
        assert_eq!(hostname("not a url"), None);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("paris guide"), "Paris Guide");
        assert_eq!(title_case("LOUD words"), "Loud Words");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("2nd city"), "2Nd City");
    }

    #[test]
    fn test_slug_to_name() {
        assert_eq!(slug_to_name("paris-guide"), "Paris Guide");
        assert_eq!(slug_to_name("-lake-district-"), "Lake District");
    }
}
