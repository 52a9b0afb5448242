//! Text normalization and noise classification.
//!
//! Every text-producing path of the extractor funnels through [`normalize`],
//! and paragraph emission consults a [`NoiseFilter`] before a line is kept.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of spaces and tabs.
#[allow(clippy::expect_used)]
static HORIZONTAL_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid regex"));

/// Spaces and tabs hugging a newline.
#[allow(clippy::expect_used)]
static WS_AROUND_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*\n[ \t]*").expect("valid regex"));

/// Any whitespace run, newlines included.
#[allow(clippy::expect_used)]
static ANY_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Canonicalize whitespace while keeping line structure.
///
/// - CRLF and lone CR become LF
/// - non-breaking spaces become plain spaces
/// - runs of spaces/tabs collapse to a single space
/// - spaces/tabs directly around a newline are dropped (`"a \n b"` -> `"a\nb"`)
///
/// Newlines themselves are never removed, so `<br>`-derived breaks survive.
/// The function is idempotent.
///
/// # Example
///
/// ```rust
/// use rs_signpost::text::normalize;
///
/// assert_eq!(normalize("a \r\n\t b\u{a0}\u{a0}c"), "a\nb c");
/// ```
#[must_use]
pub fn normalize(s: &str) -> String {
    let s = s.replace("\r\n", "\n").replace('\r', "\n").replace('\u{a0}', " ");
    let s = HORIZONTAL_WS.replace_all(&s, " ");
    WS_AROUND_NEWLINE.replace_all(&s, "\n").into_owned()
}

/// Normalize, then fold every whitespace run (newlines included) into one space and trim.
#[must_use]
pub fn collapse_whitespace(s: &str) -> String {
    let s = normalize(s);
    ANY_WS.replace_all(&s, " ").trim().to_string()
}

/// Boilerplate fragments that mark UI or analytics text.
///
/// Matching is substring-based on lower-cased text, so short entries such as
/// `"clear"` are deliberately broad.
pub static NOISE_SUBSTRINGS: [&str; 11] = [
    "google tag manager",
    "loading results",
    "load more",
    "updating results",
    "something went wrong",
    "filters",
    "apply filters",
    "clear",
    "sort by",
    "to collect end-user usage analytics",
    "place this code immediately before the closing",
];

/// Predicate over normalized text flagging UI/analytics boilerplate.
///
/// Only paragraph emission consults the filter; headings and images are never
/// suppressed.
#[derive(Debug, Clone, Copy)]
pub struct NoiseFilter {
    substrings: &'static [&'static str],
}

impl NoiseFilter {
    /// Build a filter over a fixed set of lower-case substrings.
    #[must_use]
    pub const fn new(substrings: &'static [&'static str]) -> Self {
        Self { substrings }
    }

    /// True iff the trimmed, lower-cased text is non-empty and contains any
    /// configured substring. Whitespace-only text is not noise.
    #[must_use]
    pub fn is_noise(&self, text: &str) -> bool {
        let t = text.trim().to_lowercase();
        if t.is_empty() {
            return false;
        }
        self.substrings.iter().any(|sub| t.contains(sub))
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        DEFAULT_NOISE
    }
}

/// The filter used by [`is_noise`] and by extractors built from options.
pub static DEFAULT_NOISE: NoiseFilter = NoiseFilter::new(&NOISE_SUBSTRINGS);

/// [`NoiseFilter::is_noise`] with the default substring set.
#[inline]
#[must_use]
pub fn is_noise(text: &str) -> bool {
    DEFAULT_NOISE.is_noise(text)
}
