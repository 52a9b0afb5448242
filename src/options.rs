//! Configuration options for signpost extraction.
//!
//! [`ExtractOptions`] is passed by reference into an extraction call and never
//! mutated during it. It deserializes from the `[extract]` table of a config
//! file, with every field optional.

use serde::{Deserialize, Serialize};

/// Exclusion selectors applied when none are configured.
///
/// Site chrome (header, footer, nav), consent and newsletter banners,
/// breadcrumbs, wishlists, review widgets, search-results panels and map
/// modals.
pub static DEFAULT_EXCLUDE: [&str; 18] = [
    "header",
    "footer",
    "nav",
    ".cookie",
    ".newsletter",
    "[class*='breadcrumb']",
    "[class*='wishlist']",
    "[class*='simplesearch']",
    "[id*='gallery']",
    "[class*='usp']",
    "[class*='feefo']",
    "[class*='associated-blogs']",
    "[class*='popular']",
    ".sr-main.js-searchpage-content.visible",
    "[class~='sr-main'][class~='js-searchpage-content'][class~='visible']",
    "[class*='js-searchpage-content']",
    "[class*='searchpage-content']",
    ".lmd-map-modal-create.js-lmd-map-modal-map",
];

/// Configuration options for signpost extraction.
///
/// All fields are public. Use `Default::default()` for the stock exclusion
/// list with every toggle off.
///
/// # Example
///
/// ```rust
/// use rs_signpost::ExtractOptions;
///
/// let options = ExtractOptions {
///     annotate_links: true,
///     ..ExtractOptions::default()
/// };
/// assert!(options.exclude_selectors.iter().any(|s| s == "nav"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ExtractOptions {
    /// Selectors whose matches are removed before extraction, in order.
    ///
    /// Default: [`DEFAULT_EXCLUDE`]
    pub exclude_selectors: Vec<String>,

    /// Render links as `text (→ href)`.
    ///
    /// Default: `false`
    pub annotate_links: bool,

    /// Drop everything before the first `<h1>`.
    ///
    /// Default: `false`
    pub remove_before_h1: bool,

    /// Add `src` to image lines.
    ///
    /// Default: `false`
    pub include_img_src: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            exclude_selectors: DEFAULT_EXCLUDE.iter().map(ToString::to_string).collect(),
            annotate_links: false,
            remove_before_h1: false,
            include_img_src: false,
        }
    }
}

impl ExtractOptions {
    /// Split a comma-separated selector list as typed by a user.
    ///
    /// Entries are trimmed and empty entries dropped. Selectors that contain
    /// commas themselves (groups) cannot be expressed in this format.
    ///
    /// ```rust
    /// use rs_signpost::ExtractOptions;
    ///
    /// assert_eq!(
    ///     ExtractOptions::parse_selector_list(" header, .cookie ,, [id*='gallery'] "),
    ///     vec!["header", ".cookie", "[id*='gallery']"]
    /// );
    /// ```
    #[must_use]
    pub fn parse_selector_list(text: &str) -> Vec<String> {
        text.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Render the exclusion list in the comma-separated editing format.
    #[must_use]
    pub fn selector_list_text(&self) -> String {
        self.exclude_selectors.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ExtractOptions::default();
        assert_eq!(opts.exclude_selectors.len(), 18);
        assert_eq!(opts.exclude_selectors[0], "header");
        assert!(!opts.annotate_links);
        assert!(!opts.remove_before_h1);
        assert!(!opts.include_img_src);
    }

    #[test]
    fn test_default_selectors_all_compile() {
        for sel in DEFAULT_EXCLUDE {
            assert!(
                crate::selector::compile(sel).is_ok(),
                "default selector {sel:?} must compile"
            );
        }
    }

    #[test]
    fn test_selector_list_round_trip() {
        let opts = ExtractOptions::default();
        let parsed = ExtractOptions::parse_selector_list(&opts.selector_list_text());
        assert_eq!(parsed, opts.exclude_selectors);
    }

    #[test]
    fn test_deserialize_partial() {
        let opts: ExtractOptions = toml::from_str("annotate_links = true").unwrap();
        assert!(opts.annotate_links);
        assert_eq!(opts.exclude_selectors.len(), DEFAULT_EXCLUDE.len());

        let opts: ExtractOptions = toml::from_str("exclude_selectors = []").unwrap();
        assert!(opts.exclude_selectors.is_empty());
    }
}
