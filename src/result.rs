//! Result types for extraction output.
//!
//! [`Extraction`] pairs the harvested [`PageMeta`] with the signposted lines
//! and a summary of what pruning removed.

use serde::{Deserialize, Serialize};

use crate::extractor::{Line, PruneReport};

/// Sentinel used for a missing title or description.
pub const NOT_AVAILABLE: &str = "N/A";

/// Character length of a metadata field, `0` for the [`NOT_AVAILABLE`] sentinel.
#[must_use]
pub fn field_len(value: &str) -> usize {
    if value == NOT_AVAILABLE {
        0
    } else {
        value.chars().count()
    }
}

/// Page-level metadata for the report header.
///
/// `title_len == 0` and `title == "N/A"` hold together when the page has no
/// title; the description follows the same pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Display name: first `<h1>` or a URL-derived fallback.
    pub page: String,

    /// Extraction date, `DD/MM/YYYY` in Europe/London.
    pub date: String,

    /// Final (post-redirect) URL.
    pub url: String,

    /// `<title>` text or `"N/A"`.
    pub title: String,

    pub title_len: usize,

    /// `<meta name="description">` content or `"N/A"`.
    pub description: String,

    pub description_len: usize,

    /// Pretty-printed JSON-LD blocks split into lines, blocks separated by `""`.
    pub schema_lines: Vec<String>,
}

impl PageMeta {
    /// True if a `<title>` was found.
    #[must_use]
    pub fn has_title(&self) -> bool {
        self.title != NOT_AVAILABLE
    }

    /// True if a meta description was found.
    #[must_use]
    pub fn has_description(&self) -> bool {
        self.description != NOT_AVAILABLE
    }
}

/// Result of one extraction call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Harvested metadata.
    pub meta: PageMeta,

    /// Signposted lines in document order.
    pub lines: Vec<Line>,

    /// What the exclusion pass removed or skipped.
    pub prune: PruneReport,
}

impl Extraction {
    /// Serialized lines, one string per [`Line`].
    #[must_use]
    pub fn line_strings(&self) -> Vec<String> {
        crate::extractor::lines::to_strings(&self.lines)
    }

    /// Lines joined with `\n`, as handed to a similarity scorer.
    #[must_use]
    pub fn content_text(&self) -> String {
        self.line_strings().join("\n")
    }
}
