//! Metadata harvesting.
//!
//! Reads title, description, JSON-LD schema and the page name from a parsed
//! document. Call [`harvest`] before pruning: the schema lives in `<script>`
//! elements that pruning strips, and the page name looks at the first `<h1>`
//! of the unpruned body.

pub mod json_ld;
pub mod meta_tags;
pub mod page_name;

use dom_query::Document;

use crate::result::{field_len, PageMeta, NOT_AVAILABLE};

pub use json_ld::extract_schema_lines;
pub use meta_tags::{extract_description, extract_title};
pub use page_name::{fallback_from_url, first_h1_text};

/// Harvest every metadata field; `url` and `date` come from the caller.
///
/// Missing title or description become `"N/A"` with length `0`.
#[must_use]
pub fn harvest(doc: &Document, url: &str, date: &str) -> PageMeta {
    let title = extract_title(doc).unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let description = extract_description(doc).unwrap_or_else(|| NOT_AVAILABLE.to_string());

    PageMeta {
        page: page_name::page_name(doc, url),
        date: date.to_string(),
        url: url.to_string(),
        title_len: field_len(&title),
        title,
        description_len: field_len(&description),
        description,
        schema_lines: extract_schema_lines(doc),
    }
}
