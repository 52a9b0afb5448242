//! # rs-signpost
//!
//! Turns a web page into "signposted content": an ordered list of tagged
//! lines (`<h2> ...`, `<p> ...`, `<img alt="...">`) plus page metadata
//! (title, meta description, JSON-LD schema, page name), ready to drop into a
//! report template.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_signpost::{extract, ExtractOptions};
//!
//! let html = r#"<html><head><title>Lyon</title></head>
//! <body><header>Menu</header><h1>Lyon</h1><p>Food <b>and</b> wine.</p>
//! <img alt="Old town"></body></html>"#;
//!
//! let result = extract(html, "https://example.com/lyon", &ExtractOptions::default());
//! assert_eq!(
//!     result.line_strings(),
//!     vec!["<h1> Lyon", "<p> Food and wine.", r#"<img alt="Old town">"#]
//! );
//! assert_eq!(result.meta.title_len, 4);
//! ```
//!
//! ## Features
//!
//! - **Signpost extraction**: headings, paragraphs and images in reading order,
//!   lists flattened, UI boilerplate filtered
//! - **Exclusion selectors**: user-editable CSS prune lists, invalid entries skipped
//! - **Metadata**: title, description, pretty-printed JSON-LD, page name
//! - **Report helpers**: placeholder templates, keyword formatting, file names
//! - **Fetching** (feature `fetch`): async HTTP with typed 403 handling

mod error;
mod extract;
mod options;
mod result;

/// DOM helpers over `dom_query` nodes.
pub mod dom;

/// Text normalization and noise classification.
pub mod text;

/// Minimal selector engine for exclusion lists.
pub mod selector;

/// Signposted line extraction (tags, lines, walker, pruning).
pub mod extractor;

/// Metadata harvesting (title, description, JSON-LD, page name).
pub mod metadata;

/// URL helpers for page-name fallback.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Placeholder template rendering.
pub mod template;

/// Keyword, volume and file-name helpers for reports.
pub mod report;

/// Similarity scoring seam.
pub mod similarity;

/// Configuration file.
pub mod config;

/// HTTP fetching.
#[cfg(feature = "fetch")]
pub mod fetch;

// Public API - re-exports
pub use config::Config;
pub use error::{Error, Result, SelectorError};
pub use extract::{
    extract, extract_bytes, extract_document, extract_with_date, format_date, today, DATE_FORMAT,
};
pub use extractor::{Line, PruneReport, SignpostExtractor};
pub use options::{ExtractOptions, DEFAULT_EXCLUDE};
pub use result::{Extraction, PageMeta, NOT_AVAILABLE};
