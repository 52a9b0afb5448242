//! Extraction pipeline.
//!
//! parse -> harvest metadata -> strip script/style/noscript/template ->
//! exclusion selectors -> hard kills -> optional before-h1 trim -> walk.
//!
//! Metadata is harvested first because the schema lives in `<script>`
//! elements and the page name reads the unpruned first `<h1>`.

use chrono::{NaiveDate, Utc};
use chrono_tz::Europe::London;
use dom_query::Document;
use tracing::debug;

use crate::dom;
use crate::encoding;
use crate::extractor::{pruning, SignpostExtractor, DEFAULT_CATALOG};
use crate::metadata;
use crate::options::ExtractOptions;
use crate::result::Extraction;

/// Report date format (`DD/MM/YYYY`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Today's date in Europe/London.
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().with_timezone(&London).date_naive()
}

/// Format a date the way report headers show it.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Extract signposted lines and metadata from an HTML string.
///
/// `url` is the final (post-redirect) page URL, used for the page-name
/// fallback and echoed into [`crate::PageMeta::url`]. Never fails: missing
/// metadata is reported through sentinels.
///
/// # Example
///
/// ```rust
/// use rs_signpost::{extract, ExtractOptions};
///
/// let html = r#"<html><head><title>Paris</title></head>
/// <body><nav>Menu</nav><h1>Paris Guide</h1><p>Where to eat.</p></body></html>"#;
///
/// let result = extract(html, "https://x.com/paris", &ExtractOptions::default());
/// assert_eq!(result.meta.title, "Paris");
/// assert_eq!(result.line_strings(), vec!["<h1> Paris Guide", "<p> Where to eat."]);
/// ```
#[must_use]
pub fn extract(html: &str, url: &str, options: &ExtractOptions) -> Extraction {
    extract_with_date(html, url, options, today())
}

/// [`extract`] over raw bytes, decoded tolerantly.
#[must_use]
pub fn extract_bytes(html: &[u8], url: &str, options: &ExtractOptions) -> Extraction {
    extract(&encoding::decode_html(html, None), url, options)
}

/// [`extract`] with an explicit report date.
#[must_use]
pub fn extract_with_date(
    html: &str,
    url: &str,
    options: &ExtractOptions,
    date: NaiveDate,
) -> Extraction {
    let doc = dom::parse(html);
    extract_document(&doc, url, options, date)
}

/// Run the pipeline over an already parsed document.
///
/// The document is pruned in place.
#[must_use]
pub fn extract_document(
    doc: &Document,
    url: &str,
    options: &ExtractOptions,
    date: NaiveDate,
) -> Extraction {
    let meta = metadata::harvest(doc, url, &format_date(date));

    let stripped = pruning::strip_always(&doc.root(), &DEFAULT_CATALOG);

    let body = dom::body_or_root(doc);
    let mut prune = pruning::prune_selectors(&body, &options.exclude_selectors);
    prune.removed += pruning::prune_hard_kills(&body);

    if options.remove_before_h1 && !pruning::remove_before_first_h1(&body) {
        debug!("no <h1> found, nothing removed before it");
    }

    let lines = SignpostExtractor::from_options(options).extract(&body);

    debug!(
        url,
        stripped,
        removed = prune.removed,
        skipped = prune.skipped.len(),
        lines = lines.len(),
        "extraction finished"
    );

    Extraction { meta, lines, prune }
}
