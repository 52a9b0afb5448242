//! JSON-LD schema harvesting.
//!
//! Every `<script>` whose `type` contains `ld+json` (any case) contributes a
//! block. Valid JSON is re-serialized with two-space indentation and original
//! key order; anything else is kept verbatim so schema content is never lost.

use dom_query::Document;
use serde_json::Value;
use tracing::debug;

use crate::dom;

/// True if a `type` attribute value denotes JSON-LD.
#[must_use]
pub fn is_ld_json_type(type_attr: &str) -> bool {
    type_attr.to_ascii_lowercase().contains("ld+json")
}

/// Pretty-print a JSON-LD payload, or return it unchanged if it is not JSON.
#[must_use]
pub fn pretty_block(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string()),
        Err(err) => {
            debug!(error = %err, "keeping unparsable JSON-LD block verbatim");
            raw.to_string()
        }
    }
}

/// JSON-LD blocks in document order, empty scripts skipped.
#[must_use]
pub fn extract_schema_blocks(doc: &Document) -> Vec<String> {
    doc.select("script[type]")
        .nodes()
        .iter()
        .filter(|script| dom::attr(script, "type").is_some_and(|t| is_ld_json_type(&t)))
        .filter_map(|script| {
            let text = script.text();
            let raw = text.trim();
            (!raw.is_empty()).then(|| pretty_block(raw))
        })
        .collect()
}

/// Join blocks into lines, with one `""` line between consecutive blocks.
#[must_use]
pub fn schema_lines(blocks: &[String]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(block.lines().map(str::to_string));
    }
    lines
}

/// [`extract_schema_blocks`] followed by [`schema_lines`].
#[must_use]
pub fn extract_schema_lines(doc: &Document) -> Vec<String> {
    schema_lines(&extract_schema_blocks(doc))
}
