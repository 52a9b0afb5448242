//! Placeholder template rendering.
//!
//! Templates are plain text. Scalar placeholders such as `[TITLE]` are
//! replaced literally wherever they occur, longest token first so
//! `[TITLE LENGTH]` is never clobbered by `[TITLE]`. The block placeholders
//! `[PAGE BODY CONTENT]` and `[SCHEMA]` replace their whole line with the
//! signposted lines and the schema lines respectively.
//!
//! Missing block placeholders are reported, never treated as errors.

use crate::extractor::lines::to_strings;
use crate::extractor::Line;
use crate::result::PageMeta;

/// Block placeholder for the signposted lines.
pub const BODY_PLACEHOLDER: &str = "[PAGE BODY CONTENT]";

/// Block placeholder for the JSON-LD schema lines.
pub const SCHEMA_PLACEHOLDER: &str = "[SCHEMA]";

/// Template used when none is supplied.
pub const DEFAULT_TEMPLATE: &str = "\
Content Recommendations: [PAGE]
Client: [CLIENT NAME]
Prepared by: [AGENCY]
Date: [DATE]

URL: [URL]
Title: [TITLE] ([TITLE LENGTH] characters)
Description: [DESCRIPTION] ([DESCRIPTION LENGTH] characters)
Keywords: [KEYWORDS]
[SEMANTIC SCORES]

[PAGE BODY CONTENT]

[SCHEMA]
";

/// Everything a template can reference besides the lines themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFields {
    /// Harvested page metadata.
    pub meta: PageMeta,
    /// `[AGENCY]`
    pub agency: String,
    /// `[CLIENT NAME]`
    pub client_name: String,
    /// `[KEYWORDS]`, already formatted.
    pub keywords: String,
    /// `[SEMANTIC SCORES]`, already formatted; may be empty.
    pub semantic_scores: String,
}

impl TemplateFields {
    /// Fields for `meta` with every caller-supplied value empty.
    #[must_use]
    pub fn new(meta: PageMeta) -> Self {
        Self {
            meta,
            ..Self::default()
        }
    }

    /// Scalar placeholder table, longest token first.
    #[must_use]
    pub fn placeholders(&self) -> Vec<(&'static str, String)> {
        let meta = &self.meta;
        let mut table = vec![
            ("[PAGE]", meta.page.clone()),
            ("[DATE]", meta.date.clone()),
            ("[URL]", meta.url.clone()),
            ("[TITLE]", meta.title.clone()),
            ("[TITLE LENGTH]", meta.title_len.to_string()),
            ("[DESCRIPTION]", meta.description.clone()),
            ("[DESCRIPTION LENGTH]", meta.description_len.to_string()),
            ("[AGENCY]", self.agency.clone()),
            ("[CLIENT NAME]", self.client_name.clone()),
            ("[KEYWORDS]", self.keywords.clone()),
            ("[SEMANTIC SCORES]", self.semantic_scores.clone()),
        ];
        table.sort_by_key(|(token, _)| std::cmp::Reverse(token.len()));
        table
    }
}

/// A rendered template plus the block placeholders it lacked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub missing: Vec<String>,
}

fn substitute(line: &str, table: &[(&'static str, String)]) -> String {
    let mut out = line.to_string();
    for (token, value) in table {
        if out.contains(token) {
            out = out.replace(token, value);
        }
    }
    out
}

/// Render `template` with `fields` and the signposted `lines`.
///
/// Every template line containing [`BODY_PLACEHOLDER`] is replaced by the
/// serialized lines, one per output line; the same goes for
/// [`SCHEMA_PLACEHOLDER`] and `fields.meta.schema_lines`. An empty
/// replacement removes the placeholder line.
///
/// `missing` lists [`BODY_PLACEHOLDER`] when the template lacks it, and
/// [`SCHEMA_PLACEHOLDER`] only when there are schema lines to place.
///
/// # Example
///
/// ```rust
/// use rs_signpost::template::{render, TemplateFields};
/// use rs_signpost::{Line, PageMeta};
///
/// let fields = TemplateFields {
///     meta: PageMeta { page: "Lyon".into(), ..PageMeta::default() },
///     agency: "Crafted".into(),
///     ..TemplateFields::default()
/// };
/// let out = render("[PAGE] by [AGENCY]\n[PAGE BODY CONTENT]\n", &fields, &[Line::paragraph("Hi")]);
/// assert_eq!(out.text, "Lyon by Crafted\n<p> Hi\n");
/// assert!(out.missing.is_empty());
/// ```
#[must_use]
pub fn render(template: &str, fields: &TemplateFields, lines: &[Line]) -> Rendered {
    let table = fields.placeholders();
    let body = to_strings(lines);
    let schema = &fields.meta.schema_lines;

    let mut out: Vec<String> = Vec::new();
    let mut saw_body = false;
    let mut saw_schema = false;

    for line in template.lines() {
        if line.contains(BODY_PLACEHOLDER) {
            saw_body = true;
            out.extend(body.iter().cloned());
        } else if line.contains(SCHEMA_PLACEHOLDER) {
            saw_schema = true;
            out.extend(schema.iter().cloned());
        } else {
            out.push(substitute(line, &table));
        }
    }

    let mut missing = Vec::new();
    if !saw_body {
        missing.push(BODY_PLACEHOLDER.to_string());
    }
    if !saw_schema && !schema.is_empty() {
        missing.push(SCHEMA_PLACEHOLDER.to_string());
    }

    let mut text = out.join("\n");
    if template.ends_with('\n') && !out.is_empty() {
        text.push('\n');
    }
    Rendered { text, missing }
}
