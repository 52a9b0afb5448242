//! Report helpers: keyword rows, search volumes and output file names.

use std::cmp::Reverse;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::text::collapse_whitespace;

/// Longest file stem produced by [`safe_filename`] by default.
pub const DEFAULT_MAX_FILENAME: usize = 120;

/// Characters never allowed in an output file name.
const FORBIDDEN_FILENAME_CHARS: &[char] = &[
    '\\', '/', '*', '?', '"', '<', '>', '|', ':', '£', '#', '@', '!', '^', '&', '+', '=', '(', ')',
    '[', ']', '{', '}',
];

/// One keyword row as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub keyword: String,
    /// Search volume as typed: `"1,200"`, `"1.2k"`, `"3m"`.
    pub volume: String,
}

impl Keyword {
    #[must_use]
    pub fn new(keyword: impl Into<String>, volume: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            volume: volume.into(),
        }
    }

    /// Both cells filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.keyword.trim().is_empty() && !self.volume.trim().is_empty()
    }
}

/// Parses `KEYWORD=VOLUME`, splitting on the last `=`.
impl FromStr for Keyword {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (keyword, volume) = s
            .rsplit_once('=')
            .ok_or_else(|| format!("expected KEYWORD=VOLUME, got {s:?}"))?;
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(format!("empty keyword in {s:?}"));
        }
        Ok(Self::new(keyword, volume.trim()))
    }
}

/// Parse a human-entered search volume.
///
/// Commas are ignored, a `k` suffix multiplies by a thousand and an `m`
/// suffix by a million. Fractions are truncated. Anything unparsable is 0.
///
/// ```rust
/// use rs_signpost::report::parse_volume;
///
/// assert_eq!(parse_volume("1,200"), 1200);
/// assert_eq!(parse_volume("1.2k"), 1200);
/// assert_eq!(parse_volume("3M"), 3_000_000);
/// assert_eq!(parse_volume("lots"), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn parse_volume(value: &str) -> i64 {
    let v = value.trim().to_lowercase().replace(',', "");
    let (number, multiplier) = if let Some(n) = v.strip_suffix('k') {
        (n, 1_000.0)
    } else if let Some(n) = v.strip_suffix('m') {
        (n, 1_000_000.0)
    } else {
        (v.as_str(), 1.0)
    };

    match number.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => (n * multiplier) as i64,
        _ => 0,
    }
}

/// Render keyword rows as `"kw (vol), kw2 (vol2)"`.
///
/// Incomplete rows are dropped; the rest are ordered by parsed volume,
/// highest first, keeping input order between equal volumes.
#[must_use]
pub fn format_keywords(keywords: &[Keyword]) -> String {
    let mut rows: Vec<&Keyword> = keywords.iter().filter(|k| k.is_complete()).collect();
    rows.sort_by_key(|k| Reverse(parse_volume(&k.volume)));
    rows.iter()
        .map(|k| format!("{} ({})", k.keyword.trim(), k.volume.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Turn `name` into something safe to use as a file stem.
///
/// Forbidden punctuation and commas are removed, whitespace collapsed, the
/// result cut to `max_len` characters and stripped of trailing dots and
/// spaces. An empty result becomes `"document"`.
///
/// ```rust
/// use rs_signpost::report::safe_filename;
///
/// assert_eq!(safe_filename("Paris: A Guide (2026)", 120), "Paris A Guide 2026");
/// assert_eq!(safe_filename("???", 120), "document");
/// ```
#[must_use]
pub fn safe_filename(name: &str, max_len: usize) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !FORBIDDEN_FILENAME_CHARS.contains(c))
        .collect();
    let cleaned = collapse_whitespace(&cleaned).replace(',', "");
    let truncated: String = cleaned.trim().chars().take(max_len).collect();
    let stem = truncated.trim_end_matches(['.', ' ']);
    if stem.is_empty() {
        "document".to_string()
    } else {
        stem.to_string()
    }
}

/// File name for a rendered report.
///
/// ```rust
/// use rs_signpost::report::document_file_name;
///
/// assert_eq!(
///     document_file_name("Paris Guide", "LeShuttle", "txt"),
///     "Paris Guide - Content Recommendations_LeShuttle.txt"
/// );
/// assert_eq!(
///     document_file_name("Paris Guide", "", "docx"),
///     "Paris Guide - Content Recommendations.docx"
/// );
/// ```
#[must_use]
pub fn document_file_name(page: &str, client: &str, extension: &str) -> String {
    let page = safe_filename(page, DEFAULT_MAX_FILENAME);
    let client = if client.trim().is_empty() {
        String::new()
    } else {
        format!("_{}", safe_filename(client, DEFAULT_MAX_FILENAME))
    };
    let extension = extension.trim_start_matches('.');
    format!("{page} - Content Recommendations{client}.{extension}")
}
