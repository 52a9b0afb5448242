//! Similarity scoring seam.
//!
//! The embedding model lives outside this crate. Callers plug one in through
//! [`SimilarityScorer`]; this module only prepares the inputs and formats
//! the summary line for `[SEMANTIC SCORES]`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::Result;
use crate::extractor::lines::to_strings;
use crate::extractor::Line;

/// Header of the formatted score summary.
pub const SCORES_HEADER: &str = "Query embeddings (score):\n";

/// Runs of commas and newlines.
#[allow(clippy::expect_used)]
static QUERY_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n,]+").expect("valid regex"));

/// Similarity of one query against the page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryScore {
    pub query: String,
    pub score: f32,
}

impl QueryScore {
    #[must_use]
    pub fn new(query: impl Into<String>, score: f32) -> Self {
        Self {
            query: query.into(),
            score,
        }
    }
}

/// Scores queries against page content.
///
/// Implementations should return one score per query, in query order.
pub trait SimilarityScorer {
    /// # Errors
    ///
    /// Implementation-defined; conventionally [`crate::Error::Scoring`].
    fn score(&self, content: &str, queries: &[String]) -> Result<Vec<QueryScore>>;
}

impl<F> SimilarityScorer for F
where
    F: Fn(&str, &[String]) -> Result<Vec<QueryScore>>,
{
    fn score(&self, content: &str, queries: &[String]) -> Result<Vec<QueryScore>> {
        self(content, queries)
    }
}

/// Split user-entered queries on commas and newlines.
///
/// ```rust
/// use rs_signpost::similarity::parse_queries;
///
/// assert_eq!(parse_queries("paris, lyon\n\n,  nice "), vec!["paris", "lyon", "nice"]);
/// ```
#[must_use]
pub fn parse_queries(raw: &str) -> Vec<String> {
    QUERY_SEPARATORS
        .split(raw)
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
        .collect()
}

/// Score `queries` against the serialized `lines`.
///
/// The scorer is not called when there is no content or no query.
///
/// # Errors
///
/// Whatever the scorer returns.
pub fn score_lines<S>(scorer: &S, lines: &[Line], queries: &[String]) -> Result<Vec<QueryScore>>
where
    S: SimilarityScorer + ?Sized,
{
    let content = to_strings(lines).join("\n");
    if content.trim().is_empty() || queries.is_empty() {
        trace!(queries = queries.len(), "nothing to score");
        return Ok(Vec::new());
    }
    scorer.score(&content, queries)
}

/// Format scores as `"Query embeddings (score):\nq1 (0.7365), q2 (0.7867)"`.
#[must_use]
pub fn format_scores(scores: &[QueryScore]) -> String {
    let joined = scores
        .iter()
        .map(|s| format!("{} ({:.4})", s.query, s.score))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{SCORES_HEADER}{joined}")
}
