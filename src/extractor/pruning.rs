//! Subtree pruning before extraction.
//!
//! - [`strip_always`]: drop script/style/noscript/template everywhere
//! - [`prune_selectors`]: drop every match of a user-editable exclusion list,
//!   skipping selectors that do not parse
//! - [`prune_hard_kills`]: search-results panels and map modals, removed even
//!   when the exclusion list has been edited
//! - [`remove_before_first_h1`]: optional pre-filter trimming leading chrome

use dom_query::NodeRef;
use serde::Serialize;
use tracing::debug;

use crate::dom;
use crate::selector::{self, Rule};

use super::tags::TagCatalog;

/// Outcome of an exclusion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PruneReport {
    /// Elements detached.
    pub removed: usize,
    /// Selectors that failed to parse and were skipped.
    pub skipped: Vec<String>,
}

/// Selectors applied after the exclusion list regardless of its contents.
pub static HARD_KILL_SELECTORS: [&str; 5] = [
    ".sr-main.js-searchpage-content.visible",
    "[class~='sr-main'][class~='js-searchpage-content'][class~='visible']",
    "[class*='js-searchpage-content']",
    "[class*='searchpage-content']",
    ".lmd-map-modal-create.js-lmd-map-modal-map",
];

/// Rules applied before [`HARD_KILL_SELECTORS`].
pub static HARD_KILL_RULES: [Rule; 1] = [selector::is_search_results_panel];

fn detach_all(nodes: &[NodeRef]) -> usize {
    for node in nodes {
        dom::detach(node);
    }
    nodes.len()
}

/// Remove every element whose tag the catalog always strips. Returns the count.
pub fn strip_always(root: &NodeRef, catalog: &TagCatalog) -> usize {
    let mut removed = 0;
    for tag in catalog.always_strip() {
        removed += detach_all(&dom::descendants_named(root, tag));
    }
    removed
}

/// Remove matches of each selector, in list order.
///
/// Invalid selectors are logged, recorded in [`PruneReport::skipped`] and
/// otherwise ignored; the remaining selectors still apply.
pub fn prune_selectors<S: AsRef<str>>(root: &NodeRef, selectors: &[S]) -> PruneReport {
    let mut report = PruneReport::default();

    for raw in selectors {
        let raw = raw.as_ref();
        match selector::compile(raw) {
            Ok(matcher) => report.removed += detach_all(&selector::query_all(root, &matcher)),
            Err(err) => {
                debug!(selector = raw, error = %err, "skipping invalid exclusion selector");
                report.skipped.push(raw.to_string());
            }
        }
    }

    report
}

/// Remove every element for which `rule` holds.
pub fn prune_rule(root: &NodeRef, rule: Rule) -> usize {
    detach_all(&selector::query_all_rule(root, rule))
}

/// Apply [`HARD_KILL_RULES`] then [`HARD_KILL_SELECTORS`].
pub fn prune_hard_kills(root: &NodeRef) -> usize {
    let mut removed: usize = HARD_KILL_RULES.iter().map(|rule| prune_rule(root, *rule)).sum();
    removed += prune_selectors(root, &HARD_KILL_SELECTORS).removed;
    removed
}

/// Remove everything that precedes the first `<h1>` under `root`, at every
/// level of the ancestor chain from `root` down to the heading.
///
/// Returns false (and leaves the tree untouched) when there is no `<h1>`.
pub fn remove_before_first_h1(root: &NodeRef) -> bool {
    let Some(h1) = dom::descendants_named(root, "h1").into_iter().next() else {
        return false;
    };

    let mut current = Some(h1);
    while let Some(node) = current {
        if node.id == root.id {
            break;
        }
        while let Some(prev) = node.prev_sibling() {
            dom::detach(&prev);
        }
        current = node.parent();
    }
    true
}
