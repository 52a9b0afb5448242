//! Selector Infrastructure
//!
//! Exclusion lists are plain CSS, compiled with dom_query's engine (the same
//! one behind `Document::select`), so anything a browser stylesheet accepts
//! works here: `:not()`, structural pseudo-classes, sibling combinators,
//! case-insensitive attribute tests. Predicate [`Rule`]s cover structural
//! checks that do not fit a selector.

use dom_query::{Matcher, NodeRef, Selection};

use crate::dom;
use crate::error::SelectorError;

/// A predicate over a single element.
///
/// Rules cover checks that CSS cannot express, such as "class set is a
/// superset of X".
pub type Rule = fn(&NodeRef) -> bool;

/// Compile a CSS selector list.
///
/// # Errors
///
/// Returns [`SelectorError`] when the engine rejects `source`.
///
/// # Example
///
/// ```rust
/// use rs_signpost::selector;
///
/// assert!(selector::compile("div:not(.keep) > p").is_ok());
/// assert!(selector::compile("div >").is_err());
/// ```
pub fn compile(source: &str) -> Result<Matcher, SelectorError> {
    Matcher::new(source).map_err(|err| SelectorError {
        selector: source.to_string(),
        reason: format!("{:?}", err.kind),
    })
}

/// Every element under `root` (excluding `root`) for which `rule` holds, in
/// document order.
#[must_use]
pub fn query_all_rule<'a>(root: &NodeRef<'a>, rule: Rule) -> Vec<NodeRef<'a>> {
    Selection::from(*root)
        .select("*")
        .nodes()
        .iter()
        .filter(|node| rule(node))
        .copied()
        .collect()
}

/// Every element under `root` (excluding `root`) matched by `matcher`, in
/// document order.
///
/// Ancestors above `root` still take part in combinators, so `.outer p`
/// matches a `p` under `root` when `.outer` encloses `root`.
#[must_use]
pub fn query_all<'a>(root: &NodeRef<'a>, matcher: &Matcher) -> Vec<NodeRef<'a>> {
    Selection::from(*root).select_matcher(matcher).nodes().to_vec()
}

/// Class tokens of the search-results panel that must never reach the output.
pub const SEARCH_PANEL_CLASSES: [&str; 3] = ["sr-main", "js-searchpage-content", "visible"];

/// Rule: the element's class set includes every [`SEARCH_PANEL_CLASSES`] token.
#[must_use]
pub fn is_search_results_panel(node: &NodeRef) -> bool {
    dom::has_all_classes(node, &SEARCH_PANEL_CLASSES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn count(html: &str, selector: &str) -> usize {
        let doc = dom::parse(html);
        let body = dom::body_or_root(&doc);
        let matcher = compile(selector).unwrap();
        query_all(&body, &matcher).len()
    }

    #[test]
    fn test_class_token_vs_substring() {
        let html = r#"<div class="cookie-banner">a</div><div class="cookie">b</div>"#;
        assert_eq!(count(html, ".cookie"), 1);
        assert_eq!(count(html, "[class~='cookie']"), 1);
        assert_eq!(count(html, "[class*='cookie']"), 2);
    }

    #[test]
    fn test_compound_classes_require_all() {
        let html = r#"
            <div class="sr-main js-searchpage-content visible">a</div>
            <div class="sr-main visible">b</div>
        "#;
        assert_eq!(count(html, ".sr-main.js-searchpage-content.visible"), 1);
        assert_eq!(
            count(html, "[class~='sr-main'][class~='js-searchpage-content'][class~='visible']"),
            1
        );
    }

    #[test]
    fn test_negation_and_sibling_forms() {
        let html = r#"<div class="keep">a</div><div>b</div><h2>c</h2><p>d</p><p>e</p>"#;
        assert_eq!(count(html, "div:not(.keep)"), 1);
        assert_eq!(count(html, "h2 + p"), 1);
        assert_eq!(count(html, "h2 ~ p"), 2);
        assert_eq!(count(html, "p:first-of-type"), 1);
    }

    #[test]
    fn test_descendant_reaches_above_query_root() {
        let doc = dom::parse("<section class='outer'><div><p>x</p></div></section>");
        let div = dom::first_node(&doc.select("div")).unwrap();
        let matcher = compile(".outer p").unwrap();
        assert_eq!(query_all(&div, &matcher).len(), 1);
    }

    #[test]
    fn test_compile_error_names_selector() {
        let err = compile("p..ad").unwrap_err();
        assert_eq!(err.selector, "p..ad");
        assert!(err.to_string().starts_with("invalid selector \"p..ad\""));
    }

    #[test]
    fn test_query_all_document_order() {
        let doc = dom::parse(r#"<p id="a">1</p><div><p id="b">2</p></div><p id="c">3</p>"#);
        let body = dom::body_or_root(&doc);
        let ids: Vec<String> = query_all(&body, &compile("p").unwrap())
            .iter()
            .filter_map(|n| dom::attr(n, "id"))
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_search_panel_rule() {
        let doc = dom::parse(
            r#"<div class="visible extra sr-main js-searchpage-content">a</div>
               <div class="sr-main visible">b</div>"#,
        );
        let body = dom::body_or_root(&doc);
        let hits = query_all_rule(&body, is_search_results_panel);
        assert_eq!(hits.len(), 1);
        assert_eq!(&*dom::text_content(&hits[0]), "a");
    }
}
