//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query` nodes. The extractor walks `NodeRef`s directly
//! (text nodes included), so these functions take nodes rather than selections.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// First node of a selection, if any.
#[inline]
#[must_use]
pub fn first_node<'a>(sel: &Selection<'a>) -> Option<NodeRef<'a>> {
    sel.nodes().first().copied()
}

/// The `<body>` element, or the document root when the parser produced none.
#[must_use]
pub fn body_or_root(doc: &Document) -> NodeRef<'_> {
    first_node(&doc.select("body")).unwrap_or_else(|| doc.root())
}

// === Tag/Node Information ===

/// Lower-case tag name of an element node.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// True if `node` is an element with the given (lower-case) tag name.
#[inline]
#[must_use]
pub fn is_tag(node: &NodeRef, name: &str) -> bool {
    tag_name(node).is_some_and(|t| t == name)
}

// === Attributes ===

/// Attribute value, if present.
#[inline]
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|v| v.to_string())
}

/// Attribute value trimmed, empty string when absent.
#[must_use]
pub fn attr_trimmed(node: &NodeRef, name: &str) -> String {
    attr(node, name).map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Whitespace-separated tokens of the `class` attribute.
#[must_use]
pub fn classes(node: &NodeRef) -> Vec<String> {
    attr(node, "class")
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// True if the class set contains every name in `required`.
#[must_use]
pub fn has_all_classes(node: &NodeRef, required: &[&str]) -> bool {
    let set = classes(node);
    required.iter().all(|r| set.iter().any(|c| c == r))
}

// === Navigation ===

/// Direct element children with the given tag name.
#[must_use]
pub fn element_children_named<'a>(node: &NodeRef<'a>, name: &str) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(|c| is_tag(c, name))
        .collect()
}

/// Descendant elements with the given tag name, in document order.
#[must_use]
pub fn descendants_named<'a>(node: &NodeRef<'a>, name: &str) -> Vec<NodeRef<'a>> {
    node.descendants()
        .into_iter()
        .filter(|d| is_tag(d, name))
        .collect()
}

// === Text Content ===

/// Raw text of a node and its descendants (text nodes only).
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

// === Tree Manipulation ===

/// Detach a node (and its subtree) from the tree.
#[inline]
pub fn detach(node: &NodeRef) {
    Selection::from(*node).remove();
}
