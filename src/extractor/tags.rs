//! Tag constants and the element classification used by the walker.
//!
//! Tag lists are kept both as arrays (for iteration) and `HashSet`s (for O(1)
//! lookup). [`TagCatalog::classify`] turns a tag name into a [`TagClass`] once
//! per element so the walker dispatches on a closed enum.

use std::collections::HashSet;
use std::sync::LazyLock;

// === Tag Lists (arrays for iteration) ===

/// Tags whose subtree never contributes output: script, style, noscript, template
pub static ALWAYS_STRIP_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Inline tags folded into the enclosing block's text
pub static INLINE_TAGS: [&str; 17] = [
    "a", "span", "strong", "em", "b", "i", "u", "s", "small", "sup", "sub", "mark", "abbr",
    "time", "code", "var", "kbd",
];

/// Heading tags: h1-h6
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// List tags: ul, ol
pub static LIST_TAGS: [&str; 2] = ["ul", "ol"];

// === Tag Sets (HashSets for O(1) lookup) ===

/// `ALWAYS_STRIP_TAGS` as a `HashSet`
pub static ALWAYS_STRIP_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ALWAYS_STRIP_TAGS.into_iter().collect());

/// `INLINE_TAGS` as a `HashSet`
pub static INLINE_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| INLINE_TAGS.into_iter().collect());

/// Check if tag is a list container (ul/ol).
#[inline]
#[must_use]
pub fn is_list_tag(tag: &str) -> bool {
    LIST_TAGS.contains(&tag)
}

/// Heading level for `h1`..`h6`.
#[must_use]
pub fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// How the walker treats an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    /// Skipped with its whole subtree.
    Stripped,
    /// `h1`..`h6`.
    Heading(u8),
    /// `p`.
    Paragraph,
    /// `ul`, `ol`.
    List,
    /// Inline formatting; contributes text to the enclosing block.
    Inline,
    /// `a`; inline, with optional href annotation.
    Anchor,
    /// `br`.
    LineBreak,
    /// `img`.
    Image,
    /// Any other element (div, section, article, td, ...).
    Generic,
}

impl TagClass {
    /// True for classes whose text is folded into a surrounding buffer.
    #[must_use]
    pub fn is_inline(self) -> bool {
        matches!(self, Self::Inline | Self::Anchor)
    }
}

/// Immutable tag policy injected into the extractor.
#[derive(Debug, Clone)]
pub struct TagCatalog {
    always_strip: HashSet<&'static str>,
    inline: HashSet<&'static str>,
}

impl TagCatalog {
    /// Build a catalog from explicit strip and inline sets.
    #[must_use]
    pub fn new(always_strip: HashSet<&'static str>, inline: HashSet<&'static str>) -> Self {
        Self {
            always_strip,
            inline,
        }
    }

    /// Classify a lower-case tag name.
    #[must_use]
    pub fn classify(&self, tag: &str) -> TagClass {
        if self.always_strip.contains(tag) {
            return TagClass::Stripped;
        }
        if let Some(level) = heading_level(tag) {
            return TagClass::Heading(level);
        }
        match tag {
            "p" => TagClass::Paragraph,
            "br" => TagClass::LineBreak,
            "img" => TagClass::Image,
            "a" if self.inline.contains(tag) => TagClass::Anchor,
            t if is_list_tag(t) => TagClass::List,
            t if self.inline.contains(t) => TagClass::Inline,
            _ => TagClass::Generic,
        }
    }

    /// Tag names stripped from the whole document before walking.
    pub fn always_strip(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.always_strip.iter().copied()
    }
}

impl Default for TagCatalog {
    fn default() -> Self {
        DEFAULT_CATALOG.clone()
    }
}

/// The stock catalog built from [`ALWAYS_STRIP_TAGS`] and [`INLINE_TAGS`].
pub static DEFAULT_CATALOG: LazyLock<TagCatalog> = LazyLock::new(|| {
    TagCatalog::new(ALWAYS_STRIP_TAG_SET.clone(), INLINE_TAG_SET.clone())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_sets_match_arrays() {
        assert_eq!(ALWAYS_STRIP_TAG_SET.len(), ALWAYS_STRIP_TAGS.len());
        assert_eq!(INLINE_TAG_SET.len(), INLINE_TAGS.len());
    }

    #[test]
    fn test_classify() {
        let catalog = TagCatalog::default();
        assert_eq!(catalog.classify("script"), TagClass::Stripped);
        assert_eq!(catalog.classify("template"), TagClass::Stripped);
        assert_eq!(catalog.classify("h1"), TagClass::Heading(1));
        assert_eq!(catalog.classify("h6"), TagClass::Heading(6));
        assert_eq!(catalog.classify("p"), TagClass::Paragraph);
        assert_eq!(catalog.classify("ul"), TagClass::List);
        assert_eq!(catalog.classify("ol"), TagClass::List);
        assert_eq!(catalog.classify("strong"), TagClass::Inline);
        assert_eq!(catalog.classify("kbd"), TagClass::Inline);
        assert_eq!(catalog.classify("a"), TagClass::Anchor);
        assert_eq!(catalog.classify("br"), TagClass::LineBreak);
        assert_eq!(catalog.classify("img"), TagClass::Image);
        assert_eq!(catalog.classify("div"), TagClass::Generic);
        assert_eq!(catalog.classify("h7"), TagClass::Generic);
    }

    #[test]
    fn test_custom_catalog_without_anchor_inline() {
        let catalog = TagCatalog::new(HashSet::from(["script"]), HashSet::from(["em"]));
        assert_eq!(catalog.classify("style"), TagClass::Generic);
        assert_eq!(catalog.classify("a"), TagClass::Generic);
        assert!(catalog.classify("em").is_inline());
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("h3"), Some(3));
        assert_eq!(heading_level("header"), None);
    }
}
