//! Signpost extraction: a depth-first walk that turns a (pruned) body into
//! an ordered sequence of [`Line`]s.
//!
//! Headings keep `<br>` breaks and emit one line per segment. Paragraphs use
//! flattened text. Lists are flattened one nesting level deep into
//! paragraphs. Everything else accumulates a text buffer that is flushed
//! before every image and every nested block, so text and images interleave
//! in reading order.

use dom_query::NodeRef;
use tracing::trace;

use crate::dom;
use crate::options::ExtractOptions;
use crate::text::{normalize, NoiseFilter, DEFAULT_NOISE};

use super::lines::{dedup_adjacent, Line};
use super::tags::{is_list_tag, TagCatalog, TagClass, DEFAULT_CATALOG};

/// Walks a DOM subtree and produces signposted lines.
///
/// The extractor borrows its tag policy and noise filter; it holds no state
/// between calls and can be shared freely.
#[derive(Debug, Clone, Copy)]
pub struct SignpostExtractor<'c> {
    catalog: &'c TagCatalog,
    noise: &'c NoiseFilter,
    annotate_links: bool,
    include_img_src: bool,
}

impl SignpostExtractor<'static> {
    /// Extractor with the stock catalog and noise filter, flags taken from `options`.
    #[must_use]
    pub fn from_options(options: &ExtractOptions) -> Self {
        Self::new(&DEFAULT_CATALOG, &DEFAULT_NOISE)
            .annotate_links(options.annotate_links)
            .include_img_src(options.include_img_src)
    }
}

impl<'c> SignpostExtractor<'c> {
    /// Extractor with both flags off.
    #[must_use]
    pub fn new(catalog: &'c TagCatalog, noise: &'c NoiseFilter) -> Self {
        Self {
            catalog,
            noise,
            annotate_links: false,
            include_img_src: false,
        }
    }

    /// Render anchors as `text (→ href)` when they carry an href.
    #[must_use]
    pub fn annotate_links(mut self, on: bool) -> Self {
        self.annotate_links = on;
        self
    }

    /// Add `src="..."` to image lines with a non-empty source.
    #[must_use]
    pub fn include_img_src(mut self, on: bool) -> Self {
        self.include_img_src = on;
        self
    }

    /// Walk the children of `root` and return the deduplicated line sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rs_signpost::{dom, ExtractOptions, Line, SignpostExtractor};
    ///
    /// let doc = dom::parse(r#"<h1>A</h1><p>B</p><img alt="C">"#);
    /// let body = dom::body_or_root(&doc);
    /// let lines = SignpostExtractor::from_options(&ExtractOptions::default()).extract(&body);
    /// assert_eq!(lines, vec![Line::heading(1, "A"), Line::paragraph("B"), Line::image("C")]);
    /// ```
    #[must_use]
    pub fn extract(&self, root: &NodeRef) -> Vec<Line> {
        let mut sink = LineSink::new(self.noise);

        for child in root.children() {
            if child.is_text() {
                let raw = normalize(&child.text());
                if !raw.trim().is_empty() && !self.noise.is_noise(&raw) {
                    sink.emit_paragraph(&raw);
                }
            } else if child.is_element() {
                self.handle(&child, &mut sink);
            }
        }

        let mut lines = sink.lines;
        dedup_adjacent(&mut lines);
        trace!(lines = lines.len(), "signposted lines extracted");
        lines
    }

    fn classify(&self, node: &NodeRef) -> Option<TagClass> {
        dom::tag_name(node).map(|tag| self.catalog.classify(&tag))
    }

    fn handle(&self, node: &NodeRef, sink: &mut LineSink) {
        let Some(class) = self.classify(node) else {
            return;
        };

        match class {
            TagClass::Stripped | TagClass::LineBreak => {}
            TagClass::Heading(level) => {
                let text = self.preserved_text(node);
                if !text.trim().is_empty() {
                    sink.emit_heading(level, &text);
                }
            }
            TagClass::Paragraph => {
                let text = self.flat_text(node);
                if !text.trim().is_empty() {
                    sink.emit_paragraph(&text);
                }
                for img in dom::descendants_named(node, "img") {
                    self.emit_image(&img, sink);
                }
            }
            TagClass::List => self.handle_list(node, sink),
            TagClass::Image => self.emit_image(node, sink),
            TagClass::Inline | TagClass::Anchor | TagClass::Generic => {
                self.handle_block(node, sink);
            }
        }
    }

    /// Generic container: buffer text, flush before images and nested blocks.
    fn handle_block(&self, node: &NodeRef, sink: &mut LineSink) {
        let mut buf = String::new();

        for child in node.children() {
            if child.is_text() {
                buf.push_str(&child.text());
                continue;
            }
            let Some(class) = self.classify(&child) else {
                continue;
            };
            match class {
                TagClass::LineBreak => buf.push('\n'),
                TagClass::Image => {
                    self.flush(&mut buf, sink);
                    self.emit_image(&child, sink);
                }
                TagClass::Inline | TagClass::Anchor => {
                    self.push_preserved_node(&child, &mut buf);
                    let images = dom::descendants_named(&child, "img");
                    if !images.is_empty() {
                        self.flush(&mut buf, sink);
                        for img in images {
                            self.emit_image(&img, sink);
                        }
                    }
                }
                _ => {
                    self.flush(&mut buf, sink);
                    self.handle(&child, sink);
                }
            }
        }

        self.flush(&mut buf, sink);
    }

    fn flush(&self, buf: &mut String, sink: &mut LineSink) {
        if buf.is_empty() {
            return;
        }
        let joined = normalize(buf);
        if !joined.trim().is_empty() && !self.noise.is_noise(&joined) {
            sink.emit_paragraph(&joined);
        }
        buf.clear();
    }

    /// Flatten a `ul`/`ol`: each `li` becomes paragraphs in reading order,
    /// with one level of nested lists flattened where they occur.
    fn handle_list(&self, list: &NodeRef, sink: &mut LineSink) {
        for li in dom::element_children_named(list, "li") {
            let mut text = String::new();
            let mut images = Vec::new();

            for child in li.children() {
                if dom::tag_name(&child).is_some_and(|t| is_list_tag(&t)) {
                    self.flush_item(&mut text, &mut images, sink);
                    self.handle_nested_list(&child, sink);
                    continue;
                }
                self.push_preserved_node(&child, &mut text);
                if child.is_element() {
                    if self.classify(&child) == Some(TagClass::Image) {
                        images.push(child);
                    } else {
                        images.extend(dom::descendants_named(&child, "img"));
                    }
                }
            }
            self.flush_item(&mut text, &mut images, sink);
        }
    }

    /// Items of a nested list keep any deeper lists inline.
    fn handle_nested_list(&self, list: &NodeRef, sink: &mut LineSink) {
        for li in dom::element_children_named(list, "li") {
            let text = self.preserved_text(&li);
            if !text.trim().is_empty() {
                sink.emit_paragraph(&text);
            }
            for img in dom::descendants_named(&li, "img") {
                self.emit_image(&img, sink);
            }
        }
    }

    fn flush_item(&self, text: &mut String, images: &mut Vec<NodeRef<'_>>, sink: &mut LineSink) {
        if !text.trim().is_empty() {
            sink.emit_paragraph(text);
        }
        text.clear();
        for img in images.drain(..) {
            self.emit_image(&img, sink);
        }
    }

    fn emit_image(&self, img: &NodeRef, sink: &mut LineSink) {
        let alt = dom::attr_trimmed(img, "alt");
        let src = dom::attr_trimmed(img, "src");
        let line = if self.include_img_src && !src.is_empty() {
            Line::image_with_src(alt, src)
        } else {
            Line::image(alt)
        };
        sink.lines.push(line);
    }

    // === Text extraction ===

    /// Text of a subtree with `<br>` as `\n` and each anchor as one unit.
    #[must_use]
    pub fn preserved_text(&self, node: &NodeRef) -> String {
        let mut out = String::new();
        self.push_preserved(node, &mut out);
        out
    }

    fn push_preserved(&self, node: &NodeRef, out: &mut String) {
        for child in node.children() {
            self.push_preserved_node(&child, out);
        }
    }

    fn push_preserved_node(&self, node: &NodeRef, out: &mut String) {
        if node.is_text() {
            out.push_str(&node.text());
            return;
        }
        match self.classify(node) {
            Some(TagClass::LineBreak) => out.push('\n'),
            Some(TagClass::Anchor) => out.push_str(&self.anchor_text(node)),
            Some(TagClass::Stripped) | None => {}
            Some(_) => self.push_preserved(node, out),
        }
    }

    /// Flattened text: trimmed text pieces joined by single spaces.
    fn flat_text(&self, node: &NodeRef) -> String {
        let mut pieces = Vec::new();
        self.collect_flat(node, &mut pieces);
        pieces.join(" ")
    }

    fn collect_flat(&self, node: &NodeRef, pieces: &mut Vec<String>) {
        for child in node.children() {
            if child.is_text() {
                let text = child.text();
                let text = text.trim();
                if !text.is_empty() {
                    pieces.push(text.to_string());
                }
                continue;
            }
            match self.classify(&child) {
                Some(TagClass::Anchor) => {
                    let text = self.anchor_text(&child);
                    if !text.is_empty() {
                        pieces.push(text);
                    }
                }
                Some(TagClass::Stripped) | None => {}
                Some(_) => self.collect_flat(&child, pieces),
            }
        }
    }

    fn anchor_text(&self, anchor: &NodeRef) -> String {
        let text = self.flat_text(anchor);
        match dom::attr(anchor, "href") {
            Some(href) if self.annotate_links && !href.is_empty() => format!("{text} (→ {href})"),
            _ => text,
        }
    }
}

/// Accumulates emitted lines and applies the per-segment rules.
struct LineSink<'n> {
    lines: Vec<Line>,
    noise: &'n NoiseFilter,
}

impl<'n> LineSink<'n> {
    fn new(noise: &'n NoiseFilter) -> Self {
        Self {
            lines: Vec::new(),
            noise,
        }
    }

    /// h2-h6 get a separating blank when something non-blank precedes them.
    fn emit_heading(&mut self, level: u8, text: &str) {
        if level >= 2 && self.lines.last().is_some_and(|l| !l.is_blank()) {
            self.lines.push(Line::Blank);
        }
        for segment in normalize(text).split('\n') {
            let segment = segment.trim();
            if segment.is_empty() {
                self.lines.push(Line::Blank);
            } else {
                self.lines.push(Line::heading(level, segment));
            }
        }
    }

    fn emit_paragraph(&mut self, text: &str) {
        for segment in normalize(text).split('\n') {
            let segment = segment.trim();
            if segment.is_empty() {
                self.lines.push(Line::Blank);
            } else if !self.noise.is_noise(segment) {
                self.lines.push(Line::paragraph(segment));
            }
        }
    }
}

/// Convenience wrapper: stock catalog and noise filter, flags from `options`.
#[must_use]
pub fn extract_lines(root: &NodeRef, options: &ExtractOptions) -> Vec<Line> {
    SignpostExtractor::from_options(options).extract(root)
}
