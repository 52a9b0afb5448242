//! Signposted output lines.
//!
//! A [`Line`] renders to exactly one of:
//!
//! ```text
//! <h2> Heading text
//! <p> Paragraph text
//!                                  (blank marker, empty string)
//! <img alt="A \"quoted\" cat">
//! <img alt="Cat" src="/cat.jpg">
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

/// One unit of signposted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `<hN> text`, level 1..=6.
    Heading { level: u8, text: String },
    /// `<p> text`
    Paragraph(String),
    /// Blank separator, rendered as the empty string.
    Blank,
    /// `<img alt="..">` or `<img alt=".." src="..">`. Values are stored unescaped.
    Image { alt: String, src: Option<String> },
}

impl Line {
    /// Heading line.
    #[must_use]
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    /// Paragraph line.
    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(text.into())
    }

    /// Image line without a source.
    #[must_use]
    pub fn image(alt: impl Into<String>) -> Self {
        Self::Image {
            alt: alt.into(),
            src: None,
        }
    }

    /// Image line with a source.
    #[must_use]
    pub fn image_with_src(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Self::Image {
            alt: alt.into(),
            src: Some(src.into()),
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Text carried by a heading or paragraph.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Heading { text, .. } | Self::Paragraph(text) => Some(text),
            Self::Blank | Self::Image { .. } => None,
        }
    }
}

/// Backslash-escape double quotes for attribute-style rendering.
fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading { level, text } => write!(f, "<h{level}> {text}"),
            Self::Paragraph(text) => write!(f, "<p> {text}"),
            Self::Blank => Ok(()),
            Self::Image { alt, src: None } => write!(f, "<img alt=\"{}\">", escape_quotes(alt)),
            Self::Image {
                alt,
                src: Some(src),
            } => write!(
                f,
                "<img alt=\"{}\" src=\"{}\">",
                escape_quotes(alt),
                escape_quotes(src)
            ),
        }
    }
}

impl Serialize for Line {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Render every line, in order.
#[must_use]
pub fn to_strings(lines: &[Line]) -> Vec<String> {
    lines.iter().map(ToString::to_string).collect()
}

/// Collapse runs of identical adjacent lines to their first occurrence.
///
/// Blank runs collapse to one blank like any other run.
pub fn dedup_adjacent(lines: &mut Vec<Line>) {
    lines.dedup();
}
