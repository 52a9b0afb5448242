//! Title and meta-description extraction.

use dom_query::Document;

use crate::dom;

/// Trimmed text of the first `<title>` in `<head>`, if non-empty.
#[must_use]
pub fn extract_title(doc: &Document) -> Option<String> {
    let title = dom::first_node(&doc.select("head title"))?;
    let text = title.text();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Trimmed `content` of the first `<meta name="description">` in `<head>`.
///
/// The name comparison ignores ASCII case. Only the first description tag is
/// consulted; an empty `content` yields `None`.
#[must_use]
pub fn extract_description(doc: &Document) -> Option<String> {
    let meta = doc
        .select("head meta[name]")
        .nodes()
        .iter()
        .find(|m| {
            dom::attr(m, "name").is_some_and(|n| n.trim().eq_ignore_ascii_case("description"))
        })
        .copied()?;
    let content = dom::attr_trimmed(&meta, "content");
    (!content.is_empty()).then_some(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_trimmed() {
        let doc = dom::parse("<html><head><title>  Paris Guide | Site \n</title></head></html>");
        assert_eq!(extract_title(&doc), Some("Paris Guide | Site".to_string()));
    }

    #[test]
    fn test_title_missing_or_blank() {
        assert_eq!(extract_title(&dom::parse("<p>x</p>")), None);
        assert_eq!(extract_title(&dom::parse("<title>  </title>")), None);
    }

    #[test]
    fn test_title_in_body_svg_ignored() {
        let doc = dom::parse(r#"<body><svg><title>icon</title></svg></body>"#);
        assert_eq!(extract_title(&doc), None);
    }

    #[test]
    fn test_description() {
        let doc = dom::parse(
            r#"<head><meta name="viewport" content="w"><meta name="Description" content=" Best trips "></head>"#,
        );
        assert_eq!(extract_description(&doc), Some("Best trips".to_string()));
    }

    #[test]
    fn test_description_missing_or_empty() {
        assert_eq!(extract_description(&dom::parse("<head></head>")), None);
        let doc = dom::parse(r#"<head><meta name="description" content=""></head>"#);
        assert_eq!(extract_description(&doc), None);
    }
}
