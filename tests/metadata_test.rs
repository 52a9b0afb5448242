use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rs_signpost::{extract_with_date, ExtractOptions, PageMeta, NOT_AVAILABLE};

fn meta(html: &str, url: &str) -> PageMeta {
    let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    extract_with_date(html, url, &ExtractOptions::default(), date).meta
}

#[test]
fn title_and_description_are_trimmed() {
    let m = meta(
        r#"<html><head><title>  Calais Guide  </title>
           <meta name="Description" content="  Things to do.  "></head><body></body></html>"#,
        "https://x.com/calais",
    );
    assert_eq!(m.title, "Calais Guide");
    assert_eq!(m.title_len, 12);
    assert_eq!(m.description, "Things to do.");
    assert_eq!(m.description_len, 13);
    assert_eq!(m.date, "16/10/2026");
    assert_eq!(m.url, "https://x.com/calais");
}

#[test]
fn missing_fields_use_sentinel_with_zero_length() {
    let m = meta("<html><head><title>   </title></head><body><p>x</p></body></html>", "");
    assert_eq!(m.title, NOT_AVAILABLE);
    assert_eq!(m.title_len, 0);
    assert_eq!(m.description, NOT_AVAILABLE);
    assert_eq!(m.description_len, 0);
    assert!(!m.has_title());
    assert!(!m.has_description());
}

#[test]
fn lengths_count_characters() {
    let m = meta("<title>Café à Lille</title>", "");
    assert_eq!(m.title_len, 12);
}

#[test]
fn json_ld_is_pretty_printed_and_parses_back() {
    let m = meta(
        r#"<head><script type="application/ld+json">{"a":1}</script></head>"#,
        "",
    );
    assert_eq!(m.schema_lines, vec!["{", r#"  "a": 1"#, "}"]);

    let reparsed: serde_json::Value = serde_json::from_str(&m.schema_lines.join("\n")).unwrap();
    assert_eq!(reparsed, serde_json::json!({"a": 1}));
}

#[test]
fn json_ld_blocks_are_separated_and_raw_text_kept() {
    let m = meta(
        r#"<head>
             <script type="application/ld+json">{"name":"Lille","geo":{"lat":50.6}}</script>
             <script type="APPLICATION/LD+JSON; charset=utf-8">{not json</script>
             <script type="text/javascript">{"ignored":true}</script>
             <script type="application/ld+json">["é"]</script>
           </head>"#,
        "",
    );
    assert_eq!(
        m.schema_lines,
        vec![
            "{",
            r#"  "name": "Lille","#,
            r#"  "geo": {"#,
            r#"    "lat": 50.6"#,
            "  }",
            "}",
            "",
            "{not json",
            "",
            "[",
            r#"  "é""#,
            "]",
        ]
    );
}

#[test]
fn page_name_from_first_h1_with_breaks_collapsed() {
    let m = meta(
        "<body><h1>  Winter <br> Breaks </h1><h1>Second</h1></body>",
        "https://x.com/a/b",
    );
    assert_eq!(m.page, "Winter Breaks");
}

#[test]
fn page_name_fallbacks() {
    assert_eq!(
        meta("<p>No heading</p>", "https://x.com/en/destinations/region/paris-guide").page,
        "Paris Guide"
    );
    assert_eq!(meta("", "https://x.com/blog/ski-deals/").page, "Ski Deals");
    assert_eq!(meta("<h1> </h1>", "https://x.com/").page, "X.Com");
    assert_eq!(meta("", "").page, "Page");
}

#[test]
fn page_meta_serializes_with_all_fields() {
    let m = meta("<title>T</title>", "https://x.com/t");
    let value = serde_json::to_value(&m).unwrap();
    for key in [
        "page",
        "date",
        "url",
        "title",
        "title_len",
        "description",
        "description_len",
        "schema_lines",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    let back: PageMeta = serde_json::from_value(value).unwrap();
    assert_eq!(back, m);
}
