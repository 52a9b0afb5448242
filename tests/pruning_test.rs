use pretty_assertions::assert_eq;
use rs_signpost::dom;
use rs_signpost::extractor::pruning::{prune_hard_kills, prune_selectors};
use rs_signpost::selector;
use rs_signpost::{extract, ExtractOptions};

#[test]
fn invalid_selector_does_not_stop_the_others() {
    let doc = dom::parse(
        r#"<div class="promo">P</div><aside id="side-gallery">G</aside>
           <div class="keep">K</div><nav>N</nav>"#,
    );
    let body = dom::body_or_root(&doc);
    let report = prune_selectors(&body, &[".promo", "div >", "[id*='gallery']", "##", "nav"]);

    assert_eq!(report.removed, 3);
    assert_eq!(report.skipped, vec!["div >", "##"]);
    assert!(doc.select(".keep").exists());
    assert!(doc.select(".promo").is_empty());
    assert!(doc.select("nav").is_empty());
}

#[test]
fn invalid_selector_in_options_is_reported() {
    let options = ExtractOptions {
        exclude_selectors: vec!["p..ad".into(), ".ad".into()],
        ..ExtractOptions::default()
    };
    let result = extract(r#"<p class="ad">Buy</p><p>Read</p>"#, "", &options);
    assert_eq!(result.line_strings(), vec!["<p> Read"]);
    assert_eq!(result.prune.skipped, vec!["p..ad"]);
}

#[test]
fn selector_forms_used_by_exclusion_lists() {
    let doc = dom::parse(
        r#"<section>
             <div id="a" class="one two three">x</div>
             <div id="b" class="one-two">x</div>
             <div id="c" class="two">x</div>
             <span id="d" data-role="banner main">x</span>
           </section>"#,
    );
    let root = dom::body_or_root(&doc);
    let ids = |source: &str| -> Vec<String> {
        let matcher = selector::compile(source).unwrap();
        selector::query_all(&root, &matcher)
            .iter()
            .filter_map(|n| dom::attr(n, "id"))
            .collect()
    };

    assert_eq!(ids("div"), vec!["a", "b", "c"]);
    assert_eq!(ids(".one.three"), vec!["a"]);
    assert_eq!(ids("[class~='two']"), vec!["a", "c"]);
    assert_eq!(ids("[class*='two']"), vec!["a", "b", "c"]);
    assert_eq!(ids("[id*='b']"), vec!["b"]);
    assert_eq!(ids("#c"), vec!["c"]);
    assert_eq!(ids("[data-role~=banner]"), vec!["d"]);
    assert_eq!(ids("section > span, .one-two"), vec!["b", "d"]);
    assert_eq!(ids("div:not(.one)"), vec!["c"]);
    assert_eq!(ids("#a ~ div"), vec!["b", "c"]);
    assert_eq!(ids("div:first-child"), vec!["a"]);
}

#[test]
fn exclusions_use_full_css() {
    let options = ExtractOptions {
        exclude_selectors: vec!["div:not(.keep)".into(), "h2 + p".into()],
        ..ExtractOptions::default()
    };
    let result = extract(
        r#"<div class="keep">Kept</div><div>Dropped</div><h2>Head</h2><p>Teaser</p><p>Body</p>"#,
        "",
        &options,
    );
    assert_eq!(
        result.line_strings(),
        vec!["<p> Kept", "", "<h2> Head", "<p> Body"]
    );
    assert!(result.prune.skipped.is_empty());
    assert_eq!(result.prune.removed, 2);
}

#[test]
fn search_panel_removed_even_without_exclusions() {
    let doc = dom::parse(
        r#"<div class="visible x sr-main js-searchpage-content">Results</div>
           <div class="sr-main visible">Partial</div>
           <div class="lmd-map-modal-create js-lmd-map-modal-map">Map</div>"#,
    );
    let body = dom::body_or_root(&doc);
    assert_eq!(prune_hard_kills(&body), 2);
    assert_eq!(dom::text_content(&body).trim(), "Partial");
}

#[test]
fn later_selectors_noop_on_removed_subtrees() {
    let doc = dom::parse(r#"<header><nav class="menu">M</nav></header><p>Text</p>"#);
    let body = dom::body_or_root(&doc);
    let report = prune_selectors(&body, &["header", ".menu", "nav"]);
    assert_eq!(report.removed, 1);
    assert!(report.skipped.is_empty());
}
