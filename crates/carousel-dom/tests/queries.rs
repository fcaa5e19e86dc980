//! Query and style resolution over parsed carousel markup

use carousel_dom::{DomAdapter, HtmlParser};

const PAGE: &str = r##"
<style>
  .carousel-windows { width: 300px }
  .muted { visibility: hidden }
</style>
<div class="carousel" id="c">
  <button class="carousel-prev">prev</button>
  <ul class="carousel-tablist">
    <li><a class="pos" href="#p0">1</a></li>
    <li><a class="pos" href="#p1">2</a></li>
  </ul>
  <div class="carousel-windows">
    <div class="carousel-content" id="p0"><a href="/x">x</a><span tabindex="0">y</span></div>
    <div class="carousel-content muted" id="p1"><input type="hidden"></div>
  </div>
</div>
"##;

#[test]
fn test_query_in_document_order() {
    let doc = HtmlParser::new().parse(PAGE).unwrap();
    let carousel = doc.get_element_by_id("c").unwrap();

    let panels = doc.query_selector_all(carousel, ".carousel-content").unwrap();
    let expected = vec![
        doc.get_element_by_id("p0").unwrap(),
        doc.get_element_by_id("p1").unwrap(),
    ];
    assert_eq!(panels, expected);

    let positions = doc.query_selector_all(carousel, ".carousel-tablist li .pos").unwrap();
    assert_eq!(positions.len(), 2);
    assert_eq!(doc.query_selector(carousel, ".carousel-next").unwrap(), None);
}

#[test]
fn test_query_excludes_root() {
    let doc = HtmlParser::new().parse(PAGE).unwrap();
    let panel = doc.get_element_by_id("p0").unwrap();

    assert!(doc.query_selector_all(panel, ".carousel-content").unwrap().is_empty());
    assert_eq!(doc.query_selector_all(panel, "a, [tabindex='0']").unwrap().len(), 2);
}

#[test]
fn test_invalid_selector_reports_error() {
    let doc = HtmlParser::new().parse(PAGE).unwrap();
    let err = doc.query_all("li >").unwrap_err();
    assert!(err.to_string().contains("li >"));
}

#[test]
fn test_panel_width_resolves_through_container() {
    let doc = HtmlParser::new().parse(PAGE).unwrap();
    let panel = doc.get_element_by_id("p0").unwrap();
    let second = doc.get_element_by_id("p1").unwrap();
    let hidden_input = doc.query_selector(second, "input").unwrap().unwrap();

    assert_eq!(doc.computed_style(panel, "width").as_deref(), Some("300px"));
    assert_eq!(doc.computed_style(hidden_input, "visibility").as_deref(), Some("hidden"));
    assert_eq!(doc.computed_style(panel, "visibility").as_deref(), Some("visible"));
}
