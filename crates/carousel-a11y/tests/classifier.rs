//! Focusability rules over parsed markup

use carousel_a11y::{FocusMode, FocusabilityClassifier};
use carousel_dom::{Document, DomAdapter, HtmlParser, NodeId};

fn parse(body: &str) -> (Document, NodeId) {
    let html = format!("<style>.gone {{ display: none }}</style><div id='root'>{body}</div>");
    let doc = HtmlParser::new().parse(&html).unwrap();
    let root = doc.get_element_by_id("root").unwrap();
    (doc, root)
}

fn ids(doc: &Document, nodes: &[NodeId]) -> Vec<String> {
    nodes
        .iter()
        .map(|&n| doc.attribute(n, "id").unwrap_or_default())
        .collect()
}

#[test]
fn test_allowlisted_tags_in_document_order() {
    let (doc, root) = parse(
        "<a id='a' href='#'>a</a><p><button id='b'>b</button></p><input id='c'>\
         <textarea id='d'></textarea><select id='e'></select>\
         <details><summary id='f'>s</summary></details><div id='g'>plain</div>",
    );

    let found = FocusabilityClassifier::new().focusable_descendants(&doc, root).unwrap();
    assert_eq!(ids(&doc, &found), ["a", "b", "c", "d", "e", "f"]);
}

#[test]
fn test_exclusion_rules() {
    let (doc, root) = parse(
        "<button id='ok'>ok</button>\
         <button id='display' style='display: none'>x</button>\
         <button id='sheet' class='gone'>x</button>\
         <button id='visibility' style='visibility: hidden'>x</button>\
         <div style='visibility: hidden'><a id='inherited' href='#'>x</a></div>\
         <button id='disabled' disabled>x</button>\
         <a id='hidden' hidden href='#'>x</a>\
         <input id='hidden-input' type='hidden'>\
         <input id='text-input' type='text'>\
         <a id='positive' tabindex='3' href='#'>x</a>\
         <span id='positive-span' tabindex='2'>x</span>",
    );

    let found = FocusabilityClassifier::new().focusable_descendants(&doc, root).unwrap();
    assert_eq!(ids(&doc, &found), ["ok", "text-input"]);
}

#[test]
fn test_tabindex_markers_follow_mode() {
    let (doc, root) = parse(
        "<span id='zero' tabindex='0'>z</span>\
         <span id='minus' tabindex='-1'>m</span>\
         <span id='none'>n</span>",
    );

    let mut classifier = FocusabilityClassifier::new();
    let focusable = classifier.focusable_descendants(&doc, root).unwrap();
    assert_eq!(ids(&doc, &focusable), ["zero"]);

    classifier.set_mode(FocusMode::Revealable);
    let revealable = classifier.focusable_descendants(&doc, root).unwrap();
    assert_eq!(ids(&doc, &revealable), ["minus"]);
}

#[test]
fn test_results_are_not_cached() {
    let (mut doc, root) = parse("<button id='b'>b</button>");
    let classifier = FocusabilityClassifier::new();
    assert_eq!(classifier.focusable_descendants(&doc, root).unwrap().len(), 1);

    let button = doc.get_element_by_id("b").unwrap();
    doc.set_attribute(button, "disabled", "");
    assert!(classifier.focusable_descendants(&doc, root).unwrap().is_empty());
    assert!(!classifier.is_focusable(&doc, button));
}
