//! HTML5 parsing
//!
//! Uses html5ever's RcDom and converts the result into our arena DOM.
//! `<style>` contents are collected into the document stylesheet.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::{Document, DomError, NodeId};

/// HTML5 parser
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, DomError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a document URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, DomError> {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::empty(url);
        let mut css = String::new();
        let root = document.tree().root();
        convert_node(&dom.document, &mut document, root, &mut css);
        document.finalize();

        if !css.trim().is_empty() {
            document.stylesheet_mut().append(&css)?;
        }

        tracing::debug!(
            "Parsed {} nodes, {} style rules",
            document.tree().len(),
            document.stylesheet().len()
        );
        Ok(document)
    }
}

fn convert_node(handle: &Handle, doc: &mut Document, parent: NodeId, css: &mut String) {
    match &handle.data {
        RcNodeData::Document => {
            for child in handle.children.borrow().iter() {
                convert_node(child, doc, parent, css);
            }
        }
        RcNodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            if !text.trim().is_empty() {
                let id = doc.tree_mut().create_text(&text);
                doc.append_child(parent, id);
            }
        }
        RcNodeData::Comment { contents } => {
            let id = doc.tree_mut().create_comment(contents);
            doc.append_child(parent, id);
        }
        RcNodeData::Element { name, attrs, .. } => {
            let tag: &str = &name.local;
            let id = doc.create_element(tag);
            if let Some(elem) = doc.tree_mut().element_mut(id) {
                for attr in attrs.borrow().iter() {
                    elem.set_attr(&attr.name.local, &attr.value);
                }
            }
            doc.append_child(parent, id);

            if tag == "style" {
                for child in handle.children.borrow().iter() {
                    if let RcNodeData::Text { contents } = &child.data {
                        css.push_str(&contents.borrow());
                        css.push('\n');
                    }
                }
            }

            for child in handle.children.borrow().iter() {
                convert_node(child, doc, id, css);
            }
        }
        // Doctype and processing instructions carry nothing we use
        _ => {}
    }
}
