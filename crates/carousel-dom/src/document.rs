//! Document - High-level document API

use crate::{DomAdapter, DomError, DomTree, NodeId, SelectorList, StyleSheet};

/// HTML Document: tree, author styles and focus state
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Author stylesheet (`<style>` contents)
    styles: StyleSheet,
    url: String,
    focused: Option<NodeId>,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
}

impl Document {
    /// Create a document with an empty `<html><head><body>` skeleton
    pub fn new(url: &str) -> Self {
        let mut doc = Self::empty(url);
        let tree = &mut doc.tree;

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");
        tree.append_child(tree.root(), html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        doc.finalize();
        doc
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            styles: StyleSheet::new(),
            url: url.to_string(),
            focused: None,
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Locate `<html>`, `<head>` and `<body>` after the tree was built
    pub fn finalize(&mut self) {
        let tree = &self.tree;
        let find = |parent: NodeId, tag: &str| {
            tree.children(parent)
                .find(|&c| tree.element(c).is_some_and(|e| e.tag == tag))
                .unwrap_or(NodeId::NONE)
        };
        self.html_element = find(tree.root(), "html");
        if self.html_element.is_valid() {
            self.head_element = find(self.html_element, "head");
            self.body_element = find(self.html_element, "body");
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get `<html>` element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get `<body>` element, falling back to the document node
    pub fn body(&self) -> NodeId {
        if self.body_element.is_valid() {
            self.body_element
        } else {
            self.tree.root()
        }
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    pub fn stylesheet(&self) -> &StyleSheet {
        &self.styles
    }

    pub fn stylesheet_mut(&mut self) -> &mut StyleSheet {
        &mut self.styles
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.create_element(tag)
    }

    /// Create an element with attributes and append it to `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = self.tree.create_element(tag);
        if let Some(elem) = self.tree.element_mut(id) {
            for (name, value) in attrs {
                elem.set_attr(name, value);
            }
        }
        self.tree.append_child(parent, id);
        id
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.tree.append_child(parent, child);
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .find(|&n| self.tree.element(n).and_then(|e| e.id()) == Some(id))
    }

    /// First match in the whole document
    pub fn query(&self, selector: &str) -> Result<Option<NodeId>, DomError> {
        self.query_selector(self.tree.root(), selector)
    }

    /// All matches in the whole document
    pub fn query_all(&self, selector: &str) -> Result<Vec<NodeId>, DomError> {
        self.query_selector_all(self.tree.root(), selector)
    }

    /// Drop keyboard focus
    pub fn blur(&mut self) {
        self.focused = None;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

impl DomAdapter for Document {
    type Node = NodeId;

    fn query_selector_all(&self, root: NodeId, selector: &str) -> Result<Vec<NodeId>, DomError> {
        Ok(SelectorList::parse(selector)?.select_all(&self.tree, root))
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.tree.contains(ancestor, node)
    }

    fn tag_name(&self, node: NodeId) -> Option<String> {
        self.tree.element(node).map(|e| e.tag.clone())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.tree.element(node)?.get_attr(name).map(str::to_string)
    }

    fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.tree.element(node).is_some_and(|e| e.has_attr(name))
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(elem) = self.tree.element_mut(node) {
            elem.set_attr(name, value);
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(elem) = self.tree.element_mut(node) {
            elem.remove_attr(name);
        }
    }

    fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.tree.element(node)?.style().get(property).map(str::to_string)
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(elem) = self.tree.element_mut(node) {
            elem.set_style_property(property, value);
        }
    }

    fn computed_style(&self, node: NodeId, property: &str) -> Option<String> {
        self.styles.computed_value(&self.tree, node, property)
    }

    fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    fn focus(&mut self, node: NodeId) {
        if self.tree.element(node).is_some() {
            self.focused = Some(node);
        } else {
            tracing::debug!("Ignoring focus on non-element {:?}", node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_structure() {
        let doc = Document::new("about:blank");
        assert!(doc.document_element().is_valid());
        assert!(doc.head().is_valid());
        assert_eq!(doc.tree().parent(doc.body()), Some(doc.document_element()));
    }

    #[test]
    fn test_adapter_attributes_and_style() {
        let mut doc = Document::default();
        let body = doc.body();
        let panel = doc.append_element(body, "div", &[("id", "p0"), ("style", "width: 200px")]);

        doc.set_attribute(panel, "aria-hidden", "true");
        doc.set_style(panel, "left", "-200px");

        assert_eq!(doc.get_element_by_id("p0"), Some(panel));
        assert_eq!(doc.attribute(panel, "aria-hidden").as_deref(), Some("true"));
        assert_eq!(doc.style(panel, "left").as_deref(), Some("-200px"));
        assert_eq!(doc.computed_style(panel, "width").as_deref(), Some("200px"));

        doc.remove_attribute(panel, "aria-hidden");
        assert!(!doc.has_attribute(panel, "aria-hidden"));
    }

    #[test]
    fn test_focus_tracking() {
        let mut doc = Document::default();
        let button = doc.append_element(doc.body(), "button", &[]);
        let text = doc.tree_mut().create_text("label");

        doc.focus(text);
        assert_eq!(doc.active_element(), None);
        doc.focus(button);
        assert_eq!(doc.active_element(), Some(button));
        doc.blur();
        assert_eq!(doc.active_element(), None);
    }
}
