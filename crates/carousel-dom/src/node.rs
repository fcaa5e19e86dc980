//! DOM Node
//!
//! Nodes link to each other through `NodeId`s instead of pointers so the
//! whole tree lives in one arena.

use crate::{AttributeMap, ClassList, NodeId, StyleDeclarations};

/// DOM Node - Core structure
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (NONE if root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Text(content.into()))
    }

    /// Create a comment node
    pub fn comment(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Comment(content.into()))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Element-specific data
///
/// `class` and `style` are stored as ordinary attributes; their parsed
/// forms are kept in sync on every write.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Lowercase tag name
    pub tag: String,
    attrs: AttributeMap,
    classes: ClassList,
    style: StyleDeclarations,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: AttributeMap::new(),
            classes: ClassList::new(),
            style: StyleDeclarations::new(),
        }
    }

    pub fn attrs(&self) -> &AttributeMap {
        &self.attrs
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    /// Inline style declarations
    pub fn style(&self) -> &StyleDeclarations {
        &self.style
    }

    /// `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id")
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains(name)
    }

    /// Set an attribute
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if name.eq_ignore_ascii_case("class") {
            self.classes = ClassList::parse(value);
        } else if name.eq_ignore_ascii_case("style") {
            self.style = StyleDeclarations::parse(value);
        }
        self.attrs.set(name, value);
    }

    /// Remove an attribute
    pub fn remove_attr(&mut self, name: &str) {
        if name.eq_ignore_ascii_case("class") {
            self.classes = ClassList::new();
        } else if name.eq_ignore_ascii_case("style") {
            self.style = StyleDeclarations::new();
        }
        self.attrs.remove(name);
    }

    /// Set one inline style property, rewriting the `style` attribute
    pub fn set_style_property(&mut self, property: &str, value: &str) {
        self.style.set(property, value);
        let serialized = self.style.to_string();
        self.attrs.set("style", &serialized);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_attribute_syncs() {
        let mut elem = ElementData::new("LI");
        elem.set_attr("class", "pos current");

        assert_eq!(elem.tag, "li");
        assert!(elem.classes().contains("current"));

        elem.remove_attr("class");
        assert!(elem.classes().is_empty());
    }

    #[test]
    fn test_style_property_rewrites_attribute() {
        let mut elem = ElementData::new("div");
        elem.set_attr("style", "width: 300px");
        elem.set_style_property("left", "600px");

        assert_eq!(elem.style().get("left"), Some("600px"));
        assert_eq!(elem.get_attr("style"), Some("width: 300px; left: 600px"));
    }
}
