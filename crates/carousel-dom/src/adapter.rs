//! Host DOM adapter
//!
//! The narrow slice of DOM functionality the carousel needs: subtree
//! queries, attribute and inline style access, resolved style lookup and
//! keyboard focus.

use std::fmt::Debug;
use std::hash::Hash;

use crate::DomError;

/// DOM capabilities supplied by the hosting environment.
///
/// Queries return descendants of `root` (never `root` itself) in document
/// order, matching `Element.querySelectorAll`.
pub trait DomAdapter {
    /// Handle to an element
    type Node: Copy + Eq + Hash + Debug;

    /// All descendants of `root` matching `selector`
    fn query_selector_all(
        &self,
        root: Self::Node,
        selector: &str,
    ) -> Result<Vec<Self::Node>, DomError>;

    /// First descendant of `root` matching `selector`
    fn query_selector(
        &self,
        root: Self::Node,
        selector: &str,
    ) -> Result<Option<Self::Node>, DomError> {
        Ok(self.query_selector_all(root, selector)?.into_iter().next())
    }

    /// Inclusive ancestry check (`Node.contains`)
    fn contains(&self, ancestor: Self::Node, node: Self::Node) -> bool;

    /// Lowercase tag name, `None` for non-elements
    fn tag_name(&self, node: Self::Node) -> Option<String>;

    fn attribute(&self, node: Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);
    fn remove_attribute(&mut self, node: Self::Node, name: &str);

    fn has_attribute(&self, node: Self::Node, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// Inline style property (`element.style[prop]`)
    fn style(&self, node: Self::Node, property: &str) -> Option<String>;

    /// Set an inline style property
    fn set_style(&mut self, node: Self::Node, property: &str, value: &str);

    /// Resolved style property (`getComputedStyle(element)[prop]`)
    fn computed_style(&self, node: Self::Node, property: &str) -> Option<String>;

    /// Element currently holding keyboard focus
    fn active_element(&self) -> Option<Self::Node>;

    /// Move keyboard focus to `node`
    fn focus(&mut self, node: Self::Node);
}
