//! Carousel DOM
//!
//! Arena-backed DOM used to host the carousel widget, plus the
//! [`DomAdapter`] trait the widget talks to. Any host (a real browser
//! binding, a test double) can implement the adapter; [`Document`] is the
//! reference implementation.

mod adapter;
mod attributes;
mod classlist;
mod document;
mod events;
mod node;
mod parser;
mod selector;
mod style;
mod tree;

pub use adapter::DomAdapter;
pub use attributes::{Attr, AttributeMap};
pub use classlist::ClassList;
pub use document::Document;
pub use events::{Key, KeyboardInput, Modifiers, UiEvent, UiEventKind};
pub use node::{ElementData, Node, NodeData};
pub use parser::HtmlParser;
pub use selector::{AttrMatch, Combinator, Compound, Selector, SelectorList, Specificity};
pub use style::{StyleDeclarations, StyleRule, StyleSheet, parse_px};
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this ID refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// DOM error
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Malformed stylesheet: {0}")]
    InvalidStyleSheet(String),

    #[error("Failed to read HTML input")]
    Io(#[from] std::io::Error),
}
