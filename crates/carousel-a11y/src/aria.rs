//! ARIA Support
//!
//! The ARIA states a tabbed carousel toggles.

use carousel_dom::DomAdapter;

use crate::TabIndex;

/// Boolean ARIA state attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaState {
    Hidden,
    Selected,
}

impl AriaState {
    pub fn attr_name(self) -> &'static str {
        match self {
            Self::Hidden => "aria-hidden",
            Self::Selected => "aria-selected",
        }
    }

    /// Write `"true"`/`"false"`
    pub fn set<D: DomAdapter>(self, dom: &mut D, node: D::Node, value: bool) {
        dom.set_attribute(node, self.attr_name(), if value { "true" } else { "false" });
    }

    /// `None` when the attribute is absent or not a boolean
    pub fn get<D: DomAdapter>(self, dom: &D, node: D::Node) -> Option<bool> {
        match dom.attribute(node, self.attr_name())?.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

/// Write a `tabindex` attribute; `Unset` removes it
pub fn set_tab_index<D: DomAdapter>(dom: &mut D, node: D::Node, index: TabIndex) {
    match index.value() {
        Some(n) => dom.set_attribute(node, "tabindex", &n.to_string()),
        None => dom.remove_attribute(node, "tabindex"),
    }
}
