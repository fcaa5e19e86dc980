//! Carousel Accessibility
//!
//! Keyboard focusability and ARIA state for widgets built on a
//! [`carousel_dom::DomAdapter`].
//!
//! Features:
//! - Focusable-descendant discovery with reconfigurable selection
//! - `tabindex` parsing
//! - ARIA hidden/selected state

pub mod aria;
pub mod focus;

pub use aria::{AriaState, set_tab_index};
pub use focus::{FOCUSABLE_TAGS, FocusMode, FocusabilityClassifier, TabIndex};
