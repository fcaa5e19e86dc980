//! Focus Management
//!
//! Decides which elements are reachable by sequential keyboard navigation.
//!
//! Selection starts from a fixed set of interactive tags plus elements
//! carrying a `tabindex` marker. The marker depends on the [`FocusMode`]:
//! `tabindex="0"` finds what is focusable now, `tabindex="-1"` finds what
//! was taken out of the tab order and can be revealed again. Elements with
//! a positive `tabindex` are never selected; explicit tab ordering is not
//! supported.

use carousel_dom::{DomAdapter, DomError};

/// Tags that take part in the tab order without a `tabindex`
pub const FOCUSABLE_TAGS: &[&str] = &["a", "button", "input", "textarea", "select", "summary"];

/// Which `tabindex` marker joins the tag allowlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusMode {
    /// `tabindex="0"`: currently in the tab order
    #[default]
    Focusable,
    /// `tabindex="-1"`: removed from the tab order, can be restored
    Revealable,
}

impl FocusMode {
    /// `tabindex` value selected in this mode
    pub fn marker(self) -> &'static str {
        match self {
            Self::Focusable => "0",
            Self::Revealable => "-1",
        }
    }

    /// Selector list for this mode
    pub fn selector(self) -> String {
        let mut selector = FOCUSABLE_TAGS.join(", ");
        selector.push_str(&format!(", [tabindex='{}']", self.marker()));
        selector
    }
}

/// Parsed `tabindex` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    /// Missing or not an integer
    Unset,
    /// Negative: focusable by script only
    Programmatic(i32),
    /// `0`: document-order tab stop
    Sequential,
    /// Positive: explicit ordering
    Positive(i32),
}

impl TabIndex {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().parse::<i32>()) {
            Some(Ok(n)) if n < 0 => Self::Programmatic(n),
            Some(Ok(0)) => Self::Sequential,
            Some(Ok(n)) => Self::Positive(n),
            _ => Self::Unset,
        }
    }

    /// Read from an element
    pub fn of<D: DomAdapter>(dom: &D, node: D::Node) -> Self {
        Self::parse(dom.attribute(node, "tabindex").as_deref())
    }

    pub fn is_positive(self) -> bool {
        matches!(self, Self::Positive(_))
    }

    /// Attribute value, `None` when unset
    pub fn value(self) -> Option<i32> {
        match self {
            Self::Unset => None,
            Self::Programmatic(n) | Self::Positive(n) => Some(n),
            Self::Sequential => Some(0),
        }
    }
}

/// Finds keyboard-focusable elements through a [`DomAdapter`].
///
/// Results are computed on every call and never cached.
#[derive(Debug, Clone)]
pub struct FocusabilityClassifier {
    mode: FocusMode,
    selector: String,
}

impl FocusabilityClassifier {
    pub fn new() -> Self {
        Self::with_mode(FocusMode::Focusable)
    }

    pub fn with_mode(mode: FocusMode) -> Self {
        Self {
            mode,
            selector: mode.selector(),
        }
    }

    /// Switch the selection marker for subsequent calls
    pub fn set_mode(&mut self, mode: FocusMode) {
        if self.mode != mode {
            self.mode = mode;
            self.selector = mode.selector();
        }
    }

    pub fn mode(&self) -> FocusMode {
        self.mode
    }

    /// Selector used to build the candidate set
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Visibility and state checks, independent of the selection mode
    pub fn is_focusable<D: DomAdapter>(&self, dom: &D, node: D::Node) -> bool {
        let resolved =
            |prop: &str| dom.style(node, prop).or_else(|| dom.computed_style(node, prop));

        if resolved("display").is_some_and(|v| v.eq_ignore_ascii_case("none")) {
            return false;
        }
        if resolved("visibility").is_some_and(|v| v.eq_ignore_ascii_case("hidden")) {
            return false;
        }
        if dom.has_attribute(node, "disabled") || dom.has_attribute(node, "hidden") {
            return false;
        }
        let is_input = dom.tag_name(node).is_some_and(|t| t == "input");
        !(is_input
            && dom
                .attribute(node, "type")
                .is_some_and(|t| t.trim().eq_ignore_ascii_case("hidden")))
    }

    /// Focusable descendants of `root` in document order
    pub fn focusable_descendants<D: DomAdapter>(
        &self,
        dom: &D,
        root: D::Node,
    ) -> Result<Vec<D::Node>, DomError> {
        let candidates = dom.query_selector_all(root, &self.selector)?;
        let total = candidates.len();
        let found: Vec<_> = candidates
            .into_iter()
            .filter(|&n| !TabIndex::of(dom, n).is_positive() && self.is_focusable(dom, n))
            .collect();
        tracing::trace!(
            "{:?}: {} of {} candidates under {:?}",
            self.mode,
            found.len(),
            total,
            root
        );
        Ok(found)
    }
}

impl Default for FocusabilityClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_index() {
        assert_eq!(TabIndex::parse(Some("-1")), TabIndex::Programmatic(-1));
        assert_eq!(TabIndex::parse(Some(" 0 ")), TabIndex::Sequential);
        assert!(TabIndex::parse(Some("5")).is_positive());
        assert_eq!(TabIndex::parse(Some("abc")), TabIndex::Unset);
        assert_eq!(TabIndex::parse(None).value(), None);
    }

    #[test]
    fn test_mode_selector() {
        let mut classifier = FocusabilityClassifier::new();
        assert!(classifier.selector().ends_with("[tabindex='0']"));
        assert!(classifier.selector().starts_with("a, button"));

        classifier.set_mode(FocusMode::Revealable);
        assert_eq!(classifier.mode(), FocusMode::Revealable);
        assert!(classifier.selector().ends_with("[tabindex='-1']"));
    }
}
