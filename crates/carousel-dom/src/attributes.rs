//! Element Attributes
//!
//! Ordered attribute storage with case-insensitive names.

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            value: value.into(),
        }
    }
}

/// Attribute collection, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct AttributeMap {
    attributes: Vec<Attr>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.attributes
            .iter()
            .position(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Get attribute value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.attributes[i].value.as_str())
    }

    /// Set attribute, returning the previous value
    pub fn set(&mut self, name: &str, value: &str) -> Option<String> {
        match self.position(name) {
            Some(i) => Some(std::mem::replace(&mut self.attributes[i].value, value.to_string())),
            None => {
                self.attributes.push(Attr::new(name, value));
                None
            }
        }
    }

    /// Remove attribute by name
    pub fn remove(&mut self, name: &str) -> Option<Attr> {
        self.position(name).map(|i| self.attributes.remove(i))
    }

    /// Check if attribute exists
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Iterate over attributes
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_attribute() {
        let mut attrs = AttributeMap::new();
        attrs.set("class", "carousel-next");
        attrs.set("aria-hidden", "true");

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("class"), Some("carousel-next"));
        assert_eq!(attrs.get("ARIA-HIDDEN"), Some("true"));
    }

    #[test]
    fn test_overwrite_returns_previous() {
        let mut attrs = AttributeMap::new();
        assert_eq!(attrs.set("tabindex", "0"), None);
        assert_eq!(attrs.set("tabindex", "-1"), Some("0".to_string()));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_remove_attribute() {
        let mut attrs = AttributeMap::new();
        attrs.set("disabled", "");

        assert!(attrs.contains("disabled"));
        attrs.remove("disabled");
        assert!(!attrs.contains("disabled"));
    }
}
