//! UI Events
//!
//! Pointer and keyboard events delivered by the host to widgets.

/// Logical key, following `KeyboardEvent.key` names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Tab,
    Character(char),
    Other(String),
}

impl Key {
    /// Parse a key name; accepts the legacy `Left`/`Right`/`Up`/`Down` forms
    pub fn parse(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Other(name.to_string()),
                }
            }
        }
    }
}

/// Modifier key state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

/// Key press with modifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardInput {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyboardInput {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

}

/// Event kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEventKind {
    Click,
    KeyDown(KeyboardInput),
}

/// UI event addressed to a node of type `N`
#[derive(Debug, Clone)]
pub struct UiEvent<N> {
    pub kind: UiEventKind,
    pub target: N,
    pub cancelable: bool,
    default_prevented: bool,
}

impl<N> UiEvent<N> {
    /// Create click event
    pub fn click(target: N) -> Self {
        Self::new(UiEventKind::Click, target)
    }

    /// Create keydown event
    pub fn key_down(target: N, input: KeyboardInput) -> Self {
        Self::new(UiEventKind::KeyDown(input), target)
    }

    fn new(kind: UiEventKind, target: N) -> Self {
        Self {
            kind,
            target,
            cancelable: true,
            default_prevented: false,
        }
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Key press carried by a keydown event
    pub fn keyboard(&self) -> Option<&KeyboardInput> {
        match &self.kind {
            UiEventKind::KeyDown(input) => Some(input),
            UiEventKind::Click => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parse() {
        assert_eq!(Key::parse("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::parse("Right"), Key::ArrowRight);
        assert_eq!(Key::parse("a"), Key::Character('a'));
        assert_eq!(Key::parse("PageDown"), Key::Other("PageDown".to_string()));
    }

    #[test]
    fn test_prevent_default() {
        let mut event = UiEvent::key_down(3u32, KeyboardInput::new(Key::ArrowUp).ctrl());
        assert!(event.keyboard().unwrap().modifiers.ctrl);

        event.prevent_default();
        assert!(event.is_default_prevented());

        let mut passive = UiEvent::click(3u32);
        passive.cancelable = false;
        passive.prevent_default();
        assert!(!passive.is_default_prevented());
    }
}
