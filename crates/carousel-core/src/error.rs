//! Carousel errors

use carousel_dom::DomError;

/// Construction and navigation failures
#[derive(Debug, thiserror::Error)]
pub enum CarouselError {
    #[error("Carousel container is missing")]
    MissingContainer,

    #[error("Carousel has no .carousel-content panel")]
    NoPanels,

    #[error("Navigation buttons enabled but .carousel-{0} is missing")]
    MissingNavButton(NavButton),

    #[error("Tabs enabled but .carousel-tablist is missing or empty")]
    MissingTabList,

    #[error("Tab {index} must contain exactly one .pos element, found {found}")]
    MalformedTab { index: usize, found: usize },

    #[error("{tabs} tabs for {panels} panels")]
    TabCountMismatch { tabs: usize, panels: usize },

    #[error("Panel width '{0}' is not a positive pixel length")]
    UnmeasurablePanel(String),

    #[error("Tick interval must be greater than zero")]
    InvalidTickInterval,

    #[error("Panel index {index} out of range (max {max})")]
    IndexOutOfRange { index: usize, max: usize },

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Which navigation button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Prev,
    Next,
}

impl std::fmt::Display for NavButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Prev => "prev",
            Self::Next => "next",
        })
    }
}
