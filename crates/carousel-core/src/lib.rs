//! fOS Carousel
//!
//! Accessible content carousel driven through a [`carousel_dom::DomAdapter`].
//!
//! # Example
//! ```rust,ignore
//! use carousel_core::{Carousel, CarouselOptions};
//! use carousel_dom::{DomAdapter, HtmlParser};
//!
//! let doc = HtmlParser::new().parse(page)?;
//! let container = doc.query(".carousel")?;
//! let mut carousel = Carousel::new(doc, container, CarouselOptions::new().autonav_delay(3000))?;
//! carousel.next()?;
//! ```

mod autonav;
mod carousel;
mod config;
mod error;
pub mod structure;

pub use autonav::{AutoNav, Tick};
pub use carousel::Carousel;
pub use config::{
    CarouselConfig, CarouselOptions, DEFAULT_AUTONAV_DELAY_MS, DEFAULT_TICK_INTERVAL_MS,
    FeaturePresence,
};
pub use error::{CarouselError, NavButton};
pub use structure::{CarouselParts, Tab};
