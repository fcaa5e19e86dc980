//! Carousel markup
//!
//! ```html
//! <div class="carousel">
//!   <button class="carousel-prev"></button>
//!   <button class="carousel-next"></button>
//!   <ul class="carousel-tablist">
//!     <li><a class="pos" href="#s1">1</a></li>
//!   </ul>
//!   <div class="carousel-windows">
//!     <div class="carousel-content" id="s1"></div>
//!   </div>
//! </div>
//! ```

use carousel_dom::DomAdapter;

use crate::{CarouselError, FeaturePresence};

pub const PREV_BUTTON: &str = ".carousel-prev";
pub const NEXT_BUTTON: &str = ".carousel-next";
pub const TABLIST: &str = ".carousel-tablist";
pub const TAB_ITEM: &str = "li";
pub const TAB_MARKER: &str = ".pos";
pub const PANEL: &str = ".carousel-content";

/// One entry of the tablist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab<N> {
    /// The list item; clicks anywhere inside it select the tab
    pub item: N,
    /// The `.pos` control carrying focus and ARIA state
    pub control: N,
}

/// Elements of one carousel, located once at construction
#[derive(Debug, Clone)]
pub struct CarouselParts<N> {
    pub prev: Option<N>,
    pub next: Option<N>,
    pub tablist: Option<N>,
    pub tabs: Vec<Tab<N>>,
    pub panels: Vec<N>,
}

impl<N: Copy + Eq> CarouselParts<N> {
    /// Locate every part under `container`
    pub fn discover<D>(dom: &D, container: N) -> Result<Self, CarouselError>
    where
        D: DomAdapter<Node = N>,
    {
        let panels = dom.query_selector_all(container, PANEL)?;
        if panels.is_empty() {
            return Err(CarouselError::NoPanels);
        }

        let tablist = dom.query_selector(container, TABLIST)?;
        let mut tabs = Vec::new();
        if let Some(list) = tablist {
            for (index, item) in dom.query_selector_all(list, TAB_ITEM)?.into_iter().enumerate() {
                let markers = dom.query_selector_all(item, TAB_MARKER)?;
                match markers.as_slice() {
                    [control] => tabs.push(Tab { item, control: *control }),
                    _ => {
                        return Err(CarouselError::MalformedTab {
                            index,
                            found: markers.len(),
                        });
                    }
                }
            }
        }

        Ok(Self {
            prev: dom.query_selector(container, PREV_BUTTON)?,
            next: dom.query_selector(container, NEXT_BUTTON)?,
            tablist,
            tabs,
            panels,
        })
    }

    pub fn presence(&self) -> FeaturePresence {
        FeaturePresence {
            tablist: self.tablist.is_some(),
            prev_button: self.prev.is_some(),
            next_button: self.next.is_some(),
        }
    }

    /// Tab whose item contains `node`
    pub fn tab_containing<D>(&self, dom: &D, node: N) -> Option<usize>
    where
        D: DomAdapter<Node = N>,
    {
        self.tabs.iter().position(|t| dom.contains(t.item, node))
    }

    /// Tab whose control is exactly `node`
    pub fn tab_with_control(&self, node: N) -> Option<usize> {
        self.tabs.iter().position(|t| t.control == node)
    }
}
