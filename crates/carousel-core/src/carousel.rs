//! Carousel controller
//!
//! Panels sit side by side, each with an inline `left` offset. Moving to
//! another panel shifts the whole strip by whole panel widths so the target
//! lands at offset 0, then updates ARIA state and the tab order: hidden
//! panels drop their focusable content out of the tab order, the shown
//! panel brings it back.

use carousel_a11y::{AriaState, FocusMode, FocusabilityClassifier, TabIndex, set_tab_index};
use carousel_dom::{DomAdapter, Key, UiEvent, UiEventKind, parse_px};
use smol::channel::Receiver;

use crate::autonav::{AutoNav, Tick};
use crate::{CarouselConfig, CarouselError, CarouselOptions, CarouselParts, NavButton};

/// Accessible carousel bound to a DOM container
#[derive(Debug)]
pub struct Carousel<D: DomAdapter> {
    dom: D,
    container: D::Node,
    parts: CarouselParts<D::Node>,
    config: CarouselConfig,
    classifier: FocusabilityClassifier,
    current_index: usize,
    max_index: usize,
    panel_width: f64,
    autonav: AutoNav,
}

impl<D: DomAdapter> Carousel<D> {
    /// Bind a carousel to `container`.
    ///
    /// Lays the panels out, applies the initial ARIA state and starts
    /// auto-navigation when enabled. Any structural problem is fatal.
    pub fn new(
        mut dom: D,
        container: Option<D::Node>,
        options: CarouselOptions,
    ) -> Result<Self, CarouselError> {
        let container = container.ok_or(CarouselError::MissingContainer)?;
        let parts = CarouselParts::discover(&dom, container)?;
        let config = options.resolve(parts.presence())?;

        if config.allow_navbuttons {
            if parts.prev.is_none() {
                return Err(CarouselError::MissingNavButton(NavButton::Prev));
            }
            if parts.next.is_none() {
                return Err(CarouselError::MissingNavButton(NavButton::Next));
            }
        }

        let max_index = if config.allow_tabs {
            if parts.tabs.is_empty() {
                return Err(CarouselError::MissingTabList);
            }
            if parts.tabs.len() != parts.panels.len() {
                return Err(CarouselError::TabCountMismatch {
                    tabs: parts.tabs.len(),
                    panels: parts.panels.len(),
                });
            }
            parts.tabs.len() - 1
        } else {
            parts.panels.len() - 1
        };

        // Sampled once; later reads could observe a transition in progress
        let width = dom.computed_style(parts.panels[0], "width").unwrap_or_default();
        let panel_width = parse_px(&width)
            .filter(|w| *w > 0.0)
            .ok_or(CarouselError::UnmeasurablePanel(width))?;

        for (i, &panel) in parts.panels.iter().enumerate() {
            dom.set_style(panel, "left", &px(panel_width * i as f64));
        }

        let mut carousel = Self {
            dom,
            container,
            parts,
            autonav: AutoNav::new(config.autonav_delay, config.tick_interval),
            config,
            classifier: FocusabilityClassifier::new(),
            current_index: 0,
            max_index,
            panel_width,
        };
        carousel.apply_initial_state()?;

        if carousel.config.allow_autonav {
            carousel.autonav.play();
        }

        tracing::info!(
            "Carousel ready: {} panels, width {}px, tabs={}, buttons={}, autonav={}",
            carousel.parts.panels.len(),
            panel_width,
            carousel.config.allow_tabs,
            carousel.config.allow_navbuttons,
            carousel.config.allow_autonav
        );
        Ok(carousel)
    }

    fn apply_initial_state(&mut self) -> Result<(), CarouselError> {
        if self.config.allow_tabs {
            self.select_tab(0);
        }
        for i in 0..self.parts.panels.len() {
            let panel = self.parts.panels[i];
            if i == 0 {
                self.show_panel(panel)?;
            } else {
                self.hide_panel(panel)?;
            }
        }
        Ok(())
    }

    /// Advance one panel, wrapping to the first
    pub fn next(&mut self) -> Result<(), CarouselError> {
        let target = if self.current_index < self.max_index {
            self.current_index + 1
        } else {
            0
        };
        self.navigate(target)
    }

    /// Go back one panel, wrapping to the last
    pub fn previous(&mut self) -> Result<(), CarouselError> {
        let target = if self.current_index > 0 {
            self.current_index - 1
        } else {
            self.max_index
        };
        self.navigate(target)
    }

    /// Select tab `index` and show its panel
    pub fn activate_panel(&mut self, index: usize) -> Result<(), CarouselError> {
        if index > self.max_index {
            tracing::warn!("Ignoring activation of panel {} (max {})", index, self.max_index);
            return Err(CarouselError::IndexOutOfRange {
                index,
                max: self.max_index,
            });
        }
        self.navigate(index)
    }

    fn navigate(&mut self, index: usize) -> Result<(), CarouselError> {
        self.autonav.reset();
        if self.config.allow_tabs {
            self.select_tab(index);
        }
        self.move_to(index)?;
        self.current_index = index;
        Ok(())
    }

    fn select_tab(&mut self, index: usize) {
        for (i, tab) in self.parts.tabs.iter().enumerate() {
            let selected = i == index;
            AriaState::Selected.set(&mut self.dom, tab.control, selected);
            let order = if selected {
                TabIndex::Sequential
            } else {
                TabIndex::Programmatic(-1)
            };
            set_tab_index(&mut self.dom, tab.control, order);
        }
    }

    /// Shift the strip so `target` sits at offset 0.
    ///
    /// Moving to the current index changes nothing, not even ARIA state.
    fn move_to(&mut self, target: usize) -> Result<(), CarouselError> {
        let distance = self.panel_width * (self.current_index as f64 - target as f64);
        if distance == 0.0 {
            tracing::debug!("Panel {} already active", target);
            return Ok(());
        }
        tracing::debug!("Moving {} -> {} ({}px)", self.current_index, target, distance);

        // Recomputed from the target, never accumulated
        for (i, &panel) in self.parts.panels.iter().enumerate() {
            let left = self.panel_width * (i as f64 - target as f64);
            self.dom.set_style(panel, "left", &px(left));
        }

        for i in 0..self.parts.panels.len() {
            let panel = self.parts.panels[i];
            if i == target {
                self.show_panel(panel)?;
            } else {
                self.hide_panel(panel)?;
            }
        }
        Ok(())
    }

    fn hide_panel(&mut self, panel: D::Node) -> Result<(), CarouselError> {
        AriaState::Hidden.set(&mut self.dom, panel, true);
        self.classifier.set_mode(FocusMode::Focusable);
        for node in self.classifier.focusable_descendants(&self.dom, panel)? {
            set_tab_index(&mut self.dom, node, TabIndex::Programmatic(-1));
        }
        Ok(())
    }

    fn show_panel(&mut self, panel: D::Node) -> Result<(), CarouselError> {
        AriaState::Hidden.set(&mut self.dom, panel, false);
        self.classifier.set_mode(FocusMode::Revealable);
        for node in self.classifier.focusable_descendants(&self.dom, panel)? {
            set_tab_index(&mut self.dom, node, TabIndex::Sequential);
        }
        Ok(())
    }

    /// Route a host event. Returns `true` if the carousel acted on it.
    pub fn handle_event(&mut self, event: &mut UiEvent<D::Node>) -> Result<bool, CarouselError> {
        match event.kind {
            UiEventKind::Click => self.handle_click(event.target),
            UiEventKind::KeyDown(_) => self.handle_key(event),
        }
    }

    fn handle_click(&mut self, target: D::Node) -> Result<bool, CarouselError> {
        if self.config.allow_navbuttons {
            if self.parts.next.is_some_and(|b| self.dom.contains(b, target)) {
                tracing::debug!("Next button clicked");
                self.next()?;
                return Ok(true);
            }
            if self.parts.prev.is_some_and(|b| self.dom.contains(b, target)) {
                tracing::debug!("Previous button clicked");
                self.previous()?;
                return Ok(true);
            }
        }
        if self.config.allow_tabs {
            if let Some(index) = self.parts.tab_containing(&self.dom, target) {
                tracing::debug!("Tab {} clicked", index);
                self.navigate(index)?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn handle_key(&mut self, event: &mut UiEvent<D::Node>) -> Result<bool, CarouselError> {
        if self.config.disable_keyboard_navigation {
            return Ok(false);
        }
        let Some(input) = event.keyboard().cloned() else {
            return Ok(false);
        };
        let Some(focused) = self.dom.active_element() else {
            return Ok(false);
        };
        let mut handled = false;

        if self.config.allow_tabs && self.parts.tab_with_control(focused).is_some() {
            let moved = match input.key {
                Key::ArrowLeft => Some(self.previous()),
                Key::ArrowRight => Some(self.next()),
                _ => None,
            };
            if let Some(result) = moved {
                result?;
                let control = self.parts.tabs[self.current_index].control;
                self.dom.focus(control);
                event.prevent_default();
                handled = true;
            }
        }

        let shown = self.parts.panels.get(self.current_index).copied();
        if self.config.allow_tabs
            && input.key == Key::ArrowUp
            && input.modifiers.ctrl
            && shown.is_some_and(|p| self.dom.contains(p, focused))
        {
            tracing::debug!("Returning focus to tab {}", self.current_index);
            self.autonav.reset();
            let control = self.parts.tabs[self.current_index].control;
            self.dom.focus(control);
            handled = true;
        }

        Ok(handled)
    }

    /// Timer callback. Advances once the idle delay has elapsed; returns
    /// `true` when it did. Ignored while stopped.
    pub fn tick(&mut self) -> Result<bool, CarouselError> {
        if !self.autonav.is_playing() {
            return Ok(false);
        }
        if self.autonav.advance() {
            tracing::debug!("Auto-navigation advancing from {}", self.current_index);
            self.next()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Start (or resume) auto-navigation
    pub fn play(&mut self) {
        if self.autonav.play() {
            tracing::info!("Auto-navigation started");
        }
    }

    /// Cancel auto-navigation
    pub fn stop(&mut self) {
        if self.autonav.stop() {
            tracing::info!("Auto-navigation stopped");
        }
    }

    pub fn is_playing(&self) -> bool {
        self.autonav.is_playing()
    }

    /// Wait for the next auto-navigation tick
    pub async fn next_tick(&self) -> Option<Tick> {
        self.autonav.recv().await
    }

    /// Tick channel, for hosts that multiplex their own event sources
    pub fn ticks(&self) -> Receiver<Tick> {
        self.autonav.ticks()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    /// Elapsed idle time in milliseconds
    pub fn current_delay(&self) -> u64 {
        self.autonav.elapsed().as_millis() as u64
    }

    pub fn panel_width(&self) -> f64 {
        self.panel_width
    }

    pub fn panel_count(&self) -> usize {
        self.parts.panels.len()
    }

    pub fn panels(&self) -> &[D::Node] {
        &self.parts.panels
    }

    /// Tab controls (`.pos` elements), empty when tabs are disabled
    pub fn tab_controls(&self) -> Vec<D::Node> {
        if self.config.allow_tabs {
            self.parts.tabs.iter().map(|t| t.control).collect()
        } else {
            Vec::new()
        }
    }

    pub fn container(&self) -> D::Node {
        self.container
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    /// Tear down, handing the DOM back. The ticker is cancelled.
    pub fn into_dom(mut self) -> D {
        self.autonav.stop();
        self.dom
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}
