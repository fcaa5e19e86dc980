//! Carousel Configuration
//!
//! [`CarouselOptions`] is what the embedding page supplies; every field is
//! optional. [`CarouselConfig`] is the resolved, immutable form the
//! controller runs on.

use std::time::Duration;

use serde::Deserialize;

use crate::CarouselError;

/// Default idle time before auto-navigation advances
pub const DEFAULT_AUTONAV_DELAY_MS: u64 = 5000;

/// Default auto-navigation tick period
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// User-supplied options
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselOptions {
    /// Tab navigation (default: a tablist is present)
    pub tabs: Option<bool>,
    /// Timer-driven advance (default: on)
    pub autonav: Option<bool>,
    /// Prev/next buttons (default: both buttons are present)
    #[serde(alias = "navigation_buttons")]
    pub navigations_buttons: Option<bool>,
    /// Idle time in milliseconds before auto-navigation advances
    pub autonav_delay: Option<u64>,
    pub disable_keyboard_navigation: Option<bool>,
    /// Auto-navigation tick period in milliseconds
    pub tick_interval: Option<u64>,
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(mut self, enabled: bool) -> Self {
        self.tabs = Some(enabled);
        self
    }

    pub fn autonav(mut self, enabled: bool) -> Self {
        self.autonav = Some(enabled);
        self
    }

    pub fn navigation_buttons(mut self, enabled: bool) -> Self {
        self.navigations_buttons = Some(enabled);
        self
    }

    pub fn autonav_delay(mut self, ms: u64) -> Self {
        self.autonav_delay = Some(ms);
        self
    }

    pub fn disable_keyboard_navigation(mut self, disabled: bool) -> Self {
        self.disable_keyboard_navigation = Some(disabled);
        self
    }

    pub fn tick_interval(mut self, ms: u64) -> Self {
        self.tick_interval = Some(ms);
        self
    }

    /// Fill unset options from defaults and the markup actually present
    pub fn resolve(&self, present: FeaturePresence) -> Result<CarouselConfig, CarouselError> {
        let tick_interval = self.tick_interval.unwrap_or(DEFAULT_TICK_INTERVAL_MS);
        let autonav_delay = self.autonav_delay.unwrap_or(DEFAULT_AUTONAV_DELAY_MS);
        if tick_interval == 0 {
            return Err(CarouselError::InvalidTickInterval);
        }

        Ok(CarouselConfig {
            allow_tabs: self.tabs.unwrap_or(present.tablist),
            allow_autonav: self.autonav.unwrap_or(true),
            allow_navbuttons: self
                .navigations_buttons
                .unwrap_or(present.prev_button && present.next_button),
            autonav_delay: Duration::from_millis(autonav_delay),
            disable_keyboard_navigation: self.disable_keyboard_navigation.unwrap_or(false),
            tick_interval: Duration::from_millis(tick_interval),
        })
    }
}

/// Optional markup found in the container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeaturePresence {
    pub tablist: bool,
    pub prev_button: bool,
    pub next_button: bool,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselConfig {
    pub allow_tabs: bool,
    pub allow_autonav: bool,
    pub allow_navbuttons: bool,
    pub autonav_delay: Duration,
    pub disable_keyboard_navigation: bool,
    pub tick_interval: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: FeaturePresence = FeaturePresence {
        tablist: true,
        prev_button: true,
        next_button: true,
    };

    #[test]
    fn test_defaults_follow_markup() {
        let config = CarouselOptions::new().resolve(ALL).unwrap();
        assert!(config.allow_tabs);
        assert!(config.allow_navbuttons);
        assert!(config.allow_autonav);
        assert!(!config.disable_keyboard_navigation);
        assert_eq!(config.autonav_delay, Duration::from_millis(5000));
        assert_eq!(config.tick_interval, Duration::from_secs(1));

        let only_next = FeaturePresence {
            next_button: true,
            ..Default::default()
        };
        let config = CarouselOptions::new().resolve(only_next).unwrap();
        assert!(!config.allow_tabs);
        assert!(!config.allow_navbuttons);
    }

    #[test]
    fn test_explicit_values_win() {
        let config = CarouselOptions::new()
            .tabs(false)
            .navigation_buttons(true)
            .autonav(false)
            .autonav_delay(1200)
            .disable_keyboard_navigation(true)
            .resolve(FeaturePresence {
                tablist: true,
                ..Default::default()
            })
            .unwrap();

        assert!(!config.allow_tabs);
        assert!(config.allow_navbuttons);
        assert!(!config.allow_autonav);
        assert!(config.disable_keyboard_navigation);
        assert_eq!(config.autonav_delay, Duration::from_millis(1200));
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let err = CarouselOptions::new().tick_interval(0).resolve(ALL).unwrap_err();
        assert!(matches!(err, CarouselError::InvalidTickInterval));
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{ "tabs": false, "navigation_buttons": true, "autonav_delay": 800 }"#;
        let options: CarouselOptions = serde_json::from_str(json).unwrap();
        let expected = CarouselOptions::new()
            .tabs(false)
            .navigation_buttons(true)
            .autonav_delay(800);
        assert_eq!(options, expected);

        let json = r#"{ "navigations_buttons": false }"#;
        let options: CarouselOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.navigations_buttons, Some(false));

        assert!(serde_json::from_str::<CarouselOptions>(r#"{ "speed": 3 }"#).is_err());
    }
}
