//! Configuration structures for the timewheel picker.
//!
//! This module provides configuration types for all components of the
//! application:
//!
//! - [`WheelConfig`] - Wheel protocol settings (item height, debounce, settle)
//! - [`TuiConfig`] - Terminal UI settings (tick rate, frame rate, colors)
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`] with the protocol's
//! reference timing values, and deserialize leniently (`#[serde(default)]`)
//! so a partial config file is valid.

use std::time::Duration;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Color scheme for the TUI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ColorScheme {
    /// Automatically detect based on terminal settings.
    #[default]
    Auto,
    /// Light color scheme (dark text on light background).
    Light,
    /// Dark color scheme (light text on dark background).
    Dark,
}

/// Configuration for the wheel commit protocol.
///
/// `item_height` is the logical distance between adjacent options in offset
/// space; it is constant for the lifetime of a wheel and shared by both
/// wheels. `debounce_ms` is the quiet period after the last scroll event
/// before a commit is attempted, and `settle_ms` the short wait after
/// opening before programmatic positioning.
///
/// # Examples
///
/// ```
/// use tw_core::WheelConfig;
///
/// let config = WheelConfig::default();
/// assert_eq!(config.debounce_ms, 150);
/// assert_eq!(config.settle_ms, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Logical distance between two adjacent options in offset space.
    pub item_height: u16,

    /// Debounce window in milliseconds.
    ///
    /// Scroll events within this window supersede each other; only the last
    /// offset before the window elapses determines the committed index.
    pub debounce_ms: u64,

    /// Settle delay in milliseconds after opening, before the wheels are
    /// positioned programmatically.
    pub settle_ms: u64,

    /// Offset units added per scroll event step.
    pub scroll_step: u16,
}

impl WheelConfig {
    /// Returns the debounce window as a [`Duration`].
    #[inline]
    #[must_use]
    pub const fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Returns the settle delay as a [`Duration`].
    #[inline]
    #[must_use]
    pub const fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Validates option values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] if `item_height` or
    /// `scroll_step` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.item_height == 0 {
            return Err(ConfigError::invalid_option(
                "item_height",
                "must be positive",
            ));
        }
        if self.scroll_step == 0 {
            return Err(ConfigError::invalid_option(
                "scroll_step",
                "must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            item_height: 8,
            debounce_ms: 150,
            settle_ms: 50,
            scroll_step: 4,
        }
    }
}

/// Configuration for the terminal user interface.
///
/// # Examples
///
/// ```
/// use tw_core::{ColorScheme, TuiConfig};
///
/// let config = TuiConfig::default();
/// assert_eq!(config.tick_rate_ms, 25);
/// assert_eq!(config.color_scheme, ColorScheme::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds.
    ///
    /// Ticks drive the debounce and settle deadlines, so this bounds the
    /// timing resolution of commits. Must be well below `debounce_ms`.
    pub tick_rate_ms: u64,

    /// Frame rate for rendering (frames per second).
    pub frame_rate: u64,

    /// Color scheme for the interface.
    pub color_scheme: ColorScheme,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 25,
            frame_rate: 60,
            color_scheme: ColorScheme::Auto,
        }
    }
}

/// Root configuration for the timewheel application.
///
/// # Examples
///
/// ```
/// use tw_core::Config;
///
/// let config = Config::default();
/// let json = serde_json::to_string_pretty(&config).unwrap();
/// assert!(json.contains("debounce_ms"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wheel protocol configuration.
    pub wheel: WheelConfig,

    /// Terminal UI configuration.
    pub tui: TuiConfig,
}

impl Config {
    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file does not exist,
    /// [`ConfigError::Io`] / [`ConfigError::Parse`] on read or parse
    /// failures, and a validation error for invalid option values.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_owned()));
        }

        let text = std::fs::read_to_string(path.as_std_path())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all option values.
    ///
    /// # Errors
    ///
    /// Returns the first invalid option encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.wheel.validate()?;
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::invalid_option(
                "tick_rate_ms",
                "must be positive",
            ));
        }
        if self.tui.frame_rate == 0 {
            return Err(ConfigError::invalid_option(
                "frame_rate",
                "must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn test_wheel_config_defaults() {
        let config = WheelConfig::default();
        assert_eq!(config.item_height, 8);
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.settle_ms, 50);
        assert_eq!(config.scroll_step, 4);
    }

    #[test]
    fn test_wheel_config_durations() {
        let config = WheelConfig::default();
        assert_eq!(config.debounce_window(), Duration::from_millis(150));
        assert_eq!(config.settle_delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_wheel_config_validate() {
        assert!(WheelConfig::default().validate().is_ok());

        let config = WheelConfig {
            item_height: 0,
            ..WheelConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidOption { .. })
        ));
    }

    #[test]
    fn test_tui_config_defaults() {
        let config = TuiConfig::default();
        assert_eq!(config.tick_rate_ms, 25);
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.color_scheme, ColorScheme::Auto);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_deserialize_with_missing_fields() {
        let json = r#"{"wheel": {"debounce_ms": 200}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.wheel.debounce_ms, 200);
        // Other fields should have defaults
        assert_eq!(config.wheel.settle_ms, 50);
        assert_eq!(config.tui.tick_rate_ms, 25);
    }

    #[test]
    fn test_config_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.wheel.debounce_ms = 300;
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let utf8_path = Utf8PathBuf::from_path_buf(path).unwrap();
        let loaded = Config::load(&utf8_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_load_not_found() {
        let result = Config::load(Utf8Path::new("/nonexistent/config.json"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_config_load_rejects_invalid_options() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"wheel": {"item_height": 0}}"#).unwrap();

        let utf8_path = Utf8PathBuf::from_path_buf(path).unwrap();
        assert!(matches!(
            Config::load(&utf8_path),
            Err(ConfigError::InvalidOption { .. })
        ));
    }

    #[test]
    fn test_color_scheme_serialization() {
        assert_eq!(
            serde_json::to_string(&ColorScheme::Auto).unwrap(),
            r#""auto""#
        );
        assert_eq!(
            serde_json::to_string(&ColorScheme::Dark).unwrap(),
            r#""dark""#
        );
    }
}
