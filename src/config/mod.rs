// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! carousel preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[carousel]` - Scale/fade curve of the carousel cells
//! - `[demo]` - Card strip shown by the demo application
//!
//! Missing fields fall back to the values in [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use scaling_carousel::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.carousel.scale_minimum = Some(0.8);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::cell::ScalingTunables;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Scale/fade curve settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default = "default_scale_minimum")]
    pub scale_minimum: Option<f32>,
    #[serde(default = "default_scale_divisor")]
    pub scale_divisor: Option<f32>,
    #[serde(default = "default_alpha_minimum")]
    pub alpha_minimum: Option<f32>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            scale_minimum: default_scale_minimum(),
            scale_divisor: default_scale_divisor(),
            alpha_minimum: default_alpha_minimum(),
        }
    }
}

/// Demo application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_card_count")]
    pub card_count: Option<usize>,
    #[serde(default = "default_card_width")]
    pub card_width: Option<f32>,
    #[serde(default = "default_card_height")]
    pub card_height: Option<f32>,
    #[serde(default = "default_card_spacing")]
    pub card_spacing: Option<f32>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            card_count: default_card_count(),
            card_width: default_card_width(),
            card_height: default_card_height(),
            card_spacing: default_card_spacing(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

impl Config {
    /// Validates the `[carousel]` section into tunables.
    ///
    /// Unset fields use their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Tunable`] if a value is out of range.
    pub fn tunables(&self) -> Result<ScalingTunables> {
        let tunables = ScalingTunables::new(
            self.carousel.scale_minimum.unwrap_or(DEFAULT_SCALE_MINIMUM),
            self.carousel.scale_divisor.unwrap_or(DEFAULT_SCALE_DIVISOR),
            self.carousel.alpha_minimum.unwrap_or(DEFAULT_ALPHA_MINIMUM),
        )?;
        Ok(tunables)
    }

    /// Stores `tunables` in the `[carousel]` section.
    pub fn set_tunables(&mut self, tunables: ScalingTunables) {
        self.carousel.scale_minimum = Some(tunables.scale_minimum());
        self.carousel.scale_divisor = Some(tunables.scale_divisor());
        self.carousel.alpha_minimum = Some(tunables.alpha_minimum());
    }
}

fn default_scale_minimum() -> Option<f32> {
    Some(DEFAULT_SCALE_MINIMUM)
}

fn default_scale_divisor() -> Option<f32> {
    Some(DEFAULT_SCALE_DIVISOR)
}

fn default_alpha_minimum() -> Option<f32> {
    Some(DEFAULT_ALPHA_MINIMUM)
}

fn default_card_count() -> Option<usize> {
    Some(DEFAULT_CARD_COUNT)
}

fn default_card_width() -> Option<f32> {
    Some(DEFAULT_CARD_WIDTH)
}

fn default_card_height() -> Option<f32> {
    Some(DEFAULT_CARD_HEIGHT)
}

fn default_card_spacing() -> Option<f32> {
    Some(DEFAULT_CARD_SPACING)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// A missing file yields the defaults. A file that exists but cannot be read
/// also yields the defaults, together with a warning naming the file and
/// the error.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (Config::default(), Some(format!("{}: {err}", path.display())));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "saved config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::TunableError;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.carousel.scale_minimum = Some(0.75);
        config.carousel.alpha_minimum = Some(0.5);
        config.demo.card_count = Some(30);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[carousel]\nscale_divisor = 4.0\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("partial config loads");
        assert_eq!(loaded.carousel.scale_divisor, Some(4.0));
        assert_eq!(loaded.carousel.scale_minimum, Some(DEFAULT_SCALE_MINIMUM));
        assert_eq!(loaded.demo, DemoConfig::default());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.carousel.scale_minimum, Some(0.9));
        assert_eq!(config.carousel.scale_divisor, Some(10.0));
        assert_eq!(config.carousel.alpha_minimum, Some(0.85));
        assert_eq!(config.demo.card_count, Some(DEFAULT_CARD_COUNT));
        assert_eq!(config.tunables(), Ok(ScalingTunables::default()));
    }

    #[test]
    fn unset_tunables_fall_back_to_defaults() {
        let mut config = Config::default();
        config.carousel.scale_minimum = None;
        config.carousel.scale_divisor = None;
        config.carousel.alpha_minimum = None;
        assert_eq!(config.tunables(), Ok(ScalingTunables::default()));
    }

    #[test]
    fn out_of_range_tunable_is_reported() {
        let mut config = Config::default();
        config.carousel.alpha_minimum = Some(1.5);
        assert_eq!(
            config.tunables(),
            Err(Error::Tunable(TunableError::AlphaMinimumOutOfRange(1.5)))
        );
    }

    #[test]
    fn set_tunables_round_trips() {
        let tunables = ScalingTunables::new(0.6, 2.5, 0.7).expect("valid tunables");
        let mut config = Config::default();
        config.set_tunables(tunables);
        assert_eq!(config.tunables(), Ok(tunables));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.carousel.scale_divisor = Some(5.0);

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join(CONFIG_FILE).exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.carousel.scale_divisor, Some(5.0));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[carousel\nbroken").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        let warning = warning.expect("corrupted file should warn");
        assert!(warning.contains(CONFIG_FILE));
        assert!(warning.starts_with(&temp_dir.path().display().to_string()));
        assert!(warning.contains("Config Error"));
    }
}
