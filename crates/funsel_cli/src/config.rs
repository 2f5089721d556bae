//! Fun selector configuration file handling

use anyhow::{Context, Result};
use funsel_animation::SpringInterpolator;
use funsel_core::Color;
use funsel_widgets::SelectorStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "funsel.toml";

/// Top-level configuration (funsel.toml)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct FunselConfig {
    #[serde(default)]
    pub spring: SpringConfig,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Spring easing of the sliding rectangle
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct SpringConfig {
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,
    #[serde(default)]
    pub phase: f64,
    #[serde(default = "default_true")]
    pub bounce: bool,
}

fn default_amplitude() -> f64 {
    0.75
}

fn default_mass() -> f64 {
    0.058
}

fn default_stiffness() -> f64 {
    5.0
}

fn default_true() -> bool {
    true
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            amplitude: default_amplitude(),
            mass: default_mass(),
            stiffness: default_stiffness(),
            phase: 0.0,
            bounce: true,
        }
    }
}

impl SpringConfig {
    /// Build the interpolator, rejecting invalid parameters
    pub fn build(&self) -> Result<SpringInterpolator> {
        SpringInterpolator::new(self.amplitude, self.mass, self.stiffness, self.phase, self.bounce)
            .context("Invalid [spring] configuration")
    }
}

/// Selector colors as hex strings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StyleConfig {
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_foreground")]
    pub foreground: String,
    #[serde(default = "default_selected")]
    pub selected: String,
    #[serde(default = "default_deselected")]
    pub deselected: String,
}

fn default_background() -> String {
    Color::from_hex(SelectorStyle::DEFAULT_BACKGROUND).to_hex_string()
}

fn default_foreground() -> String {
    Color::from_hex(SelectorStyle::DEFAULT_FOREGROUND).to_hex_string()
}

fn default_selected() -> String {
    Color::from_hex(SelectorStyle::DEFAULT_SELECTED).to_hex_string()
}

fn default_deselected() -> String {
    Color::from_hex(SelectorStyle::DEFAULT_DESELECTED).to_hex_string()
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            foreground: default_foreground(),
            selected: default_selected(),
            deselected: default_deselected(),
        }
    }
}

impl StyleConfig {
    /// Parse the colors into a selector style
    pub fn build(&self) -> Result<SelectorStyle> {
        let parse = |key: &str, value: &str| {
            Color::from_hex_str(value).with_context(|| format!("Invalid [style] {key}"))
        };

        Ok(SelectorStyle::default()
            .background(parse("background", &self.background)?)
            .with_foreground(parse("foreground", &self.foreground)?)
            .selected(parse("selected", &self.selected)?)
            .deselected(parse("deselected", &self.deselected)?))
    }
}

/// Headless simulation settings
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct SimulationConfig {
    /// Frames per second used to tick the selector
    #[serde(default = "default_fps")]
    pub fps: u32,
}

fn default_fps() -> u32 {
    60
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { fps: default_fps() }
    }
}

impl FunselConfig {
    /// Load an explicit config file, or `funsel.toml` from the working
    /// directory when present, or fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::load_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => {
                tracing::debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = FunselConfig::from_toml("").unwrap();
        assert_eq!(config, FunselConfig::default());
        assert_eq!(config.spring.build().unwrap(), SpringInterpolator::selector_bounce());
        assert_eq!(config.style.build().unwrap(), SelectorStyle::default());
        assert_eq!(config.simulation.fps, 60);
    }

    #[test]
    fn test_partial_sections() {
        let config = FunselConfig::from_toml(
            r##"
            [spring]
            stiffness = 12.0
            bounce = false

            [style]
            selected = "#ff0000"
            "##,
        )
        .unwrap();

        assert_eq!(config.spring.stiffness, 12.0);
        assert_eq!(config.spring.amplitude, 0.75);
        assert!(!config.spring.bounce);

        let style = config.style.build().unwrap();
        assert_eq!(style.selected, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(style.deselected, SelectorStyle::default().deselected);
    }

    #[test]
    fn test_foreground_applies_to_labels() {
        let config = FunselConfig::from_toml("[style]\nforeground = \"#000000\"\n").unwrap();
        let style = config.style.build().unwrap();
        assert_eq!(style.upper_label, Color::BLACK);
        assert_eq!(style.lower_label, Color::BLACK);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = FunselConfig::default();
        let text = config.to_toml().unwrap();
        assert!(text.contains("[spring]"));
        assert!(text.contains("#39d353"));
        assert_eq!(FunselConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let config = FunselConfig::from_toml("[style]\nbackground = \"navy\"\n").unwrap();
        let err = config.style.build().unwrap_err();
        assert!(format!("{err:#}").contains("background"));
    }

    #[test]
    fn test_zero_mass_is_reported() {
        let config = FunselConfig::from_toml("[spring]\nmass = 0.0\n").unwrap();
        let err = config.spring.build().unwrap_err();
        assert!(format!("{err:#}").contains("mass"));
    }

    #[test]
    fn test_unknown_type_fails_to_parse() {
        assert!(FunselConfig::from_toml("[simulation]\nfps = \"fast\"\n").is_err());
    }
}
