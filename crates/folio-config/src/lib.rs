//! Configuration loading for the folio terminal.
//!
//! Reads `config.toml` from the platform config directory (for example
//! `~/.config/folio/config.toml` on Linux). Every field is optional; a
//! missing file yields the defaults.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use folio_core::{AnimationSpeed, BackgroundStyle};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Background effect behind every page.
    pub background: BackgroundStyle,
    /// Speed of the background animation.
    pub animation_speed: AnimationSpeed,
    /// Delay between boot-sequence lines, in milliseconds.
    pub boot_interval_ms: u64,
    /// Settle delay after the last boot line, in milliseconds.
    pub boot_settle_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background: BackgroundStyle::default(),
            animation_speed: AnimationSpeed::default(),
            boot_interval_ms: 800,
            boot_settle_ms: 500,
        }
    }
}

/// Failure to read or parse the config file.
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "could not read config file: {err}"),
            ConfigError::Parse(err) => write!(f, "could not parse config file: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl Config {
    /// Path of the config file, if a platform config directory exists.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "folio").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) if path.exists() => {
                let text = fs::read_to_string(&path).map_err(ConfigError::Io)?;
                Self::parse(&text)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Parse a TOML document, applying defaults for absent fields.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(ConfigError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = Config::parse("background = \"none\"\nboot_interval_ms = 400\n").unwrap();
        assert_eq!(config.background, BackgroundStyle::None);
        assert_eq!(config.boot_interval_ms, 400);
        assert_eq!(config.boot_settle_ms, 500);
        assert_eq!(config.animation_speed, AnimationSpeed::Normal);
    }

    #[test]
    fn full_document_round_trips() {
        let config = Config {
            background: BackgroundStyle::GlyphRain,
            animation_speed: AnimationSpeed::Fast,
            boot_interval_ms: 200,
            boot_settle_ms: 100,
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }

    #[test]
    fn malformed_document_reports_a_parse_error() {
        assert!(matches!(
            Config::parse("animation_speed = \"warp\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
