//! Configuration management for termintro

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::animation::Pauses;
use crate::page::Script;

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "TERMINTRO_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub script: Script,
    pub timing: Pauses,
    pub site: SiteConfig,
    pub display: DisplayConfig,
}

/// Where the landing page lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Origin of the current page; referrers from here count as return visits
    pub origin: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: "https://localhost".to_string(),
        }
    }
}

/// Terminal presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Theme name: phosphor, classic or ocean
    pub theme: String,
    /// How long the finished page stays on screen before the player exits (ms)
    pub hold_ms: u64,
    /// Redraw interval while animating (ms)
    pub frame_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: "phosphor".to_string(),
            hold_ms: 1500,
            frame_ms: 16,
        }
    }
}

impl Config {
    /// Load configuration from the config file (defaults if it is missing).
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path (defaults if it is missing).
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Path of the config file: `$TERMINTRO_CONFIG` or `<config_dir>/termintro/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("termintro").join("config.toml"))
    }
}
