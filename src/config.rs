//! Configuration management
//!
//! Settings live in `<config_dir>/sortviz/config.toml`. A missing file or a
//! missing field falls back to the defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::playback::{PlaybackConfig, SchedulingMode};
use crate::theme::Theme;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackSettings,
    pub data: DataConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// Animation speed and scheduling per view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Delay between steps in the single view
    pub single_interval_ms: u64,
    /// Delay between steps in the comparison view
    pub compare_interval_ms: u64,
    pub single_mode: SchedulingMode,
    pub compare_mode: SchedulingMode,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            single_interval_ms: 100,
            compare_interval_ms: 50,
            single_mode: SchedulingMode::Background,
            compare_mode: SchedulingMode::Cooperative,
        }
    }
}

impl PlaybackSettings {
    pub fn single(&self) -> PlaybackConfig {
        PlaybackConfig::new(
            Duration::from_millis(self.single_interval_ms),
            self.single_mode,
        )
    }

    pub fn compare(&self) -> PlaybackConfig {
        PlaybackConfig::new(
            Duration::from_millis(self.compare_interval_ms),
            self.compare_mode,
        )
    }
}

/// Where snapshot files are found
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding `<algorithm>_output.txt` files
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// `dark`, `classic` or `ocean`
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl UiConfig {
    /// Resolved theme; unknown names fall back to the default.
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %self.theme, "unknown theme, using default");
            Theme::default()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `SORTVIZ_LOG` is unset
    pub level: String,
    /// Log file; defaults to `<data_local_dir>/sortviz/sortviz.log`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load config from the default location.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load config from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Write config to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

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

    /// Default config file path.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("sortviz").join("config.toml"))
    }

    /// Log file path, honouring `[log].file`.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log
            .file
            .clone()
            .or_else(|| dirs::data_local_dir().map(|d| d.join("sortviz").join("sortviz.log")))
    }
}
