//! Configuration system: TOML file + env var overrides + smart defaults.

#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{BdkError, Result};

/// Tick rates outside this range either burn CPU or feel frozen.
const MIN_TICK_RATE_MS: u64 = 10;
const MAX_TICK_RATE_MS: u64 = 1000;

/// Full Badger's Kitchen configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    pub ui: UiConfig,
    pub assets: AssetsConfig,
    pub menu: MenuConfig,
    pub log: LogConfig,
    pub paths: PathsConfig,
}

/// Presentation knobs for the kitchen board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Animation/refresh tick cadence in milliseconds.
    pub tick_rate_ms: u64,
    /// Collapse every scene transition to a single step.
    pub reduced_motion: bool,
    /// Enable mouse capture (placard/cover clicks).
    pub mouse: bool,
}

/// Where dish photo art is resolved from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory containing text-art files referenced by dish image paths.
    /// Empty means builtin art only.
    pub art_dir: Option<PathBuf>,
}

/// Where the dish list comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MenuConfig {
    /// Optional TOML menu file. Empty means the builtin four-dish menu.
    pub file: Option<PathBuf>,
}

/// Interaction log settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Master switch for the JSONL interaction log.
    pub enabled: bool,
    /// Override for the log file location.
    pub file: Option<PathBuf>,
}

/// Resolved filesystem locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    pub config_file: PathBuf,
    pub jsonl_log: PathBuf,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 33,
            reduced_motion: false,
            mouse: true,
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self { art_dir: None }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self { file: None }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: None,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let home_dir = env::var_os("HOME").map_or_else(
            || {
                eprintln!("[BDK-CONFIG] WARNING: HOME not set, falling back to /tmp for paths");
                PathBuf::from("/tmp")
            },
            PathBuf::from,
        );
        let cfg = home_dir.join(".config").join("bdk").join("config.toml");
        let data = home_dir.join(".local").join("share").join("bdk");
        Self {
            config_file: cfg,
            jsonl_log: data.join("kitchen.jsonl"),
        }
    }
}

impl Config {
    /// Default configuration path.
    #[must_use]
    pub fn default_path() -> PathBuf {
        PathsConfig::default().config_file
    }

    /// Load config from default or explicit path, then apply env overrides.
    ///
    /// Missing config file is not an error when loading from the default path;
    /// defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path_buf = path.map_or_else(Self::default_path, Path::to_path_buf);
        let is_explicit_path = path.is_some();

        let mut cfg = if path_buf.exists() {
            let raw = fs::read_to_string(&path_buf).map_err(|source| BdkError::Io {
                path: path_buf.clone(),
                source,
            })?;
            let parsed: Self = toml::from_str(&raw)?;
            parsed
        } else if is_explicit_path {
            return Err(BdkError::MissingConfig { path: path_buf });
        } else {
            Self::default()
        };

        cfg.paths.config_file = path_buf;
        cfg.apply_env_overrides()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Effective log file location (override or default).
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.log
            .file
            .clone()
            .unwrap_or_else(|| self.paths.jsonl_log.clone())
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        set_env_u64("BDK_UI_TICK_RATE_MS", &mut self.ui.tick_rate_ms)?;
        set_env_bool("BDK_UI_REDUCED_MOTION", &mut self.ui.reduced_motion)?;
        set_env_bool("BDK_UI_MOUSE", &mut self.ui.mouse)?;
        set_env_opt_path("BDK_ASSETS_ART_DIR", &mut self.assets.art_dir);
        set_env_opt_path("BDK_MENU_FILE", &mut self.menu.file);
        set_env_bool("BDK_LOG_ENABLED", &mut self.log.enabled)?;
        set_env_opt_path("BDK_LOG_FILE", &mut self.log.file);
        Ok(())
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&self.ui.tick_rate_ms) {
            return Err(BdkError::InvalidConfig {
                details: format!(
                    "ui.tick_rate_ms ({}) must be in [{MIN_TICK_RATE_MS}, {MAX_TICK_RATE_MS}]",
                    self.ui.tick_rate_ms
                ),
            });
        }
        if let Some(dir) = &self.assets.art_dir
            && dir.as_os_str().is_empty()
        {
            return Err(BdkError::InvalidConfig {
                details: "assets.art_dir must not be an empty path".to_string(),
            });
        }
        if let Some(file) = &self.menu.file
            && file.as_os_str().is_empty()
        {
            return Err(BdkError::InvalidConfig {
                details: "menu.file must not be an empty path".to_string(),
            });
        }
        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|raw| !raw.trim().is_empty())
}

fn set_env_u64(name: &str, slot: &mut u64) -> Result<()> {
    if let Some(raw) = env_var(name) {
        *slot = raw.parse::<u64>().map_err(|error| BdkError::ConfigParse {
            context: "env",
            details: format!("{name}={raw:?}: {error}"),
        })?;
    }
    Ok(())
}

fn set_env_bool(name: &str, slot: &mut bool) -> Result<()> {
    if let Some(raw) = env_var(name) {
        *slot = raw.parse::<bool>().map_err(|error| BdkError::ConfigParse {
            context: "env",
            details: format!("{name}={raw:?}: {error}"),
        })?;
    }
    Ok(())
}

fn set_env_opt_path(name: &str, slot: &mut Option<PathBuf>) {
    if let Some(raw) = env_var(name) {
        *slot = Some(PathBuf::from(raw));
    }
}
