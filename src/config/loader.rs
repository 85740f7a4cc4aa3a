//! Configuration file loading with precedence handling.

use crate::layout::cache::{LayoutCacheConfig, DEFAULT_CAPACITY};
use crate::model::DisplayScale;
use crate::style::StyleConfig;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "BUBBLEKIT_CONFIG";

/// Environment variable overriding the layout cache capacity.
pub const CACHE_CAPACITY_ENV_VAR: &str = "BUBBLEKIT_CACHE_CAPACITY";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML, unknown keys or out-of-range values.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/bubblekit/config.toml`:
///
/// ```toml
/// cache_capacity = 2000
/// display_scale = 2.0
///
/// [style]
/// hide_sender_names = true
///
/// [style.photo]
/// outgoing_insets = { top = 10.0, left = 10.0, bottom = 10.0, right = 16.0 }
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Maximum number of models kept per layout cache.
    #[serde(default)]
    pub cache_capacity: Option<usize>,

    /// Pixel density sizes are rounded to.
    #[serde(default)]
    pub display_scale: Option<f32>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Bubble style parameters.
    #[serde(default)]
    pub style: Option<StyleConfig>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Layout cache capacity, per message kind.
    pub cache_capacity: usize,
    /// Pixel grid for size rounding.
    pub display_scale: DisplayScale,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Bubble style parameters.
    pub style: StyleConfig,
}

impl ResolvedConfig {
    /// Cache settings for the layout engines.
    pub fn cache_config(&self) -> LayoutCacheConfig {
        LayoutCacheConfig {
            capacity: self.cache_capacity,
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CAPACITY,
            display_scale: DisplayScale::ONE,
            log_file_path: default_log_path(),
            style: StyleConfig::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/bubblekit/bubblekit.log` on Linux, or the
/// platform's state directory elsewhere. Falls back to the current directory
/// when there is none.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("bubblekit").join("bubblekit.log")
    } else {
        PathBuf::from("bubblekit.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    if let Some(scale) = config.display_scale {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ConfigError::ParseError {
                path,
                reason: format!("display_scale must be positive, got {scale}"),
            });
        }
    }

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/bubblekit/config.toml` on Linux.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bubblekit").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `BUBBLEKIT_CONFIG` environment variable
/// 3. Default path `~/.config/bubblekit/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV_VAR) {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `BUBBLEKIT_CACHE_CAPACITY`: layout cache capacity. Unparseable values
///   are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(CACHE_CAPACITY_ENV_VAR) {
        match raw.trim().parse::<usize>() {
            Ok(capacity) => config.cache_capacity = capacity,
            Err(e) => warn!(
                var = CACHE_CAPACITY_ENV_VAR,
                value = %raw,
                error = %e,
                "ignoring invalid cache capacity"
            ),
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        cache_capacity: config.cache_capacity.unwrap_or(defaults.cache_capacity),
        display_scale: config
            .display_scale
            .map(DisplayScale::new)
            .unwrap_or(defaults.display_scale),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        style: config.style.unwrap_or(defaults.style),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    cache_capacity_override: Option<usize>,
    display_scale_override: Option<f32>,
    log_file_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(capacity) = cache_capacity_override {
        config.cache_capacity = capacity;
    }

    if let Some(scale) = display_scale_override {
        config.display_scale = DisplayScale::new(scale);
    }

    if let Some(path) = log_file_override {
        config.log_file_path = path;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
