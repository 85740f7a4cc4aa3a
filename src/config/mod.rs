//! Configuration module.
//!
//! Settings resolve through four layers, each overriding the previous one:
//! built-in defaults, the TOML config file, environment variables, and CLI
//! flags. See [`loader`] for the individual steps.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

/// Run the whole precedence chain up to, but not including, CLI flags.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn resolve(config_path: Option<std::path::PathBuf>) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    Ok(apply_env_overrides(merge_config(file)))
}
