//! Tests for configuration file loading.

use super::*;
use crate::model::EdgeInsets;
use serial_test::serial;
use std::env;
use std::fs;

/// Write `contents` to a uniquely named file in the temp dir.
fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("bubblekit_test_{name}.toml"));
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_contains_bubblekit_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("bubblekit") && path_str.ends_with("config.toml"),
        "Path should contain 'bubblekit' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = write_temp_config(
        "valid",
        r#"
cache_capacity = 250
display_scale = 2.0
log_file_path = "/tmp/bubblekit-test.log"

[style]
tail_width = 8.0
hide_sender_names = true

[style.text]
font_size = 17.0

[style.photo.sizes]
aspect_ratio_min = 0.8
"#,
    );

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.cache_capacity, Some(250));
    assert_eq!(config.display_scale, Some(2.0));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/bubblekit-test.log"))
    );

    let style = config.style.expect("style section");
    assert_eq!(style.tail_width, 8.0);
    assert!(style.hide_sender_names);
    assert_eq!(style.text.font_size, 17.0);
    assert_eq!(style.photo.sizes.aspect_ratio_min, 0.8);
    // Unnamed fields keep their defaults.
    assert_eq!(style.photo.sizes.aspect_ratio_max, 1.10);
    assert_eq!(
        style.text.incoming_insets,
        EdgeInsets::new(10.0, 19.0, 10.0, 15.0)
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = write_temp_config("invalid", "cache_capacity = [not valid");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Invalid TOML should return ParseError, got: {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_non_positive_scale() {
    let config_path = write_temp_config("bad_scale", "display_scale = 0.0");

    let result = load_config_file(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"dark\"");
    assert!(result.is_err(), "Unknown top-level keys should be rejected");

    let result: Result<ConfigFile, _> = toml::from_str("[style]\ncorner_radius = 4.0");
    assert!(result.is_err(), "Unknown style keys should be rejected");
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let style = StyleConfig {
        tail_width: 4.0,
        ..StyleConfig::default()
    };
    let config_file = ConfigFile {
        cache_capacity: Some(10),
        display_scale: Some(3.0),
        log_file_path: None,
        style: Some(style.clone()),
    };

    let resolved = merge_config(Some(config_file));
    assert_eq!(resolved.cache_capacity, 10);
    assert_eq!(resolved.display_scale, DisplayScale::new(3.0));
    assert_eq!(resolved.style, style);
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.cache_capacity, 1000);
    assert_eq!(config.display_scale, DisplayScale::ONE);
    assert_eq!(config.style, StyleConfig::default());
    assert_eq!(config.cache_config().capacity, 1000);
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(bubblekit_cache_capacity)]
fn apply_env_overrides_respects_cache_capacity() {
    let _guard = EnvGuard::new(CACHE_CAPACITY_ENV_VAR);
    env::set_var(CACHE_CAPACITY_ENV_VAR, "42");

    let result = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(result.cache_capacity, 42);
}

#[test]
#[serial(bubblekit_cache_capacity)]
fn apply_env_overrides_ignores_invalid_capacity() {
    let _guard = EnvGuard::new(CACHE_CAPACITY_ENV_VAR);
    env::set_var(CACHE_CAPACITY_ENV_VAR, "lots");

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(bubblekit_cache_capacity)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(CACHE_CAPACITY_ENV_VAR);

    let base = ResolvedConfig::default();
    assert_eq!(
        apply_env_overrides(base.clone()),
        base,
        "Config should be unchanged when BUBBLEKIT_CACHE_CAPACITY not set"
    );
}

#[test]
#[serial(bubblekit_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let explicit_path = write_temp_config("explicit", "cache_capacity = 1");
    let env_path = write_temp_config("env", "cache_capacity = 2");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .expect("explicit config should load")
        .expect("explicit config exists");
    assert_eq!(
        config.cache_capacity,
        Some(1),
        "Should use explicit path, not BUBBLEKIT_CONFIG env var"
    );

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(bubblekit_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let env_path = write_temp_config("env_only", "cache_capacity = 3");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(None)
        .expect("env config should load")
        .expect("env config exists");
    assert_eq!(config.cache_capacity, Some(3));

    fs::remove_file(env_path).ok();
}

#[test]
fn apply_cli_overrides_applies_only_given_flags() {
    let base = ResolvedConfig::default();

    let unchanged = apply_cli_overrides(base.clone(), None, None, None);
    assert_eq!(unchanged, base);

    let overridden = apply_cli_overrides(
        base.clone(),
        Some(5),
        Some(2.0),
        Some(PathBuf::from("/tmp/cli.log")),
    );
    assert_eq!(overridden.cache_capacity, 5);
    assert_eq!(overridden.display_scale, DisplayScale::new(2.0));
    assert_eq!(overridden.log_file_path, PathBuf::from("/tmp/cli.log"));
    assert_eq!(overridden.style, base.style);
}

#[test]
#[serial(bubblekit_cache_capacity)]
fn precedence_chain_defaults_to_cli() {
    let _guard = EnvGuard::new(CACHE_CAPACITY_ENV_VAR);

    // Config file sets capacity and scale
    let config_file = ConfigFile {
        cache_capacity: Some(100),
        display_scale: Some(2.0),
        ..ConfigFile::default()
    };
    let merged = merge_config(Some(config_file));
    assert_eq!(merged.cache_capacity, 100);

    // Env var overrides the file
    env::set_var(CACHE_CAPACITY_ENV_VAR, "200");
    let with_env = apply_env_overrides(merged);
    assert_eq!(with_env.cache_capacity, 200);
    assert_eq!(with_env.display_scale, DisplayScale::new(2.0));

    // CLI overrides everything
    let final_config = apply_cli_overrides(with_env, Some(300), None, None);
    assert_eq!(final_config.cache_capacity, 300);
    assert_eq!(final_config.display_scale, DisplayScale::new(2.0));
}
