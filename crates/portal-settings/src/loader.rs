//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`PortalSettings::default()`]
//! 2. If `~/.portal-context/settings.json` exists, deep-merge user values over defaults
//! 3. Apply environment variable overrides (highest priority)
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::types::PortalSettings;

/// Env var overriding [`PortalSettings::docs_dir`].
pub const ENV_DOCS_DIR: &str = "PORTAL_CONTEXT_DOCS_DIR";
/// Env var overriding [`PortalSettings::require_docs`].
pub const ENV_REQUIRE_DOCS: &str = "PORTAL_CONTEXT_REQUIRE_DOCS";
/// Env var overriding [`PortalSettings::log_level`].
pub const ENV_LOG_LEVEL: &str = "PORTAL_CONTEXT_LOG_LEVEL";

/// Resolve the path to the settings file (`~/.portal-context/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home)
        .join(".portal-context")
        .join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<PortalSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// If the file does not exist, returns defaults. If the file contains
/// invalid JSON, returns an error.
pub fn load_settings_from_path(path: &Path) -> Result<PortalSettings> {
    let mut settings = read_settings_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Defaults merged with the file at `path`, without env overrides.
fn read_settings_file(path: &Path) -> Result<PortalSettings> {
    let defaults = serde_json::to_value(PortalSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    Ok(serde_json::from_value(merged)?)
}

/// Recursive deep merge of two JSON values.
///
/// - Objects are merged recursively (source overrides target per-key)
/// - Arrays and primitives are replaced entirely by source
/// - Null values in source are skipped (preserving target)
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply `PORTAL_CONTEXT_*` environment variable overrides.
pub fn apply_env_overrides(settings: &mut PortalSettings) {
    apply_overrides_from(settings, |name| std::env::var(name).ok());
}

/// Apply overrides using `lookup` in place of the process environment.
///
/// Empty strings are treated as unset. An unparseable boolean is ignored
/// with a warning.
pub fn apply_overrides_from(
    settings: &mut PortalSettings,
    lookup: impl Fn(&str) -> Option<String>,
) {
    let read = |name: &str| lookup(name).filter(|v| !v.is_empty());

    if let Some(v) = read(ENV_DOCS_DIR) {
        settings.docs_dir = v;
    }
    if let Some(v) = read(ENV_REQUIRE_DOCS) {
        match parse_bool(&v) {
            Some(b) => settings.require_docs = b,
            None => warn!(key = ENV_REQUIRE_DOCS, value = %v, "invalid boolean env var, ignoring"),
        }
    }
    if let Some(v) = read(ENV_LOG_LEVEL) {
        settings.log_level = v;
    }
}

/// Parse a string as a boolean.
///
/// Accepts (case-insensitive): `true`/`1`/`yes`/`on` or `false`/`0`/`no`/`off`.
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SettingsError;
    use serde_json::json;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    // -- deep_merge --

    #[test]
    fn deep_merge_overrides_primitives() {
        let merged = deep_merge(json!({"a": 1, "b": 2}), json!({"b": 3}));
        assert_eq!(merged, json!({"a": 1, "b": 3}));
    }

    #[test]
    fn deep_merge_recurses_into_objects() {
        let merged = deep_merge(
            json!({"outer": {"x": 1, "y": 2}}),
            json!({"outer": {"y": 5}}),
        );
        assert_eq!(merged, json!({"outer": {"x": 1, "y": 5}}));
    }

    #[test]
    fn deep_merge_skips_nulls() {
        let merged = deep_merge(json!({"a": 1}), json!({"a": null}));
        assert_eq!(merged, json!({"a": 1}));
    }

    #[test]
    fn deep_merge_replaces_arrays() {
        let merged = deep_merge(json!({"a": [1, 2]}), json!({"a": [3]}));
        assert_eq!(merged, json!({"a": [3]}));
    }

    // -- file loading --

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = read_settings_file(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, PortalSettings::default());
    }

    #[test]
    fn file_values_merge_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"docsDir": "portal/docs", "requireDocs": false}"#).unwrap();

        let settings = read_settings_file(&path).unwrap();
        assert_eq!(settings.docs_dir, "portal/docs");
        assert!(!settings.require_docs);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn null_in_file_keeps_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"logLevel": null}"#).unwrap();

        let settings = read_settings_file(&path).unwrap();
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = read_settings_file(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn settings_path_under_home() {
        let path = settings_path();
        assert!(path.ends_with(".portal-context/settings.json"));
    }

    // -- env overrides --

    #[test]
    fn overrides_apply() {
        let mut settings = PortalSettings::default();
        apply_overrides_from(
            &mut settings,
            env(&[
                (ENV_DOCS_DIR, "/srv/docs"),
                (ENV_REQUIRE_DOCS, "off"),
                (ENV_LOG_LEVEL, "debug"),
            ]),
        );
        assert_eq!(settings.docs_dir, "/srv/docs");
        assert!(!settings.require_docs);
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn empty_override_is_unset() {
        let mut settings = PortalSettings::default();
        apply_overrides_from(&mut settings, env(&[(ENV_DOCS_DIR, "")]));
        assert_eq!(settings.docs_dir, "docs");
    }

    #[test]
    fn invalid_bool_override_ignored() {
        let mut settings = PortalSettings::default();
        apply_overrides_from(&mut settings, env(&[(ENV_REQUIRE_DOCS, "maybe")]));
        assert!(settings.require_docs);
    }

    #[test]
    fn no_overrides_leaves_settings() {
        let mut settings = PortalSettings::default();
        apply_overrides_from(&mut settings, env(&[]));
        assert_eq!(settings, PortalSettings::default());
    }

    // -- parse_bool --

    #[test]
    fn parse_bool_accepts_variants() {
        for v in ["true", "TRUE", "1", "yes", "On"] {
            assert_eq!(parse_bool(v), Some(true), "{v}");
        }
        for v in ["false", "0", "no", "OFF"] {
            assert_eq!(parse_bool(v), Some(false), "{v}");
        }
        assert_eq!(parse_bool("2"), None);
    }
}
