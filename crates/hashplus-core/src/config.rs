//! Configuration management for hashplus.
//!
//! This module provides multi-layer configuration support with:
//! - Built-in defaults
//! - File-based configuration (YAML)
//! - Environment variable overrides
//!
//! ## Configuration Layers
//!
//! Configuration values are resolved in this priority order:
//! 1. Environment variables (`HASHPLUS_*`)
//! 2. Values loaded from file
//! 3. Default values
//!
//! Environment variables map onto dotted keys by stripping the `HASHPLUS_`
//! prefix, lowercasing, and treating a double underscore as a nesting
//! separator: `HASHPLUS_POLICY__LENGTH=24` sets `policy.length`.
//! Variables whose value is not valid UTF-8 are skipped.
//!
//! ## Example
//!
//! ```no_run
//! use hashplus_core::config::Settings;
//!
//! let settings = Settings::load()?;
//! let policy = settings.policy(hashplus_core::util::new_id())?;
//! assert!(policy.length() >= 1);
//! # Ok::<(), hashplus_core::HashError>(())
//! ```

use hashplus_types::config::{check_length, LogConfig, DEFAULT_LENGTH};
use hashplus_types::{HashError, HashOptions, Policy, Result, Strength};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::util::data::{deep_merge, load_yaml_file};
use crate::util::fs::expand_path;

/// Prefix of environment variables read into the environment layer.
pub const ENV_PREFIX: &str = "HASHPLUS_";

/// Environment variable naming an alternative settings file.
pub const CONFIG_PATH_VAR: &str = "HASHPLUS_CONFIG";

/// Configuration layer priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigLayer {
    /// Default values
    Default = 0,
    /// Values loaded from file
    Loaded = 1,
    /// Values from environment variables
    Environment = 2,
}

impl ConfigLayer {
    /// Layers from lowest to highest priority.
    const ASCENDING: [ConfigLayer; 3] = [
        ConfigLayer::Default,
        ConfigLayer::Loaded,
        ConfigLayer::Environment,
    ];
}

/// Layered configuration store.
///
/// This is the low-level configuration type. For the typed view, see
/// `Settings`.
#[derive(Clone, Debug, Default)]
pub struct Config {
    layers: HashMap<ConfigLayer, Value>,
}

impl Config {
    /// Create a new configuration from a file path.
    ///
    /// If the file doesn't exist, an empty configuration is created.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut layers = HashMap::new();

        if path.exists() {
            let value = load_yaml_file(path).map_err(|e| {
                HashError::Config(format!("Failed to load config file {}: {}", path.display(), e))
            })?;
            if !value.is_object() {
                return Err(HashError::Config(format!(
                    "Config file {} must contain a mapping",
                    path.display()
                )));
            }
            layers.insert(ConfigLayer::Loaded, value);
        }

        Ok(Self { layers })
    }

    /// Install a layer of default values.
    pub fn with_defaults(mut self, defaults: Value) -> Self {
        self.layers.insert(ConfigLayer::Default, defaults);
        self
    }

    /// Fill the environment layer from the process environment.
    pub fn with_environment(self) -> Self {
        let vars = std::env::vars_os().filter_map(|(name, value)| {
            let name = name.into_string().ok()?;
            if !name.starts_with(ENV_PREFIX) {
                return None;
            }
            match value.into_string() {
                Ok(value) => Some((name, value)),
                Err(_) => {
                    warn!("Ignoring {}: value is not valid UTF-8", name);
                    None
                }
            }
        });
        self.with_env_vars(vars)
    }

    /// Fill the environment layer from the given variables.
    ///
    /// Only variables starting with `HASHPLUS_` are considered.
    pub fn with_env_vars(mut self, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut layer = Value::Object(Default::default());

        for (name, raw) in vars {
            let Some(key) = name.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            if key.is_empty() || name == CONFIG_PATH_VAR {
                continue;
            }
            let path = key.to_lowercase().replace("__", ".");
            let value = serde_json::from_str::<Value>(&raw)
                .ok()
                .filter(|v| !v.is_object() && !v.is_array())
                .unwrap_or(Value::String(raw));
            set_value_at_path(&mut layer, &path, value);
        }

        self.layers.insert(ConfigLayer::Environment, layer);
        self
    }

    /// Get merged data from all layers.
    pub fn merged_data(&self) -> Value {
        ConfigLayer::ASCENDING
            .iter()
            .filter_map(|layer| self.layers.get(layer))
            .fold(Value::Object(Default::default()), |merged, data| {
                deep_merge(merged, data.clone())
            })
    }
}

// Helper: Set value at dotted path, creating intermediate objects as needed
fn set_value_at_path(data: &mut Value, path: &str, value: Value) {
    let parts: Vec<&str> = path.split('.').collect();
    let Some((last, parents)) = parts.split_last() else {
        return;
    };

    let mut current = data;
    for part in parents {
        if !current.is_object() {
            *current = Value::Object(Default::default());
        }
        current = match current {
            Value::Object(map) => map
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Default::default())),
            _ => return,
        };
    }

    if !current.is_object() {
        *current = Value::Object(Default::default());
    }
    if let Value::Object(map) = current {
        map.insert(last.to_string(), value);
    }
}

/// Default output policy, without a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDefaults {
    /// Default output length
    #[serde(default = "default_length")]
    pub length: usize,
    /// Default strength
    #[serde(default)]
    pub strength: Strength,
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

impl Default for PolicyDefaults {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            strength: Strength::default(),
        }
    }
}

/// User settings (~/.hashplus/config).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Policy applied to new tags
    #[serde(default)]
    pub policy: PolicyDefaults,

    /// Leave seeds out of the key material by default
    #[serde(default)]
    pub compatibility_mode: bool,

    /// Log configurations
    #[serde(default)]
    pub logs: Vec<LogConfig>,
}

impl Settings {
    /// Load settings from the default location.
    ///
    /// `HASHPLUS_CONFIG` overrides the location.
    pub fn load() -> Result<Self> {
        let path = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) if !path.is_empty() => expand_path(path),
            _ => Self::default_path()?,
        };
        Self::load_from(path)
    }

    /// Load settings from a specific path, with environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Config::load(path)?
            .with_defaults(Self::default().to_value()?)
            .with_environment();
        Self::from_config(&config)
    }

    /// Settings as a configuration layer.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Build the typed view of a layered configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let settings: Settings = serde_json::from_value(config.merged_data())
            .map_err(|e| HashError::Config(format!("Failed to parse settings: {}", e)))?;
        check_length(settings.policy.length)
            .map_err(|e| HashError::Config(format!("policy.length: {}", e)))?;
        Ok(settings)
    }

    /// Get the default path for the settings file.
    pub fn default_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".hashplus").join("config"))
            .ok_or_else(|| HashError::Config("Could not determine home directory".to_string()))
    }

    /// Build a validated policy from the defaults and the given seed.
    pub fn policy(&self, seed: impl Into<String>) -> Result<Policy> {
        Policy::new(self.policy.length, self.policy.strength, seed)
    }

    /// Key material options from the settings.
    pub fn options(&self) -> HashOptions {
        HashOptions {
            compatibility_mode: self.compatibility_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::ffi::OsString;
    use std::fs;
    use std::os::unix::ffi::OsStringExt;
    use tempfile::TempDir;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_config_layers() {
        let mut config = Config::default().with_defaults(json!({"key": "default", "other": 1}));
        assert_eq!(config.merged_data(), json!({"key": "default", "other": 1}));

        config
            .layers
            .insert(ConfigLayer::Loaded, json!({"key": "loaded"}));
        assert_eq!(config.merged_data()["key"], "loaded");

        let config = config.with_env_vars(vars(&[("HASHPLUS_KEY", "env")]));
        assert_eq!(config.merged_data(), json!({"key": "env", "other": 1}));
    }

    #[test]
    fn test_env_vars_nesting_and_types() {
        let config = Config::default().with_env_vars(vars(&[
            ("HASHPLUS_POLICY__LENGTH", "24"),
            ("HASHPLUS_POLICY__STRENGTH", "digits"),
            ("HASHPLUS_COMPATIBILITY_MODE", "true"),
            ("HASHPLUS_CONFIG", "/tmp/ignored"),
            ("PATH", "/usr/bin"),
        ]));

        assert_eq!(
            config.merged_data(),
            json!({
                "policy": {"length": 24, "strength": "digits"},
                "compatibility_mode": true
            })
        );
    }

    #[test]
    fn test_environment_skips_non_utf8_values() {
        std::env::set_var("HASHPLUS_TEST_RAW_BYTES", OsString::from_vec(vec![0xff, 0xfe]));
        std::env::set_var("UNRELATED_RAW_BYTES", OsString::from_vec(vec![0xff, 0xfe]));

        let config = Config::default().with_environment();
        assert!(config.merged_data().get("test_raw_bytes").is_none());

        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from(dir.path().join("missing")).unwrap();
        assert_eq!(settings.policy.length, DEFAULT_LENGTH);

        std::env::remove_var("HASHPLUS_TEST_RAW_BYTES");
        std::env::remove_var("UNRELATED_RAW_BYTES");
    }

    #[test]
    fn test_settings_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path().join("missing")).unwrap();
        let settings = Settings::from_config(&config).unwrap();

        assert_eq!(settings.policy, PolicyDefaults::default());
        assert!(!settings.compatibility_mode);
        assert!(settings.logs.is_empty());

        let policy = settings.policy("seed").unwrap();
        assert_eq!(policy.length(), DEFAULT_LENGTH);
        assert_eq!(policy.strength(), Strength::Special);
    }

    #[test]
    fn test_defaults_layer_fills_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, "policy:\n  strength: digits\n").unwrap();

        let config = Config::load(&path)
            .unwrap()
            .with_defaults(Settings::default().to_value().unwrap());
        assert_eq!(
            config.merged_data()["policy"],
            json!({"length": DEFAULT_LENGTH, "strength": "digits"})
        );

        let settings = Settings::from_config(&config).unwrap();
        assert_eq!(settings.policy.length, DEFAULT_LENGTH);
        assert_eq!(settings.policy.strength, Strength::Digits);
    }

    #[test]
    fn test_settings_from_file_with_env_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        fs::write(
            &path,
            "policy:\n  length: 10\n  strength: 1\ncompatibility_mode: true\nlogs:\n  - level: DEBUG\n    format: json\n",
        )
        .unwrap();

        let config = Config::load(&path)
            .unwrap()
            .with_env_vars(vars(&[("HASHPLUS_POLICY__LENGTH", "20")]));
        let settings = Settings::from_config(&config).unwrap();

        assert_eq!(settings.policy.length, 20);
        assert_eq!(settings.policy.strength, Strength::Alphanumeric);
        assert!(settings.options().compatibility_mode);
        assert_eq!(settings.logs.len(), 1);
    }

    #[test]
    fn test_settings_reject_bad_values() {
        for length in ["0", "4097"] {
            let config =
                Config::default().with_env_vars(vars(&[("HASHPLUS_POLICY__LENGTH", length)]));
            assert!(matches!(Settings::from_config(&config), Err(HashError::Config(_))));
        }

        let config =
            Config::default().with_env_vars(vars(&[("HASHPLUS_POLICY__STRENGTH", "loud")]));
        assert!(matches!(Settings::from_config(&config), Err(HashError::Config(_))));
    }

    #[test]
    fn test_load_rejects_non_mapping() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, "- just\n- a list\n").unwrap();
        assert!(matches!(Config::load(&path), Err(HashError::Config(_))));
    }
}
