//! Configuration types and structures.

use serde::{Deserialize, Serialize};
use crate::enums::{LogLevel, Strength};
use crate::bail;
use crate::errors::{HashError, Result};

/// Output length used when no policy length is configured.
pub const DEFAULT_LENGTH: usize = 16;

/// Longest output a policy may request.
pub const MAX_LENGTH: usize = 4096;

/// Output policy: how long the hash is, which alphabet it uses, and the seed
/// mixed into the key material.
///
/// Fields are private so a `Policy` can only exist with a valid length.
///
/// # Example
///
/// ```
/// use hashplus_types::{Policy, Strength};
///
/// let policy = Policy::new(12, Strength::Alphanumeric, "1f0c").unwrap();
/// assert_eq!(policy.length(), 12);
/// assert_eq!(policy.strength(), Strength::Alphanumeric);
/// assert_eq!(policy.seed(), "1f0c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PolicyRepr")]
pub struct Policy {
    length: usize,
    strength: Strength,
    seed: String,
}

impl Policy {
    /// Create a new validated policy.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPolicy` if `length` is zero or above `MAX_LENGTH`.
    pub fn new(length: usize, strength: Strength, seed: impl Into<String>) -> Result<Self> {
        check_length(length)?;
        Ok(Self {
            length,
            strength,
            seed: seed.into(),
        })
    }

    /// Exact number of characters in the output.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Strength class of the output.
    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Seed mixed into the key material outside compatibility mode.
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Return a copy of this policy with a different seed.
    pub fn with_seed(&self, seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            ..self.clone()
        }
    }
}

/// Check an output length against `1..=MAX_LENGTH`.
pub fn check_length(length: usize) -> Result<()> {
    if length == 0 {
        bail!(InvalidPolicy, "length must be at least 1");
    }
    if length > MAX_LENGTH {
        bail!(InvalidPolicy, "length must be at most {}, got {}", MAX_LENGTH, length);
    }
    Ok(())
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            strength: Strength::default(),
            seed: String::new(),
        }
    }
}

#[derive(Deserialize)]
struct PolicyRepr {
    #[serde(default = "default_length")]
    length: usize,
    #[serde(default)]
    strength: Strength,
    #[serde(default)]
    seed: String,
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

impl TryFrom<PolicyRepr> for Policy {
    type Error = HashError;

    fn try_from(repr: PolicyRepr) -> Result<Self> {
        Policy::new(repr.length, repr.strength, repr.seed)
    }
}

/// Options that change how the key material is assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashOptions {
    /// Leave the seed out of the key material (legacy behavior)
    #[serde(default)]
    pub compatibility_mode: bool,
}

impl HashOptions {
    /// Options for the legacy, seedless derivation.
    pub fn compatibility() -> Self {
        Self {
            compatibility_mode: true,
        }
    }
}

/// Per-call configuration of the derivation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashConfig {
    /// Identifies the calling context (usually a site name)
    pub tag: String,
    /// Key material options
    #[serde(default)]
    pub options: HashOptions,
    /// Output policy
    pub policy: Policy,
}

impl HashConfig {
    /// Create a config with default options.
    pub fn new(tag: impl Into<String>, policy: Policy) -> Self {
        Self {
            tag: tag.into(),
            options: HashOptions::default(),
            policy,
        }
    }

    /// Replace the options.
    pub fn with_options(mut self, options: HashOptions) -> Self {
        self.options = options;
        self
    }

    /// Seed that actually participates in the key material.
    pub fn effective_seed(&self) -> Option<&str> {
        if self.options.compatibility_mode {
            None
        } else {
            Some(self.policy.seed())
        }
    }
}

/// Log configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level for this output
    pub level: LogLevel,
    /// Log format (pretty, json, compact)
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format with colors
    Pretty,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}
