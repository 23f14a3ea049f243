//! Error types for hashplus operations.

use crate::enums::Strength;
use thiserror::Error;

/// The main error type for hashplus operations.
///
/// Derivation itself only ever fails with `InvalidPolicy` or
/// `ConstraintUnsatisfiable`; the remaining variants come from the settings
/// and logging layers.
#[derive(Error, Debug)]
pub enum HashError {
    /// Malformed policy: zero length or an unrecognized strength
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    /// The bounded resampling loop ran out of attempts
    #[error("Could not satisfy {strength} class requirement after {attempts} attempts")]
    ConstraintUnsatisfiable {
        /// Strength whose class predicate could not be met
        strength: Strength,
        /// Number of candidate windows examined
        attempts: usize,
    },

    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal bug - should never happen in production
    #[error("Bug detected: {0}\n\nThis is an internal error. Please report this issue at:\nhttps://github.com/hashplus/hashplus-rs/issues")]
    Bug(String),
}

/// A specialized Result type for hashplus operations.
pub type Result<T> = std::result::Result<T, HashError>;

/// Helper macro to bail out with a HashError
///
/// This is used for expected error conditions.
///
/// # Example
///
/// ```ignore
/// if length == 0 {
///     bail!(InvalidPolicy, "length must be at least 1, got {}", length);
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::HashError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::HashError::$variant(format!($fmt, $($arg)*)))
    };
}
