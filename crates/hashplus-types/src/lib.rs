//! # Hashplus Types
//!
//! Core types, enums, and errors shared across all hashplus crates.
//!
//! This crate provides the building blocks for the hashplus derivation
//! engine, including:
//!
//! - The hash configuration (`HashConfig`, `HashOptions`, `Policy`)
//! - The output strength enumeration and log level enumeration
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use hashplus_types::{HashConfig, Policy, Strength};
//!
//! let policy = Policy::new(24, Strength::Special, "seed-value").unwrap();
//! let config = HashConfig::new("mytag", policy);
//! assert_eq!(config.policy.length(), 24);
//! assert!(!config.options.compatibility_mode);
//!
//! // Zero length is rejected at construction
//! assert!(Policy::new(0, Strength::Digits, "").is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod enums;
pub mod config;

// Re-export common types for convenience
pub use errors::{HashError, Result};
pub use enums::{LogLevel, Strength};
pub use config::{HashConfig, HashOptions, Policy, MAX_LENGTH};
