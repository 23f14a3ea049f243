//! # Hashplus Core
//!
//! Settings, logging, and the small string utilities that surround the
//! hashplus derivation engine.
//!
//! This crate provides:
//!
//! - **Configuration**: Multi-layer settings (defaults, file, environment)
//! - **Logging**: `tracing` subscriber setup driven by the settings
//! - **Identifiers**: Seed generation for new policies
//! - **Text**: Tag suffix bumping and registrable-domain extraction
//!
//! ## Example
//!
//! ```
//! use hashplus_core::util::{bump, registrable_domain};
//!
//! assert_eq!(registrable_domain("https://www.example.co.uk/login"), "example");
//! assert_eq!(bump("example"), "example:1");
//! assert_eq!(bump("example:1"), "example:2");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod log;
pub mod util;

// Re-export commonly used items
pub use config::{Config, Settings};
pub use hashplus_types::{HashError, Result};

/// Hashplus library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hashplus application name
pub const APP_NAME: &str = "hashplus";
