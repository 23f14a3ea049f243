//! # Hashplus Engine
//!
//! Deterministic derivation of passwords from a secret, a tag and a policy.
//!
//! The same secret, tag, seed and policy always produce the same output;
//! changing the tag or the seed produces an unrelated one. Derivation runs
//! in three stages:
//! - Key material assembly (`keying`)
//! - HMAC-SHA256 counter-mode keystream (`keystream`)
//! - Alphabet mapping with class requirements (`alphabet`, `generator`)
//!
//! ## Example
//!
//! ```
//! use hashplus_engine::generate_hash;
//! use hashplus_types::{HashConfig, HashOptions, Policy, Strength};
//!
//! let policy = Policy::new(24, Strength::Special, "3f1c9a").unwrap();
//! let config = HashConfig::new("mytag", policy);
//! let hash = generate_hash(&config, "mypassword").unwrap();
//! assert_eq!(hash.len(), 24);
//!
//! // Compatibility mode leaves the seed out.
//! let legacy = config.clone().with_options(HashOptions::compatibility());
//! let other = HashConfig::new("mytag", legacy.policy.with_seed("other"))
//!     .with_options(HashOptions::compatibility());
//! assert_eq!(generate_hash(&legacy, "mypassword").unwrap(), generate_hash(&other, "mypassword").unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod generator;
pub mod keying;
pub mod keystream;
pub mod tags;

pub use generator::{derive, HashGenerator, MAX_ATTEMPTS};
pub use hashplus_core::util::new_id;
pub use hashplus_types::{HashConfig, HashError, HashOptions, Policy, Result, Strength};

/// Alias of [`derive`].
pub fn generate_hash(config: &HashConfig, secret: &str) -> Result<String> {
    derive(config, secret)
}
