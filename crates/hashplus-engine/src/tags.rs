//! Tag helpers.

use hashplus_core::util::{bump, registrable_domain};
use hashplus_types::{HashConfig, Policy};

/// Config whose tag is the registrable domain of `url`.
pub fn for_url(url: &str, policy: Policy) -> HashConfig {
    HashConfig::new(registrable_domain(url), policy)
}

/// Copy of `config` with its tag suffix bumped (`site` to `site:1`).
///
/// Rotates the derived hash without changing the secret or the seed.
pub fn rotate(config: &HashConfig) -> HashConfig {
    HashConfig {
        tag: bump(&config.tag),
        ..config.clone()
    }
}
