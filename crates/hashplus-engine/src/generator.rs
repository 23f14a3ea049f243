//! Hash derivation.
//!
//! A candidate is the next `length` keystream bytes mapped onto the
//! strength's alphabet. A candidate missing the required character class is
//! discarded and the following window of the same stream is tried, up to
//! `MAX_ATTEMPTS` windows. The stream is never reseeded.

use hashplus_core::config::Settings;
use hashplus_types::config::check_length;
use hashplus_types::{HashConfig, HashError, Result};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::alphabet::Alphabet;
use crate::keying::KeyMaterial;
use crate::keystream::Keystream;
use crate::tags;

/// Maximum number of candidate windows examined per derivation.
pub const MAX_ATTEMPTS: usize = 256;

/// Derive the hash of `secret` under `config`.
///
/// The result is exactly `config.policy.length()` characters long, drawn
/// from the strength's alphabet, and contains the strength's required class.
/// Identical inputs always give identical output.
///
/// # Errors
///
/// `InvalidPolicy` for a length outside `1..=MAX_LENGTH`; `ConstraintUnsatisfiable` if no window
/// within `MAX_ATTEMPTS` meets the class requirement.
///
/// # Example
///
/// ```
/// use hashplus_engine::derive;
/// use hashplus_types::{HashConfig, Policy, Strength};
///
/// let config = HashConfig::new("mytag", Policy::new(12, Strength::Alphanumeric, "seed").unwrap());
/// let hash = derive(&config, "mypassword").unwrap();
/// assert_eq!(hash.len(), 12);
/// assert!(hash.chars().any(|c| c.is_ascii_digit()));
/// assert_eq!(hash, derive(&config, "mypassword").unwrap());
/// ```
pub fn derive(config: &HashConfig, secret: &str) -> Result<String> {
    derive_within(config, secret, MAX_ATTEMPTS)
}

pub(crate) fn derive_within(config: &HashConfig, secret: &str, max_attempts: usize) -> Result<String> {
    let length = config.policy.length();
    let strength = config.policy.strength();
    check_length(length)?;

    let alphabet = Alphabet::for_strength(strength);
    let key = KeyMaterial::assemble(config, secret);
    let mut stream = Keystream::new(&key)?;
    let mut candidate = Zeroizing::new(vec![0u8; length]);

    for attempt in 1..=max_attempts {
        for slot in candidate.iter_mut() {
            *slot = alphabet.symbol(stream.next_byte());
        }
        if alphabet.satisfies(&candidate) {
            debug!(
                tag = %config.tag,
                length,
                %strength,
                compatibility_mode = config.options.compatibility_mode,
                attempts = attempt,
                "Derived hash"
            );
            return Ok(candidate.iter().map(|&b| char::from(b)).collect());
        }
    }

    warn!(
        tag = %config.tag,
        length,
        %strength,
        "No candidate met the {} class requirement after {} attempts",
        strength,
        max_attempts
    );
    Err(HashError::ConstraintUnsatisfiable {
        strength,
        attempts: max_attempts,
    })
}

/// Hash generator bound to a set of user settings.
///
/// Builds configs from the settings defaults so callers only supply a tag
/// (or URL), a seed and the secret.
#[derive(Debug, Clone, Default)]
pub struct HashGenerator {
    settings: Settings,
}

impl HashGenerator {
    /// Create a generator from settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Create a generator from the user's settings file and environment.
    pub fn from_user_settings() -> Result<Self> {
        Ok(Self::new(Settings::load()?))
    }

    /// Settings in use.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Config for a tag using the default policy and options.
    pub fn config_for(&self, tag: impl Into<String>, seed: impl Into<String>) -> Result<HashConfig> {
        Ok(HashConfig::new(tag, self.settings.policy(seed)?).with_options(self.settings.options()))
    }

    /// Config for a URL, tagged with its registrable domain.
    pub fn config_for_url(&self, url: &str, seed: impl Into<String>) -> Result<HashConfig> {
        Ok(tags::for_url(url, self.settings.policy(seed)?).with_options(self.settings.options()))
    }

    /// Derive a hash under an explicit config.
    pub fn generate(&self, config: &HashConfig, secret: &str) -> Result<String> {
        derive(config, secret)
    }

    /// Derive a hash for a tag using the default policy.
    pub fn generate_for_tag(&self, tag: &str, seed: &str, secret: &str) -> Result<String> {
        derive(&self.config_for(tag, seed)?, secret)
    }

    /// Derive a hash for a URL using the default policy.
    pub fn generate_for_url(&self, url: &str, seed: &str, secret: &str) -> Result<String> {
        derive(&self.config_for_url(url, seed)?, secret)
    }
}
