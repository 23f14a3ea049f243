//! Key material assembly.
//!
//! The key material is a domain label followed by a field count and
//! length-prefixed fields: tag, secret, and the seed when it participates.
//! Each field is an 8-byte big-endian length followed by its UTF-8 bytes, so
//! no two different field tuples encode to the same bytes.

use hashplus_types::HashConfig;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Domain label prefixed to every key material buffer.
pub const DOMAIN: &[u8] = b"hashplus/v1";

/// Assembled keying input. Wiped from memory when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    bytes: Vec<u8>,
}

impl KeyMaterial {
    /// Assemble the key material for one derivation.
    ///
    /// The seed is included only outside compatibility mode.
    pub fn assemble(config: &HashConfig, secret: &str) -> Self {
        let seed = config.effective_seed();
        let field_count: u8 = if seed.is_some() { 3 } else { 2 };

        let capacity = DOMAIN.len()
            + 1
            + 8 * field_count as usize
            + config.tag.len()
            + secret.len()
            + seed.map_or(0, str::len);
        let mut bytes = Vec::with_capacity(capacity);

        bytes.extend_from_slice(DOMAIN);
        bytes.push(field_count);
        push_field(&mut bytes, config.tag.as_bytes());
        push_field(&mut bytes, secret.as_bytes());
        if let Some(seed) = seed {
            push_field(&mut bytes, seed.as_bytes());
        }

        Self { bytes }
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

fn push_field(buf: &mut Vec<u8>, field: &[u8]) {
    buf.extend_from_slice(&(field.len() as u64).to_be_bytes());
    buf.extend_from_slice(field);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashplus_types::{HashOptions, Policy, Strength};

    fn config(tag: &str, seed: &str, compatibility_mode: bool) -> HashConfig {
        let policy = Policy::new(8, Strength::Special, seed).unwrap();
        HashConfig::new(tag, policy).with_options(HashOptions { compatibility_mode })
    }

    #[test]
    fn test_field_boundaries_are_unambiguous() {
        let left = KeyMaterial::assemble(&config("a", "s", false), "bc");
        let right = KeyMaterial::assemble(&config("ab", "s", false), "c");
        assert_ne!(left, right);

        let left = KeyMaterial::assemble(&config("t", "x", false), "secret");
        let right = KeyMaterial::assemble(&config("t", "", false), "secretx");
        assert_ne!(left, right);
    }

    #[test]
    fn test_layout() {
        let key = KeyMaterial::assemble(&config("t", "s", false), "pw");
        let mut expected = DOMAIN.to_vec();
        expected.push(3);
        expected.extend_from_slice(&1u64.to_be_bytes());
        expected.extend_from_slice(b"t");
        expected.extend_from_slice(&2u64.to_be_bytes());
        expected.extend_from_slice(b"pw");
        expected.extend_from_slice(&1u64.to_be_bytes());
        expected.extend_from_slice(b"s");
        assert_eq!(key.as_bytes(), expected.as_slice());
    }

    #[test]
    fn test_compatibility_mode_drops_seed() {
        let a = KeyMaterial::assemble(&config("t", "seed-one", true), "pw");
        let b = KeyMaterial::assemble(&config("t", "seed-two", true), "pw");
        assert_eq!(a, b);

        // An empty seed still differs from no seed at all.
        let empty = KeyMaterial::assemble(&config("t", "", false), "pw");
        assert_ne!(a, empty);
    }

    #[test]
    fn test_debug_redacts_bytes() {
        let key = KeyMaterial::assemble(&config("t", "s", false), "hunter2");
        let debug = format!("{:?}", key);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("len"));
    }
}
