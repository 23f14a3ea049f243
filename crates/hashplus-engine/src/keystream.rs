//! Deterministic keystream.
//!
//! HMAC-SHA256 in counter mode: block `i` is
//! `HMAC(key material, "keystream" || i as u64 big-endian)`. The stream is
//! the concatenation of blocks and can be extended indefinitely.

use crate::keying::KeyMaterial;
use hashplus_types::{HashError, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use zeroize::Zeroize;

type HmacSha256 = Hmac<Sha256>;

/// Bytes produced per counter value.
pub const BLOCK_LEN: usize = 32;

const LABEL: &[u8] = b"keystream";

/// Byte stream derived from a key material buffer.
pub struct Keystream {
    mac: HmacSha256,
    counter: u64,
    block: [u8; BLOCK_LEN],
    pos: usize,
}

impl Keystream {
    /// Start a keystream at block zero.
    pub fn new(key: &KeyMaterial) -> Result<Self> {
        let mac = HmacSha256::new_from_slice(key.as_bytes())
            .map_err(|e| HashError::Bug(format!("HMAC rejected key material: {}", e)))?;
        Ok(Self {
            mac,
            counter: 0,
            block: [0; BLOCK_LEN],
            pos: BLOCK_LEN,
        })
    }

    /// Next byte of the stream.
    pub fn next_byte(&mut self) -> u8 {
        if self.pos == BLOCK_LEN {
            self.refill();
        }
        let byte = self.block[self.pos];
        self.pos += 1;
        byte
    }

    /// Number of blocks computed so far.
    pub fn blocks(&self) -> u64 {
        self.counter
    }

    fn refill(&mut self) {
        let mut mac = self.mac.clone();
        mac.update(LABEL);
        mac.update(&self.counter.to_be_bytes());
        self.block = mac.finalize().into_bytes().into();
        self.counter = self.counter.wrapping_add(1);
        self.pos = 0;
    }
}

impl Iterator for Keystream {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.next_byte())
    }
}

impl Drop for Keystream {
    fn drop(&mut self) {
        self.block.zeroize();
    }
}
