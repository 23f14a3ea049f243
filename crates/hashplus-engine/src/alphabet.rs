//! Output alphabets and class requirements per strength.

use hashplus_types::Strength;

/// Decimal digits.
pub const DIGITS: &[u8] = b"0123456789";

/// Punctuation allowed in `Special` output.
pub const PUNCTUATION: &[u8] = b"!@#$%^&*()\\/+'\",.-";

const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const SPECIAL: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()\\/+'\",.-";

/// Symbols a strength draws from, and the class that must appear in the
/// output at least once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: &'static [u8],
    required: Option<&'static [u8]>,
}

impl Alphabet {
    /// Alphabet for a strength.
    pub fn for_strength(strength: Strength) -> Self {
        match strength {
            Strength::Digits => Self {
                symbols: DIGITS,
                required: None,
            },
            Strength::Alphanumeric => Self {
                symbols: ALPHANUMERIC,
                required: Some(DIGITS),
            },
            Strength::Special => Self {
                symbols: SPECIAL,
                required: Some(PUNCTUATION),
            },
        }
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Map a stream byte onto a symbol by modulo reduction.
    pub fn symbol(&self, byte: u8) -> u8 {
        self.symbols[byte as usize % self.symbols.len()]
    }

    /// Whether `c` belongs to this alphabet.
    pub fn contains(&self, c: u8) -> bool {
        self.symbols.contains(&c)
    }

    /// Whether a candidate meets the class requirement.
    pub fn satisfies(&self, candidate: &[u8]) -> bool {
        match self.required {
            None => true,
            Some(class) => candidate.iter().any(|c| class.contains(c)),
        }
    }
}
