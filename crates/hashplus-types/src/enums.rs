//! Common enumerations used throughout hashplus.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{HashError, Result};

/// Log level enumeration for the logging system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// No logging
    None,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Detailed trace messages
    Trace,
}

impl FromStr for LogLevel {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "NONE" => Ok(LogLevel::None),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(HashError::Config(format!("Invalid log level: {}", s))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::None => write!(f, "NONE"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Trace => write!(f, "TRACE"),
        }
    }
}

/// Character-strength class of a derived hash.
///
/// Selects both the output alphabet and the class that must appear at least
/// once in the output. The numeric codes `0`, `1` and `2` are the legacy
/// encodings stored by older configurations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    /// Decimal digits only
    Digits,
    /// Letters and digits, at least one digit
    Alphanumeric,
    /// Letters, digits and punctuation, at least one punctuation character
    #[default]
    Special,
}

impl Strength {
    /// All strengths in ascending order.
    pub const ALL: [Strength; 3] = [Strength::Digits, Strength::Alphanumeric, Strength::Special];

    /// Legacy numeric code of this strength.
    pub fn code(self) -> u8 {
        match self {
            Strength::Digits => 0,
            Strength::Alphanumeric => 1,
            Strength::Special => 2,
        }
    }
}

impl TryFrom<u8> for Strength {
    type Error = HashError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Strength::Digits),
            1 => Ok(Strength::Alphanumeric),
            2 => Ok(Strength::Special),
            _ => Err(HashError::InvalidPolicy(format!("Unknown strength code: {}", code))),
        }
    }
}

impl FromStr for Strength {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "digits" | "digit" => Ok(Strength::Digits),
            "alphanumeric" | "alphanum" => Ok(Strength::Alphanumeric),
            "special" => Ok(Strength::Special),
            other => match other.parse::<u8>() {
                Ok(code) => Strength::try_from(code),
                Err(_) => Err(HashError::InvalidPolicy(format!("Unknown strength: {}", s))),
            },
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Digits => write!(f, "digits"),
            Strength::Alphanumeric => write!(f, "alphanumeric"),
            Strength::Special => write!(f, "special"),
        }
    }
}

/// Accepts a strength name or its legacy code.
struct StrengthVisitor;

impl<'de> Visitor<'de> for StrengthVisitor {
    type Value = Strength;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a strength name or a code 0, 1 or 2")
    }

    fn visit_u64<E: de::Error>(self, code: u64) -> std::result::Result<Strength, E> {
        u8::try_from(code)
            .map_err(|_| HashError::InvalidPolicy(format!("Unknown strength code: {}", code)))
            .and_then(Strength::try_from)
            .map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, code: i64) -> std::result::Result<Strength, E> {
        match u64::try_from(code) {
            Ok(code) => self.visit_u64(code),
            Err(_) => Err(E::custom(HashError::InvalidPolicy(format!(
                "Unknown strength code: {}",
                code
            )))),
        }
    }

    fn visit_f64<E: de::Error>(self, code: f64) -> std::result::Result<Strength, E> {
        Err(E::custom(HashError::InvalidPolicy(format!(
            "Unknown strength code: {}",
            code
        ))))
    }

    fn visit_str<E: de::Error>(self, name: &str) -> std::result::Result<Strength, E> {
        name.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Strength {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(StrengthVisitor)
    }
}
