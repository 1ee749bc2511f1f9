//! Seeds: integers, or strings hashed down to an integer.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{Error, Result};

/// Largest integer an IEEE double represents exactly. String hashing
/// stops accumulating once it gets there.
const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// A seed for reproducible sampling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Seed {
    Integer(i64),
    /// Hashed by summing its UTF-16 code units.
    Text(String),
}

impl Seed {
    /// The integer the generator starts from.
    #[must_use]
    pub fn value(&self) -> i64 {
        match self {
            Self::Integer(n) => *n,
            Self::Text(text) => hash_text(text),
        }
    }

    /// Read a seed out of a JSON options value.
    ///
    /// `null` means no seed. Integral numbers (including `42.0`) and
    /// strings are accepted.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSeed`] for fractional or out-of-range numbers,
    /// booleans, arrays and objects.
    pub fn from_value(value: &Value) -> Result<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::String(text) => Ok(Some(Self::Text(text.clone()))),
            Value::Number(n) => {
                if let Some(int) = n.as_i64() {
                    return Ok(Some(Self::Integer(int)));
                }
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                        Ok(Some(Self::Integer(f as i64)))
                    }
                    _ => Err(Error::InvalidSeed(value.to_string())),
                }
            }
            other => Err(Error::InvalidSeed(other.to_string())),
        }
    }
}

/// Sum of UTF-16 code units, saturating at 2^53 - 1.
#[must_use]
pub fn hash_text(text: &str) -> i64 {
    let mut total: i64 = 0;
    for unit in text.encode_utf16() {
        if total >= MAX_SAFE_INTEGER {
            break;
        }
        total += i64::from(unit);
    }
    total
}

impl From<i64> for Seed {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Seed {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u32> for Seed {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Seed {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Anything that parses as an `i64` is an integer seed; everything else
/// is a text seed.
impl FromStr for Seed {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(s.parse::<i64>().map_or_else(|_| Self::Text(s.to_string()), Self::Integer))
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
