//! Reel step size with lenient coercion.
//!
//! A step may come from a CLI flag or a config file, so it is accepted as
//! free-form text and read like a base-10 integer prefix (`"5px"` is `5`).
//! Anything that does not yield a positive integer falls back to `1`.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Increment applied to the counter on every reel tick. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Skip(u64);

impl Skip {
    pub const DEFAULT: Skip = Skip(1);

    /// Build a step from an integer, replacing zero with the default
    pub fn new(step: u64) -> Self {
        if step == 0 {
            Self::DEFAULT
        } else {
            Self(step)
        }
    }

    /// Coerce free-form text into a step
    pub fn parse(raw: &str) -> Self {
        match leading_integer(raw) {
            Some(step) if step > 0 => Self(step as u64),
            _ => {
                warn!("Invalid reel skip '{}', using {}", raw, Self::DEFAULT.0);
                Self::DEFAULT
            }
        }
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for Skip {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Skip {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Read an optionally signed run of decimal digits after leading whitespace.
/// Saturates instead of overflowing; returns None when no digit is present.
fn leading_integer(raw: &str) -> Option<i128> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: Vec<u32> = rest.chars().map_while(|c| c.to_digit(10)).collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .into_iter()
        .fold(0i128, |acc, d| acc.saturating_mul(10).saturating_add(d as i128))
        .min(u64::MAX as i128);

    Some(if negative { -magnitude } else { magnitude })
}

// Accept `skip = 5`, `skip = "5"` or `skip = 2.5` in config files
impl<'de> Deserialize<'de> for Skip {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SkipVisitor;

        impl<'de> Visitor<'de> for SkipVisitor {
            type Value = Skip;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a positive integer or a string starting with one")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Skip, E>
            where
                E: de::Error,
            {
                Ok(Skip::new(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Skip, E>
            where
                E: de::Error,
            {
                if value > 0 {
                    Ok(Skip(value as u64))
                } else {
                    warn!("Invalid reel skip {}, using {}", value, Skip::DEFAULT.0);
                    Ok(Skip::DEFAULT)
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Skip, E>
            where
                E: de::Error,
            {
                if value >= 1.0 {
                    Ok(Skip(value.min(u64::MAX as f64) as u64))
                } else {
                    warn!("Invalid reel skip {}, using {}", value, Skip::DEFAULT.0);
                    Ok(Skip::DEFAULT)
                }
            }

            fn visit_str<E>(self, value: &str) -> Result<Skip, E>
            where
                E: de::Error,
            {
                Ok(Skip::parse(value))
            }
        }

        deserializer.deserialize_any(SkipVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!(Skip::parse("5").get(), 5);
        assert_eq!(Skip::parse("  12").get(), 12);
        assert_eq!(Skip::parse("+3").get(), 3);
    }

    #[test]
    fn test_parse_reads_leading_digits_only() {
        assert_eq!(Skip::parse("5px").get(), 5);
        assert_eq!(Skip::parse("10.9").get(), 10);
    }

    #[test]
    fn test_parse_falls_back_to_one() {
        for raw in ["", "abc", "-4", "0", "px5", "-"] {
            assert_eq!(Skip::parse(raw), Skip::DEFAULT, "input {:?}", raw);
        }
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(Skip::parse("99999999999999999999999999").get(), u64::MAX);
    }

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(Skip::new(0).get(), 1);
        assert_eq!(Skip::new(8).get(), 8);
    }
}
