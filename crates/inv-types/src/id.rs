use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Store-assigned identifier for a [`Material`](crate::Material).
///
/// Identifiers are positive integers chosen by the store; callers never pick
/// them. On the wire a `MaterialId` is a plain JSON number.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(u32);

impl MaterialId {
    /// Create from a raw integer.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The underlying integer.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Parse a lookup key the way request paths are matched against stored ids.
    ///
    /// Surrounding whitespace is ignored and integral decimal forms are
    /// accepted, so `"5"`, `" 5 "` and `"5.0"` all name id `5`. Anything that
    /// is not a non-negative integral number is rejected.
    pub fn parse_loose(s: &str) -> Result<Self, TypeError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TypeError::InvalidId(s.to_string()));
        }
        if let Ok(raw) = trimmed.parse::<u64>() {
            return u32::try_from(raw)
                .map(Self)
                .map_err(|_| TypeError::IdOutOfRange(trimmed.to_string()));
        }
        let value: f64 = trimmed
            .parse()
            .map_err(|_| TypeError::InvalidId(s.to_string()))?;
        if !value.is_finite() || value.fract() != 0.0 || value < 0.0 {
            return Err(TypeError::InvalidId(s.to_string()));
        }
        if value > f64::from(u32::MAX) {
            return Err(TypeError::IdOutOfRange(trimmed.to_string()));
        }
        Ok(Self(value as u32))
    }
}

impl FromStr for MaterialId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_loose(s)
    }
}

impl From<u32> for MaterialId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MaterialId({})", self.0)
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
