// ABOUTME: Band model with band-type and direction enumerations
// ABOUTME: Order drives difficulty comparisons; resistance value is informational
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A color-coded elastic band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Color identifier, unique within a catalog
    pub color: String,
    /// Nominal resistance, informational only
    pub resistance_value: f64,
    /// Position in the catalog; ascending order means more resistance
    pub order: i32,
}

impl Band {
    /// Create a band
    pub fn new(color: impl Into<String>, resistance_value: f64, order: i32) -> Self {
        Self {
            color: color.into(),
            resistance_value,
            order,
        }
    }
}

/// How an exercise uses its band
///
/// For `Resistance` the band makes the movement harder, so a higher order is
/// harder. For `Assistance` the band helps (e.g. assisted pull-ups), so a
/// higher order is easier and "harder" means moving down the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandType {
    /// Band adds resistance
    Resistance,
    /// Band removes load
    Assistance,
}

impl BandType {
    /// Parse band type from string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "resistance" => Some(Self::Resistance),
            "assistance" => Some(Self::Assistance),
            _ => None,
        }
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Resistance => "resistance",
            Self::Assistance => "assistance",
        }
    }
}

impl fmt::Display for BandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BandType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown band type: {s}"))
    }
}

/// Direction of travel through a band catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandDirection {
    /// Toward more difficulty
    Harder,
    /// Toward less difficulty
    Easier,
}

impl BandDirection {
    /// The opposite direction
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Harder => Self::Easier,
            Self::Easier => Self::Harder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_type_parse() {
        assert_eq!(BandType::parse("Resistance"), Some(BandType::Resistance));
        assert_eq!(BandType::parse(" assistance "), Some(BandType::Assistance));
        assert_eq!(BandType::parse("elastic"), None);
        assert!("chain".parse::<BandType>().is_err());
    }

    #[test]
    fn test_band_type_serde_names() {
        let json = serde_json::to_string(&BandType::Assistance).unwrap();
        assert_eq!(json, "\"assistance\"");
    }

    #[test]
    fn test_direction_reversed() {
        assert_eq!(BandDirection::Harder.reversed(), BandDirection::Easier);
        assert_eq!(BandDirection::Easier.reversed(), BandDirection::Harder);
    }
}
