// ABOUTME: Progression suggestion models returned by the engines
// ABOUTME: WeightSuggestion keeps "no suggestion" distinct from a zero bodyweight load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Suggested load for the next session
///
/// `Suggested(0.0)` is a real answer (bodyweight only); `NoSuggestion` means
/// history was missing or too old.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightSuggestion {
    /// Not enough qualifying history
    NoSuggestion,
    /// Suggested load
    Suggested(f64),
}

impl WeightSuggestion {
    /// Suggested load, if any
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::NoSuggestion => None,
            Self::Suggested(weight) => Some(*weight),
        }
    }

    /// Whether a load was suggested
    #[must_use]
    pub const fn is_suggested(&self) -> bool {
        matches!(self, Self::Suggested(_))
    }
}

impl From<Option<f64>> for WeightSuggestion {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::NoSuggestion, Self::Suggested)
    }
}

/// What to do next for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionSuggestion {
    /// Load for the next session
    pub suggested_weight: WeightSuggestion,
    /// Reps per set
    pub reps: u32,
    /// Number of sets, carried over from history
    pub sets: u32,
    /// Band to use, for banded exercises
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band_color: Option<String>,
}

impl ProgressionSuggestion {
    /// A suggestion carrying no load recommendation
    #[must_use]
    pub const fn none(reps: u32, sets: u32) -> Self {
        Self {
            suggested_weight: WeightSuggestion::NoSuggestion,
            reps,
            sets,
            band_color: None,
        }
    }
}
