// ABOUTME: Logged set and exercise profile models supplied by the persistence layer
// ABOUTME: Read-only inputs to the band, bodyweight, and weight progression engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::BandType;

const fn default_sets() -> u32 {
    1
}

/// One historical lift log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedSet {
    /// Load used (added load for bodyweight movements), never negative
    pub weight: f64,
    /// Repetitions performed, at least 1
    pub reps: u32,
    /// Number of sets logged at this weight and rep count
    #[serde(default = "default_sets")]
    pub sets: u32,
    /// Band used, for banded exercises
    #[serde(default)]
    pub band_color: Option<String>,
    /// When the set was performed
    pub performed_at: DateTime<Utc>,
}

impl LoggedSet {
    /// Create a single-set log entry
    #[must_use]
    pub fn new(weight: f64, reps: u32, performed_at: DateTime<Utc>) -> Self {
        Self {
            weight,
            reps,
            sets: 1,
            band_color: None,
            performed_at,
        }
    }

    /// Set the number of sets
    #[must_use]
    pub fn with_sets(mut self, sets: u32) -> Self {
        self.sets = sets;
        self
    }

    /// Attach a band color
    #[must_use]
    pub fn with_band(mut self, color: impl Into<String>) -> Self {
        self.band_color = Some(color.into());
        self
    }
}

/// Loading mechanism of an exercise, which selects the progression engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExerciseKind {
    /// External load (barbell, dumbbell, machine)
    Weighted,
    /// Bodyweight movement, optionally with added load
    Bodyweight,
    /// Band-loaded or band-assisted movement
    Banded {
        /// Whether the band resists or assists
        band_type: BandType,
    },
}

/// Exercise metadata plus the user's progression preference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseProfile {
    /// Exercise identifier
    pub id: Uuid,
    /// Loading mechanism
    pub kind: ExerciseKind,
    /// Bodyweight only: add weight instead of reps once the rep ceiling is reached
    #[serde(default)]
    pub add_weight_on_rollover: bool,
}

impl ExerciseProfile {
    /// Create a profile with the rollover preference disabled
    #[must_use]
    pub const fn new(id: Uuid, kind: ExerciseKind) -> Self {
        Self {
            id,
            kind,
            add_weight_on_rollover: false,
        }
    }

    /// Enable or disable weight rollover
    #[must_use]
    pub const fn with_weight_rollover(mut self, enabled: bool) -> Self {
        self.add_weight_on_rollover = enabled;
        self
    }

    /// Whether the exercise is a bodyweight movement
    #[must_use]
    pub const fn is_bodyweight(&self) -> bool {
        matches!(self.kind, ExerciseKind::Bodyweight)
    }
}
