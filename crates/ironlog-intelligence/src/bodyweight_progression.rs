// ABOUTME: Bodyweight double progression: add reps, optionally roll over into added load
// ABOUTME: With rollover enabled, reaching the rep ceiling adds a fixed increment and resets reps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ProgressionConfig;
use crate::models::LoggedSet;

/// Added load and reps for the next bodyweight session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyweightStep {
    /// Added load (zero for unloaded bodyweight work)
    pub weight: f64,
    /// Reps per set
    pub reps: u32,
}

/// Reps-or-weight progression for bodyweight movements
///
/// There is no ceiling on added load: every time the rep ceiling is reached
/// with rollover enabled, another increment is added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyweightProgressionEngine {
    min_reps: u32,
    max_reps: u32,
    weight_increment: f64,
}

impl BodyweightProgressionEngine {
    /// Create an engine from configuration
    #[must_use]
    pub const fn new(config: &ProgressionConfig) -> Self {
        Self {
            min_reps: config.bodyweight_min_reps,
            max_reps: config.bodyweight_max_reps,
            weight_increment: config.bodyweight_weight_increment,
        }
    }

    /// Decide the next load and reps from the last set
    ///
    /// With `add_weight_enabled` off, reps keep climbing past the ceiling.
    #[must_use]
    pub fn next_step(&self, last_set: &LoggedSet, add_weight_enabled: bool) -> BodyweightStep {
        if add_weight_enabled && last_set.reps >= self.max_reps {
            let weight = last_set.weight + self.weight_increment;
            debug!(
                from_weight = last_set.weight,
                to_weight = weight,
                reps = self.min_reps,
                "Bodyweight rollover"
            );
            return BodyweightStep {
                weight,
                reps: self.min_reps,
            };
        }

        BodyweightStep {
            weight: last_set.weight,
            reps: last_set.reps.saturating_add(1),
        }
    }
}
