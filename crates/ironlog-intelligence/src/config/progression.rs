// ABOUTME: Progression configuration for band, weight, and bodyweight engines
// ABOUTME: Defaults come from named constants; validate() rejects unusable thresholds and bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::constants::{bands, bodyweight_progression, weight_progression};
use crate::models::Band;

/// Tunables shared by the progression engines
///
/// Partial documents are accepted: any field left out of YAML or JSON input
/// falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    /// Available bands, in any order
    pub bands: Vec<Band>,
    /// Reps at which the band engine moves to the next harder band
    pub max_reps_before_band_change: u32,
    /// Reps assigned right after a band change
    pub default_reps_on_band_change: u32,
    /// Weeks of history the weight engine considers
    pub lookback_weeks: u32,
    /// Load added on top of the projected target-rep weight
    pub default_increment: f64,
    /// Sets suggested when there is no history to carry over
    pub default_sets: u32,
    /// Reps assigned after a bodyweight rollover adds load
    pub bodyweight_min_reps: u32,
    /// Reps at which a bodyweight rollover adds load
    pub bodyweight_max_reps: u32,
    /// Load added on a bodyweight rollover
    pub bodyweight_weight_increment: f64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            bands: bands::DEFAULT_BANDS
                .iter()
                .map(|&(color, resistance, order)| Band::new(color, resistance, order))
                .collect(),
            max_reps_before_band_change: bands::MAX_REPS_BEFORE_BAND_CHANGE,
            default_reps_on_band_change: bands::DEFAULT_REPS_ON_BAND_CHANGE,
            lookback_weeks: weight_progression::LOOKBACK_WEEKS,
            default_increment: weight_progression::DEFAULT_INCREMENT,
            default_sets: weight_progression::DEFAULT_SETS,
            bodyweight_min_reps: bodyweight_progression::MIN_REPS,
            bodyweight_max_reps: bodyweight_progression::MAX_REPS,
            bodyweight_weight_increment: bodyweight_progression::WEIGHT_INCREMENT,
        }
    }
}

impl ProgressionConfig {
    /// Parse YAML text and validate the result
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed YAML, or any error from
    /// [`Self::validate`]
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse JSON text and validate the result
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON, or any error from
    /// [`Self::validate`]
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Lookback window as a duration
    #[must_use]
    pub fn lookback(&self) -> Duration {
        Duration::weeks(i64::from(self.lookback_weeks))
    }

    /// Check thresholds and the band set
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingField` if there are no bands or a band has an empty color
    /// - `ConfigError::DuplicateBand` if two bands share a color or an order value
    /// - `ConfigError::InvalidRange` for zero rep/set/week thresholds, a bodyweight
    ///   minimum above the maximum, or negative or non-finite loads
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_bands()?;

        let positive = [
            ("max_reps_before_band_change", self.max_reps_before_band_change),
            ("default_reps_on_band_change", self.default_reps_on_band_change),
            ("lookback_weeks", self.lookback_weeks),
            ("default_sets", self.default_sets),
            ("bodyweight_min_reps", self.bodyweight_min_reps),
            ("bodyweight_max_reps", self.bodyweight_max_reps),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(ConfigError::InvalidRange(format!(
                    "{name} must be at least 1"
                )));
            }
        }

        if self.bodyweight_min_reps > self.bodyweight_max_reps {
            return Err(ConfigError::InvalidRange(format!(
                "bodyweight_min_reps ({}) must not exceed bodyweight_max_reps ({})",
                self.bodyweight_min_reps, self.bodyweight_max_reps
            )));
        }

        let loads = [
            ("default_increment", self.default_increment),
            ("bodyweight_weight_increment", self.bodyweight_weight_increment),
        ];
        for (name, value) in loads {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidRange(format!(
                    "{name} must be a finite, non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }

    fn validate_bands(&self) -> Result<(), ConfigError> {
        if self.bands.is_empty() {
            return Err(ConfigError::MissingField("bands"));
        }

        for band in &self.bands {
            if band.color.trim().is_empty() {
                return Err(ConfigError::MissingField("bands.color"));
            }
            if !band.resistance_value.is_finite() {
                return Err(ConfigError::InvalidRange(format!(
                    "resistance_value of band '{}' must be finite",
                    band.color
                )));
            }
        }
        ensure_unique_bands(&self.bands)
    }
}

/// Reject band sets where a color or an order value repeats
pub(crate) fn ensure_unique_bands(bands: &[Band]) -> Result<(), ConfigError> {
    let mut colors = HashSet::new();
    let mut orders = HashSet::new();
    for band in bands {
        if !colors.insert(band.color.as_str()) {
            return Err(ConfigError::DuplicateBand(format!(
                "color '{}' appears more than once",
                band.color
            )));
        }
        if !orders.insert(band.order) {
            return Err(ConfigError::DuplicateBand(format!(
                "order {} is used by more than one band",
                band.order
            )));
        }
    }
    Ok(())
}
