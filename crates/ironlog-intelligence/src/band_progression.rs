// ABOUTME: Banded progression state machine over (band, reps)
// ABOUTME: Adds reps until the threshold, then moves to the next harder band or plateaus at the hardest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bands::BandCatalog;
use crate::config::ProgressionConfig;
use crate::errors::AppResult;
use crate::models::{BandDirection, BandType, LoggedSet, ProgressionSuggestion, WeightSuggestion};

/// Band and reps for the next session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandStep {
    /// Reps per set
    pub reps: u32,
    /// Band to use
    pub band_color: String,
}

/// Memoryless band progression
///
/// Only the most recent set is consulted. The transition is:
///
/// | last reps              | harder band exists | next                          |
/// |------------------------|--------------------|-------------------------------|
/// | `< max`                | n/a                | same band, `reps + 1`         |
/// | `>= max`               | yes                | harder band, default reps     |
/// | `>= max`               | no                 | same band, same reps          |
///
/// Unknown colors have no harder neighbor and therefore plateau once the
/// rep threshold is reached.
#[derive(Debug, Clone)]
pub struct BandProgressionEngine {
    catalog: BandCatalog,
    max_reps_before_band_change: u32,
    default_reps_on_band_change: u32,
}

impl BandProgressionEngine {
    /// Create an engine from configuration
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if the configured bands collide
    pub fn new(config: &ProgressionConfig) -> AppResult<Self> {
        Ok(Self::with_catalog(
            BandCatalog::from_config(config)?,
            config.max_reps_before_band_change,
            config.default_reps_on_band_change,
        ))
    }

    /// Create an engine around an existing catalog
    #[must_use]
    pub const fn with_catalog(
        catalog: BandCatalog,
        max_reps_before_band_change: u32,
        default_reps_on_band_change: u32,
    ) -> Self {
        Self {
            catalog,
            max_reps_before_band_change,
            default_reps_on_band_change,
        }
    }

    /// The catalog this engine moves through
    #[must_use]
    pub const fn catalog(&self) -> &BandCatalog {
        &self.catalog
    }

    /// Decide the next band and reps from the last set's reps and band
    #[must_use]
    pub fn next_step(&self, reps: u32, band_color: &str, band_type: BandType) -> BandStep {
        if reps < self.max_reps_before_band_change {
            return BandStep {
                reps: reps.saturating_add(1),
                band_color: band_color.to_owned(),
            };
        }

        match self
            .catalog
            .neighbor(band_color, band_type, BandDirection::Harder)
        {
            Some(harder) => {
                debug!(
                    from = band_color,
                    to = %harder.color,
                    %band_type,
                    "Band rollover"
                );
                BandStep {
                    reps: self.default_reps_on_band_change,
                    band_color: harder.color.clone(),
                }
            }
            None => {
                if self.catalog.get(band_color).is_none() {
                    warn!(band_color, "Band color not in catalog, holding reps");
                }
                debug!(band_color, reps, %band_type, "Band plateau");
                BandStep {
                    reps,
                    band_color: band_color.to_owned(),
                }
            }
        }
    }

    /// Build a suggestion from the most recent banded set
    ///
    /// Returns `None` when the set carries no band color. Sets and the logged
    /// weight are passed through unchanged.
    #[must_use]
    pub fn suggest(
        &self,
        last_set: &LoggedSet,
        band_type: BandType,
    ) -> Option<ProgressionSuggestion> {
        let color = last_set.band_color.as_deref()?;
        let step = self.next_step(last_set.reps, color, band_type);
        Some(ProgressionSuggestion {
            suggested_weight: WeightSuggestion::Suggested(last_set.weight),
            reps: step.reps,
            sets: last_set.sets,
            band_color: Some(step.band_color),
        })
    }
}
