// ABOUTME: Progression facade that routes a suggestion request to the engine for the exercise kind
// ABOUTME: Banded and bodyweight exercises step from the latest set; weighted ones use the lookback window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::band_progression::BandProgressionEngine;
use crate::bodyweight_progression::BodyweightProgressionEngine;
use crate::config::ProgressionConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{
    ExerciseKind, ExerciseProfile, LoggedSet, ProgressionSuggestion, WeightSuggestion,
};
use crate::sources::LiftLogSource;
use crate::weight_progression::WeightProgressionEngine;

/// One entry point for all progression decisions
#[derive(Debug, Clone)]
pub struct ProgressionService {
    band_engine: BandProgressionEngine,
    weight_engine: WeightProgressionEngine,
    bodyweight_engine: BodyweightProgressionEngine,
    default_sets: u32,
}

impl ProgressionService {
    /// Validate `config` and build every engine from it
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if the configuration fails validation
    pub fn new(config: &ProgressionConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            band_engine: BandProgressionEngine::new(config)?,
            weight_engine: WeightProgressionEngine::new(config),
            bodyweight_engine: BodyweightProgressionEngine::new(config),
            default_sets: config.default_sets,
        })
    }

    /// Band engine in use
    #[must_use]
    pub const fn band_engine(&self) -> &BandProgressionEngine {
        &self.band_engine
    }

    /// Weight engine in use
    #[must_use]
    pub const fn weight_engine(&self) -> &WeightProgressionEngine {
        &self.weight_engine
    }

    /// Bodyweight engine in use
    #[must_use]
    pub const fn bodyweight_engine(&self) -> &BodyweightProgressionEngine {
        &self.bodyweight_engine
    }

    /// Suggest the next session for one exercise
    ///
    /// Without usable history the result has no load, `target_reps` reps,
    /// and the configured default set count.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if `target_reps` is zero, or any
    /// error from [`WeightProgressionEngine::suggest_next_weight`]
    pub fn suggest(
        &self,
        profile: &ExerciseProfile,
        history: &[LoggedSet],
        target_reps: u32,
        now: DateTime<Utc>,
    ) -> AppResult<ProgressionSuggestion> {
        if target_reps == 0 {
            return Err(AppError::out_of_range("target_reps must be at least 1"));
        }

        let Some(latest) = Self::latest_set(history) else {
            debug!(exercise_id = %profile.id, "No history, returning empty suggestion");
            return Ok(self.empty_suggestion(target_reps));
        };

        match profile.kind {
            ExerciseKind::Banded { band_type } => Ok(self
                .band_engine
                .suggest(latest, band_type)
                .unwrap_or_else(|| self.empty_suggestion(target_reps))),
            ExerciseKind::Bodyweight => {
                let step = self
                    .bodyweight_engine
                    .next_step(latest, profile.add_weight_on_rollover);
                Ok(ProgressionSuggestion {
                    suggested_weight: WeightSuggestion::Suggested(step.weight),
                    reps: step.reps,
                    sets: latest.sets,
                    band_color: None,
                })
            }
            ExerciseKind::Weighted => {
                let suggested_weight =
                    self.weight_engine
                        .suggest_next_weight(history, target_reps, false, now)?;
                Ok(ProgressionSuggestion {
                    suggested_weight,
                    reps: target_reps,
                    sets: latest.sets,
                    band_color: None,
                })
            }
        }
    }

    /// Load the profile and history from `source`, then [`Self::suggest`]
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` if the exercise does not exist,
    /// propagates data source failures, and otherwise fails as
    /// [`Self::suggest`] does
    pub fn suggest_for<S>(
        &self,
        source: &S,
        user_id: Uuid,
        exercise_id: Uuid,
        target_reps: u32,
        now: DateTime<Utc>,
    ) -> AppResult<ProgressionSuggestion>
    where
        S: LiftLogSource + ?Sized,
    {
        let profile = source.exercise_profile(exercise_id)?.ok_or_else(|| {
            AppError::not_found(format!("Exercise {exercise_id}"))
                .with_user_id(user_id)
                .with_resource_id(exercise_id.to_string())
        })?;
        let history = source.logged_sets(user_id, exercise_id)?;
        self.suggest(&profile, &history, target_reps, now)
    }

    /// Most recent set by `performed_at`
    #[must_use]
    pub fn latest_set(history: &[LoggedSet]) -> Option<&LoggedSet> {
        history.iter().max_by_key(|set| set.performed_at)
    }

    const fn empty_suggestion(&self, target_reps: u32) -> ProgressionSuggestion {
        ProgressionSuggestion::none(target_reps, self.default_sets)
    }
}
