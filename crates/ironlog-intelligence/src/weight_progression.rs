// ABOUTME: Lookback-window weight progression for externally loaded exercises
// ABOUTME: Projects the best recent set to the target reps via 1RM and adds a fixed increment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::algorithms::OneRepMaxEstimator;
use crate::config::ProgressionConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{LoggedSet, WeightSuggestion};
use crate::sources::LiftLogSource;

/// Next-load calculator for weighted exercises
///
/// Steps, each exposed on its own:
///
/// 1. [`Self::sets_in_window`] keeps sets performed within the lookback window
/// 2. [`Self::select_basis_set`] picks the heaviest set at the target reps,
///    or the heaviest set overall when none was performed at the target
/// 3. the basis is converted to a 1RM, projected to the target reps, and
///    the configured increment is added
///
/// Bodyweight exercises never get a weight suggestion from this engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightProgressionEngine {
    lookback: Duration,
    default_increment: f64,
}

impl WeightProgressionEngine {
    /// Create an engine from configuration
    #[must_use]
    pub fn new(config: &ProgressionConfig) -> Self {
        Self {
            lookback: config.lookback(),
            default_increment: config.default_increment,
        }
    }

    /// Suggest the next load from in-memory history
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if `target_reps` is zero, or
    /// `ErrorCode::InvalidInput` if the basis set carries an invalid weight
    pub fn suggest_next_weight(
        &self,
        history: &[LoggedSet],
        target_reps: u32,
        is_bodyweight: bool,
        now: DateTime<Utc>,
    ) -> AppResult<WeightSuggestion> {
        if is_bodyweight {
            return Ok(WeightSuggestion::NoSuggestion);
        }
        if target_reps == 0 {
            return Err(AppError::out_of_range("target_reps must be at least 1"));
        }

        let recent = self.sets_in_window(history, now);
        let Some(basis) = Self::select_basis_set(&recent, target_reps) else {
            debug!(
                history = history.len(),
                target_reps, "No qualifying sets in lookback window"
            );
            return Ok(WeightSuggestion::NoSuggestion);
        };

        let one_rep_max = OneRepMaxEstimator::estimate_one_rep_max(basis.weight, basis.reps)?;
        let projected = OneRepMaxEstimator::weight_for_target_reps(one_rep_max, target_reps)?;
        let suggested = projected + self.default_increment;

        debug!(
            basis_weight = basis.weight,
            basis_reps = basis.reps,
            one_rep_max,
            suggested,
            "Weight suggestion"
        );
        Ok(WeightSuggestion::Suggested(suggested))
    }

    /// Suggest the next load, loading the profile and history from `source`
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` if the exercise does not exist,
    /// propagates data source failures, and otherwise fails as
    /// [`Self::suggest_next_weight`] does
    pub fn suggest_for<S>(
        &self,
        source: &S,
        user_id: Uuid,
        exercise_id: Uuid,
        target_reps: u32,
        now: DateTime<Utc>,
    ) -> AppResult<WeightSuggestion>
    where
        S: LiftLogSource + ?Sized,
    {
        let profile = source
            .exercise_profile(exercise_id)?
            .ok_or_else(|| {
                AppError::not_found(format!("Exercise {exercise_id}"))
                    .with_resource_id(exercise_id.to_string())
            })?;

        if profile.is_bodyweight() {
            debug!(%exercise_id, "Bodyweight exercise, no weight suggestion");
            return Ok(WeightSuggestion::NoSuggestion);
        }

        let history = source.logged_sets(user_id, exercise_id)?;
        self.suggest_next_weight(&history, target_reps, false, now)
    }

    /// Sets performed within `now - lookback ..= now`
    ///
    /// Both ends are inclusive. Sets dated after `now` are left out.
    #[must_use]
    pub fn sets_in_window<'a>(
        &self,
        history: &'a [LoggedSet],
        now: DateTime<Utc>,
    ) -> Vec<&'a LoggedSet> {
        let cutoff = now - self.lookback;
        history
            .iter()
            .filter(|set| (cutoff..=now).contains(&set.performed_at))
            .collect()
    }

    /// Heaviest set at `target_reps`, else heaviest set overall
    ///
    /// Equal weights resolve to the most recent set.
    #[must_use]
    pub fn select_basis_set<'a>(
        sets: &[&'a LoggedSet],
        target_reps: u32,
    ) -> Option<&'a LoggedSet> {
        sets.iter()
            .copied()
            .filter(|set| set.reps == target_reps)
            .max_by(|a, b| Self::compare_basis(a, b))
            .or_else(|| {
                sets.iter()
                    .copied()
                    .max_by(|a, b| Self::compare_basis(a, b))
            })
    }

    fn compare_basis(a: &LoggedSet, b: &LoggedSet) -> Ordering {
        a.weight
            .total_cmp(&b.weight)
            .then_with(|| a.performed_at.cmp(&b.performed_at))
    }
}
