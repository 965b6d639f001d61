// ABOUTME: Data-source traits implemented by the persistence layer
// ABOUTME: Lift history, exercise profiles, and the candidate pool visible to a user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Synchronous seams between the engines and whatever stores the data.
//!
//! The core never performs I/O itself; implementations may, and report
//! failures as [`crate::ErrorCode::StorageError`].

use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::{ExerciseProfile, LoggedSet, MatchCandidate};

/// Historical lift logs and exercise metadata
pub trait LiftLogSource {
    /// Metadata for one exercise, `None` if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails
    fn exercise_profile(&self, exercise_id: Uuid) -> AppResult<Option<ExerciseProfile>>;

    /// Every logged set of `exercise_id` by `user_id`, in any order
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails
    fn logged_sets(&self, user_id: Uuid, exercise_id: Uuid) -> AppResult<Vec<LoggedSet>>;
}

/// Exercise titles a user may match against
pub trait ExerciseCatalog {
    /// The user's own exercises plus global exercises
    ///
    /// Implementations may return extra candidates; the matcher filters by
    /// scope again before scoring.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails
    fn visible_candidates(&self, user_id: Uuid) -> AppResult<Vec<MatchCandidate>>;
}
