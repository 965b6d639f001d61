// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides band configs, dated sets, in-memory data sources, and quiet logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `ironlog`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use std::collections::HashMap;
use std::env;
use std::sync::Once;

use chrono::{DateTime, Duration, TimeZone, Utc};
use ironlog::errors::{AppError, AppResult};
use ironlog::intelligence::ProgressionConfig;
use ironlog::models::{Band, ExerciseProfile, LoggedSet, MatchCandidate};
use ironlog::sources::{ExerciseCatalog, LiftLogSource};
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed reference instant so window arithmetic is reproducible
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 18, 0, 0).unwrap()
}

/// A set performed `days` days before [`reference_now`]
pub fn set_days_ago(weight: f64, reps: u32, days: i64) -> LoggedSet {
    LoggedSet::new(weight, reps, reference_now() - Duration::days(days))
}

/// A banded set performed `days` days before [`reference_now`]
pub fn banded_set(reps: u32, color: &str, days: i64) -> LoggedSet {
    set_days_ago(0.0, reps, days).with_band(color)
}

/// Progression config with the given `(color, order)` bands and default thresholds
pub fn config_with_bands(bands: &[(&str, i32)]) -> ProgressionConfig {
    ProgressionConfig {
        bands: bands
            .iter()
            .map(|&(color, order)| Band::new(color, f64::from(order) * 10.0, order))
            .collect(),
        max_reps_before_band_change: 15,
        default_reps_on_band_change: 8,
        ..ProgressionConfig::default()
    }
}

/// red < blue < green
pub fn three_band_config() -> ProgressionConfig {
    config_with_bands(&[("red", 1), ("blue", 2), ("green", 3)])
}

/// red < blue < green < black
pub fn four_band_config() -> ProgressionConfig {
    config_with_bands(&[("red", 1), ("blue", 2), ("green", 3), ("black", 4)])
}

/// In-memory lift history keyed by exercise and user
#[derive(Debug, Default)]
pub struct InMemoryLiftLog {
    profiles: HashMap<Uuid, ExerciseProfile>,
    sets: HashMap<(Uuid, Uuid), Vec<LoggedSet>>,
    fail_reads: bool,
}

impl InMemoryLiftLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every read fails with a storage error
    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn with_profile(mut self, profile: ExerciseProfile) -> Self {
        self.profiles.insert(profile.id, profile);
        self
    }

    pub fn with_sets(mut self, user_id: Uuid, exercise_id: Uuid, sets: Vec<LoggedSet>) -> Self {
        self.sets.entry((user_id, exercise_id)).or_default().extend(sets);
        self
    }

    fn check(&self) -> AppResult<()> {
        if self.fail_reads {
            return Err(AppError::storage("lift log unavailable"));
        }
        Ok(())
    }
}

impl LiftLogSource for InMemoryLiftLog {
    fn exercise_profile(&self, exercise_id: Uuid) -> AppResult<Option<ExerciseProfile>> {
        self.check()?;
        Ok(self.profiles.get(&exercise_id).cloned())
    }

    fn logged_sets(&self, user_id: Uuid, exercise_id: Uuid) -> AppResult<Vec<LoggedSet>> {
        self.check()?;
        Ok(self
            .sets
            .get(&(user_id, exercise_id))
            .cloned()
            .unwrap_or_default())
    }
}

/// In-memory exercise catalog that returns every candidate regardless of owner
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    pub candidates: Vec<MatchCandidate>,
}

impl InMemoryCatalog {
    pub fn new(candidates: Vec<MatchCandidate>) -> Self {
        Self { candidates }
    }
}

impl ExerciseCatalog for InMemoryCatalog {
    fn visible_candidates(&self, _user_id: Uuid) -> AppResult<Vec<MatchCandidate>> {
        Ok(self.candidates.clone())
    }
}

/// Global candidates with fresh ids
pub fn global_candidates(titles: &[&str]) -> Vec<MatchCandidate> {
    titles
        .iter()
        .map(|title| MatchCandidate::global(Uuid::new_v4(), *title))
        .collect()
}
