// ABOUTME: Training intelligence crate: estimation, progression engines, and name matching
// ABOUTME: Pure, synchronous computations over caller-supplied history and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ironlog Intelligence
//!
//! Decision engines for strength training. Every engine is built once from
//! an explicit configuration value and is read-only afterwards, so a single
//! instance can be shared across threads.
//!
//! - [`algorithms::OneRepMaxEstimator`]: Epley estimate and its inverse
//! - [`BandCatalog`]: ordered bands with neighbor lookup
//! - [`BandProgressionEngine`]: next band/reps from the last banded set
//! - [`WeightProgressionEngine`]: next load from the lookback window
//! - [`BodyweightProgressionEngine`]: reps-or-weight double progression
//! - [`ProgressionService`]: picks the engine for an exercise
//! - [`ExerciseNameMatcher`]: tiered fuzzy matching of exercise titles

pub use ironlog_core::{constants, errors, models, sources};

/// Numeric estimation algorithms
pub mod algorithms;

/// Band catalog with ordering and neighbor lookup
pub mod bands;

/// Banded progression state machine
pub mod band_progression;

/// Bodyweight double progression
pub mod bodyweight_progression;

/// Engine configuration types and validation
pub mod config;

/// Exercise name normalization and tiered matching
pub mod exercise_matcher;

/// Engine dispatch by exercise kind
pub mod progression_service;

/// Lookback-window weight progression
pub mod weight_progression;

pub use algorithms::OneRepMaxEstimator;
pub use band_progression::{BandProgressionEngine, BandStep};
pub use bands::BandCatalog;
pub use bodyweight_progression::{BodyweightProgressionEngine, BodyweightStep};
pub use config::{ConfigError, MatcherConfig, ProgressionConfig};
pub use exercise_matcher::{normalize_exercise_name, ExerciseNameMatcher, MatchTier, RankedMatch};
pub use progression_service::ProgressionService;
pub use weight_progression::WeightProgressionEngine;
