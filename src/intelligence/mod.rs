// ABOUTME: Intelligence module re-exports from ironlog-intelligence crate
// ABOUTME: Estimation, progression engines, and exercise-name matching under one import path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Training decisions: one-rep-max estimation, band, weight, and bodyweight
//! progression, and fuzzy exercise-name matching.

// Re-export all public items from ironlog-intelligence
pub use ironlog_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::config::ProgressionConfig)
pub use ironlog_intelligence::{
    algorithms, band_progression, bands, bodyweight_progression, config, exercise_matcher,
    progression_service, weight_progression,
};
