// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Progression thresholds, estimator coefficients, default bands, and matcher tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Defaults for every tunable the engines accept. Engines never read these
//! directly; they flow in through the configuration structs, which use them
//! for `Default`.

/// Default band set and band progression thresholds
pub mod bands;

/// One-rep-max estimation coefficients
pub mod one_rep_max {
    /// Epley coefficient applied per repetition
    pub const EPLEY_COEFFICIENT: f64 = 0.0333;
    /// Smallest repetition count the estimator accepts
    pub const MIN_REPS: u32 = 1;
}

/// Weighted (non-banded, non-bodyweight) progression defaults
pub mod weight_progression {
    /// Weeks of history eligible to inform a suggestion
    pub const LOOKBACK_WEEKS: u32 = 6;
    /// Weight added on top of the projected target-rep weight
    pub const DEFAULT_INCREMENT: f64 = 5.0;
    /// Sets suggested when no history carries a set count
    pub const DEFAULT_SETS: u32 = 3;
}

/// Bodyweight double-progression defaults
pub mod bodyweight_progression {
    /// Reps assigned after weight is added
    pub const MIN_REPS: u32 = 8;
    /// Reps at which weight is added (when the user opted in)
    pub const MAX_REPS: u32 = 15;
    /// Weight added on rollover
    pub const WEIGHT_INCREMENT: f64 = 5.0;
}

/// Exercise-name matching tables
pub mod exercise_matching {
    /// Shorthand commonly typed for equipment and movement names
    pub const DEFAULT_ABBREVIATIONS: &[(&str, &str)] = &[
        ("db", "dumbbell"),
        ("bb", "barbell"),
        ("kb", "kettlebell"),
        ("bw", "bodyweight"),
        ("ohp", "overhead press"),
        ("rdl", "romanian deadlift"),
        ("sldl", "stiff leg deadlift"),
        ("sl", "single leg"),
        ("ghr", "glute ham raise"),
    ];

    /// Tokens shorter than this are never singularized
    pub const MIN_SINGULARIZE_LEN: usize = 3;
}
