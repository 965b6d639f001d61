// ABOUTME: Default band catalog and band progression thresholds
// ABOUTME: Colors ordered from least to most resistance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Reps at which the next band is selected
pub const MAX_REPS_BEFORE_BAND_CHANGE: u32 = 15;

/// Reps assigned immediately after a band change
pub const DEFAULT_REPS_ON_BAND_CHANGE: u32 = 8;

/// Default bands as `(color, resistance_value, order)`
pub const DEFAULT_BANDS: &[(&str, f64, i32)] = &[
    ("red", 15.0, 1),
    ("blue", 25.0, 2),
    ("green", 35.0, 3),
    ("black", 50.0, 4),
];
