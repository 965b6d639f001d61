// ABOUTME: Main library entry point for the ironlog strength-training core
// ABOUTME: Workout notation, progression engines, and exercise matching for a training log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ironlog
//!
//! The decision-making core of a strength-training log. Persistence, HTTP,
//! and presentation live elsewhere; they hand this crate plain values and
//! get plain values back.
//!
//! ## Features
//!
//! - **Workout notation**: parse template text into blocks, special formats,
//!   and exercises, and write it back unchanged
//! - **Band progression**: more reps, then the next harder band, with
//!   assistance bands running in reverse
//! - **Weight progression**: Epley-based next load from recent history
//! - **Bodyweight progression**: more reps, or added load past a rep ceiling
//! - **Exercise matching**: tiered fuzzy matching of typed names to stored titles
//!
//! ## Example Usage
//!
//! ```rust
//! use ironlog::intelligence::{ExerciseNameMatcher, ProgressionConfig, ProgressionService};
//! use ironlog::notation;
//!
//! let document = notation::parse("# WOD\n> AMRAP 12min\n10 [[Box Jumps]]\n15 [Push-ups]");
//! assert_eq!(document.loggable_exercises().len(), 1);
//!
//! let service = ProgressionService::new(&ProgressionConfig::default()).unwrap();
//! let matcher = ExerciseNameMatcher::default();
//! # let _ = (service, matcher);
//! ```

/// Error types re-exported from the core crate
pub mod errors;

/// Progression engines and exercise matching
pub mod intelligence;

/// Tracing subscriber configuration
pub mod logging;

/// Domain models re-exported from the core crate
pub mod models;

/// Workout template notation
pub mod notation;

pub use ironlog_core::{constants, sources};
