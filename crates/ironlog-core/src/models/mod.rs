// ABOUTME: Core data models for the ironlog training core
// ABOUTME: Re-exports logged sets, band types, suggestions, and match candidates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain records exchanged with the persistence layer. The engines read
//! these and never mutate them.
//!
//! ## Design Principles
//!
//! - **Persistence Agnostic**: no row types, only values the caller fills in
//! - **Serializable**: all models support JSON serialization
//! - **Explicit sentinels**: "no suggestion" is an enum variant, never `0` or `false`

mod band;
mod candidate;
mod lift;
mod suggestion;

pub use band::{Band, BandDirection, BandType};
pub use candidate::{CandidateScope, MatchCandidate};
pub use lift::{ExerciseKind, ExerciseProfile, LoggedSet};
pub use suggestion::{ProgressionSuggestion, WeightSuggestion};
