// ABOUTME: Core types and constants for the ironlog strength-training core
// ABOUTME: Foundation crate with error handling, domain models, data-source traits, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ironlog Core
//!
//! Foundation crate providing shared types and constants for the ironlog
//! training core. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Progression and matching defaults organized by domain
//! - **models**: Logged sets, bands, suggestions, and match candidates
//! - **sources**: Traits the persistence layer implements to feed the engines

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants and configuration defaults organized by domain
pub mod constants;

/// Core data models (`LoggedSet`, `Band`, `ProgressionSuggestion`, `MatchCandidate`)
pub mod models;

/// Data-source seams implemented by the persistence layer
pub mod sources;

pub use errors::{AppError, AppResult, ErrorCode};
