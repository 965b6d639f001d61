// ABOUTME: Configuration module for ironlog-intelligence crate
// ABOUTME: Progression and matcher configuration with defaults and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine configuration.
//!
//! Every engine takes its configuration by value or reference at
//! construction. Nothing here reads the environment or the filesystem;
//! callers that keep configuration in files hand the text to
//! [`ProgressionConfig::from_yaml_str`] and friends.

/// Configuration error types
pub mod error;

/// Exercise-name matcher configuration
pub mod matcher;

/// Band, weight, and bodyweight progression configuration
pub mod progression;

pub use error::ConfigError;
pub use matcher::MatcherConfig;
pub use progression::ProgressionConfig;
