// ABOUTME: Error types re-exported from ironlog-core
// ABOUTME: Keeps crate::errors import paths stable for the notation and logging modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! [`AppError`] carries an [`ErrorCode`], a message, and optional context.
//! Configuration problems surface as [`ConfigError`] and convert into
//! `AppError` with `ErrorCode::ConfigInvalid`.

pub use ironlog_core::errors::{AppError, AppResult, ErrorCode, ErrorContext};
pub use ironlog_intelligence::config::ConfigError;
