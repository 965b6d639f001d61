// ABOUTME: Domain models re-exported from ironlog-core
// ABOUTME: Bands, logged sets, exercise profiles, match candidates, and suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use ironlog_core::models::*;
