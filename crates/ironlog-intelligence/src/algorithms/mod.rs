// ABOUTME: Estimation algorithms used by the progression engines
// ABOUTME: Contains the Epley one-rep-max estimator and its inverse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// One-rep-max estimation (Epley)
pub mod one_rep_max;

pub use one_rep_max::OneRepMaxEstimator;
