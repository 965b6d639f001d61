// ABOUTME: Integration tests for the Epley one-rep-max estimator
// ABOUTME: Covers the formula, its inverse, idempotence, and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use ironlog::errors::ErrorCode;
use ironlog::intelligence::OneRepMaxEstimator;

const TOLERANCE: f64 = 1e-9;

#[test]
fn test_epley_formula() {
    let one_rm = OneRepMaxEstimator::estimate_one_rep_max(100.0, 10).unwrap();
    assert!((one_rm - 133.3).abs() < TOLERANCE);
}

#[test]
fn test_single_rep_scales_by_epley_factor() {
    let one_rm = OneRepMaxEstimator::estimate_one_rep_max(200.0, 1).unwrap();
    assert!((one_rm - 206.66).abs() < TOLERANCE);
}

#[test]
fn test_no_rounding_applied() {
    let one_rm = OneRepMaxEstimator::estimate_one_rep_max(61.3, 7).unwrap();
    let expected = 61.3 * (1.0 + 0.0333 * 7.0);
    assert!((one_rm - expected).abs() < TOLERANCE);
}

#[test]
fn test_estimate_then_project_is_idempotent() {
    let weights = [0.0, 20.0, 52.5, 100.0, 142.5, 305.0];
    for weight in weights {
        for reps in 1..=20 {
            let one_rm = OneRepMaxEstimator::estimate_one_rep_max(weight, reps).unwrap();
            let back = OneRepMaxEstimator::weight_for_target_reps(one_rm, reps).unwrap();
            assert!(
                (back - weight).abs() < 1e-6,
                "weight {weight} reps {reps} came back as {back}"
            );
        }
    }
}

#[test]
fn test_projection_to_fewer_reps_is_heavier() {
    let one_rm = OneRepMaxEstimator::estimate_one_rep_max(100.0, 10).unwrap();
    let triple = OneRepMaxEstimator::weight_for_target_reps(one_rm, 3).unwrap();
    assert!(triple > 100.0);
    assert!(triple < one_rm);
}

#[test]
fn test_invalid_inputs() {
    let cases = [
        OneRepMaxEstimator::estimate_one_rep_max(-0.5, 5),
        OneRepMaxEstimator::estimate_one_rep_max(100.0, 0),
        OneRepMaxEstimator::estimate_one_rep_max(f64::NAN, 5),
        OneRepMaxEstimator::weight_for_target_reps(-10.0, 5),
        OneRepMaxEstimator::weight_for_target_reps(100.0, 0),
    ];
    for result in cases {
        assert_eq!(result.unwrap_err().code, ErrorCode::InvalidInput);
    }
}
