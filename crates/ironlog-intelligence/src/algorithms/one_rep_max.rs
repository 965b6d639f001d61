// ABOUTME: One-rep-max estimation from submaximal sets using the Epley formula
// ABOUTME: Converts (weight, reps) to an estimated 1RM and projects a 1RM back to a rep target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::one_rep_max::{EPLEY_COEFFICIENT, MIN_REPS};
use crate::errors::{AppError, AppResult};

/// Epley one-rep-max estimator
///
/// Formula: `1RM = weight x (1 + 0.0333 x reps)`
///
/// The inverse, `weight = 1RM / (1 + 0.0333 x reps)`, projects an estimate
/// onto a target rep count. Values are never rounded here; rounding to
/// plate increments is a display concern.
///
/// # Scientific References
///
/// - Epley, B. (1985). "Poundage Chart". Boyd Epley Workout. Lincoln, NE.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneRepMaxEstimator;

impl OneRepMaxEstimator {
    /// Estimate the one-rep max from a set
    ///
    /// A single rep is still scaled (`weight x 1.0333`), so the estimator and
    /// its inverse stay exact inverses of each other.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if `weight` is negative or not finite,
    /// or if `reps` is zero
    ///
    /// # Example
    ///
    /// ```rust
    /// use ironlog_intelligence::OneRepMaxEstimator;
    ///
    /// let one_rm = OneRepMaxEstimator::estimate_one_rep_max(100.0, 5).unwrap();
    /// assert!((one_rm - 116.65).abs() < 1e-9);
    /// ```
    pub fn estimate_one_rep_max(weight: f64, reps: u32) -> AppResult<f64> {
        Self::validate_weight(weight, "weight")?;
        Self::validate_reps(reps, "reps")?;
        Ok(weight * Self::epley_factor(reps))
    }

    /// Weight that corresponds to `one_rep_max` at `target_reps`
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if `one_rep_max` is negative or not
    /// finite, or if `target_reps` is zero
    pub fn weight_for_target_reps(one_rep_max: f64, target_reps: u32) -> AppResult<f64> {
        Self::validate_weight(one_rep_max, "one_rep_max")?;
        Self::validate_reps(target_reps, "target_reps")?;
        Ok(one_rep_max / Self::epley_factor(target_reps))
    }

    fn epley_factor(reps: u32) -> f64 {
        EPLEY_COEFFICIENT.mul_add(f64::from(reps), 1.0)
    }

    fn validate_weight(value: f64, field: &'static str) -> AppResult<()> {
        if !value.is_finite() {
            return Err(AppError::invalid_input(format!(
                "{field} must be a finite number, got {value}"
            )));
        }
        if value < 0.0 {
            return Err(AppError::invalid_input(format!(
                "{field} cannot be negative, got {value}"
            )));
        }
        Ok(())
    }

    fn validate_reps(reps: u32, field: &'static str) -> AppResult<()> {
        if reps < MIN_REPS {
            return Err(AppError::invalid_input(format!(
                "{field} must be at least {MIN_REPS}, got {reps}"
            )));
        }
        Ok(())
    }
}
