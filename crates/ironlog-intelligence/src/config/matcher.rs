// ABOUTME: Exercise-name matcher configuration
// ABOUTME: Abbreviation table used by the abbreviation-expansion matching tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::constants::exercise_matching::DEFAULT_ABBREVIATIONS;

/// Matcher tunables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// `(abbreviation, expansion)` pairs, e.g. `("db", "dumbbell")`
    ///
    /// Abbreviations are single tokens; expansions may span several words.
    pub abbreviations: Vec<(String, String)>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            abbreviations: DEFAULT_ABBREVIATIONS
                .iter()
                .map(|&(short, long)| (short.to_owned(), long.to_owned()))
                .collect(),
        }
    }
}

impl MatcherConfig {
    /// A configuration without any abbreviations
    #[must_use]
    pub const fn without_abbreviations() -> Self {
        Self {
            abbreviations: Vec::new(),
        }
    }

    /// Parse YAML text and validate the result
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed YAML, or any error from
    /// [`Self::validate`]
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse JSON text and validate the result
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON, or any error from
    /// [`Self::validate`]
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the abbreviation table
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingField` if an abbreviation or expansion is blank
    /// - `ConfigError::InvalidRange` if an abbreviation contains whitespace or is listed twice
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (short, long) in &self.abbreviations {
            if short.trim().is_empty() {
                return Err(ConfigError::MissingField("abbreviations.abbreviation"));
            }
            if long.trim().is_empty() {
                return Err(ConfigError::MissingField("abbreviations.expansion"));
            }
            if short.trim().contains(char::is_whitespace) {
                return Err(ConfigError::InvalidRange(format!(
                    "abbreviation '{short}' must be a single word"
                )));
            }
            if !seen.insert(short.trim().to_lowercase()) {
                return Err(ConfigError::InvalidRange(format!(
                    "abbreviation '{short}' is listed more than once"
                )));
            }
        }
        Ok(())
    }
}
