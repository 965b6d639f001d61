// ABOUTME: Exercise-name normalization and tiered fuzzy matching against a candidate pool
// ABOUTME: Exact, abbreviation, starts-with, whole-word, then partial; ties resolved deterministically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise name matching
//!
//! Free-text names typed by users ("DB bench", "pull-ups") are matched to
//! stored exercise titles. Both sides go through [`normalize_exercise_name`]
//! and are compared through their compact key (tokens joined without
//! spaces), so "Pull-ups", "Pull ups" and "Pullups" are the same name.
//!
//! Candidates land in the first [`MatchTier`] they satisfy and the best
//! tier wins. Within a tier the order is:
//!
//! 1. `StartsWith`: shortest normalized title; `Partial`: smallest length
//!    difference to the query
//! 2. the user's own exercises before global ones
//! 3. shortest normalized title
//! 4. normalized title, lexicographically
//! 5. candidate id

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::config::MatcherConfig;
use crate::constants::exercise_matching::MIN_SINGULARIZE_LEN;
use crate::errors::AppResult;
use crate::models::MatchCandidate;
use crate::sources::ExerciseCatalog;

/// How a candidate title matched the query, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Same compact key
    Exact,
    /// Same compact key once abbreviations are expanded
    Abbreviation,
    /// Title begins with the query
    StartsWith,
    /// Query occurs as a run of whole words in the title
    WholeWord,
    /// Query occurs anywhere in the title
    Partial,
}

impl MatchTier {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Abbreviation => "abbreviation",
            Self::StartsWith => "starts_with",
            Self::WholeWord => "whole_word",
            Self::Partial => "partial",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scored candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedMatch {
    /// The matched candidate, unchanged
    pub candidate: MatchCandidate,
    /// Tier the candidate landed in
    pub tier: MatchTier,
    /// Candidate title after normalization
    pub normalized_title: String,
    /// Compact-key length difference to the query
    pub length_difference: usize,
}

impl RankedMatch {
    fn cmp_rank(&self, other: &Self) -> Ordering {
        self.tier
            .cmp(&other.tier)
            .then_with(|| self.tier_key().cmp(&other.tier_key()))
            .then_with(|| other.candidate.is_user_owned().cmp(&self.candidate.is_user_owned()))
            .then_with(|| self.normalized_title.len().cmp(&other.normalized_title.len()))
            .then_with(|| self.normalized_title.cmp(&other.normalized_title))
            .then_with(|| self.candidate.id.cmp(&other.candidate.id))
    }

    /// Ordering key that applies before ownership within a tier
    fn tier_key(&self) -> usize {
        match self.tier {
            MatchTier::StartsWith => self.normalized_title.len(),
            MatchTier::Partial => self.length_difference,
            MatchTier::Exact | MatchTier::Abbreviation | MatchTier::WholeWord => 0,
        }
    }
}

/// Lowercase, turn hyphens into spaces, collapse whitespace, and singularize each word
///
/// ```rust
/// use ironlog_intelligence::normalize_exercise_name;
///
/// assert_eq!(normalize_exercise_name("  Pull-Ups "), "pull up");
/// assert_eq!(normalize_exercise_name("Bench   Presses"), "bench press");
/// ```
#[must_use]
pub fn normalize_exercise_name(text: &str) -> String {
    normalized_tokens(text).join(" ")
}

fn normalized_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .map(singularize)
        .collect()
}

fn singularize(token: &str) -> String {
    if let Some(stem) = token.strip_suffix("sses") {
        return format!("{stem}ss");
    }
    if token.ends_with("ss") || token.chars().count() < MIN_SINGULARIZE_LEN {
        return token.to_owned();
    }
    token.strip_suffix('s').unwrap_or(token).to_owned()
}

/// Normalized forms of one name, with and without abbreviation expansion
#[derive(Debug, Clone)]
struct NameKey {
    normalized: String,
    tokens: Vec<String>,
    compact: String,
    expanded_tokens: Vec<String>,
    expanded_compact: String,
}

impl NameKey {
    fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Tiered exercise-name matcher
#[derive(Debug, Clone)]
pub struct ExerciseNameMatcher {
    abbreviations: Vec<(String, Vec<String>)>,
}

impl Default for ExerciseNameMatcher {
    fn default() -> Self {
        Self::from_validated(&MatcherConfig::default())
    }
}

impl ExerciseNameMatcher {
    /// Create a matcher from configuration
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if the abbreviation table is invalid
    pub fn new(config: &MatcherConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: &MatcherConfig) -> Self {
        let abbreviations = config
            .abbreviations
            .iter()
            .map(|(short, long)| (normalize_exercise_name(short), normalized_tokens(long)))
            .collect();
        Self { abbreviations }
    }

    /// Tier at which `title` matches `query`, `None` if it does not match
    #[must_use]
    pub fn classify(&self, query: &str, title: &str) -> Option<MatchTier> {
        let query = self.key(query);
        let title = self.key(title);
        if query.is_empty() || title.is_empty() {
            return None;
        }
        Self::classify_keys(&query, &title)
    }

    /// Every eligible candidate that matches, best first
    ///
    /// Candidates owned by users other than `user_id` are skipped before
    /// scoring. A blank query matches nothing.
    #[must_use]
    pub fn rank_candidates(
        &self,
        query: &str,
        user_id: Uuid,
        candidates: &[MatchCandidate],
    ) -> Vec<RankedMatch> {
        let query_key = self.key(query);
        if query_key.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<RankedMatch> = candidates
            .iter()
            .filter(|candidate| candidate.is_visible_to(user_id))
            .filter_map(|candidate| {
                let title_key = self.key(&candidate.title);
                if title_key.is_empty() {
                    return None;
                }
                let tier = Self::classify_keys(&query_key, &title_key)?;
                trace!(title = %candidate.title, %tier, "Candidate matched");
                Some(RankedMatch {
                    candidate: candidate.clone(),
                    tier,
                    length_difference: title_key.compact.len().abs_diff(query_key.compact.len()),
                    normalized_title: title_key.normalized,
                })
            })
            .collect();

        ranked.sort_by(RankedMatch::cmp_rank);
        ranked
    }

    /// Top-ranked candidate, `None` if nothing matches
    #[must_use]
    pub fn best_match(
        &self,
        query: &str,
        user_id: Uuid,
        candidates: &[MatchCandidate],
    ) -> Option<RankedMatch> {
        let best = self
            .rank_candidates(query, user_id, candidates)
            .into_iter()
            .next();
        match &best {
            Some(found) => debug!(
                query,
                title = %found.candidate.title,
                tier = %found.tier,
                "Exercise matched"
            ),
            None => debug!(query, candidates = candidates.len(), "No exercise match"),
        }
        best
    }

    /// Match against the pool the catalog exposes to `user_id`
    ///
    /// # Errors
    ///
    /// Propagates catalog failures
    pub fn find_best_match<C>(
        &self,
        query: &str,
        user_id: Uuid,
        catalog: &C,
    ) -> AppResult<Option<MatchCandidate>>
    where
        C: ExerciseCatalog + ?Sized,
    {
        if normalize_exercise_name(query).is_empty() {
            return Ok(None);
        }
        let candidates = catalog.visible_candidates(user_id)?;
        Ok(self
            .best_match(query, user_id, &candidates)
            .map(|ranked| ranked.candidate))
    }

    fn key(&self, text: &str) -> NameKey {
        let tokens = normalized_tokens(text);
        let expanded_tokens: Vec<String> = tokens
            .iter()
            .flat_map(|token| {
                self.abbreviations
                    .iter()
                    .find(|(short, _)| short == token)
                    .map_or_else(|| vec![token.clone()], |(_, long)| long.clone())
            })
            .collect();

        NameKey {
            normalized: tokens.join(" "),
            compact: tokens.concat(),
            expanded_compact: expanded_tokens.concat(),
            tokens,
            expanded_tokens,
        }
    }

    fn classify_keys(query: &NameKey, title: &NameKey) -> Option<MatchTier> {
        if query.compact == title.compact {
            return Some(MatchTier::Exact);
        }
        if query.expanded_compact == title.expanded_compact {
            return Some(MatchTier::Abbreviation);
        }

        let forms = [
            (&query.compact, &query.tokens, &title.compact, &title.tokens),
            (
                &query.expanded_compact,
                &query.expanded_tokens,
                &title.expanded_compact,
                &title.expanded_tokens,
            ),
        ];

        if forms.iter().any(|(q, _, t, _)| t.starts_with(q.as_str())) {
            return Some(MatchTier::StartsWith);
        }
        if forms
            .iter()
            .any(|(_, q_tokens, _, t_tokens)| contains_token_run(t_tokens, q_tokens))
        {
            return Some(MatchTier::WholeWord);
        }
        if forms.iter().any(|(q, _, t, _)| t.contains(q.as_str())) {
            return Some(MatchTier::Partial);
        }
        None
    }
}

fn contains_token_run(haystack: &[String], needle: &[String]) -> bool {
    !needle.is_empty()
        && needle.len() <= haystack.len()
        && haystack.windows(needle.len()).any(|window| window == needle)
}
