// ABOUTME: Workout template document model produced by the notation parser
// ABOUTME: Blocks of exercises and special formats, rep schemes, and loggable-exercise change detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt::{self, Display, Formatter};
use std::slice;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::parser;
use crate::errors::{AppError, ErrorCode};
use crate::intelligence::normalize_exercise_name;

/// Prescribed repetitions for an exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RepScheme {
    /// One rep count per set, e.g. `5-3-1`
    RepLadder {
        /// Reps for each set in order
        reps: Vec<u32>,
    },
    /// Same rep count for every set, e.g. `3x8`
    SetsByReps {
        /// Number of sets
        sets: u32,
        /// Reps per set
        reps: u32,
    },
}

impl RepScheme {
    /// Parse `n-n-n` or `SxR` (either case of `x`)
    ///
    /// Returns `None` for anything else, including empty ladders and
    /// non-numeric parts.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Some((sets, reps)) = text.split_once(['x', 'X']) {
            return Some(Self::SetsByReps {
                sets: sets.trim().parse().ok()?,
                reps: reps.trim().parse().ok()?,
            });
        }

        let reps = text
            .split('-')
            .map(|part| part.trim().parse().ok())
            .collect::<Option<Vec<u32>>>()?;
        Some(Self::RepLadder { reps })
    }

    /// Total sets prescribed
    #[must_use]
    pub fn set_count(&self) -> usize {
        match self {
            Self::RepLadder { reps } => reps.len(),
            Self::SetsByReps { sets, .. } => *sets as usize,
        }
    }
}

impl Display for RepScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::RepLadder { reps } => {
                let parts: Vec<String> = reps.iter().map(ToString::to_string).collect();
                f.write_str(&parts.join("-"))
            }
            Self::SetsByReps { sets, reps } => write!(f, "{sets}x{reps}"),
        }
    }
}

impl FromStr for RepScheme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            AppError::new(
                ErrorCode::InvalidFormat,
                format!("Invalid rep scheme '{s}': expected n-n-n or SxR"),
            )
        })
    }
}

/// One exercise line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Exercise name as written between the brackets
    pub name: String,
    /// Written with double brackets; the user records results for it
    pub loggable: bool,
    /// Leading count of a special-format line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Rep scheme following `:`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<RepScheme>,
}

impl ExerciseEntry {
    /// An entry with no count and no scheme
    pub fn new(name: impl Into<String>, loggable: bool) -> Self {
        Self {
            name: name.into(),
            loggable,
            count: None,
            scheme: None,
        }
    }

    /// Attach a rep scheme
    #[must_use]
    pub fn with_scheme(mut self, scheme: RepScheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Attach a special-format count
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

/// A `>` section such as an AMRAP or EMOM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialFormatEntry {
    /// Text after `>`
    pub description: String,
    /// Counted exercises in the format
    pub exercises: Vec<ExerciseEntry>,
}

/// Entry directly under a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockEntry {
    /// Plain exercise
    Exercise(ExerciseEntry),
    /// Special format with its own exercises
    SpecialFormat(SpecialFormatEntry),
}

/// A `#` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Header text after the `#` characters, possibly empty
    pub name: String,
    /// Entries in source order
    pub entries: Vec<BlockEntry>,
}

impl Block {
    /// An empty block
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Every exercise in the block, including those inside special formats
    pub fn exercises(&self) -> impl Iterator<Item = &ExerciseEntry> {
        self.entries.iter().flat_map(|entry| match entry {
            BlockEntry::Exercise(exercise) => slice::from_ref(exercise).iter(),
            BlockEntry::SpecialFormat(format) => format.exercises.iter(),
        })
    }
}

/// A parsed workout template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDocument {
    /// Blocks in source order
    pub blocks: Vec<Block>,
}

impl WorkoutDocument {
    /// Every exercise in document order
    pub fn exercises(&self) -> impl Iterator<Item = &ExerciseEntry> {
        self.blocks.iter().flat_map(Block::exercises)
    }

    /// Exercises marked with double brackets, in document order
    #[must_use]
    pub fn loggable_exercises(&self) -> Vec<&ExerciseEntry> {
        self.exercises().filter(|exercise| exercise.loggable).collect()
    }

    /// Whether the document has no blocks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Display for WorkoutDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&parser::unparse(self))
    }
}

impl FromStr for WorkoutDocument {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parser::parse(s))
    }
}

/// Loggable exercises that appeared or disappeared between two template versions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseChanges {
    /// Names present only in the new version, as written there
    pub added: Vec<String>,
    /// Names present only in the old version, as written there
    pub removed: Vec<String>,
}

impl ExerciseChanges {
    /// Whether nothing was added or removed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Compare the loggable exercises of two template versions
///
/// Names are compared after normalization with spaces removed, so
/// "Push-ups", "Push ups" and "Pushup" count as the same exercise. Each
/// name is reported once, in document order.
#[must_use]
pub fn identify_changes(old: &WorkoutDocument, new: &WorkoutDocument) -> ExerciseChanges {
    let old_names = loggable_names(old);
    let new_names = loggable_names(new);

    let missing_from = |names: &[(String, String)], other: &[(String, String)]| -> Vec<String> {
        let keys: HashSet<&str> = other.iter().map(|(key, _)| key.as_str()).collect();
        names
            .iter()
            .filter(|(key, _)| !keys.contains(key.as_str()))
            .map(|(_, name)| name.clone())
            .collect()
    };

    ExerciseChanges {
        added: missing_from(&new_names, &old_names),
        removed: missing_from(&old_names, &new_names),
    }
}

/// `(key, name)` for each distinct loggable exercise
fn loggable_names(document: &WorkoutDocument) -> Vec<(String, String)> {
    let mut seen = HashSet::new();
    document
        .loggable_exercises()
        .into_iter()
        .filter_map(|exercise| {
            let key = normalize_exercise_name(&exercise.name).replace(' ', "");
            seen.insert(key.clone())
                .then(|| (key, exercise.name.clone()))
        })
        .collect()
}
