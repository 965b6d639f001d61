// ABOUTME: Line-oriented parser and unparser for workout template notation
// ABOUTME: Handles # blocks, > special formats, [name] / [[name]] exercises, and rep schemes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout notation
//!
//! ```text
//! # Strength
//! [[Back Squat]]: 5-3-1
//! [Romanian Deadlift]: 3x8
//! Keep the bar close.
//!
//! # WOD
//! > AMRAP 12min
//! 10 [[Box Jumps]]
//! 15 [Push-ups]
//! ```
//!
//! Every line is trimmed before it is classified:
//!
//! - `#` starts a block (any number of `#`); it also closes an open special format
//! - `>` inside a block opens a special format, replacing any open one
//! - inside a special format, `<count> [name]` or `<count> [[name]]` adds an exercise to it
//! - otherwise `[name]`, `[[name]]`, optionally followed by `: <scheme>`, adds an exercise to the block
//!
//! Anything else is prose and is skipped. Parsing never fails.

use std::fmt::Write;

use tracing::debug;

use super::document::{
    Block, BlockEntry, ExerciseEntry, RepScheme, SpecialFormatEntry, WorkoutDocument,
};

/// Parse notation text into a document
#[must_use]
pub fn parse(text: &str) -> WorkoutDocument {
    let mut document = WorkoutDocument::default();
    let mut in_special_format = false;

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('#') {
            let name = line.trim_start_matches('#').trim();
            document.blocks.push(Block::new(name));
            in_special_format = false;
            continue;
        }

        let Some(block) = document.blocks.last_mut() else {
            debug!(line_number = index + 1, line, "Skipping line before first block");
            continue;
        };

        if let Some(description) = line.strip_prefix('>') {
            block
                .entries
                .push(BlockEntry::SpecialFormat(SpecialFormatEntry {
                    description: description.trim().to_owned(),
                    exercises: Vec::new(),
                }));
            in_special_format = true;
            continue;
        }

        let exercise = if in_special_format {
            parse_counted_exercise(line)
        } else {
            parse_block_exercise(line)
        };
        match exercise {
            Some(exercise) if in_special_format => push_to_open_format(block, exercise),
            Some(exercise) => block.entries.push(BlockEntry::Exercise(exercise)),
            None => debug!(line_number = index + 1, line, "Skipping unrecognized line"),
        }
    }

    document
}

fn push_to_open_format(block: &mut Block, exercise: ExerciseEntry) {
    if let Some(BlockEntry::SpecialFormat(format)) = block.entries.last_mut() {
        format.exercises.push(exercise);
    }
}

/// `<count> [name]` or `<count> [[name]]`
fn parse_counted_exercise(line: &str) -> Option<ExerciseEntry> {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits_end == 0 {
        return None;
    }
    let count: u32 = line[..digits_end].parse().ok()?;

    let (name, loggable, rest) = split_bracketed(line[digits_end..].trim_start())?;
    if !rest.trim().is_empty() {
        return None;
    }
    Some(ExerciseEntry::new(name, loggable).with_count(count))
}

/// `[name]`, `[[name]]`, either optionally followed by `: scheme`
///
/// An unreadable scheme keeps the exercise without one.
fn parse_block_exercise(line: &str) -> Option<ExerciseEntry> {
    let (name, loggable, rest) = split_bracketed(line)?;
    let rest = rest.trim();
    let exercise = ExerciseEntry::new(name, loggable);

    if rest.is_empty() {
        return Some(exercise);
    }
    let scheme_text = rest.strip_prefix(':')?;
    match RepScheme::parse(scheme_text) {
        Some(scheme) => Some(exercise.with_scheme(scheme)),
        None => {
            if !scheme_text.trim().is_empty() {
                debug!(
                    name = %exercise.name,
                    scheme = scheme_text.trim(),
                    "Ignoring unreadable rep scheme"
                );
            }
            Some(exercise)
        }
    }
}

/// Split a leading bracketed name into `(name, loggable, rest)`
///
/// `[[` without a closing `]]` is read as a single-bracket name starting
/// with `[`. A double-bracket name may end in `]`. Empty names are rejected.
fn split_bracketed(text: &str) -> Option<(&str, bool, &str)> {
    if let Some(inner) = text.strip_prefix("[[") {
        if let Some(mut end) = inner.find("]]") {
            // `[[a]]]` closes at the last `]]` of the run, keeping `a]` as the name
            while inner[end + 2..].starts_with(']') {
                end += 1;
            }
            let name = inner[..end].trim();
            return (!name.is_empty()).then_some((name, true, &inner[end + 2..]));
        }
    }

    let inner = text.strip_prefix('[')?;
    let end = inner.find(']')?;
    let name = inner[..end].trim();
    (!name.is_empty()).then_some((name, false, &inner[end + 1..]))
}

/// Render a document back to notation
///
/// Re-parsing the output yields the same document for anything [`parse`]
/// produced. Blocks are separated by a blank line.
#[must_use]
pub fn unparse(document: &WorkoutDocument) -> String {
    let mut output = String::new();

    for (index, block) in document.blocks.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        if block.name.is_empty() {
            output.push_str("#\n");
        } else {
            let _ = writeln!(output, "# {}", block.name);
        }

        for entry in &block.entries {
            match entry {
                BlockEntry::Exercise(exercise) => {
                    output.push_str(&bracketed(exercise));
                    if let Some(scheme) = &exercise.scheme {
                        let _ = write!(output, ": {scheme}");
                    }
                    output.push('\n');
                }
                BlockEntry::SpecialFormat(format) => {
                    if format.description.is_empty() {
                        output.push_str(">\n");
                    } else {
                        let _ = writeln!(output, "> {}", format.description);
                    }
                    for exercise in &format.exercises {
                        let _ = writeln!(
                            output,
                            "{} {}",
                            exercise.count.unwrap_or(1),
                            bracketed(exercise)
                        );
                    }
                }
            }
        }
    }

    output
}

fn bracketed(exercise: &ExerciseEntry) -> String {
    if exercise.loggable {
        format!("[[{}]]", exercise.name)
    } else {
        format!("[{}]", exercise.name)
    }
}
