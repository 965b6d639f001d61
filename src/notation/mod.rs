// ABOUTME: Workout notation module: document model, parser, unparser, and change detection
// ABOUTME: Converts template text to a WorkoutDocument and back without loss
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Document model and change detection
pub mod document;

/// Text parser and unparser
pub mod parser;

pub use document::{
    identify_changes, Block, BlockEntry, ExerciseChanges, ExerciseEntry, RepScheme,
    SpecialFormatEntry, WorkoutDocument,
};
pub use parser::{parse, unparse};
