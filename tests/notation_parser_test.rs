// ABOUTME: Integration tests for the workout notation parser and unparser
// ABOUTME: Covers blocks, special formats, schemes, ignored lines, round-trips, and change detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]
// Allow raw string hashes for readability in test fixtures
#![allow(clippy::needless_raw_string_hashes)]

mod common;

use common::init_test_logging;
use ironlog::notation::{
    identify_changes, parse, unparse, Block, BlockEntry, ExerciseEntry, RepScheme,
    SpecialFormatEntry, WorkoutDocument,
};

const FULL_TEMPLATE: &str = r#"
Notes before any block are dropped.

# Warm-up
[Jump Rope]
Easy pace, nose breathing.

## Strength
[[Back Squat]]: 5-3-1
[[Bench Press]]: 3x8
[Face Pull]: 3X15
[[Pendlay Row]]: heavy singles
[Plank] hold it
[]

### WOD
> AMRAP 12min
10 [[Box Jumps]]
15 [Push-ups]
[Not counted]
> EMOM 10
5 [[Power Clean]]
# Cool-down
> Stretch
60 [Couch Stretch]
"#;

fn exercise(entry: &BlockEntry) -> &ExerciseEntry {
    match entry {
        BlockEntry::Exercise(exercise) => exercise,
        BlockEntry::SpecialFormat(format) => panic!("expected exercise, got {format:?}"),
    }
}

fn special_format(entry: &BlockEntry) -> &SpecialFormatEntry {
    match entry {
        BlockEntry::SpecialFormat(format) => format,
        BlockEntry::Exercise(exercise) => panic!("expected special format, got {exercise:?}"),
    }
}

#[test]
fn test_wod_scenario() {
    init_test_logging();
    let document = parse("# WOD\n> AMRAP 12min\n10 [[Box Jumps]]\n15 [Push-ups]");

    assert_eq!(document.blocks.len(), 1);
    let block = &document.blocks[0];
    assert_eq!(block.name, "WOD");
    assert_eq!(block.entries.len(), 1);

    let format = special_format(&block.entries[0]);
    assert_eq!(format.description, "AMRAP 12min");
    assert_eq!(format.exercises.len(), 2);
    assert_eq!(format.exercises[0].name, "Box Jumps");
    assert!(format.exercises[0].loggable);
    assert_eq!(format.exercises[0].count, Some(10));
    assert_eq!(format.exercises[1].name, "Push-ups");
    assert!(!format.exercises[1].loggable);
    assert_eq!(format.exercises[1].count, Some(15));
}

#[test]
fn test_full_template_structure() {
    let document = parse(FULL_TEMPLATE);
    let names: Vec<&str> = document.blocks.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Warm-up", "Strength", "WOD", "Cool-down"]);

    let warm_up = &document.blocks[0];
    assert_eq!(warm_up.entries.len(), 1);
    assert_eq!(exercise(&warm_up.entries[0]).name, "Jump Rope");

    let strength = &document.blocks[1];
    let schemes: Vec<(&str, Option<&RepScheme>)> = strength
        .entries
        .iter()
        .map(|entry| {
            let exercise = exercise(entry);
            (exercise.name.as_str(), exercise.scheme.as_ref())
        })
        .collect();
    assert_eq!(
        schemes,
        [
            (
                "Back Squat",
                Some(&RepScheme::RepLadder {
                    reps: vec![5, 3, 1]
                })
            ),
            ("Bench Press", Some(&RepScheme::SetsByReps { sets: 3, reps: 8 })),
            ("Face Pull", Some(&RepScheme::SetsByReps { sets: 3, reps: 15 })),
            ("Pendlay Row", None),
        ]
    );

    let wod = &document.blocks[2];
    assert_eq!(wod.entries.len(), 2);
    assert_eq!(special_format(&wod.entries[0]).exercises.len(), 2);
    let emom = special_format(&wod.entries[1]);
    assert_eq!(emom.description, "EMOM 10");
    assert_eq!(emom.exercises[0].name, "Power Clean");

    let cool_down = &document.blocks[3];
    assert_eq!(special_format(&cool_down.entries[0]).exercises[0].count, Some(60));
}

#[test]
fn test_heading_closes_special_format() {
    let document = parse("# A\n> For time\n21 [[Thruster]]\n# B\n[[Deadlift]]: 5x5");
    let block_b = &document.blocks[1];
    assert_eq!(block_b.entries.len(), 1);
    assert!(exercise(&block_b.entries[0]).loggable);
}

#[test]
fn test_heading_variants() {
    let document = parse("#Tight\n  ###   Spaced   \n#\n[Row]");
    let names: Vec<&str> = document.blocks.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Tight", "Spaced", ""]);
    assert_eq!(document.blocks[2].entries.len(), 1);
}

#[test]
fn test_bracketless_lines_ignored() {
    let document = parse("# Block\nSquat 3x5\nBench: 5-5-5\n12 Burpees");
    assert!(document.blocks[0].entries.is_empty());
}

#[test]
fn test_empty_input() {
    assert_eq!(parse(""), WorkoutDocument::default());
    assert_eq!(parse("just prose\n[[No Block]]"), WorkoutDocument::default());
}

#[test]
fn test_round_trip_full_template() {
    let first = parse(FULL_TEMPLATE);
    let text = unparse(&first);
    assert_eq!(parse(&text), first);
    // Unparse is stable once normalized
    assert_eq!(unparse(&parse(&text)), text);
}

#[test]
fn test_round_trip_edge_cases() {
    let inputs = [
        "# WOD\n> AMRAP 12min\n10 [[Box Jumps]]\n15 [Push-ups]",
        "#\n>\n1 [x]",
        "# Odd names\n[[ [Bracketed ]]\n[[Half]\n[Spaced   Out]: 05-03",
        "# Empty format\n> Rest\n# Next\n[A]: 1",
        "# > not a format\n> > nested marker\n3 [[Row]]",
        "# B\n[[a] ]]",
        "# Closing brackets\n[[Curl]]]: 3x10\n> Finisher\n5 [[Dip] ]]",
    ];
    for input in inputs {
        let first = parse(input);
        assert_eq!(parse(&unparse(&first)), first, "input: {input:?}");
    }
}

#[test]
fn test_loggable_name_ending_in_bracket() {
    let document = parse("# B\n[[a] ]]");
    let entry = exercise(&document.blocks[0].entries[0]);
    assert_eq!(entry.name, "a]");
    assert!(entry.loggable);

    let text = unparse(&document);
    assert_eq!(text, "# B\n[[a]]]\n");
    assert_eq!(parse(&text), document);
}

#[test]
fn test_unparse_format() {
    let document = WorkoutDocument {
        blocks: vec![
            Block {
                name: "Main".to_owned(),
                entries: vec![
                    BlockEntry::Exercise(
                        ExerciseEntry::new("Squat", true)
                            .with_scheme(RepScheme::SetsByReps { sets: 5, reps: 5 }),
                    ),
                    BlockEntry::Exercise(ExerciseEntry::new("Band Pull-apart", false)),
                ],
            },
            Block {
                name: "Finisher".to_owned(),
                entries: vec![BlockEntry::SpecialFormat(SpecialFormatEntry {
                    description: "3 rounds".to_owned(),
                    exercises: vec![ExerciseEntry::new("Burpee", true).with_count(10)],
                })],
            },
        ],
    };

    assert_eq!(
        unparse(&document),
        "# Main\n[[Squat]]: 5x5\n[Band Pull-apart]\n\n# Finisher\n> 3 rounds\n10 [[Burpee]]\n"
    );
    assert_eq!(document.to_string(), unparse(&document));
}

#[test]
fn test_from_str() {
    let document: WorkoutDocument = "# A\n[[Squat]]".parse().unwrap();
    assert_eq!(document.loggable_exercises().len(), 1);
}

#[test]
fn test_loggable_exercises_in_order() {
    let document = parse(FULL_TEMPLATE);
    let names: Vec<&str> = document
        .loggable_exercises()
        .into_iter()
        .map(|exercise| exercise.name.as_str())
        .collect();
    assert_eq!(
        names,
        [
            "Back Squat",
            "Bench Press",
            "Pendlay Row",
            "Box Jumps",
            "Power Clean"
        ]
    );
}

#[test]
fn test_identify_changes() {
    let old = parse("# A\n[[Back Squat]]\n[[Push-ups]]\n[Plank]\n> AMRAP\n5 [[Burpees]]");
    let new = parse("# A\n[[Back Squat]]\n[[Push ups]]\n[[Plank]]\n[[Row]]");

    let changes = identify_changes(&old, &new);
    assert_eq!(changes.added, ["Plank", "Row"]);
    assert_eq!(changes.removed, ["Burpees"]);
    assert!(!changes.is_empty());
    assert!(identify_changes(&new, &new).is_empty());
}

#[test]
fn test_document_serde_shape() {
    let document = parse("# WOD\n> AMRAP 12min\n10 [[Box Jumps]]\n# Strength\n[[Squat]]: 3x5");
    let json = serde_json::to_value(&document).unwrap();
    assert_eq!(json["blocks"][0]["entries"][0]["kind"], "special_format");
    assert_eq!(json["blocks"][1]["entries"][0]["kind"], "exercise");
    assert_eq!(json["blocks"][1]["entries"][0]["scheme"]["type"], "sets_by_reps");

    let back: WorkoutDocument = serde_json::from_value(json).unwrap();
    assert_eq!(back, document);
}
