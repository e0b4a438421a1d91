//! Integration tests for snapshot loading and highlight replay

use super::helpers::{fixtures_dir, temp_fixture};
use sortviz::highlight::Category;
use sortviz::inspect::highlight_steps;
use sortviz::{LoadError, SnapshotSequence};

#[test]
fn fixture_loads_all_frames() {
    let (_dir, path) = temp_fixture("bubblesort_output.txt");
    let sequence = SnapshotSequence::load(&path).unwrap();

    assert_eq!(sequence.len(), 7);
    assert_eq!(sequence.width(), 5);
    assert_eq!(sequence.first(), &vec![5, 3, 8, 1, 4]);
    assert_eq!(sequence.last(), &vec![1, 3, 4, 5, 8]);
}

#[test]
fn blank_lines_are_skipped() {
    let sequence = SnapshotSequence::load(fixtures_dir().join("quicksort_output.txt")).unwrap();
    assert_eq!(sequence.len(), 3);
}

#[test]
fn bad_token_fails_whole_file_with_line_number() {
    let err = SnapshotSequence::load(fixtures_dir().join("invalid.txt")).unwrap_err();
    match &err {
        LoadError::Parse { line, token, .. } => {
            assert_eq!(*line, 2);
            assert_eq!(token, "five");
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert!(err.origin().ends_with("invalid.txt"));
}

#[test]
fn ragged_frames_are_rejected() {
    let err = SnapshotSequence::load(fixtures_dir().join("ragged.txt")).unwrap_err();
    assert!(matches!(
        err,
        LoadError::LengthMismatch {
            expected: 3,
            found: 2,
            ..
        }
    ));
}

#[test]
fn missing_file_is_io_error() {
    let err = SnapshotSequence::load("/nonexistent/bubblesort_output.txt").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn settled_indices_accumulate_over_the_run() {
    let (_dir, path) = temp_fixture("bubblesort_output.txt");
    let sequence = SnapshotSequence::load(&path).unwrap();
    let steps = highlight_steps(&sequence);

    assert_eq!(steps[0].count(Category::Baseline), 5);
    // 5 3 -> 3 5
    assert_eq!(steps[1].count(Category::ActiveChange), 2);
    // 8 1 -> 1 8; indices 0 and 1 stay settled
    assert_eq!(steps[2].categories()[0], Category::Settled);
    assert_eq!(steps[2].categories()[2], Category::ActiveChange);
    // Every index has moved by the last step
    let last = steps.last().unwrap();
    assert_eq!(last.count(Category::Baseline), 0);
}
