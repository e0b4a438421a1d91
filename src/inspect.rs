//! Offline analysis of a snapshot sequence.
//!
//! Replays the highlight computation without any timing so a file can be
//! checked from a plain terminal or a script.

use serde::Serialize;

use crate::highlight::{compute_highlights, Category, HighlightState, SettledSet};
use crate::snapshot::SnapshotSequence;

/// Summary statistics of one snapshot file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub frames: usize,
    pub width: usize,
    pub min_value: u64,
    pub max_value: u64,
    /// Steps whose frame differs from the one before
    pub changing_steps: usize,
    /// Changed indices summed over all steps
    pub total_changes: usize,
    /// Largest number of indices changed in one step
    pub max_changes: usize,
    /// Indices that changed at least once
    pub touched: usize,
    /// Whether the last frame is in non-decreasing order
    pub sorted: bool,
}

/// Highlight state of every step, in playback order.
///
/// Step 0 compares the first frame with itself, so it is all baseline.
pub fn highlight_steps(sequence: &SnapshotSequence) -> Vec<HighlightState> {
    let mut settled = SettledSet::new();
    let frames = sequence.frames();
    frames
        .iter()
        .enumerate()
        .map(|(step, frame)| {
            let previous = &frames[step.saturating_sub(1)];
            compute_highlights(previous, frame, &mut settled)
        })
        .collect()
}

impl InspectReport {
    pub fn from_sequence(sequence: &SnapshotSequence) -> Self {
        let steps = highlight_steps(sequence);
        let changes: Vec<usize> = steps
            .iter()
            .map(|h| h.count(Category::ActiveChange))
            .collect();
        let touched = steps
            .last()
            .map(|h| h.len() - h.count(Category::Baseline))
            .unwrap_or(0);

        Self {
            frames: sequence.len(),
            width: sequence.width(),
            min_value: sequence.min_value(),
            max_value: sequence.max_value(),
            changing_steps: changes.iter().filter(|&&c| c > 0).count(),
            total_changes: changes.iter().sum(),
            max_changes: changes.iter().copied().max().unwrap_or(0),
            touched,
            sorted: sequence.last().windows(2).all(|w| w[0] <= w[1]),
        }
    }
}

/// One line per step (`step glyphs`), then the final complete pass.
pub fn trace_lines(sequence: &SnapshotSequence) -> Vec<String> {
    let mut lines: Vec<String> = highlight_steps(sequence)
        .iter()
        .enumerate()
        .map(|(step, h)| format!("{:>5} {}", step, h.trace()))
        .collect();
    lines.push(format!(
        "{:>5} {}",
        "done",
        HighlightState::complete(sequence.width()).trace()
    ));
    lines
}
