//! Snapshot file loader
//!
//! A snapshot file holds the intermediate states of one sorting run:
//!
//! ```text
//! 5 3 8 1
//! 3 5 8 1
//!
//! 3 5 1 8
//! ```
//!
//! Each non-blank line is one frame of whitespace-separated non-negative
//! integers. Blank lines are skipped. Loading is all-or-nothing: any bad
//! token fails the whole file.

mod error;

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub use error::LoadError;

/// One array state during a sort.
pub type Frame = Vec<u64>;

/// All frames of one sorting run, in file order.
///
/// Guaranteed non-empty, and every frame has the same length as the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotSequence {
    frames: Vec<Frame>,
}

impl SnapshotSequence {
    /// Build a sequence from already parsed frames.
    ///
    /// Frame numbers in errors are 1-based positions in `frames`.
    pub fn from_frames(frames: Vec<Frame>, origin: &str) -> Result<Self, LoadError> {
        let Some(first) = frames.first() else {
            return Err(LoadError::Empty {
                origin: origin.to_string(),
            });
        };
        let expected = first.len();
        if let Some((idx, frame)) = frames
            .iter()
            .enumerate()
            .find(|(_, frame)| frame.len() != expected)
        {
            return Err(LoadError::LengthMismatch {
                origin: origin.to_string(),
                line: idx + 1,
                expected,
                found: frame.len(),
            });
        }
        Ok(Self { frames })
    }

    /// Load a snapshot file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let file = fs::File::open(path).map_err(|source| LoadError::Io {
            origin: origin.clone(),
            source,
        })?;
        let sequence = Self::parse_reader(BufReader::new(file), &origin)?;
        tracing::debug!(
            path = %origin,
            frames = sequence.len(),
            width = sequence.width(),
            "loaded snapshot file"
        );
        Ok(sequence)
    }

    /// Parse snapshot lines from a reader.
    pub fn parse_reader<R: BufRead>(reader: R, origin: &str) -> Result<Self, LoadError> {
        let mut frames: Vec<Frame> = Vec::new();
        let mut expected: Option<usize> = None;

        for (idx, line) in reader.lines().enumerate() {
            let line_num = idx + 1;
            let line = line.map_err(|source| LoadError::Io {
                origin: origin.to_string(),
                source,
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let frame = parse_line(&line, line_num, origin)?;
            match expected {
                None => expected = Some(frame.len()),
                Some(width) if width != frame.len() => {
                    return Err(LoadError::LengthMismatch {
                        origin: origin.to_string(),
                        line: line_num,
                        expected: width,
                        found: frame.len(),
                    });
                }
                Some(_) => {}
            }
            frames.push(frame);
        }

        if frames.is_empty() {
            return Err(LoadError::Empty {
                origin: origin.to_string(),
            });
        }

        Ok(Self { frames })
    }

    /// Parse snapshot lines from a string.
    pub fn parse_str(content: &str, origin: &str) -> Result<Self, LoadError> {
        Self::parse_reader(BufReader::new(content.as_bytes()), origin)
    }

    /// All frames in order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame at `step`, if any.
    pub fn frame(&self, step: usize) -> Option<&Frame> {
        self.frames.get(step)
    }

    /// The first frame (the unsorted input).
    pub fn first(&self) -> &Frame {
        &self.frames[0]
    }

    /// The last frame (the sorted output, if the run completed).
    pub fn last(&self) -> &Frame {
        &self.frames[self.frames.len() - 1]
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false: a sequence holds at least one frame.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Length of the sorted array.
    pub fn width(&self) -> usize {
        self.first().len()
    }

    /// Largest value across all frames (0 for zero-width arrays).
    pub fn max_value(&self) -> u64 {
        self.frames
            .iter()
            .flat_map(|frame| frame.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Smallest value across all frames (0 for zero-width arrays).
    pub fn min_value(&self) -> u64 {
        self.frames
            .iter()
            .flat_map(|frame| frame.iter().copied())
            .min()
            .unwrap_or(0)
    }
}

fn parse_line(line: &str, line_num: usize, origin: &str) -> Result<Frame, LoadError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<u64>().map_err(|_| LoadError::Parse {
                origin: origin.to_string(),
                line: line_num,
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_frame_per_line() {
        let seq = SnapshotSequence::parse_str("5 3 8\n3 5 8\n", "mem").unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.width(), 3);
        assert_eq!(seq.first(), &vec![5, 3, 8]);
        assert_eq!(seq.last(), &vec![3, 5, 8]);
    }

    #[test]
    fn skips_blank_lines() {
        let seq = SnapshotSequence::parse_str("\n1 2\n   \n\t\n2 1\n\n", "mem").unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.frames(), &[vec![1, 2], vec![2, 1]]);
    }

    #[test]
    fn accepts_arbitrary_whitespace() {
        let seq = SnapshotSequence::parse_str("  4\t 2   9 \r\n", "mem").unwrap();
        assert_eq!(seq.first(), &vec![4, 2, 9]);
    }

    #[test]
    fn trailing_space_like_generator_output() {
        // The snapshot generator writes "%d " per value
        let seq = SnapshotSequence::parse_str("3 1 2 \n1 3 2 \n1 2 3 \n", "mem").unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.width(), 3);
    }

    #[test]
    fn bad_token_fails_whole_load() {
        let err = SnapshotSequence::parse_str("1 2 3\n4 x 6\n", "steps.txt").unwrap_err();
        match err {
            LoadError::Parse {
                origin,
                line,
                token,
            } => {
                assert_eq!(origin, "steps.txt");
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_error_line_counts_blank_lines() {
        let err = SnapshotSequence::parse_str("1 2\n\n1 2.5\n", "mem").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 3, .. }));
    }

    #[test]
    fn negative_values_are_rejected() {
        let err = SnapshotSequence::parse_str("1 -2 3\n", "mem").unwrap_err();
        assert!(matches!(err, LoadError::Parse { ref token, .. } if token == "-2"));
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = SnapshotSequence::parse_str("\n  \n", "empty.txt").unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
        assert_eq!(err.origin(), "empty.txt");
    }

    #[test]
    fn mismatched_frame_length_is_an_error() {
        let err = SnapshotSequence::parse_str("1 2 3\n1 2\n", "mem").unwrap_err();
        match err {
            LoadError::LengthMismatch {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_message_names_the_source() {
        let err = SnapshotSequence::parse_str("1 2\nfoo 1\n", "quicksort_output.txt").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("quicksort_output.txt"));
        assert!(msg.contains("line 2"));
        assert!(msg.contains("'foo'"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SnapshotSequence::load("/nonexistent/sortviz/steps.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/sortviz/steps.txt"));
    }

    #[test]
    fn from_frames_validates_invariants() {
        assert!(matches!(
            SnapshotSequence::from_frames(vec![], "mem"),
            Err(LoadError::Empty { .. })
        ));
        assert!(matches!(
            SnapshotSequence::from_frames(vec![vec![1, 2], vec![1]], "mem"),
            Err(LoadError::LengthMismatch { line: 2, .. })
        ));
        let seq = SnapshotSequence::from_frames(vec![vec![2, 1], vec![1, 2]], "mem").unwrap();
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn value_range_spans_all_frames() {
        let seq = SnapshotSequence::parse_str("4 7 1\n9 0 4\n", "mem").unwrap();
        assert_eq!(seq.max_value(), 9);
        assert_eq!(seq.min_value(), 0);
    }
}
