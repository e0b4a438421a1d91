//! Side-by-side comparison of two algorithms.

use std::path::{Path, PathBuf};

use crate::algorithm::Algorithm;
use crate::snapshot::{LoadError, SnapshotSequence};

#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    #[error("Please choose two different algorithms.")]
    MismatchedAlgorithms,

    #[error("Failed to load {algorithm} data: {source}")]
    Load {
        algorithm: Algorithm,
        #[source]
        source: LoadError,
    },
}

/// Reject comparing an algorithm with itself.
pub fn check_distinct(first: Algorithm, second: Algorithm) -> Result<(), CompareError> {
    if first == second {
        return Err(CompareError::MismatchedAlgorithms);
    }
    Ok(())
}

/// One side of a comparison: which algorithm and where its data lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareSlot {
    pub algorithm: Algorithm,
    pub path: PathBuf,
}

impl CompareSlot {
    pub fn new(algorithm: Algorithm, path: impl Into<PathBuf>) -> Self {
        Self {
            algorithm,
            path: path.into(),
        }
    }

    /// Slot reading the algorithm's default file from `dir`.
    pub fn in_dir(algorithm: Algorithm, dir: &Path) -> Self {
        Self::new(algorithm, algorithm.snapshot_path(dir))
    }

    fn load(&self) -> Result<SnapshotSequence, CompareError> {
        SnapshotSequence::load(&self.path).map_err(|source| CompareError::Load {
            algorithm: self.algorithm,
            source,
        })
    }
}

/// Load both sides of a comparison in parallel.
///
/// Fails if the algorithms are equal or either file fails to load; the first
/// slot's error wins when both fail.
pub fn load_pair(
    first: &CompareSlot,
    second: &CompareSlot,
) -> Result<(SnapshotSequence, SnapshotSequence), CompareError> {
    check_distinct(first.algorithm, second.algorithm)?;

    let (a, b) = rayon::join(|| first.load(), || second.load());
    tracing::debug!(
        first = %first.algorithm,
        second = %second.algorithm,
        "comparison data loaded"
    );
    Ok((a?, b?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, algorithm: Algorithm, content: &str) {
        fs::write(algorithm.snapshot_path(dir.path()), content).unwrap();
    }

    #[test]
    fn same_algorithm_is_rejected() {
        let err = check_distinct(Algorithm::QuickSort, Algorithm::QuickSort).unwrap_err();
        assert_eq!(err.to_string(), "Please choose two different algorithms.");
        assert!(check_distinct(Algorithm::QuickSort, Algorithm::MergeSort).is_ok());
    }

    #[test]
    fn load_pair_reads_both_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, Algorithm::BubbleSort, "2 1\n1 2\n");
        write(&dir, Algorithm::MergeSort, "3 1 2\n1 2 3\n");

        let (a, b) = load_pair(
            &CompareSlot::in_dir(Algorithm::BubbleSort, dir.path()),
            &CompareSlot::in_dir(Algorithm::MergeSort, dir.path()),
        )
        .unwrap();
        assert_eq!(a.width(), 2);
        assert_eq!(b.width(), 3);
    }

    #[test]
    fn load_pair_rejects_same_algorithm_before_reading() {
        let slot = CompareSlot::new(Algorithm::CombSort, "/nonexistent/combsort_output.txt");
        assert!(matches!(
            load_pair(&slot, &slot),
            Err(CompareError::MismatchedAlgorithms)
        ));
    }

    #[test]
    fn load_pair_names_failing_side() {
        let dir = TempDir::new().unwrap();
        write(&dir, Algorithm::BubbleSort, "2 1\n1 2\n");
        write(&dir, Algorithm::RadixSort, "1 x\n");

        let err = load_pair(
            &CompareSlot::in_dir(Algorithm::BubbleSort, dir.path()),
            &CompareSlot::in_dir(Algorithm::RadixSort, dir.path()),
        )
        .unwrap_err();
        match &err {
            CompareError::Load { algorithm, source } => {
                assert_eq!(*algorithm, Algorithm::RadixSort);
                assert!(matches!(source, LoadError::Parse { .. }));
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(err.to_string().starts_with("Failed to load radixsort data"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, Algorithm::BubbleSort, "1\n");
        let err = load_pair(
            &CompareSlot::in_dir(Algorithm::BubbleSort, dir.path()),
            &CompareSlot::in_dir(Algorithm::QuickSort, dir.path()),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CompareError::Load {
                source: LoadError::Io { .. },
                ..
            }
        ));
    }
}
