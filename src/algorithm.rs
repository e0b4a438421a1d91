//! Algorithm catalogue and static complexity table.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sorting algorithms whose snapshot files the visualizer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[value(name = "bubblesort")]
    BubbleSort,
    #[value(name = "selectionsort")]
    SelectionSort,
    #[value(name = "insertionsort")]
    InsertionSort,
    #[value(name = "quicksort")]
    QuickSort,
    #[value(name = "mergesort")]
    MergeSort,
    #[value(name = "countingsort")]
    CountingSort,
    #[value(name = "radixsort")]
    RadixSort,
    #[value(name = "combsort")]
    CombSort,
}

impl Algorithm {
    /// All algorithms in display order
    pub const ALL: [Algorithm; 8] = [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::QuickSort,
        Algorithm::MergeSort,
        Algorithm::CountingSort,
        Algorithm::RadixSort,
        Algorithm::CombSort,
    ];

    /// Identifier used in file names and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubblesort",
            Algorithm::SelectionSort => "selectionsort",
            Algorithm::InsertionSort => "insertionsort",
            Algorithm::QuickSort => "quicksort",
            Algorithm::MergeSort => "mergesort",
            Algorithm::CountingSort => "countingsort",
            Algorithm::RadixSort => "radixsort",
            Algorithm::CombSort => "combsort",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::SelectionSort => "Selection Sort",
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::CountingSort => "Counting Sort",
            Algorithm::RadixSort => "Radix Sort",
            Algorithm::CombSort => "Comb Sort",
        }
    }

    /// Time complexity label. Static data, not measured.
    pub fn complexity(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "O(n²)",
            Algorithm::SelectionSort => "O(n²)",
            Algorithm::InsertionSort => "O(n²)",
            Algorithm::QuickSort => "O(n log n)",
            Algorithm::MergeSort => "O(n log n)",
            Algorithm::CountingSort => "O(n + k)",
            Algorithm::RadixSort => "O(d(n + k))",
            Algorithm::CombSort => "O(n²)",
        }
    }

    /// Snapshot file name written by the generator, e.g. `quicksort_output.txt`.
    pub fn output_file_name(&self) -> String {
        format!("{}_output.txt", self.id())
    }

    /// Default snapshot location inside a data directory.
    pub fn snapshot_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.output_file_name())
    }

    /// Position in [`Algorithm::ALL`].
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|a| a == self).unwrap_or(0)
    }

    /// Next algorithm in display order, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in display order, wrapping around.
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown algorithm identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown algorithm: {0}")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Accepts `quicksort`, `quick_sort`, `quick-sort` and `Quick Sort`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.id() == normalized)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Complexity label for an identifier, `Unknown` if it is not in the table.
pub fn complexity_label(id: &str) -> &'static str {
    id.parse::<Algorithm>()
        .map(|a| a.complexity())
        .unwrap_or("Unknown")
}
