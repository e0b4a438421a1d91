//! CLI definitions for sortviz
//!
//! Kept in the library so the command tree can be inspected by tests and by
//! the completions generator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::algorithm::Algorithm;
use crate::playback::SchedulingMode;

/// Version string with git commit hash for dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("SORTVIZ_BUILD_DATE"),
    ")"
);

/// Version string for release builds.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("SORTVIZ_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "sortviz")]
#[command(version = VERSION)]
#[command(about = "Animate precomputed sorting snapshots as terminal bar charts")]
#[command(long_about = "Animate precomputed sorting snapshots as terminal bar charts.

Each snapshot file holds one intermediate array state per line, as written by
the sorting generator (<algorithm>_output.txt). sortviz replays the file step
by step, coloring elements that just changed, elements that changed before,
and the final sorted state.

Run without arguments to open the interactive visualizer.")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by `play` and `compare`.
#[derive(Args, Debug, Clone, Default)]
pub struct PlaybackArgs {
    /// Directory holding <algorithm>_output.txt files
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Delay between steps in milliseconds
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// How steps are scheduled
    #[arg(long, value_enum)]
    pub mode: Option<SchedulingMode>,

    /// Run without the terminal UI and print the outcome
    #[arg(long)]
    pub headless: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Visualize one algorithm
    #[command(long_about = "Visualize one algorithm.

Opens the interactive visualizer with ALGORITHM selected and its snapshot
file loaded. With --headless the file is played back without a UI and the
elapsed time is printed when done.

EXAMPLES:
    sortviz play quicksort
    sortviz play --file runs/merge.txt mergesort
    sortviz play bubblesort --headless --interval-ms 1")]
    Play {
        /// Algorithm to visualize
        #[arg(value_enum)]
        algorithm: Option<Algorithm>,

        /// Snapshot file to load instead of <dir>/<algorithm>_output.txt
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        #[command(flatten)]
        playback: PlaybackArgs,
    },

    /// Run two algorithms side by side
    #[command(long_about = "Run two algorithms side by side.

Both snapshot files are loaded and animated at the same time. Each side
reports its complexity and elapsed time when it finishes.

EXAMPLES:
    sortviz compare bubblesort quicksort
    sortviz compare mergesort radixsort --dir ./snapshots --headless")]
    Compare {
        #[arg(value_enum)]
        first: Algorithm,

        #[arg(value_enum)]
        second: Algorithm,

        /// Snapshot file for the first algorithm
        #[arg(long, value_name = "PATH")]
        first_file: Option<PathBuf>,

        /// Snapshot file for the second algorithm
        #[arg(long, value_name = "PATH")]
        second_file: Option<PathBuf>,

        #[command(flatten)]
        playback: PlaybackArgs,
    },

    /// Check a snapshot file and print its statistics
    #[command(long_about = "Check a snapshot file and print its statistics.

Prints the number of frames, array length, value range and how many
elements change per step.

EXAMPLES:
    sortviz inspect quicksort_output.txt
    sortviz inspect quicksort_output.txt --trace
    sortviz inspect quicksort_output.txt --json")]
    Inspect {
        /// Snapshot file
        file: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Print one highlight line per step
        #[arg(long)]
        trace: bool,
    },

    /// List known algorithms and their complexity
    Algorithms,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Write the default config if no file exists
    Init,
}
