//! sortviz - sorting algorithm visualizer
//!
//! Replays precomputed sorting snapshots as animated bar charts, one
//! algorithm at a time or two side by side.

pub mod algorithm;
pub mod cli;
pub mod compare;
pub mod config;
pub mod highlight;
pub mod inspect;
pub mod logging;
pub mod playback;
pub mod render;
pub mod snapshot;
pub mod theme;
pub mod tui;

pub use algorithm::Algorithm;
pub use config::Config;
pub use highlight::{compute_highlights, Category, HighlightState, SettledSet};
pub use playback::{Panel, PlaybackConfig, PlaybackDriver, PlaybackError, SchedulingMode};
pub use snapshot::{LoadError, SnapshotSequence};
