//! Playback state and shared types
//!
//! Phases, scheduling configuration and the events a running session emits.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::highlight::HighlightState;
use crate::snapshot::Frame;

/// Lifecycle phase of a playback driver.
///
/// `Idle -> Running -> {Finished, Cancelled}`; both terminal phases go back
/// to `Idle` on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPhase {
    #[default]
    Idle,
    Running,
    Finished,
    Cancelled,
}

/// How ticks are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SchedulingMode {
    /// Ticks are produced by the UI loop calling `poll`; no extra thread
    Cooperative,
    /// A dedicated thread sleeps between ticks and sends events over a channel
    Background,
}

impl fmt::Display for SchedulingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulingMode::Cooperative => write!(f, "cooperative"),
            SchedulingMode::Background => write!(f, "background"),
        }
    }
}

/// Tick interval and scheduling mode for one driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    pub interval: Duration,
    pub mode: SchedulingMode,
}

impl PlaybackConfig {
    /// Default tick interval of the single-algorithm view
    pub const SINGLE_INTERVAL: Duration = Duration::from_millis(100);
    /// Default tick interval of the comparison view
    pub const COMPARE_INTERVAL: Duration = Duration::from_millis(50);

    pub fn new(interval: Duration, mode: SchedulingMode) -> Self {
        Self { interval, mode }
    }

    /// Single view defaults: 100ms on a background thread.
    pub fn single() -> Self {
        Self::new(Self::SINGLE_INTERVAL, SchedulingMode::Background)
    }

    /// Comparison view defaults: 50ms driven by the UI loop.
    pub fn compare() -> Self {
        Self::new(Self::COMPARE_INTERVAL, SchedulingMode::Cooperative)
    }
}

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one playback session. Unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    pub(crate) fn next() -> Self {
        Self(NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One rendered step: a full frame and its highlights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameUpdate {
    pub session: SessionId,
    pub step: usize,
    pub frame: Frame,
    pub highlights: HighlightState,
}

/// Event emitted by a running session, delivered in step order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Next step of the animation
    Frame(FrameUpdate),
    /// All steps shown; carries the last frame painted complete
    Completed {
        session: SessionId,
        frame: Frame,
        highlights: HighlightState,
        elapsed: Duration,
    },
    /// Session stopped early on request
    Cancelled { session: SessionId },
}

impl PlaybackEvent {
    pub fn session(&self) -> SessionId {
        match self {
            PlaybackEvent::Frame(update) => update.session,
            PlaybackEvent::Completed { session, .. } | PlaybackEvent::Cancelled { session } => {
                *session
            }
        }
    }

    /// True for the last event a session emits.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PlaybackEvent::Frame(_))
    }
}
