//! A single playback session: the step cursor over a snapshot sequence.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::highlight::{compute_highlights, HighlightState, SettledSet};
use crate::playback::state::{FrameUpdate, PlaybackEvent, SessionId};
use crate::snapshot::SnapshotSequence;

/// Step cursor, settled set and start time of one run.
///
/// The session itself knows nothing about timing or threads; schedulers call
/// [`Session::advance`] once per tick.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    sequence: Arc<SnapshotSequence>,
    step: usize,
    settled: SettledSet,
    started: Instant,
}

impl Session {
    pub fn new(id: SessionId, sequence: Arc<SnapshotSequence>) -> Self {
        Self {
            id,
            sequence,
            step: 0,
            settled: SettledSet::new(),
            started: Instant::now(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Index of the next step to emit.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn is_exhausted(&self) -> bool {
        self.step >= self.sequence.len()
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Compute the next step, or `None` once every frame was emitted.
    ///
    /// Step 0 compares the first frame with itself.
    pub fn advance(&mut self) -> Option<FrameUpdate> {
        let frames = self.sequence.frames();
        let current = frames.get(self.step)?;
        let previous = &frames[self.step.saturating_sub(1)];
        let highlights = compute_highlights(previous, current, &mut self.settled);

        let update = FrameUpdate {
            session: self.id,
            step: self.step,
            frame: current.clone(),
            highlights,
        };
        self.step += 1;
        Some(update)
    }

    /// Final event: last frame with every index painted complete.
    pub fn completed(&self) -> PlaybackEvent {
        let last = self.sequence.last();
        PlaybackEvent::Completed {
            session: self.id,
            frame: last.clone(),
            highlights: HighlightState::complete(last.len()),
            elapsed: self.elapsed(),
        }
    }

    pub fn cancelled(&self) -> PlaybackEvent {
        PlaybackEvent::Cancelled { session: self.id }
    }
}
