//! Cooperative scheduling: ticks driven by the caller's event loop.

use std::time::{Duration, Instant};

use crate::playback::session::Session;
use crate::playback::state::PlaybackEvent;

/// Produces at most one event per poll, once the interval has elapsed.
///
/// Late polls never produce a burst of steps; the animation just slows down.
#[derive(Debug)]
pub struct CooperativeTicker {
    session: Session,
    interval: Duration,
    next_due: Instant,
    cancel_requested: bool,
    finished: bool,
}

impl CooperativeTicker {
    /// The first step is due immediately.
    pub fn new(session: Session, interval: Duration, now: Instant) -> Self {
        Self {
            session,
            interval,
            next_due: now,
            cancel_requested: false,
            finished: false,
        }
    }

    pub fn request_cancel(&mut self) {
        self.cancel_requested = true;
    }

    pub fn is_cancel_requested(&self) -> bool {
        self.cancel_requested
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Time until the next step is due, zero if overdue.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    pub fn poll(&mut self, now: Instant) -> Option<PlaybackEvent> {
        if self.finished {
            return None;
        }
        // Every frame was shown: a late cancel still gets the complete pass
        if self.session.is_exhausted() && (self.cancel_requested || now >= self.next_due) {
            return Some(self.complete());
        }
        if self.cancel_requested {
            self.finished = true;
            tracing::debug!(
                session = %self.session.id(),
                step = self.session.step(),
                "session cancelled"
            );
            return Some(self.session.cancelled());
        }
        if now < self.next_due {
            return None;
        }

        self.next_due = now + self.interval;
        match self.session.advance() {
            Some(update) => Some(PlaybackEvent::Frame(update)),
            None => Some(self.complete()),
        }
    }

    fn complete(&mut self) -> PlaybackEvent {
        self.finished = true;
        tracing::debug!(session = %self.session.id(), "session finished");
        self.session.completed()
    }
}
