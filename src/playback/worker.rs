//! Background playback loop
//!
//! Runs one session on a dedicated thread, sleeping between ticks and
//! sending every event back to the UI thread via a channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::playback::session::Session;
use crate::playback::state::PlaybackEvent;

/// Background loop for one session.
///
/// The cancel flag is checked at the top of every iteration while frames
/// remain. Exits after sending exactly one terminal event, or early if the
/// receiver is gone.
pub fn run_session(
    mut session: Session,
    interval: Duration,
    cancel: Arc<AtomicBool>,
    events: Sender<PlaybackEvent>,
) {
    loop {
        // A cancel after the last frame still ends in the complete pass
        if cancel.load(Ordering::SeqCst) && !session.is_exhausted() {
            tracing::debug!(session = %session.id(), step = session.step(), "session cancelled");
            let _ = events.send(session.cancelled());
            return;
        }

        let Some(update) = session.advance() else {
            break;
        };
        if events.send(PlaybackEvent::Frame(update)).is_err() {
            // Driver dropped the receiver
            return;
        }
        thread::sleep(interval);
    }

    tracing::debug!(session = %session.id(), "session finished");
    let _ = events.send(session.completed());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::state::SessionId;
    use crate::snapshot::SnapshotSequence;
    use std::sync::mpsc;

    fn session(text: &str) -> Session {
        let seq = SnapshotSequence::parse_str(text, "mem").unwrap();
        Session::new(SessionId::next(), Arc::new(seq))
    }

    #[test]
    fn sends_every_frame_then_completion() {
        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));
        run_session(session("3 2 1\n2 3 1\n1 2 3\n"), Duration::ZERO, cancel, tx);

        let events: Vec<_> = rx.iter().collect();
        assert_eq!(events.len(), 4);
        let steps: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                PlaybackEvent::Frame(update) => Some(update.step),
                _ => None,
            })
            .collect();
        assert_eq!(steps, vec![0, 1, 2]);
        assert!(matches!(events[3], PlaybackEvent::Completed { .. }));
    }

    #[test]
    fn pre_cancelled_session_sends_only_cancelled() {
        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(true));
        run_session(session("1 2\n2 1\n"), Duration::ZERO, cancel, tx);

        let events: Vec<_> = rx.iter().collect();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], PlaybackEvent::Cancelled { .. }));
    }

    #[test]
    fn cancel_after_last_frame_sends_completion() {
        let (tx, rx) = mpsc::channel();
        let mut session = session("2 1\n1 2\n");
        while session.advance().is_some() {}
        let cancel = Arc::new(AtomicBool::new(true));
        run_session(session, Duration::ZERO, cancel, tx);

        let events: Vec<_> = rx.iter().collect();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], PlaybackEvent::Completed { .. }));
    }

    #[test]
    fn exits_when_receiver_is_dropped() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let cancel = Arc::new(AtomicBool::new(false));
        // Must return instead of looping over all frames
        run_session(session("1 2\n2 1\n1 2\n"), Duration::ZERO, cancel, tx);
    }
}
