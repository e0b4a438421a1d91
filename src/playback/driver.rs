//! Playback driver
//!
//! Owns at most one session at a time and schedules its ticks either on the
//! caller's loop (cooperative) or on a background thread. The caller polls
//! the driver for events and hands them to a renderer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::playback::cooperative::CooperativeTicker;
use crate::playback::error::PlaybackError;
use crate::playback::session::Session;
use crate::playback::state::{
    PlaybackConfig, PlaybackEvent, PlaybackPhase, SchedulingMode, SessionId,
};
use crate::playback::worker::run_session;
use crate::snapshot::SnapshotSequence;

/// Sleep between polls while blocking on termination.
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(2);

/// Execution context of the current session.
enum Engine {
    /// Nothing in flight
    Idle,
    Cooperative(CooperativeTicker),
    Background(BackgroundHandle),
}

struct BackgroundHandle {
    cancel: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
    events: Receiver<PlaybackEvent>,
}

impl BackgroundHandle {
    /// Drain pending events. The flag is true if the worker hung up.
    fn drain(&mut self) -> (Vec<PlaybackEvent>, bool) {
        let mut events = Vec::new();
        loop {
            match self.events.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) => return (events, false),
                Err(TryRecvError::Disconnected) => return (events, true),
            }
        }
    }

    fn join(&mut self) {
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::warn!("playback thread panicked");
            }
        }
    }
}

/// Drives one playback session at a time.
///
/// Dropping the driver cancels a running session and waits for its
/// execution context to stop.
pub struct PlaybackDriver {
    config: PlaybackConfig,
    phase: PlaybackPhase,
    session: Option<SessionId>,
    engine: Engine,
}

impl PlaybackDriver {
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            config,
            phase: PlaybackPhase::Idle,
            session: None,
            engine: Engine::Idle,
        }
    }

    pub fn config(&self) -> PlaybackConfig {
        self.config
    }

    /// Takes effect with the next session.
    pub fn set_config(&mut self, config: PlaybackConfig) {
        self.config = config;
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    /// Id of the running or most recently ended session, cleared by reset.
    pub fn current_session(&self) -> Option<SessionId> {
        self.session
    }

    /// True once no execution context is in flight.
    pub fn is_terminated(&self) -> bool {
        matches!(self.engine, Engine::Idle)
    }

    pub fn is_cancel_requested(&self) -> bool {
        match &self.engine {
            Engine::Idle => false,
            Engine::Cooperative(ticker) => ticker.is_cancel_requested(),
            Engine::Background(handle) => handle.cancel.load(Ordering::SeqCst),
        }
    }

    /// Time until the next cooperative step is due. `None` in background
    /// mode or when nothing runs.
    pub fn time_until_due(&self) -> Option<Duration> {
        match &self.engine {
            Engine::Cooperative(ticker) => Some(ticker.time_until_due(Instant::now())),
            _ => None,
        }
    }

    /// Start a new session over `sequence`.
    ///
    /// Fails with `AlreadyRunning` while a session runs without a pending
    /// cancellation. If a cancelled session is still stopping, blocks until
    /// it has; its remaining events are discarded.
    pub fn start(&mut self, sequence: Arc<SnapshotSequence>) -> Result<SessionId, PlaybackError> {
        if !self.is_terminated() {
            if !self.is_cancel_requested() {
                return Err(PlaybackError::AlreadyRunning);
            }
            let discarded = self.wait_for_termination();
            tracing::debug!(
                discarded = discarded.len(),
                "previous session stopped before start"
            );
        }

        let id = SessionId::next();
        let frames = sequence.len();
        let session = Session::new(id, sequence);
        let interval = self.config.interval;

        self.engine = match self.config.mode {
            SchedulingMode::Cooperative => {
                Engine::Cooperative(CooperativeTicker::new(session, interval, Instant::now()))
            }
            SchedulingMode::Background => {
                let (tx, rx) = mpsc::channel();
                let cancel = Arc::new(AtomicBool::new(false));
                let worker_cancel = Arc::clone(&cancel);
                let thread = thread::Builder::new()
                    .name(format!("sortviz-playback-{}", id.get()))
                    .spawn(move || run_session(session, interval, worker_cancel, tx))
                    .map_err(PlaybackError::Spawn)?;
                Engine::Background(BackgroundHandle {
                    cancel,
                    thread: Some(thread),
                    events: rx,
                })
            }
        };

        self.phase = PlaybackPhase::Running;
        self.session = Some(id);
        tracing::info!(
            session = %id,
            frames,
            mode = %self.config.mode,
            interval_ms = interval.as_millis() as u64,
            "playback started"
        );
        Ok(id)
    }

    /// Ask the running session to stop at its next tick.
    ///
    /// Returns false if nothing is in flight.
    pub fn request_cancel(&mut self) -> bool {
        match &mut self.engine {
            Engine::Idle => false,
            Engine::Cooperative(ticker) => {
                ticker.request_cancel();
                true
            }
            Engine::Background(handle) => {
                handle.cancel.store(true, Ordering::SeqCst);
                true
            }
        }
    }

    /// Collect events produced since the last poll, in step order.
    ///
    /// Never blocks. A terminal event moves the phase to `Finished` or
    /// `Cancelled` and releases the execution context.
    pub fn poll(&mut self) -> Vec<PlaybackEvent> {
        let (events, hung_up) = match &mut self.engine {
            Engine::Idle => return Vec::new(),
            Engine::Cooperative(ticker) => {
                (ticker.poll(Instant::now()).into_iter().collect(), false)
            }
            Engine::Background(handle) => handle.drain(),
        };

        let mut events: Vec<PlaybackEvent> = events;
        if let Some(terminal) = events.iter().find(|e| e.is_terminal()) {
            self.phase = match terminal {
                PlaybackEvent::Completed { .. } => PlaybackPhase::Finished,
                _ => PlaybackPhase::Cancelled,
            };
            self.release_engine();
        } else if hung_up {
            tracing::warn!(session = ?self.session, "playback thread exited without a final event");
            self.phase = PlaybackPhase::Cancelled;
            self.release_engine();
            if let Some(session) = self.session {
                events.push(PlaybackEvent::Cancelled { session });
            }
        }
        events
    }

    /// Block until the execution context has stopped, returning all events
    /// produced meanwhile.
    ///
    /// Without a prior [`request_cancel`](Self::request_cancel) this waits for
    /// the session to play to the end.
    pub fn wait_for_termination(&mut self) -> Vec<PlaybackEvent> {
        let mut events = Vec::new();
        while !self.is_terminated() {
            let batch = self.poll();
            if batch.is_empty() {
                thread::sleep(WAIT_POLL_INTERVAL);
            }
            events.extend(batch);
        }
        events
    }

    /// Return to `Idle`. Fails while an execution context is in flight.
    pub fn reset(&mut self) -> Result<(), PlaybackError> {
        if !self.is_terminated() {
            return Err(PlaybackError::StillRunning);
        }
        self.phase = PlaybackPhase::Idle;
        self.session = None;
        Ok(())
    }

    fn release_engine(&mut self) {
        if let Engine::Background(mut handle) = std::mem::replace(&mut self.engine, Engine::Idle) {
            // The worker sends its terminal event as its last action
            handle.join();
        }
    }
}

impl Drop for PlaybackDriver {
    fn drop(&mut self) {
        if self.request_cancel() {
            self.wait_for_termination();
        }
    }
}
