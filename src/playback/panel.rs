//! One algorithm's playback lane: snapshot data, driver and renderer.
//!
//! The single view owns one panel, the comparison view two. Panels share no
//! mutable state and finish independently.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::algorithm::Algorithm;
use crate::highlight::HighlightState;
use crate::playback::driver::PlaybackDriver;
use crate::playback::error::PlaybackError;
use crate::playback::state::{PlaybackConfig, PlaybackEvent, PlaybackPhase, SessionId};
use crate::render::Renderer;
use crate::snapshot::SnapshotSequence;

/// Outcome of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub algorithm: Algorithm,
    pub elapsed: Duration,
    /// Static label from the complexity table
    pub complexity: &'static str,
}

impl SessionReport {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// e.g. `Time complexity: O(n log n) - 1.23 seconds`
    pub fn summary(&self) -> String {
        format!(
            "Time complexity: {} - {:.2} seconds",
            self.complexity,
            self.elapsed_secs()
        )
    }
}

/// Notification for the presentation shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelNotice {
    Completed(SessionReport),
    Cancelled,
}

/// Binds one algorithm's snapshot sequence to a driver and a renderer.
pub struct Panel<R: Renderer> {
    algorithm: Algorithm,
    sequence: Option<Arc<SnapshotSequence>>,
    source: Option<PathBuf>,
    driver: PlaybackDriver,
    renderer: R,
    report: Option<SessionReport>,
    last_step: Option<usize>,
}

impl<R: Renderer> Panel<R> {
    pub fn new(algorithm: Algorithm, config: PlaybackConfig, renderer: R) -> Self {
        Self {
            algorithm,
            sequence: None,
            source: None,
            driver: PlaybackDriver::new(config),
            renderer,
            report: None,
            last_step: None,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn sequence(&self) -> Option<&Arc<SnapshotSequence>> {
        self.sequence.as_ref()
    }

    /// File the sequence was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn has_data(&self) -> bool {
        self.sequence.is_some()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.driver.phase()
    }

    pub fn is_terminated(&self) -> bool {
        self.driver.is_terminated()
    }

    pub fn driver(&self) -> &PlaybackDriver {
        &self.driver
    }

    /// Report of the last finished session, cleared on start and reset.
    pub fn report(&self) -> Option<&SessionReport> {
        self.report.as_ref()
    }

    /// Step most recently handed to the renderer.
    pub fn last_step(&self) -> Option<usize> {
        self.last_step
    }

    /// Takes effect with the next session.
    pub fn set_config(&mut self, config: PlaybackConfig) {
        self.driver.set_config(config);
    }

    /// Replace the snapshot data and draw its first frame.
    ///
    /// Only allowed while no session is in flight.
    pub fn set_sequence(
        &mut self,
        sequence: SnapshotSequence,
        source: Option<PathBuf>,
    ) -> Result<(), PlaybackError> {
        self.driver.reset()?;
        self.sequence = Some(Arc::new(sequence));
        self.source = source;
        self.report = None;
        self.last_step = None;
        self.show_first_frame();
        Ok(())
    }

    /// Start animating the loaded sequence.
    pub fn start(&mut self) -> Result<SessionId, PlaybackError> {
        let sequence = self.sequence.clone().ok_or(PlaybackError::NoData)?;
        let id = self.driver.start(sequence)?;
        self.report = None;
        self.last_step = None;
        tracing::info!(algorithm = %self.algorithm, session = %id, "visualization started");
        Ok(id)
    }

    pub fn request_cancel(&mut self) -> bool {
        self.driver.request_cancel()
    }

    /// Apply pending playback events to the renderer.
    ///
    /// Events of any session other than the current one are dropped.
    pub fn poll(&mut self) -> Vec<PanelNotice> {
        let current = self.driver.current_session();
        let mut notices = Vec::new();

        for event in self.driver.poll() {
            if Some(event.session()) != current {
                tracing::debug!(session = %event.session(), "dropping stale playback event");
                continue;
            }
            match event {
                PlaybackEvent::Frame(update) => {
                    self.renderer.render(&update.frame, &update.highlights);
                    self.last_step = Some(update.step);
                }
                PlaybackEvent::Completed {
                    frame,
                    highlights,
                    elapsed,
                    ..
                } => {
                    self.renderer.render(&frame, &highlights);
                    let report = SessionReport {
                        algorithm: self.algorithm,
                        elapsed,
                        complexity: self.algorithm.complexity(),
                    };
                    tracing::info!(
                        algorithm = %self.algorithm,
                        elapsed_ms = elapsed.as_millis() as u64,
                        "visualization finished"
                    );
                    self.report = Some(report.clone());
                    notices.push(PanelNotice::Completed(report));
                }
                PlaybackEvent::Cancelled { .. } => {
                    tracing::info!(algorithm = %self.algorithm, "visualization cancelled");
                    notices.push(PanelNotice::Cancelled);
                }
            }
        }
        notices
    }

    /// Back to idle, keeping the loaded data and redrawing its first frame.
    pub fn reset(&mut self) -> Result<(), PlaybackError> {
        self.driver.reset()?;
        self.report = None;
        self.last_step = None;
        self.show_first_frame();
        Ok(())
    }

    /// Back to idle and drop the loaded data.
    pub fn clear(&mut self) -> Result<(), PlaybackError> {
        self.driver.reset()?;
        self.sequence = None;
        self.source = None;
        self.report = None;
        self.last_step = None;
        self.renderer.clear();
        Ok(())
    }

    /// Switch to another algorithm; its data must be loaded afresh.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) -> Result<(), PlaybackError> {
        self.clear()?;
        self.algorithm = algorithm;
        Ok(())
    }

    fn show_first_frame(&mut self) {
        match &self.sequence {
            Some(sequence) => {
                let first = sequence.first();
                self.renderer
                    .render(first, &HighlightState::baseline(first.len()));
            }
            None => self.renderer.clear(),
        }
    }
}
