//! Visualizer shell state
//!
//! Everything the terminal application does that does not need a terminal:
//! view and mode switching, key handling, data loading and the deferred
//! actions that wait for running sessions to stop.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::algorithm::Algorithm;
use crate::compare::{self, CompareSlot};
use crate::playback::{Panel, PanelNotice, PlaybackConfig, PlaybackError};
use crate::render::ChartState;
use crate::snapshot::SnapshotSequence;

use super::app::status_footer::StatusLevel;

/// Which screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// One algorithm with the algorithm list
    #[default]
    Single,
    /// Two algorithms side by side
    Compare,
}

/// UI mode for the visualizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Showing keyboard shortcuts
    Help,
    /// Choosing two algorithms to compare
    ComparePicker,
}

/// State of the compare picker modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparePicker {
    pub slots: [Algorithm; 2],
    /// Slot changed by the arrow keys
    pub active: usize,
}

impl ComparePicker {
    pub fn new(first: Algorithm) -> Self {
        Self {
            slots: [first, first.next()],
            active: 0,
        }
    }

    pub fn switch_slot(&mut self) {
        self.active = 1 - self.active;
    }

    pub fn next(&mut self) {
        self.slots[self.active] = self.slots[self.active].next();
    }

    pub fn prev(&mut self) {
        self.slots[self.active] = self.slots[self.active].prev();
    }
}

/// Work that must wait until no session is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Select {
        algorithm: Algorithm,
        file: Option<PathBuf>,
    },
    Reset,
    OpenCompare(CompareSlot, CompareSlot),
    CloseCompare,
    Quit,
}

/// Playback settings for both views.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizerSettings {
    pub single: PlaybackConfig,
    pub compare: PlaybackConfig,
    /// Directory searched for `<algorithm>_output.txt`
    pub data_dir: PathBuf,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            single: PlaybackConfig::single(),
            compare: PlaybackConfig::compare(),
            data_dir: PathBuf::from("."),
        }
    }
}

/// Latest message for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

pub struct VisualizerState {
    settings: VisualizerSettings,
    view: View,
    mode: Mode,
    single: Panel<ChartState>,
    compare: Vec<Panel<ChartState>>,
    picker: ComparePicker,
    pending: Option<PendingAction>,
    status: Option<StatusMessage>,
    should_quit: bool,
}

impl VisualizerState {
    /// Starts in the single view with `algorithm` highlighted and no data.
    pub fn new(settings: VisualizerSettings, algorithm: Algorithm) -> Self {
        let single = Panel::new(algorithm, settings.single, ChartState::new());
        Self {
            settings,
            view: View::Single,
            mode: Mode::Normal,
            single,
            compare: Vec::new(),
            picker: ComparePicker::new(algorithm),
            pending: None,
            status: None,
            should_quit: false,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn picker(&self) -> &ComparePicker {
        &self.picker
    }

    /// Algorithm highlighted in the single view's list.
    pub fn selected(&self) -> Algorithm {
        self.single.algorithm()
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn data_dir(&self) -> &Path {
        &self.settings.data_dir
    }

    /// Panels of the current view: one in the single view, two when comparing.
    pub fn panels(&self) -> &[Panel<ChartState>] {
        match self.view {
            View::Single => std::slice::from_ref(&self.single),
            View::Compare => &self.compare,
        }
    }

    fn panels_mut(&mut self) -> &mut [Panel<ChartState>] {
        match self.view {
            View::Single => std::slice::from_mut(&mut self.single),
            View::Compare => &mut self.compare,
        }
    }

    /// True once no panel of the current view has a session in flight.
    pub fn is_idle(&self) -> bool {
        self.panels().iter().all(|p| p.is_terminated())
    }

    /// Time until the next cooperative step is due, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.panels()
            .iter()
            .filter_map(|p| p.driver().time_until_due())
            .min()
    }

    // --- Shell intents ---

    /// Highlight and load `algorithm` in the single view.
    pub fn on_algorithm_selected(&mut self, algorithm: Algorithm) {
        self.request(PendingAction::Select {
            algorithm,
            file: None,
        });
    }

    /// Like [`on_algorithm_selected`](Self::on_algorithm_selected) with an
    /// explicit snapshot file.
    pub fn on_file_selected(&mut self, algorithm: Algorithm, file: PathBuf) {
        self.request(PendingAction::Select {
            algorithm,
            file: Some(file),
        });
    }

    /// Start every panel of the current view.
    pub fn on_start_requested(&mut self) {
        let mut started = Vec::new();
        let mut failure = None;
        for panel in self.panels_mut() {
            match panel.start() {
                Ok(_) => started.push(panel.algorithm().display_name()),
                Err(e) => failure = Some(e),
            }
        }

        match failure {
            Some(PlaybackError::AlreadyRunning) if !started.is_empty() => {
                self.info(format!("Visualizing {}", started.join(" and ")));
            }
            Some(PlaybackError::AlreadyRunning) => self.warn("Visualization already running"),
            Some(e @ PlaybackError::NoData) => self.warn(e.to_string()),
            Some(e) => self.error(e.to_string()),
            None => self.info(format!("Visualizing {}", started.join(" and "))),
        }
    }

    /// Stop and rewind every panel of the current view to its first frame.
    pub fn on_reset_requested(&mut self) {
        self.request(PendingAction::Reset);
    }

    /// Compare two algorithms using their files in the data directory.
    pub fn on_compare_requested(&mut self, first: Algorithm, second: Algorithm) {
        let dir = self.settings.data_dir.clone();
        self.on_compare_files(
            CompareSlot::in_dir(first, &dir),
            CompareSlot::in_dir(second, &dir),
        );
    }

    pub fn on_compare_files(&mut self, first: CompareSlot, second: CompareSlot) {
        if let Err(e) = compare::check_distinct(first.algorithm, second.algorithm) {
            self.error(e.to_string());
            return;
        }
        self.request(PendingAction::OpenCompare(first, second));
    }

    pub fn on_quit_requested(&mut self) {
        self.request(PendingAction::Quit);
    }

    // --- Event loop ---

    /// Poll all panels and run the pending action once they are idle.
    pub fn tick(&mut self) {
        let mut messages = Vec::new();
        for panel in self.panels_mut() {
            let name = panel.algorithm().display_name();
            for notice in panel.poll() {
                messages.push(match notice {
                    PanelNotice::Completed(report) => format!("{}: {}", name, report.summary()),
                    PanelNotice::Cancelled => format!("{}: cancelled", name),
                });
            }
        }
        if !messages.is_empty() {
            self.info(messages.join(" | "));
        }

        if self.pending.is_some() && self.is_idle() {
            if let Some(action) = self.pending.take() {
                tracing::debug!(?action, "running deferred action");
                self.apply(action);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.on_quit_requested();
            return;
        }
        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Help => self.mode = Mode::Normal,
            Mode::ComparePicker => self.handle_picker_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.on_quit_requested(),
            KeyCode::Char('?') => self.mode = Mode::Help,
            KeyCode::Up | KeyCode::Char('k') if self.view == View::Single => {
                self.on_algorithm_selected(self.selected().prev());
            }
            KeyCode::Down | KeyCode::Char('j') if self.view == View::Single => {
                self.on_algorithm_selected(self.selected().next());
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.on_start_requested(),
            KeyCode::Char('r') => self.on_reset_requested(),
            KeyCode::Char('c') if self.view == View::Single => {
                self.picker = ComparePicker::new(self.selected());
                self.mode = Mode::ComparePicker;
            }
            KeyCode::Esc if self.view == View::Compare => self.request(PendingAction::CloseCompare),
            KeyCode::Esc => self.status = None,
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.picker.prev(),
            KeyCode::Down | KeyCode::Char('j') => self.picker.next(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.picker.switch_slot()
            }
            KeyCode::Enter => {
                self.mode = Mode::Normal;
                let [first, second] = self.picker.slots;
                self.on_compare_requested(first, second);
            }
            KeyCode::Esc => self.mode = Mode::Normal,
            _ => {}
        }
    }

    // --- Deferred actions ---

    /// Run `action` now if idle, else cancel running sessions and queue it.
    ///
    /// A queued quit is never replaced.
    fn request(&mut self, action: PendingAction) {
        if self.is_idle() {
            self.apply(action);
            return;
        }
        if matches!(self.pending, Some(PendingAction::Quit)) {
            return;
        }
        for panel in self.panels_mut() {
            panel.request_cancel();
        }
        tracing::debug!(?action, "deferring until playback stops");
        self.pending = Some(action);
    }

    fn apply(&mut self, action: PendingAction) {
        match action {
            PendingAction::Select { algorithm, file } => self.load_single(algorithm, file),
            PendingAction::Reset => {
                let mut result = Ok(());
                for panel in self.panels_mut() {
                    result = result.and(panel.reset());
                }
                match result {
                    Ok(()) => self.info("Reset"),
                    Err(e) => self.error(e.to_string()),
                }
            }
            PendingAction::OpenCompare(first, second) => self.open_compare(first, second),
            PendingAction::CloseCompare => {
                self.compare.clear();
                self.view = View::Single;
                self.status = None;
            }
            PendingAction::Quit => self.should_quit = true,
        }
    }

    fn load_single(&mut self, algorithm: Algorithm, file: Option<PathBuf>) {
        if let Err(e) = self.single.select_algorithm(algorithm) {
            self.error(e.to_string());
            return;
        }
        let path = file.unwrap_or_else(|| algorithm.snapshot_path(&self.settings.data_dir));
        match SnapshotSequence::load(&path) {
            Ok(sequence) => {
                let frames = sequence.len();
                if let Err(e) = load_panel(&mut self.single, sequence, path.clone()) {
                    self.error(e.to_string());
                    return;
                }
                self.info(format!("Loaded {} ({} frames)", path.display(), frames));
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load snapshot file");
                self.error(e.to_string());
            }
        }
    }

    fn open_compare(&mut self, first: CompareSlot, second: CompareSlot) {
        let (a, b) = match compare::load_pair(&first, &second) {
            Ok(pair) => pair,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load comparison");
                self.error(e.to_string());
                return;
            }
        };

        let mut panels = Vec::with_capacity(2);
        for (slot, sequence) in [(first, a), (second, b)] {
            let mut panel = Panel::new(slot.algorithm, self.settings.compare, ChartState::new());
            if let Err(e) = load_panel(&mut panel, sequence, slot.path) {
                self.error(e.to_string());
                return;
            }
            panels.push(panel);
        }

        self.compare = panels;
        self.view = View::Compare;
        self.info("Press enter to start both visualizations");
    }

    fn info(&mut self, text: impl Into<String>) {
        self.set_status(text, StatusLevel::Info);
    }

    fn warn(&mut self, text: impl Into<String>) {
        self.set_status(text, StatusLevel::Warning);
    }

    fn error(&mut self, text: impl Into<String>) {
        self.set_status(text, StatusLevel::Error);
    }

    fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
        });
    }
}

/// Hand a freshly loaded sequence to a panel and fix its chart scale.
fn load_panel(
    panel: &mut Panel<ChartState>,
    sequence: SnapshotSequence,
    path: PathBuf,
) -> Result<(), PlaybackError> {
    let max = sequence.max_value();
    panel.set_sequence(sequence, Some(path))?;
    panel.renderer_mut().set_scale(Some(max));
    Ok(())
}
