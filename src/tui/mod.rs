//! Terminal user interface
//!
//! The shell around the playback core: it turns key presses into intents,
//! keeps polling the panels while they animate and draws their charts.

pub mod app;
pub mod ui;
pub mod visualizer;
pub mod visualizer_app;

pub use app::App;
pub use visualizer::{PendingAction, VisualizerSettings, VisualizerState};
pub use visualizer_app::VisualizerApp;
