//! Snapshot playback
//!
//! A [`Panel`] pairs one algorithm's snapshot data with a [`PlaybackDriver`]
//! and a [`Renderer`](crate::render::Renderer). The driver runs at most one
//! [`Session`] at a time, ticking it either on the caller's event loop or on
//! a background thread.

pub mod cooperative;
pub mod driver;
pub mod error;
pub mod panel;
pub mod session;
pub mod state;
pub mod worker;

pub use cooperative::CooperativeTicker;
pub use driver::PlaybackDriver;
pub use error::PlaybackError;
pub use panel::{Panel, PanelNotice, SessionReport};
pub use session::Session;
pub use state::{
    FrameUpdate, PlaybackConfig, PlaybackEvent, PlaybackPhase, SchedulingMode, SessionId,
};
