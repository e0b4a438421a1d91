//! Playback lifecycle errors.

/// Errors returned by the playback driver and panels.
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("No snapshot data loaded. Choose a file first.")]
    NoData,

    #[error("A playback session is already running")]
    AlreadyRunning,

    #[error("Playback is still stopping")]
    StillRunning,

    #[error("Failed to start playback thread: {0}")]
    Spawn(#[source] std::io::Error),
}
