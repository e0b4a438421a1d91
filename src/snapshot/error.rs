//! Snapshot loading errors.

/// Errors that can occur while loading a snapshot file.
///
/// `origin` is the display name of the input (usually the file path).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {origin}: {source}")]
    Io {
        origin: String,
        source: std::io::Error,
    },

    #[error("{origin}, line {line}: '{token}' is not a non-negative integer")]
    Parse {
        origin: String,
        line: usize,
        token: String,
    },

    #[error("{origin}, line {line}: frame has {found} values, expected {expected}")]
    LengthMismatch {
        origin: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{origin} contains no frames")]
    Empty { origin: String },
}

impl LoadError {
    /// The input this error refers to.
    pub fn origin(&self) -> &str {
        match self {
            Self::Io { origin, .. }
            | Self::Parse { origin, .. }
            | Self::LengthMismatch { origin, .. }
            | Self::Empty { origin } => origin,
        }
    }
}
