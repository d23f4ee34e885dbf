/// Audio output errors
use thiserror::Error;

/// Result type for audio operations
pub type Result<T> = std::result::Result<T, AudioError>;

/// Audio errors
#[derive(Debug, Error)]
pub enum AudioError {
    /// Failed to load a stream URL into the output
    #[error("Failed to load stream: {0}")]
    LoadError(String),

    /// Playback start was refused by the output
    ///
    /// Outputs may refuse to start without prior user interaction; the
    /// binder treats this as "stay paused", not as a dead stream.
    #[error("Failed to start playback: {0}")]
    PlayError(String),

    /// Output backend error
    #[error("Output error: {0}")]
    OutputError(String),
}

impl AudioError {
    /// Create a load error
    pub fn load(msg: impl Into<String>) -> Self {
        Self::LoadError(msg.into())
    }

    /// Create a play error
    pub fn play(msg: impl Into<String>) -> Self {
        Self::PlayError(msg.into())
    }

    /// Create an output error
    pub fn output(msg: impl Into<String>) -> Self {
        Self::OutputError(msg.into())
    }
}

impl From<AudioError> for fourleaf_core::FourleafError {
    fn from(err: AudioError) -> Self {
        fourleaf_core::FourleafError::stream(err.to_string())
    }
}
