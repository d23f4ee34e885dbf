/// Core error types for the Fourleaf player
use thiserror::Error;

/// Result type alias using `FourleafError`
pub type Result<T> = std::result::Result<T, FourleafError>;

/// Core error type for the Fourleaf player
///
/// A track with no playable stream is `Ok(None)` at the resolver seam,
/// never an error; these variants cover genuine failures only.
#[derive(Error, Debug)]
pub enum FourleafError {
    /// Stream resolution failed (network, backend, or decode-side)
    #[error("Stream error: {0}")]
    Stream(String),

    /// Upload failed
    #[error("Upload error: {0}")]
    Upload(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// I/O errors
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl FourleafError {
    /// Create a stream error
    pub fn stream(msg: impl Into<String>) -> Self {
        Self::Stream(msg.into())
    }

    /// Create an upload error
    pub fn upload(msg: impl Into<String>) -> Self {
        Self::Upload(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_build_the_matching_variant() {
        assert!(matches!(FourleafError::stream("x"), FourleafError::Stream(_)));
        assert!(matches!(FourleafError::upload("x"), FourleafError::Upload(_)));
        assert!(matches!(
            FourleafError::invalid_input("x"),
            FourleafError::InvalidInput(_)
        ));
        assert!(matches!(FourleafError::network("x"), FourleafError::Network(_)));
    }

    #[test]
    fn display_messages_are_prefixed() {
        assert_eq!(
            FourleafError::stream("no codec").to_string(),
            "Stream error: no codec"
        );
        assert_eq!(
            FourleafError::network("timed out").to_string(),
            "Network error: timed out"
        );
        assert_eq!(FourleafError::Other("odd".into()).to_string(), "odd");
    }

    #[test]
    fn io_errors_convert_and_keep_their_source() {
        let err: FourleafError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, FourleafError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
