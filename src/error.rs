use thiserror::Error;

/// Everything that can go wrong between raw input and a finished transcript.
///
/// The three provider-reported conditions are distinct variants so a boundary
/// layer can map each to its own message; any other failure is folded into
/// `Unexpected` and only its textual description is carried forward.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptError {
    #[error("Could not extract a valid video ID from the input.")]
    InvalidInput,

    #[error("Transcripts are disabled for this video.")]
    TranscriptsDisabled,

    #[error("No transcript found for this video.")]
    NoTranscriptFound,

    #[error("This video is unavailable.")]
    VideoUnavailable,

    #[error("Something went wrong: {0}")]
    Unexpected(String),
}

impl TranscriptError {
    /// Wrap an arbitrary failure, keeping only its description.
    pub fn unexpected(err: impl std::fmt::Display) -> Self {
        TranscriptError::Unexpected(err.to_string())
    }

    /// HTTP status an API boundary maps this error to.
    pub fn status_code(&self) -> u16 {
        match self {
            TranscriptError::InvalidInput => 400,
            TranscriptError::TranscriptsDisabled
            | TranscriptError::NoTranscriptFound
            | TranscriptError::VideoUnavailable => 404,
            TranscriptError::Unexpected(_) => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, TranscriptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            TranscriptError::TranscriptsDisabled.to_string(),
            "Transcripts are disabled for this video."
        );
        assert_eq!(
            TranscriptError::NoTranscriptFound.to_string(),
            "No transcript found for this video."
        );
        assert_eq!(TranscriptError::VideoUnavailable.to_string(), "This video is unavailable.");
    }

    #[test]
    fn test_unexpected_carries_description() {
        let err = TranscriptError::unexpected("connection reset");
        assert_eq!(err.to_string(), "Something went wrong: connection reset");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(TranscriptError::InvalidInput.status_code(), 400);
        assert_eq!(TranscriptError::TranscriptsDisabled.status_code(), 404);
        assert_eq!(TranscriptError::NoTranscriptFound.status_code(), 404);
        assert_eq!(TranscriptError::VideoUnavailable.status_code(), 404);
        assert_eq!(TranscriptError::unexpected("x").status_code(), 500);
    }
}
