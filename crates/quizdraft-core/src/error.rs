//! Draft error types.
//!
//! Editing operations never fail; these errors cover constructing a store
//! from outside data and handing a finished quiz to its sink.

use thiserror::Error;

/// Errors raised by the draft store and its collaborators.
#[derive(Debug, Error)]
pub enum DraftError {
    /// A quiz must hold at least one item while it is being edited.
    #[error("quiz has no items")]
    EmptyQuiz,

    /// The draft configuration is internally inconsistent.
    #[error("invalid draft config: {0}")]
    InvalidConfig(String),

    /// The quiz could not be serialized to its canonical JSON form.
    #[error("failed to serialize quiz: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output collaborator rejected the submission.
    #[error("submission rejected: {0}")]
    Sink(String),
}

impl DraftError {
    /// Returns `true` if the error came from the output collaborator.
    pub fn is_sink_failure(&self) -> bool {
        matches!(self, DraftError::Sink(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(DraftError::EmptyQuiz.to_string(), "quiz has no items");
        assert_eq!(
            DraftError::Sink("offline".into()).to_string(),
            "submission rejected: offline"
        );
    }

    #[test]
    fn sink_failure_classification() {
        assert!(DraftError::Sink("x".into()).is_sink_failure());
        assert!(!DraftError::EmptyQuiz.is_sink_failure());
    }
}
