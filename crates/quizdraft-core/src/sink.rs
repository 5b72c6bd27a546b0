//! Submission payload and the built-in sinks.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DraftError;
use crate::model::Quiz;
use crate::traits::QuizSink;

/// A normalized quiz handed to a [`QuizSink`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    pub quiz: Quiz,
    pub submitted_at: DateTime<Utc>,
}

impl QuizSubmission {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            submitted_at: Utc::now(),
        }
    }

    /// Canonical JSON of the submitted quiz.
    pub fn quiz_json(&self) -> Result<String, DraftError> {
        Ok(serde_json::to_string(&self.quiz)?)
    }
}

/// Writes the canonical quiz JSON to the diagnostic log and keeps nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl QuizSink for LogSink {
    fn name(&self) -> &str {
        "log"
    }

    fn submit(&self, submission: &QuizSubmission) -> Result<(), DraftError> {
        let json = submission.quiz_json()?;
        tracing::info!(
            quiz_id = %submission.quiz.id,
            submitted_at = %submission.submitted_at,
            "{json}"
        );
        Ok(())
    }
}

/// Records submissions in memory.
///
/// Can be told to reject every submission, to exercise failure paths.
#[derive(Debug, Default)]
pub struct MemorySink {
    submissions: Mutex<Vec<QuizSubmission>>,
    reject_with: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that rejects every submission with `message`.
    pub fn rejecting(message: &str) -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            reject_with: Some(message.to_string()),
        }
    }

    /// Everything accepted so far, oldest first.
    pub fn submissions(&self) -> Vec<QuizSubmission> {
        self.submissions
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.submissions.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QuizSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn submit(&self, submission: &QuizSubmission) -> Result<(), DraftError> {
        if let Some(message) = &self.reject_with {
            return Err(DraftError::Sink(message.clone()));
        }
        self.submissions
            .lock()
            .map_err(|_| DraftError::Sink("memory sink poisoned".into()))?
            .push(submission.clone());
        Ok(())
    }
}

// Lets a caller keep a handle on a sink it also gave to the store.
impl<S: QuizSink + ?Sized> QuizSink for std::sync::Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn submit(&self, submission: &QuizSubmission) -> Result<(), DraftError> {
        (**self).submit(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserRef;

    fn quiz() -> Quiz {
        Quiz {
            id: "q-1".into(),
            owner: UserRef::new("u-1", "Kim"),
            name: "Quiz A".into(),
            items: Vec::new(),
        }
    }

    #[test]
    fn memory_sink_records_submissions() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());
        sink.submit(&QuizSubmission::new(quiz())).unwrap();
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.submissions()[0].quiz.name, "Quiz A");
    }

    #[test]
    fn rejecting_sink_returns_sink_error() {
        let sink = MemorySink::rejecting("backend offline");
        let err = sink.submit(&QuizSubmission::new(quiz())).unwrap_err();
        assert!(err.is_sink_failure());
        assert!(sink.is_empty());
    }

    #[test]
    fn log_sink_accepts() {
        assert!(LogSink.submit(&QuizSubmission::new(quiz())).is_ok());
    }

    #[test]
    fn quiz_json_is_the_bare_quiz() {
        let submission = QuizSubmission::new(quiz());
        let json: serde_json::Value =
            serde_json::from_str(&submission.quiz_json().unwrap()).unwrap();
        assert_eq!(json["id"], "q-1");
        assert!(json.get("submittedAt").is_none());
    }
}
