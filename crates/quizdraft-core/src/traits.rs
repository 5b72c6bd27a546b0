//! Collaborator traits for the draft store.
//!
//! The store talks to the outside world through these seams: an identifier
//! generator, the current-user provider, the submission sink, and the views
//! listening for changes.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::error::DraftError;
use crate::model::UserRef;
use crate::sink::QuizSubmission;
use crate::store::{QuizDraftStore, StoreEvent};

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Source of globally unique identifiers for quizzes, items, and options.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `<prefix>-<n>` identifiers, counting from 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{n}", self.prefix)
    }
}

// ---------------------------------------------------------------------------
// Current user
// ---------------------------------------------------------------------------

/// Supplies the owner of newly created quizzes.
pub trait CurrentUserProvider {
    fn current_user(&self) -> UserRef;
}

/// A provider that always returns the same user.
#[derive(Debug, Clone)]
pub struct StaticUser(pub UserRef);

impl CurrentUserProvider for StaticUser {
    fn current_user(&self) -> UserRef {
        self.0.clone()
    }
}

// ---------------------------------------------------------------------------
// Submission sink
// ---------------------------------------------------------------------------

/// Receives finished quizzes on submit (classroom store, network layer, ...).
pub trait QuizSink: Send + Sync {
    /// Human-readable sink name, used in logs.
    fn name(&self) -> &str;

    /// Accept a normalized quiz.
    fn submit(&self, submission: &QuizSubmission) -> Result<(), DraftError>;
}

// ---------------------------------------------------------------------------
// Store listeners
// ---------------------------------------------------------------------------

/// A view observing the store.
///
/// Called synchronously after every effective mutation, with the store in its
/// post-mutation state.
pub trait StoreListener: Send {
    fn on_change(&mut self, store: &QuizDraftStore, event: &StoreEvent);
}

impl<F> StoreListener for F
where
    F: FnMut(&QuizDraftStore, &StoreEvent) + Send,
{
    fn on_change(&mut self, store: &QuizDraftStore, event: &StoreEvent) {
        self(store, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_generator_yields_distinct_ids() {
        let ids = UuidGenerator;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn sequential_generator_counts_from_one() {
        let ids = SequentialIdGenerator::new("opt");
        assert_eq!(ids.next_id(), "opt-1");
        assert_eq!(ids.next_id(), "opt-2");
    }

    #[test]
    fn static_user_returns_same_owner() {
        let users = StaticUser(UserRef::new("u1", "Minseong"));
        assert_eq!(users.current_user(), users.current_user());
        assert_eq!(users.current_user().id, "u1");
    }
}
