//! Completion rules for quiz items.
//!
//! An item is complete when it has a question, an answer, and (for choice
//! items) a title on every option. The submit button is enabled only when
//! every item is complete.

use serde::{Deserialize, Serialize};

use crate::model::{QuizItem, QuizType};

/// Per-rule breakdown of an item's completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCompletion {
    pub has_question: bool,
    pub has_answer: bool,
    pub has_title_of_all_options: bool,
}

impl ItemCompletion {
    /// Evaluate every rule against `item`.
    pub fn of(item: &QuizItem) -> Self {
        Self {
            has_question: has_question(item),
            has_answer: has_answer(item),
            has_title_of_all_options: has_title_of_all_options(item),
        }
    }

    /// All rules hold.
    pub fn is_completed(&self) -> bool {
        self.has_question && self.has_answer && self.has_title_of_all_options
    }
}

pub fn has_question(item: &QuizItem) -> bool {
    !item.question.is_empty()
}

/// Choice items need a marked option; essay items need a non-empty model answer.
pub fn has_answer(item: &QuizItem) -> bool {
    match item.item_type {
        QuizType::Choice => item.options.iter().any(|o| o.is_answer),
        QuizType::Essay => item.essay_answer.as_deref().is_some_and(|a| !a.is_empty()),
    }
}

/// Vacuously true for essay items.
pub fn has_title_of_all_options(item: &QuizItem) -> bool {
    match item.item_type {
        QuizType::Choice => item.options.iter().all(|o| !o.title.is_empty()),
        QuizType::Essay => true,
    }
}

pub fn is_item_completed(item: &QuizItem) -> bool {
    ItemCompletion::of(item).is_completed()
}

/// Whether every item in `items` is complete.
pub fn all_completed(items: &[QuizItem]) -> bool {
    items.iter().all(is_item_completed)
}
