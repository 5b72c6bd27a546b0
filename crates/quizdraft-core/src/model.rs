//! Core data model types for quizdraft.
//!
//! A [`Quiz`] is an ordered list of [`QuizItem`]s. Choice items carry
//! [`QuizOption`]s; essay items carry a free-text model answer. The serde
//! shape of these types is the canonical wire form handed to the sink on
//! submission.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::traits::IdGenerator;

/// Number of options seeded into a fresh choice item.
pub const DEFAULT_OPTION_COUNT: usize = 4;

/// A reference to the user who owns a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    /// Stable user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl UserRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A quiz being authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    /// Unique identifier for this quiz.
    pub id: String,
    /// The author.
    pub owner: UserRef,
    /// Human-readable name.
    pub name: String,
    /// Question items, in presentation order.
    #[serde(default)]
    pub items: Vec<QuizItem>,
}

/// A single question in a quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizItem {
    pub uuid: String,
    /// The question shown to students.
    #[serde(default)]
    pub question: String,
    /// Which answer form this item uses.
    #[serde(rename = "type")]
    pub item_type: QuizType,
    /// Answer options. Only meaningful for choice items.
    #[serde(default)]
    pub options: Vec<QuizOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Explanation shown after answering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Model answer. Only meaningful for essay items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub essay_answer: Option<String>,
}

impl QuizItem {
    /// Build the item every new slot starts from: an empty choice question
    /// with `option_count` blank options, the first one marked correct.
    ///
    /// Every call draws fresh identifiers, so items built here never share
    /// state with each other.
    pub fn new_default(ids: &dyn IdGenerator, option_count: usize) -> Self {
        let options = (0..option_count)
            .map(|i| {
                let mut option = QuizOption::new(ids);
                option.is_answer = i == 0;
                option
            })
            .collect();

        Self {
            uuid: ids.next_id(),
            question: String::new(),
            item_type: QuizType::Choice,
            options,
            image_url: None,
            reason: None,
            essay_answer: None,
        }
    }

    /// Whether this item satisfies every completion rule.
    pub fn is_completed(&self) -> bool {
        crate::completion::is_item_completed(self)
    }
}

/// One selectable answer of a choice item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub uuid: String,
    #[serde(default)]
    pub title: String,
    /// Whether selecting this option is correct.
    #[serde(default)]
    pub is_answer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl QuizOption {
    /// A blank, incorrect option with a fresh identifier.
    pub fn new(ids: &dyn IdGenerator) -> Self {
        Self {
            uuid: ids.next_id(),
            title: String::new(),
            is_answer: false,
            image_url: None,
        }
    }
}

/// The answer form of a quiz item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizType {
    /// Multiple choice.
    Choice,
    /// Free-text answer.
    Essay,
}

impl fmt::Display for QuizType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizType::Choice => write!(f, "choice"),
            QuizType::Essay => write!(f, "essay"),
        }
    }
}

impl FromStr for QuizType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "choice" | "multiple-choice" => Ok(QuizType::Choice),
            "essay" => Ok(QuizType::Essay),
            other => Err(format!("unknown quiz type: {other}")),
        }
    }
}
