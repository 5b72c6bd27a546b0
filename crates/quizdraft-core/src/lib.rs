//! quizdraft-core — Quiz draft model, completion rules, and editing store.
//!
//! This crate defines the quiz data model, the completeness predicates used to
//! gate submission, and the [`store::QuizDraftStore`] that UI event handlers
//! mutate while a quiz is being authored.

pub mod completion;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod sink;
pub mod store;
pub mod traits;
