//! The quiz draft store.
//!
//! Holds one quiz being authored plus a cursor into its items. UI event
//! handlers call the mutation methods; views read the derived getters and
//! subscribe to [`StoreEvent`]s to learn when to re-render.

use std::fmt;

use crate::completion::all_completed;
use crate::config::DraftConfig;
use crate::error::DraftError;
use crate::model::{Quiz, QuizItem, QuizOption, QuizType};
use crate::sink::{LogSink, QuizSubmission};
use crate::traits::{CurrentUserProvider, IdGenerator, QuizSink, StoreListener, UuidGenerator};

/// What a mutation touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    QuizRenamed,
    CursorMoved { index: usize },
    ItemAdded { index: usize },
    ItemUpdated { index: usize, field: ItemField },
    ItemRemoved { index: usize },
    OptionAdded { item: usize, option: usize },
    OptionUpdated { item: usize, option: usize, field: OptionField },
    OptionRemoved { item: usize, option: usize },
    Submitted { quiz_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Question,
    Type,
    ImageUrl,
    Reason,
    EssayAnswer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    Title,
    IsAnswer,
    ImageUrl,
}

/// Handle returned by [`QuizDraftStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Editing state for one quiz-authoring session.
///
/// The item list is never empty and the cursor always points at an existing
/// item. Calls with out-of-range indices are logged and ignored.
pub struct QuizDraftStore {
    quiz: Quiz,
    current_item_index: usize,
    ids: Box<dyn IdGenerator>,
    sink: Box<dyn QuizSink>,
    config: DraftConfig,
    listeners: Vec<(SubscriptionId, Box<dyn StoreListener>)>,
    next_subscription: u64,
}

impl fmt::Debug for QuizDraftStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizDraftStore")
            .field("quiz", &self.quiz)
            .field("current_item_index", &self.current_item_index)
            .field("sink", &self.sink.name())
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl QuizDraftStore {
    /// Start a new quiz owned by the current user, with random identifiers,
    /// the default limits, and submissions going to the log.
    pub fn new(name: impl Into<String>, users: &dyn CurrentUserProvider) -> Self {
        Self::build(
            name.into(),
            users,
            Box::new(UuidGenerator),
            Box::new(LogSink),
            DraftConfig::default(),
        )
    }

    /// Start a new quiz with explicit collaborators.
    pub fn with_parts(
        name: impl Into<String>,
        users: &dyn CurrentUserProvider,
        ids: Box<dyn IdGenerator>,
        sink: Box<dyn QuizSink>,
        config: DraftConfig,
    ) -> Result<Self, DraftError> {
        config.validate()?;
        Ok(Self::build(name.into(), users, ids, sink, config))
    }

    /// Resume editing an existing quiz. The cursor starts on the first item.
    pub fn from_quiz(
        quiz: Quiz,
        ids: Box<dyn IdGenerator>,
        sink: Box<dyn QuizSink>,
        config: DraftConfig,
    ) -> Result<Self, DraftError> {
        if quiz.items.is_empty() {
            return Err(DraftError::EmptyQuiz);
        }
        config.validate()?;

        tracing::debug!(quiz_id = %quiz.id, items = quiz.items.len(), "resuming quiz draft");
        Ok(Self {
            quiz,
            current_item_index: 0,
            ids,
            sink,
            config,
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    fn build(
        name: String,
        users: &dyn CurrentUserProvider,
        ids: Box<dyn IdGenerator>,
        sink: Box<dyn QuizSink>,
        config: DraftConfig,
    ) -> Self {
        let first = QuizItem::new_default(ids.as_ref(), config.default_option_count);
        let quiz = Quiz {
            id: ids.next_id(),
            owner: users.current_user(),
            name,
            items: vec![first],
        };

        tracing::debug!(quiz_id = %quiz.id, owner = %quiz.owner.id, "created quiz draft");
        Self {
            quiz,
            current_item_index: 0,
            ids,
            sink,
            config,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    // ------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------

    /// Register a view. It is called after every effective mutation.
    pub fn subscribe<L>(&mut self, listener: L) -> SubscriptionId
    where
        L: StoreListener + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a view. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: StoreEvent) {
        tracing::debug!(?event, "quiz draft changed");
        // Listeners only get a shared borrow, so none can subscribe mid-dispatch.
        let mut listeners = std::mem::take(&mut self.listeners);
        for (_, listener) in listeners.iter_mut() {
            listener.on_change(self, &event);
        }
        self.listeners = listeners;
    }

    // ------------------------------------------------------------------
    // Quiz
    // ------------------------------------------------------------------

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn into_quiz(self) -> Quiz {
        self.quiz
    }

    pub fn config(&self) -> &DraftConfig {
        &self.config
    }

    pub fn update_quiz_name(&mut self, name: impl Into<String>) {
        self.quiz.name = name.into();
        self.notify(StoreEvent::QuizRenamed);
    }

    /// True when every item is complete.
    pub fn enabled_submit_button(&self) -> bool {
        all_completed(&self.quiz.items)
    }

    /// Indices of items that are not yet complete.
    pub fn incomplete_items(&self) -> Vec<usize> {
        self.quiz
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_completed())
            .map(|(index, _)| index)
            .collect()
    }

    /// Normalize the quiz and hand it to the sink.
    ///
    /// Essay items lose their options. The normalization stays applied even
    /// if the sink rejects the submission.
    pub fn submit_quiz(&mut self) -> Result<QuizSubmission, DraftError> {
        for item in self
            .quiz
            .items
            .iter_mut()
            .filter(|item| item.item_type == QuizType::Essay)
        {
            item.options.clear();
        }

        let incomplete = self.incomplete_items();
        if !incomplete.is_empty() {
            tracing::warn!(?incomplete, "submitting quiz with incomplete items");
        }

        let submission = QuizSubmission::new(self.quiz.clone());
        let json = submission.quiz_json()?;
        tracing::info!(
            quiz_id = %self.quiz.id,
            items = self.quiz.items.len(),
            sink = self.sink.name(),
            "submitting quiz"
        );
        tracing::debug!(%json, "canonical quiz");

        self.sink.submit(&submission)?;

        let quiz_id = self.quiz.id.clone();
        self.notify(StoreEvent::Submitted { quiz_id });
        Ok(submission)
    }

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    pub fn quiz_items(&self) -> &[QuizItem] {
        &self.quiz.items
    }

    pub fn current_item_index(&self) -> usize {
        self.current_item_index
    }

    pub fn current_quiz_item(&self) -> &QuizItem {
        &self.quiz.items[self.current_item_index]
    }

    fn current_item_mut(&mut self) -> &mut QuizItem {
        &mut self.quiz.items[self.current_item_index]
    }

    pub fn show_quiz_option_add_button(&self) -> bool {
        self.current_quiz_item().options.len() < self.config.max_options
    }

    pub fn show_remove_quiz_item_button(&self) -> bool {
        self.quiz.items.len() > 1
    }

    pub fn show_remove_quiz_option_button(&self) -> bool {
        self.current_quiz_item().options.len() > self.config.min_options
    }

    pub fn update_current_item_index(&mut self, index: usize) {
        if index >= self.quiz.items.len() {
            tracing::warn!(index, items = self.quiz.items.len(), "ignoring out-of-range item index");
            return;
        }
        if index == self.current_item_index {
            return;
        }
        self.current_item_index = index;
        self.notify(StoreEvent::CursorMoved { index });
    }

    /// Append a fresh default item and move the cursor onto it.
    pub fn add_quiz_item(&mut self) {
        let item = QuizItem::new_default(self.ids.as_ref(), self.config.default_option_count);
        self.quiz.items.push(item);
        let index = self.quiz.items.len() - 1;
        self.current_item_index = index;
        self.notify(StoreEvent::ItemAdded { index });
    }

    fn update_item(&mut self, field: ItemField, apply: impl FnOnce(&mut QuizItem)) {
        apply(self.current_item_mut());
        let index = self.current_item_index;
        self.notify(StoreEvent::ItemUpdated { index, field });
    }

    pub fn update_quiz_item_question(&mut self, question: impl Into<String>) {
        let question = question.into();
        self.update_item(ItemField::Question, |item| item.question = question);
    }

    /// Switch the answer form. Options and essay answer are left as they are.
    pub fn update_quiz_item_type(&mut self, new_type: QuizType) {
        if self.current_quiz_item().item_type == new_type {
            return;
        }
        self.update_item(ItemField::Type, |item| item.item_type = new_type);
    }

    pub fn update_quiz_image_url(&mut self, image_url: Option<String>) {
        self.update_item(ItemField::ImageUrl, |item| item.image_url = image_url);
    }

    /// An empty reason clears it.
    pub fn update_quiz_item_reason(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        let reason = (!reason.is_empty()).then_some(reason);
        self.update_item(ItemField::Reason, |item| item.reason = reason);
    }

    pub fn update_essay_answer(&mut self, answer: impl Into<String>) {
        let answer = answer.into();
        self.update_item(ItemField::EssayAnswer, |item| item.essay_answer = Some(answer));
    }

    /// Remove the item under the cursor. The last remaining item is kept.
    pub fn remove_current_quiz_item(&mut self) {
        if self.quiz.items.len() <= 1 {
            tracing::warn!("refusing to remove the only quiz item");
            return;
        }

        let index = self.current_item_index;
        self.quiz.items.remove(index);
        self.current_item_index = index.min(self.quiz.items.len() - 1);
        self.notify(StoreEvent::ItemRemoved { index });
    }

    // ------------------------------------------------------------------
    // Options of the current item
    // ------------------------------------------------------------------

    pub fn add_quiz_option(&mut self) {
        let count = self.current_quiz_item().options.len();
        if self.config.enforce_option_limits && count >= self.config.max_options {
            tracing::warn!(count, max = self.config.max_options, "option limit reached");
            return;
        }

        let option = QuizOption::new(self.ids.as_ref());
        self.current_item_mut().options.push(option);
        let item = self.current_item_index;
        self.notify(StoreEvent::OptionAdded {
            item,
            option: count,
        });
    }

    fn update_option(
        &mut self,
        option_index: usize,
        field: OptionField,
        apply: impl FnOnce(&mut QuizOption),
    ) {
        let item = self.current_item_index;
        match self.current_item_mut().options.get_mut(option_index) {
            Some(option) => apply(option),
            None => {
                tracing::warn!(item, option = option_index, "ignoring out-of-range option index");
                return;
            }
        }
        self.notify(StoreEvent::OptionUpdated {
            item,
            option: option_index,
            field,
        });
    }

    pub fn update_quiz_option_title(&mut self, option_index: usize, title: impl Into<String>) {
        let title = title.into();
        self.update_option(option_index, OptionField::Title, |option| option.title = title);
    }

    pub fn update_quiz_option_is_answer(&mut self, option_index: usize, is_answer: bool) {
        self.update_option(option_index, OptionField::IsAnswer, |option| {
            option.is_answer = is_answer
        });
    }

    pub fn update_quiz_option_image_url(&mut self, option_index: usize, image_url: Option<String>) {
        self.update_option(option_index, OptionField::ImageUrl, |option| {
            option.image_url = image_url
        });
    }

    pub fn remove_quiz_option(&mut self, option_index: usize) {
        let item = self.current_item_index;
        let count = self.current_quiz_item().options.len();
        if option_index >= count {
            tracing::warn!(item, option = option_index, "ignoring out-of-range option index");
            return;
        }
        if self.config.enforce_option_limits && count <= self.config.min_options {
            tracing::warn!(count, min = self.config.min_options, "option floor reached");
            return;
        }

        self.current_item_mut().options.remove(option_index);
        self.notify(StoreEvent::OptionRemoved {
            item,
            option: option_index,
        });
    }
}
