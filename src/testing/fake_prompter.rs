use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{AppError, Field, Question};
use crate::ports::Prompter;

/// Prompter answering from a preset map and recording what was asked.
#[derive(Default)]
pub struct FakePrompter {
    answers: HashMap<Field, String>,
    confirm: Option<bool>,
    fail_at: Option<Field>,
    asked: Mutex<Vec<Field>>,
}

impl FakePrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, field: Field, value: &str) -> Self {
        self.answers.insert(field, value.to_string());
        self
    }

    /// Answer every confirmation with `value` instead of its default.
    pub fn confirm(mut self, value: bool) -> Self {
        self.confirm = Some(value);
        self
    }

    /// Abort the session when `field` is asked.
    pub fn fail_at(mut self, field: Field) -> Self {
        self.fail_at = Some(field);
        self
    }

    pub fn asked(&self) -> Vec<Field> {
        self.asked.lock().unwrap().clone()
    }

    fn record(&self, question: &Question) -> Result<(), AppError> {
        self.asked.lock().unwrap().push(question.field);
        if self.fail_at == Some(question.field) {
            return Err(AppError::PromptAborted);
        }
        Ok(())
    }
}

impl Prompter for FakePrompter {
    fn input(&self, question: &Question) -> Result<String, AppError> {
        self.record(question)?;
        Ok(self.answers.get(&question.field).cloned().unwrap_or_default())
    }

    fn confirm(&self, question: &Question, default: bool) -> Result<bool, AppError> {
        self.record(question)?;
        Ok(self.confirm.unwrap_or(default))
    }
}
