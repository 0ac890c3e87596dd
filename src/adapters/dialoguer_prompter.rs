use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input};

use crate::domain::{AppError, Question};
use crate::ports::Prompter;

/// Interactive terminal prompter.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_error(question: &Question, err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => AppError::PromptAborted,
        err => AppError::Prompt(format!("Failed to read '{}': {}", question.field, err)),
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, question: &Question) -> Result<String, AppError> {
        Input::<String>::new()
            .with_prompt(question.message)
            .allow_empty(true)
            .interact_text()
            .map_err(|err| prompt_error(question, err))
    }

    fn confirm(&self, question: &Question, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(question.message)
            .default(default)
            .interact()
            .map_err(|err| prompt_error(question, err))
    }
}
