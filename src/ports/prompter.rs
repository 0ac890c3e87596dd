use crate::domain::{AppError, Question};

/// Port for answering questions during the init session.
pub trait Prompter {
    /// Ask a free-text question. Blank answers are returned as `""`.
    fn input(&self, question: &Question) -> Result<String, AppError>;

    /// Ask a yes/no question, preselecting `default`.
    fn confirm(&self, question: &Question, default: bool) -> Result<bool, AppError>;
}

impl<T: Prompter + ?Sized> Prompter for Box<T> {
    fn input(&self, question: &Question) -> Result<String, AppError> {
        (**self).input(question)
    }

    fn confirm(&self, question: &Question, default: bool) -> Result<bool, AppError> {
        (**self).confirm(question, default)
    }
}
