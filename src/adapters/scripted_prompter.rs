use crate::domain::{AnswersFile, AppError, Question};
use crate::ports::Prompter;

/// Answers questions from a pre-recorded answers file.
///
/// Unrecorded text questions answer blank and unrecorded confirmations take
/// the question's default, mirroring a user pressing enter.
#[derive(Debug, Clone)]
pub struct ScriptedPrompter {
    answers: AnswersFile,
}

impl ScriptedPrompter {
    pub fn new(answers: AnswersFile) -> Self {
        Self { answers }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, question: &Question) -> Result<String, AppError> {
        Ok(self.answers.text(question.field).unwrap_or_default().to_string())
    }

    fn confirm(&self, question: &Question, default: bool) -> Result<bool, AppError> {
        Ok(self.answers.flag(question.field).unwrap_or(default))
    }
}
