use tracing::debug;

use crate::domain::{AnswerSet, AnswerValue, AppError, Question, QuestionKind};
use crate::ports::Prompter;

/// Ask `questions` in order and collect the raw answers.
///
/// Each predicate sees only the answers given before its question. Skipped
/// questions leave their field absent.
pub fn ask_questions<P: Prompter + ?Sized>(
    prompter: &P,
    questions: &[Question],
) -> Result<AnswerSet, AppError> {
    let mut answers = AnswerSet::new();

    for question in questions {
        if !question.applies_to(&answers) {
            debug!(field = %question.field, "skipping question");
            continue;
        }

        let value = match question.kind {
            QuestionKind::Input => AnswerValue::Text(prompter.input(question)?),
            QuestionKind::Confirm { default } => {
                AnswerValue::Flag(prompter.confirm(question, default)?)
            }
        };
        answers.insert(question.field, value);
    }

    Ok(answers)
}
