pub mod answers;
pub mod answers_file;
pub mod defaults;
pub mod error;
pub mod questions;
mod scaffold;

pub use answers::{AnswerSet, AnswerValue, Field};
pub use answers_file::{AnswersFile, parse_answers_content};
pub use defaults::{DEFAULT_HOST, DEFAULT_LICENCE, apply_defaults};
pub use error::AppError;
pub use questions::{PROJECT_QUESTIONS, Question, QuestionKind};
pub use scaffold::ScaffoldFile;
