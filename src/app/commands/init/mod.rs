mod questionnaire;

use tracing::debug;

use crate::app::AppContext;
use crate::domain::{AnswerSet, AnswerValue, AppError, Field, PROJECT_QUESTIONS, apply_defaults};
use crate::ports::{OutputSink, Prompter, TemplateExtractor, VersionProvider};

pub use questionnaire::ask_questions;

pub const STARTING_MESSAGE: &str = "Initializing new project...";
pub const READY_MESSAGE: &str = "\u{2713} Your project is ready!";
pub const NEXT_STEPS_MESSAGE: &str =
    "Please run `npm install` to install dependencies and then run `npm start` to start developing!";

/// Execute the init session.
///
/// Asks the project questions, applies defaults, records the runtime version
/// and hands the finished answers to the template extractor. Returns the
/// answers the project was rendered with.
pub fn execute<P, V, T, O>(ctx: &AppContext<P, V, T, O>) -> Result<AnswerSet, AppError>
where
    P: Prompter,
    V: VersionProvider,
    T: TemplateExtractor,
    O: OutputSink,
{
    ctx.output().info(STARTING_MESSAGE);

    let raw = ask_questions(ctx.prompter(), &PROJECT_QUESTIONS)?;
    let mut answers = apply_defaults(raw);

    let version = ctx.versions().runtime_version()?;
    answers.insert(Field::NodeVersion, AnswerValue::Text(version));
    debug!(fields = answers.len(), "answers finalized");

    ctx.extractor().extract_template_files(&answers)?;

    ctx.output().info(READY_MESSAGE);
    ctx.output().info(NEXT_STEPS_MESSAGE);
    Ok(answers)
}
