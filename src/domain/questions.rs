//! Ordered question list for a new report project.

use super::answers::{AnswerSet, Field};

pub const AUTH_DOCS_URL: &str =
    "https://dev.leanix.net/docs/authentication#section-generate-api-tokens";

/// How a question is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free text input. Blank answers are allowed.
    Input,
    /// Yes/no confirmation with a preselected answer.
    Confirm { default: bool },
}

/// A single question in the session.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub field: Field,
    pub kind: QuestionKind,
    pub message: &'static str,
    /// Evaluated against earlier answers right before the question is shown.
    pub when: Option<fn(&AnswerSet) -> bool>,
}

impl Question {
    const fn input(field: Field, message: &'static str) -> Self {
        Self { field, kind: QuestionKind::Input, message, when: None }
    }

    pub fn applies_to(&self, answers: &AnswerSet) -> bool {
        self.when.is_none_or(|predicate| predicate(answers))
    }
}

fn behind_proxy(answers: &AnswerSet) -> bool {
    answers.is_truthy(Field::BehindProxy)
}

/// The questions asked by `init`, in presentation order.
pub static PROJECT_QUESTIONS: [Question; 11] = [
    Question::input(Field::Name, "Name of your project for package.json"),
    Question::input(
        Field::Id,
        "Unique id for this report in Java package notation (e.g. net.leanix.barcharts)",
    ),
    Question::input(
        Field::Author,
        "Who is the author of this report (e.g. LeanIX GmbH <support@leanix.net>)",
    ),
    Question::input(Field::Title, "A title to be shown in LeanIX when report is installed"),
    Question::input(Field::Description, "Description of your project"),
    Question::input(
        Field::Licence,
        "Which licence do you want to use for this project? (Default: UNLICENSED)",
    ),
    Question::input(Field::Host, "Which host do you want to work with? (Default: app.leanix.net)"),
    Question::input(Field::Workspace, "Which is the workspace you want to test your report in?"),
    Question::input(
        Field::ApiToken,
        "API-Token for Authentication (see: https://dev.leanix.net/docs/authentication#section-generate-api-tokens)",
    ),
    Question {
        field: Field::BehindProxy,
        kind: QuestionKind::Confirm { default: false },
        message: "Are you behind a proxy?",
        when: None,
    },
    Question {
        field: Field::ProxyUrl,
        kind: QuestionKind::Input,
        message: "Proxy URL?",
        when: Some(behind_proxy),
    },
];
