//! Defaulting pass applied to raw answers.

use super::answers::{AnswerSet, AnswerValue, Field};

pub const DEFAULT_LICENCE: &str = "UNLICENSED";
pub const DEFAULT_HOST: &str = "app.leanix.net";

/// How an unanswered field is filled in.
#[derive(Debug, Clone, Copy)]
pub enum FieldDefault {
    /// A fixed text value.
    Literal(&'static str),
    /// The first truthy answer among the listed fields, if any.
    FirstOf(&'static [Field]),
}

/// Fields with a default. Anything not listed passes through untouched.
pub const DEFAULTS: [(Field, FieldDefault); 6] = [
    (Field::Licence, FieldDefault::Literal(DEFAULT_LICENCE)),
    (Field::Host, FieldDefault::Literal(DEFAULT_HOST)),
    (Field::ApiToken, FieldDefault::Literal("")),
    (Field::Workspace, FieldDefault::Literal("")),
    (Field::ProxyUrl, FieldDefault::Literal("")),
    (Field::ReadmeTitle, FieldDefault::FirstOf(&[Field::Title, Field::Name])),
];

/// Default for `field`, if it has one.
pub fn default_for(field: Field) -> Option<FieldDefault> {
    DEFAULTS.iter().find(|(candidate, _)| *candidate == field).map(|(_, default)| *default)
}

/// Normalize raw answers and fill in defaults.
///
/// Blank text answers are dropped first, so a blank field behaves exactly like
/// one that was never asked. Derived defaults read the normalized answers.
pub fn apply_defaults(raw: AnswerSet) -> AnswerSet {
    let normalized: AnswerSet = raw
        .iter()
        .filter(|(_, value)| !value.is_empty_text())
        .map(|(field, value)| (field, value.clone()))
        .collect();

    let mut answers = normalized.clone();
    for (field, default) in DEFAULTS {
        if answers.contains(field) {
            continue;
        }
        let value = match default {
            FieldDefault::Literal(text) => Some(AnswerValue::text(text)),
            FieldDefault::FirstOf(sources) => sources
                .iter()
                .filter_map(|source| normalized.get(*source))
                .find(|value| value.is_truthy())
                .cloned(),
        };
        if let Some(value) = value {
            answers.insert(field, value);
        }
    }

    answers
}
