//! The answer set collected during project initialization.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Every field an answer set can carry.
///
/// The keys match the variable names used by the project templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Id,
    Author,
    Title,
    Description,
    Licence,
    Host,
    Workspace,
    ApiToken,
    BehindProxy,
    ProxyUrl,
    ReadmeTitle,
    NodeVersion,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::Name,
        Field::Id,
        Field::Author,
        Field::Title,
        Field::Description,
        Field::Licence,
        Field::Host,
        Field::Workspace,
        Field::ApiToken,
        Field::BehindProxy,
        Field::ProxyUrl,
        Field::ReadmeTitle,
        Field::NodeVersion,
    ];

    /// Template variable name for this field.
    pub const fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Id => "id",
            Field::Author => "author",
            Field::Title => "title",
            Field::Description => "description",
            Field::Licence => "licence",
            Field::Host => "host",
            Field::Workspace => "workspace",
            Field::ApiToken => "apitoken",
            Field::BehindProxy => "behindProxy",
            Field::ProxyUrl => "proxyURL",
            Field::ReadmeTitle => "readme_title",
            Field::NodeVersion => "node_version",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single answer: free text or a yes/no confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    Text(String),
    Flag(bool),
}

impl AnswerValue {
    pub fn text(value: impl Into<String>) -> Self {
        AnswerValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(value) => Some(value),
            AnswerValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            AnswerValue::Flag(value) => Some(*value),
            AnswerValue::Text(_) => None,
        }
    }

    /// Whether this answer was left blank.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, AnswerValue::Text(value) if value.is_empty())
    }

    /// Truthiness used by question predicates and fallbacks.
    pub fn is_truthy(&self) -> bool {
        match self {
            AnswerValue::Text(value) => !value.is_empty(),
            AnswerValue::Flag(value) => *value,
        }
    }
}

impl Serialize for AnswerValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AnswerValue::Text(value) => serializer.serialize_str(value),
            AnswerValue::Flag(value) => serializer.serialize_bool(*value),
        }
    }
}

/// Field → value mapping built up by the question session.
///
/// Absent fields and blank answers are distinct until the defaulting pass
/// runs; afterwards no field holds an empty text answer unless its default is
/// the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    values: BTreeMap<Field, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, value: AnswerValue) -> Option<AnswerValue> {
        self.values.insert(field, value)
    }

    pub fn remove(&mut self, field: Field) -> Option<AnswerValue> {
        self.values.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&AnswerValue> {
        self.values.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    /// Text answer for `field`, if present.
    pub fn text(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(AnswerValue::as_text)
    }

    /// Confirmation answer for `field`, if present.
    pub fn flag(&self, field: Field) -> Option<bool> {
        self.get(field).and_then(AnswerValue::as_flag)
    }

    pub fn is_truthy(&self, field: Field) -> bool {
        self.get(field).is_some_and(AnswerValue::is_truthy)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &AnswerValue)> {
        self.values.iter().map(|(field, value)| (*field, value))
    }

    /// Builder-style insert, handy for assembling fixtures.
    pub fn with(mut self, field: Field, value: AnswerValue) -> Self {
        self.insert(field, value);
        self
    }
}

impl FromIterator<(Field, AnswerValue)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (Field, AnswerValue)>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

impl Serialize for AnswerSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in &self.values {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}
