//! Pre-recorded answers for non-interactive runs.

use serde::Deserialize;

use super::answers::Field;
use super::error::AppError;

/// Answers read from a TOML file, keyed by template variable name.
///
/// Derived fields (`readme_title`, `node_version`) are rejected: they are
/// never asked.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AnswersFile {
    pub name: Option<String>,
    pub id: Option<String>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub licence: Option<String>,
    pub host: Option<String>,
    pub workspace: Option<String>,
    pub apitoken: Option<String>,
    #[serde(rename = "behindProxy")]
    pub behind_proxy: Option<bool>,
    #[serde(rename = "proxyURL")]
    pub proxy_url: Option<String>,
}

impl AnswersFile {
    /// Recorded text answer for `field`.
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => &self.name,
            Field::Id => &self.id,
            Field::Author => &self.author,
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Licence => &self.licence,
            Field::Host => &self.host,
            Field::Workspace => &self.workspace,
            Field::ApiToken => &self.apitoken,
            Field::ProxyUrl => &self.proxy_url,
            Field::BehindProxy | Field::ReadmeTitle | Field::NodeVersion => return None,
        };
        value.as_deref()
    }

    /// Recorded confirmation for `field`.
    pub fn flag(&self, field: Field) -> Option<bool> {
        match field {
            Field::BehindProxy => self.behind_proxy,
            _ => None,
        }
    }
}

/// Parse answers from TOML content.
pub fn parse_answers_content(content: &str) -> Result<AnswersFile, AppError> {
    Ok(toml::from_str(content)?)
}
