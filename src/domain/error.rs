use std::io;

use thiserror::Error;

/// Library-wide error type for lxr-init operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The question session failed while reading input.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// The user aborted the question session.
    #[error("Prompt aborted by user")]
    PromptAborted,

    /// A template could not be registered or rendered.
    #[error("Template error in '{template}': {details}")]
    Template { template: String, details: String },

    /// The target project directory cannot be written.
    #[error("Cannot write project files to {path}: {details}")]
    TargetNotWritable { path: String, details: String },

    /// The package-manager install exited unsuccessfully.
    #[error("'{command}' failed with {}", describe_exit(.code))]
    Install { command: String, code: Option<i32> },

    /// A subprocess could not be started.
    #[error("Failed to spawn '{command}': {details}")]
    Spawn { command: String, details: String },

    /// The runtime version could not be determined.
    #[error("Unable to determine runtime version: {0}")]
    RuntimeVersion(String),

    /// Answers file could not be read or is malformed.
    #[error("Invalid answers file {path}: {details}")]
    AnswersFile { path: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl AppError {
    pub(crate) fn template_error(template: impl Into<String>, details: impl ToString) -> Self {
        AppError::Template { template: template.into(), details: details.to_string() }
    }
}
