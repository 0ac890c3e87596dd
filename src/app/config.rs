//! Answers file loading.

use std::fs;
use std::path::Path;

use crate::domain::{AnswersFile, AppError, parse_answers_content};

/// Load pre-recorded answers from a TOML file.
pub fn load_answers_file(path: &Path) -> Result<AnswersFile, AppError> {
    let answers_error =
        |details: String| AppError::AnswersFile { path: path.display().to_string(), details };

    let content = fs::read_to_string(path).map_err(|e| answers_error(e.to_string()))?;
    parse_answers_content(&content).map_err(|e| answers_error(e.to_string()))
}
