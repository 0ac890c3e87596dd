use std::path::PathBuf;

use crate::domain::{AnswerSet, AppError};

/// Port for rendering the project template to disk.
pub trait TemplateExtractor {
    /// Render every template file with `answers` and write the project tree.
    ///
    /// Returns the paths written. Files written before a failure are left in place.
    fn extract_template_files(&self, answers: &AnswerSet) -> Result<Vec<PathBuf>, AppError>;
}
