use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::{AnswerSet, AppError};
use crate::ports::TemplateExtractor;

/// Extractor that records the answers it was handed.
#[derive(Default)]
pub struct FakeExtractor {
    calls: Mutex<Vec<AnswerSet>>,
    fail: bool,
}

impl FakeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor whose target directory cannot be written.
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn calls(&self) -> Vec<AnswerSet> {
        self.calls.lock().unwrap().clone()
    }
}

impl TemplateExtractor for FakeExtractor {
    fn extract_template_files(&self, answers: &AnswerSet) -> Result<Vec<PathBuf>, AppError> {
        self.calls.lock().unwrap().push(answers.clone());
        if self.fail {
            return Err(AppError::TargetNotWritable {
                path: "/read-only".into(),
                details: "permission denied".into(),
            });
        }
        Ok(vec![PathBuf::from("package.json")])
    }
}
