mod asset_collect;
mod template_engine;

use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{Dir, include_dir};
use minijinja::Value;
use tracing::{debug, info};

use crate::domain::{AnswerSet, AppError, ScaffoldFile};
use crate::ports::TemplateExtractor;

use self::asset_collect::{AssetSourceFile, collect_asset_sources};
use self::template_engine::{build_template_environment, render_template_by_name};

static PROJECT_ASSET_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/project");

/// Marker whose presence means the target already holds a project.
const PROJECT_MANIFEST: &str = "package.json";

/// Render the embedded report project template with `answers`.
///
/// Output is sorted by path.
pub fn render_project(answers: &AnswerSet) -> Result<Vec<ScaffoldFile>, AppError> {
    let sources = collect_asset_sources(&PROJECT_ASSET_DIR)?;
    if sources.is_empty() {
        return Err(AppError::template_error("project", "embedded project template is empty"));
    }
    render_sources(&sources, answers)
}

fn render_sources(
    sources: &[AssetSourceFile],
    answers: &AnswerSet,
) -> Result<Vec<ScaffoldFile>, AppError> {
    let env = build_template_environment(sources)?;
    let ctx = Value::from_serialize(answers);

    let mut files = Vec::with_capacity(sources.len());
    for source in sources {
        let content = if source.is_template() {
            render_template_by_name(&env, source.template_name(), &ctx)?
        } else {
            source.content.clone()
        };
        files.push(ScaffoldFile { path: source.output_path(), content });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Writes the embedded project template into a target directory.
#[derive(Debug, Clone)]
pub struct EmbeddedTemplateExtractor {
    target: PathBuf,
    overwrite: bool,
}

impl EmbeddedTemplateExtractor {
    pub fn new(target: PathBuf) -> Self {
        Self { target, overwrite: false }
    }

    /// Allow writing over an existing project.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    fn not_writable(&self, path: &Path, details: impl ToString) -> AppError {
        AppError::TargetNotWritable {
            path: path.display().to_string(),
            details: details.to_string(),
        }
    }

    fn prepare_target(&self) -> Result<(), AppError> {
        if self.target.exists() && !self.target.is_dir() {
            return Err(self.not_writable(&self.target, "target is not a directory"));
        }
        if !self.overwrite && self.target.join(PROJECT_MANIFEST).exists() {
            return Err(self.not_writable(
                &self.target,
                format!("{PROJECT_MANIFEST} already exists (use --force to overwrite)"),
            ));
        }
        fs::create_dir_all(&self.target).map_err(|e| self.not_writable(&self.target, e))
    }

    /// Write rendered files under the target. Stops at the first failure.
    pub fn write_files(&self, files: &[ScaffoldFile]) -> Result<Vec<PathBuf>, AppError> {
        let mut written = Vec::with_capacity(files.len());
        for file in files {
            let path = self.target.join(&file.path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| self.not_writable(parent, e))?;
            }
            fs::write(&path, &file.content).map_err(|e| self.not_writable(&path, e))?;
            debug!(path = %path.display(), "wrote project file");
            written.push(path);
        }
        Ok(written)
    }
}

impl TemplateExtractor for EmbeddedTemplateExtractor {
    fn extract_template_files(&self, answers: &AnswerSet) -> Result<Vec<PathBuf>, AppError> {
        self.prepare_target()?;
        let files = render_project(answers)?;
        let written = self.write_files(&files)?;
        info!(
            target_dir = %self.target.display(),
            files = written.len(),
            "extracted project template"
        );
        Ok(written)
    }
}
