//! API Facade for the application.
//!
//! This module exposes high-level functions that pick adapters, build the
//! context and run commands.

use std::path::PathBuf;

use crate::adapters::{
    CommandSpawner, ConsoleOutput, DialoguerPrompter, EmbeddedTemplateExtractor, FixedVersion,
    NodeVersionProbe, ScriptedPrompter,
};
use crate::app::AppContext;
use crate::app::commands::{init, install};
use crate::app::config::load_answers_file;
use crate::domain::{AnswerSet, AppError};
use crate::ports::{Prompter, VersionProvider};

pub use crate::app::commands::install::InstallOptions;

/// Options for initializing a project.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Directory the project is written to.
    pub dir: PathBuf,
    /// Answer questions from this TOML file instead of the terminal.
    pub answers_file: Option<PathBuf>,
    /// Record this version instead of probing `node --version`.
    pub node_version: Option<String>,
    /// Write over an existing project.
    pub overwrite: bool,
}

impl InitOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), answers_file: None, node_version: None, overwrite: false }
    }
}

/// Run the init session with terminal output.
///
/// Returns the answers the project was rendered with.
pub fn init(options: &InitOptions) -> Result<AnswerSet, AppError> {
    let prompter: Box<dyn Prompter> = match &options.answers_file {
        Some(path) => Box::new(ScriptedPrompter::new(load_answers_file(path)?)),
        None => Box::new(DialoguerPrompter::new()),
    };
    let versions: Box<dyn VersionProvider> = match &options.node_version {
        Some(version) => Box::new(FixedVersion::new(version.clone())),
        None => Box::new(NodeVersionProbe::new()),
    };
    let extractor =
        EmbeddedTemplateExtractor::new(options.dir.clone()).overwrite(options.overwrite);

    let ctx = AppContext::new(prompter, versions, extractor, ConsoleOutput::new());
    init::execute(&ctx)
}

/// Run `npm install` in a project directory with terminal output.
pub fn install(options: &InstallOptions) -> Result<(), AppError> {
    install::execute(&CommandSpawner::new(), &ConsoleOutput::new(), options)
}
