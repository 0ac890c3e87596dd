use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::{OutputSink, ProcessSpawner, SpawnRequest, Tone};

pub const NPM_PROGRAM: &str = if cfg!(windows) { "npm.cmd" } else { "npm" };

pub const INSTALLING_MESSAGE: &str = "Installing project dependencies via npm...";
pub const SUCCESS_MESSAGE: &str = "npm install successful!";
pub const FAILURE_MESSAGE: &str = "npm install failed!";

/// Options for the install step.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Project directory to install in.
    pub dir: PathBuf,
    /// Forward npm's stdout to the console.
    pub stream_output: bool,
}

/// Run `npm install` in the project directory.
///
/// Exit code 0 succeeds; any other outcome reports failure and returns an error.
pub fn execute<S, O>(spawner: &S, output: &O, options: &InstallOptions) -> Result<(), AppError>
where
    S: ProcessSpawner,
    O: OutputSink,
{
    output.info(INSTALLING_MESSAGE);

    let request = SpawnRequest { program: NPM_PROGRAM, args: &["install"], cwd: &options.dir };
    let result = if options.stream_output {
        let mut forward = |line: &str| output.emit(Tone::Raw, line);
        spawner.run(&request, Some(&mut forward))
    } else {
        spawner.run(&request, None)
    };

    match result {
        Ok(Some(0)) => {
            output.info(SUCCESS_MESSAGE);
            Ok(())
        }
        Ok(code) => {
            output.failure(FAILURE_MESSAGE);
            Err(AppError::Install { command: request.display(), code })
        }
        Err(err) => {
            output.failure(FAILURE_MESSAGE);
            Err(err)
        }
    }
}
