use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{ProcessSpawner, SpawnRequest};

/// Owned copy of a spawn request.
#[derive(Debug, Clone)]
pub struct RecordedSpawn {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Spawner returning a preset exit code.
pub struct FakeSpawner {
    exit_code: Option<Option<i32>>,
    stdout: Vec<String>,
    requests: Mutex<Vec<RecordedSpawn>>,
}

impl FakeSpawner {
    pub fn exiting(code: Option<i32>) -> Self {
        Self { exit_code: Some(code), stdout: Vec::new(), requests: Mutex::new(Vec::new()) }
    }

    /// Spawner whose program cannot be started.
    pub fn unavailable() -> Self {
        Self { exit_code: None, stdout: Vec::new(), requests: Mutex::new(Vec::new()) }
    }

    pub fn with_stdout(mut self, lines: &[&str]) -> Self {
        self.stdout = lines.iter().map(|line| line.to_string()).collect();
        self
    }

    pub fn requests(&self) -> Vec<RecordedSpawn> {
        self.requests.lock().unwrap().clone()
    }
}

impl ProcessSpawner for FakeSpawner {
    fn run(
        &self,
        request: &SpawnRequest<'_>,
        on_stdout: Option<&mut dyn FnMut(&str)>,
    ) -> Result<Option<i32>, AppError> {
        self.requests.lock().unwrap().push(RecordedSpawn {
            program: request.program.to_string(),
            args: request.args.iter().map(|arg| arg.to_string()).collect(),
            cwd: request.cwd.to_path_buf(),
        });

        let Some(code) = self.exit_code else {
            return Err(AppError::Spawn {
                command: request.display(),
                details: "No such file or directory".into(),
            });
        };

        if let Some(callback) = on_stdout {
            for line in &self.stdout {
                callback(line);
            }
        }
        Ok(code)
    }
}
