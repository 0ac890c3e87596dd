use std::path::Path;

use crate::domain::AppError;

/// A subprocess invocation.
#[derive(Debug, Clone, Copy)]
pub struct SpawnRequest<'a> {
    pub program: &'a str,
    pub args: &'a [&'a str],
    pub cwd: &'a Path,
}

impl SpawnRequest<'_> {
    /// Command line for messages and logs.
    pub fn display(&self) -> String {
        std::iter::once(self.program)
            .chain(self.args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Port for running child processes to completion.
pub trait ProcessSpawner {
    /// Run the process and wait for it to exit.
    ///
    /// When `on_stdout` is given, each stdout line is passed to it; otherwise
    /// output is discarded. Returns the exit code, or `None` if the process was
    /// terminated by a signal.
    fn run(
        &self,
        request: &SpawnRequest<'_>,
        on_stdout: Option<&mut dyn FnMut(&str)>,
    ) -> Result<Option<i32>, AppError>;
}
