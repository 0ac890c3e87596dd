use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::domain::AppError;
use crate::ports::{ProcessSpawner, SpawnRequest};

/// Runs subprocesses with `std::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandSpawner;

impl CommandSpawner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessSpawner for CommandSpawner {
    fn run(
        &self,
        request: &SpawnRequest<'_>,
        on_stdout: Option<&mut dyn FnMut(&str)>,
    ) -> Result<Option<i32>, AppError> {
        let mut command = Command::new(request.program);
        command
            .args(request.args)
            .current_dir(request.cwd)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .stdout(if on_stdout.is_some() { Stdio::piped() } else { Stdio::null() });

        debug!(command = %request.display(), cwd = %request.cwd.display(), "spawning");
        let mut child = command.spawn().map_err(|e| AppError::Spawn {
            command: request.display(),
            details: e.to_string(),
        })?;

        if let (Some(callback), Some(stdout)) = (on_stdout, child.stdout.take()) {
            forward_lines(stdout, callback);
        }

        let status = child.wait()?;
        debug!(command = %request.display(), code = ?status.code(), "process exited");
        Ok(status.code())
    }
}

/// Pass each line of `reader` to `callback`, decoding lossily.
///
/// A read error ends forwarding; the exit code still decides the outcome.
fn forward_lines<R: Read>(reader: R, callback: &mut dyn FnMut(&str)) {
    for chunk in BufReader::new(reader).split(b'\n') {
        match chunk {
            Ok(bytes) => {
                let bytes = bytes.strip_suffix(b"\r").unwrap_or(&bytes);
                callback(&String::from_utf8_lossy(bytes));
            }
            Err(err) => {
                warn!(error = %err, "stopped reading subprocess output");
                break;
            }
        }
    }
}
