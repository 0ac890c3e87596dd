use std::process::Command;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::VersionProvider;

/// Reads the installed Node.js version by running `node --version`.
#[derive(Debug, Clone)]
pub struct NodeVersionProbe {
    program: String,
}

impl NodeVersionProbe {
    pub fn new() -> Self {
        Self { program: "node".to_string() }
    }

    /// Probe a specific executable instead of `node` on `PATH`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for NodeVersionProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionProvider for NodeVersionProbe {
    fn runtime_version(&self) -> Result<String, AppError> {
        let output = Command::new(&self.program).arg("--version").output().map_err(|e| {
            AppError::RuntimeVersion(format!("failed to run '{} --version': {}", self.program, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::RuntimeVersion(format!(
                "'{} --version' exited with {}: {}",
                self.program,
                output.status,
                if stderr.is_empty() { "no output" } else { &stderr }
            )));
        }

        let version = parse_version_output(&String::from_utf8_lossy(&output.stdout))?;
        debug!(program = %self.program, %version, "detected runtime version");
        Ok(version)
    }
}

/// Normalize `node --version` output (`v20.11.1\n`) to `20.11.1`.
pub fn parse_version_output(stdout: &str) -> Result<String, AppError> {
    let trimmed = stdout.trim();
    let version = trimmed.strip_prefix('v').unwrap_or(trimmed);
    if version.is_empty() {
        return Err(AppError::RuntimeVersion("empty version output".to_string()));
    }
    Ok(version.to_string())
}

/// A version supplied up front, e.g. from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedVersion(String);

impl FixedVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }
}

impl VersionProvider for FixedVersion {
    fn runtime_version(&self) -> Result<String, AppError> {
        Ok(self.0.clone())
    }
}
