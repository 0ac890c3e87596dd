//! Shared testing utilities for lxr-init CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const NODE_VERSION: &str = "20.11.1";

/// Answers for a project that is not behind a proxy.
pub const BASIC_ANSWERS: &str = r#"
name = "demo"
id = "net.x.demo"
author = "A"
description = "d"
"#;

/// Testing harness providing an isolated directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    project_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project_dir = root.path().join("report");
        Self { root, project_dir }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Directory the project is generated into.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Build a command for invoking the compiled `lxr-init` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("lxr-init").expect("Failed to locate lxr-init binary");
        cmd.current_dir(self.root())
            .env_remove("LXR_INIT_DIR")
            .env_remove("LXR_NODE_VERSION")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write an answers file and return its path.
    pub fn write_answers(&self, content: &str) -> PathBuf {
        let path = self.root().join("answers.toml");
        fs::write(&path, content).expect("Failed to write answers file");
        path
    }

    /// Command running a non-interactive init into the project directory.
    pub fn init_with(&self, answers: &str) -> Command {
        let answers_path = self.write_answers(answers);
        let mut cmd = self.cli();
        cmd.arg("--dir")
            .arg(self.project_dir())
            .arg("--answers")
            .arg(answers_path)
            .args(["--node-version", NODE_VERSION]);
        cmd
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        let path = self.project_dir.join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    pub fn read_project_json(&self, relative: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_project_file(relative))
            .unwrap_or_else(|e| panic!("{} is not valid JSON: {}", relative, e))
    }

    /// Install a stand-in `npm` executable and return the directory holding it.
    ///
    /// The script records its arguments in `npm-args.txt` inside the working
    /// directory, prints a line and exits with `exit_code`.
    #[cfg(unix)]
    pub fn fake_npm(&self, exit_code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let bin = self.root().join("bin");
        fs::create_dir_all(&bin).expect("Failed to create bin directory");
        let script = bin.join("npm");
        let body = format!(
            "#!/bin/sh\necho \"$@\" > npm-args.txt\necho \"added 3 packages\"\nexit {}\n",
            exit_code
        );
        fs::write(&script, body).expect("Failed to write fake npm");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake npm executable");
        bin
    }

    /// `PATH` with `dir` in front of the inherited search path.
    pub fn path_with(&self, dir: &Path) -> std::ffi::OsString {
        let mut paths = vec![dir.to_path_buf()];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        std::env::join_paths(paths).expect("Failed to build PATH")
    }
}
