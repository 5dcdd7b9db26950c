//! Shared helpers for e2e tests: a temp workspace plus a runner for the
//! `sb` binary.

use std::path::Path;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway working directory for one test.
pub struct SbWorkspace {
    dir: TempDir,
}

impl SbWorkspace {
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp workspace"),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for SbWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RunResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run `sb` in the workspace, capturing output. `label` tags diagnostics
/// when a test fails.
pub fn run_sb<I, S>(workspace: &SbWorkspace, args: I, label: &str) -> RunResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = Command::cargo_bin("sb")
        .expect("sb binary")
        .current_dir(workspace.path())
        .args(args)
        .output()
        .expect("run sb");

    let result = RunResult {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    if !result.status.success() {
        eprintln!("[{label}] exit: {:?}", result.status.code());
        eprintln!("[{label}] stderr: {}", result.stderr);
    }
    result
}
