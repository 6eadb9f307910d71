// Core bridge types and traits
use super::error::AdbResult;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Location of an executable able to issue device shell commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BridgePath(PathBuf);

impl BridgePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for BridgePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Captured result of one device shell invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
    pub success: bool,
}

impl ShellOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            code: Some(0),
            success: true,
        }
    }

    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            code: Some(code),
            success: false,
        }
    }
}

// Anything that can run a shell command on the attached device
#[allow(async_fn_in_trait)]
pub trait DeviceBridge: Send + Sync {
    async fn shell(&self, args: &[&str]) -> AdbResult<ShellOutput>;

    /// Human readable name used in log lines
    fn describe(&self) -> String;
}
