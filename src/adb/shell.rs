use super::error::{AdbError, AdbResult};
use super::types::{BridgePath, DeviceBridge, ShellOutput};
use tokio::process::Command;

/// Device bridge backed by the external `adb` binary.
pub struct AdbShell {
    pub bridge: BridgePath,
    pub serial: Option<String>,
}

impl AdbShell {
    pub fn new(bridge: BridgePath, serial: Option<String>) -> Self {
        // Blank serials come from empty env vars; treat them as unset
        let serial = serial
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self { bridge, serial }
    }

    /// Full argument list passed to the adb binary for a device shell command.
    pub fn command_args(&self, shell_args: &[&str]) -> Vec<String> {
        let mut args = Vec::with_capacity(shell_args.len() + 3);
        if let Some(serial) = &self.serial {
            args.push("-s".to_string());
            args.push(serial.clone());
        }
        args.push("shell".to_string());
        args.extend(shell_args.iter().map(|a| a.to_string()));
        args
    }
}

impl DeviceBridge for AdbShell {
    async fn shell(&self, args: &[&str]) -> AdbResult<ShellOutput> {
        let full_args = self.command_args(args);
        let command = format!("{} {}", self.bridge, full_args.join(" "));
        log::debug!("🔧 {command}");

        let output = Command::new(self.bridge.as_path())
            .args(&full_args)
            .output()
            .await
            .map_err(|source| AdbError::CommandSpawnFailed {
                command: command.clone(),
                source,
            })?;

        let result = ShellOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
            success: output.status.success(),
        };
        if !result.success {
            log::debug!(
                "'{command}' exited with {:?}: {}",
                result.code,
                result.stderr.trim()
            );
        }
        Ok(result)
    }

    fn describe(&self) -> String {
        match &self.serial {
            Some(serial) => format!("{} (device {serial})", self.bridge),
            None => self.bridge.to_string(),
        }
    }
}
