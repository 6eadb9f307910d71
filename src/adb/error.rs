use thiserror::Error;

/// A specialized `Result` type for bridge operations.
pub type AdbResult<T> = Result<T, AdbError>;

/// The error type for locating and invoking the device bridge.
#[derive(Debug, Error)]
pub enum AdbError {
    #[error(
        "ADB executable not found (tried: {}). Install Android Platform Tools or pass --adb-path.",
        tried.join(", ")
    )]
    BridgeNotFound { tried: Vec<String> },

    #[error("Failed to run '{command}': {source}")]
    CommandSpawnFailed {
        command: String,
        source: std::io::Error,
    },
}

impl AdbError {
    /// Check if adb refused an unqualified command because several devices are attached
    pub fn is_multiple_devices_message(stderr: &str) -> bool {
        let lower = stderr.to_ascii_lowercase();
        lower.contains("more than one device") || lower.contains("more than one emulator")
    }
}
