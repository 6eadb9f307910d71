use crate::adb::AdbError;
use thiserror::Error;

pub const EXIT_OK: u8 = 0;
pub const EXIT_USAGE: u8 = 1;
pub const EXIT_BRIDGE_NOT_FOUND: u8 = 2;
pub const EXIT_CAPTURE_FAILED: u8 = 3;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error(transparent)]
    Adb(#[from] AdbError),

    #[error("UI dump capture failed: {path} {reason}")]
    CaptureFailed { path: String, reason: String },

    #[error("Invalid marker pattern: {source}")]
    InvalidPattern {
        #[from]
        source: regex::Error,
    },
}

impl ProbeError {
    /// Stable process exit status so calling scripts can branch without parsing output.
    pub fn exit_code(&self) -> u8 {
        match self {
            ProbeError::Adb(AdbError::BridgeNotFound { .. }) => EXIT_BRIDGE_NOT_FOUND,
            ProbeError::Adb(AdbError::CommandSpawnFailed { .. }) => EXIT_CAPTURE_FAILED,
            ProbeError::CaptureFailed { .. } => EXIT_CAPTURE_FAILED,
            ProbeError::InvalidPattern { .. } => EXIT_USAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_stable() {
        let not_found = ProbeError::from(AdbError::BridgeNotFound { tried: vec![] });
        assert_eq!(not_found.exit_code(), 2);

        let capture = ProbeError::CaptureFailed {
            path: "/sdcard/window_dump.xml".into(),
            reason: "is empty".into(),
        };
        assert_eq!(capture.exit_code(), 3);
        assert_eq!(
            capture.to_string(),
            "UI dump capture failed: /sdcard/window_dump.xml is empty"
        );

        let bad = regex::Regex::new("(unclosed").unwrap_err();
        assert_eq!(ProbeError::from(bad).exit_code(), EXIT_USAGE);

        let codes = [EXIT_OK, EXIT_USAGE, EXIT_BRIDGE_NOT_FOUND, EXIT_CAPTURE_FAILED];
        assert_eq!(codes, [0, 1, 2, 3]);
    }
}
