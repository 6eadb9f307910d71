// ADB module - locating the adb binary and running device shell commands through it.

pub mod error;
pub mod locator;
pub mod shell;
pub mod types;

pub use error::{AdbError, AdbResult};
pub use locator::{AdbLocator, Resolver};
pub use shell::AdbShell;
pub use types::{BridgePath, DeviceBridge, ShellOutput};
