pub mod adb;
pub mod args;
pub mod config;
pub mod probe;

pub use adb::{AdbLocator, AdbShell, BridgePath, DeviceBridge};
pub use config::LaunchConfig;
pub use probe::{ProbeError, ProbeReport, ProbeRequest, UiTextProbe};
