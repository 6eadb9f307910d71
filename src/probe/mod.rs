// UI text scan: dump the device UI hierarchy and grep it for marker text.

pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod scan;


pub use config::{DEFAULT_MARKER_PATTERN, DUMP_PATH, ProbeConfig, ProbeRequest};
pub use error::ProbeError;
pub use report::ProbeReport;
pub use runner::UiTextProbe;
pub use scan::MatchRecord;

use crate::adb::{AdbLocator, AdbShell, BridgePath, DeviceBridge};

/// Resolve the bridge, then dump and scan through the bridge built by `connect`.
///
/// `connect` is only called once a bridge path has been resolved, so no
/// device command runs when adb is missing.
pub async fn run_with<B, F>(
    locator: &AdbLocator,
    request: &ProbeRequest,
    connect: F,
) -> Result<ProbeReport, ProbeError>
where
    B: DeviceBridge,
    F: FnOnce(&BridgePath, Option<String>) -> B,
{
    let bridge_path = locator.resolve(request.adb_path.as_deref())?;
    let config = ProbeConfig::new(
        bridge_path,
        &request.pattern,
        request.max_hits,
        request.with_context,
    )?;
    let bridge = connect(&config.bridge_path, request.serial.clone());
    UiTextProbe::new(bridge, config).run().await
}

/// Dump and scan through the real adb binary.
pub async fn run(locator: &AdbLocator, request: &ProbeRequest) -> Result<ProbeReport, ProbeError> {
    run_with(locator, request, |path, serial| {
        AdbShell::new(path.clone(), serial)
    })
    .await
}
