use super::config::{DUMP_PATH, ProbeConfig};
use super::error::ProbeError;
use super::report::{NO_MATCH_HINT, ProbeReport};
use super::scan::scan_lines;
use crate::adb::{AdbError, DeviceBridge, ShellOutput};

const PREFIX_BYTES: &str = "160";

/// Dumps the device UI hierarchy and greps it for the configured markers.
pub struct UiTextProbe<B> {
    bridge: B,
    config: ProbeConfig,
}

impl<B: DeviceBridge> UiTextProbe<B> {
    pub fn new(bridge: B, config: ProbeConfig) -> Self {
        Self { bridge, config }
    }

    /// Run capture, sanity check, retrieval and scan once.
    pub async fn run(self) -> Result<ProbeReport, ProbeError> {
        log::info!("📱 Dumping UI hierarchy via {}", self.bridge.describe());
        self.trigger_capture().await;
        self.sanity_check().await;
        let content = self.retrieve().await?;

        let outcome = scan_lines(
            &content,
            &self.config.pattern,
            self.config.max_hits,
            self.config.with_context,
        );
        if outcome.hit_count == 0 {
            log::warn!("⚠️ {NO_MATCH_HINT}");
        } else {
            log::debug!(
                "{} matching line(s), keeping {}",
                outcome.hit_count,
                outcome.matches.len()
            );
        }

        Ok(ProbeReport {
            bridge_path: self.config.bridge_path,
            dump_path: DUMP_PATH.to_string(),
            capture_bytes: content.len(),
            hit_count: outcome.hit_count,
            matches: outcome.matches,
        })
    }

    async fn trigger_capture(&self) {
        match self
            .bridge
            .shell(&["uiautomator", "dump", "--compressed", DUMP_PATH])
            .await
        {
            Ok(out) if out.success => {
                log::debug!("uiautomator: {}", out.stdout.trim());
            }
            Ok(out) => warn_failed("uiautomator dump", &out),
            Err(e) => log::warn!("⚠️ uiautomator dump could not run: {e}"),
        }
    }

    // Diagnostic only; retrieval decides success
    async fn sanity_check(&self) {
        match self.bridge.shell(&["ls", "-l", DUMP_PATH]).await {
            Ok(out) if out.success => log::info!("🔍 {}", out.stdout.trim()),
            Ok(out) => warn_failed("ls", &out),
            Err(e) => log::warn!("⚠️ ls could not run: {e}"),
        }
        match self
            .bridge
            .shell(&["head", "-c", PREFIX_BYTES, DUMP_PATH])
            .await
        {
            Ok(out) if out.success => log::info!("🔍 head: {}", out.stdout.trim()),
            Ok(out) => warn_failed("head", &out),
            Err(e) => log::warn!("⚠️ head could not run: {e}"),
        }
    }

    async fn retrieve(&self) -> Result<String, ProbeError> {
        let out = self
            .bridge
            .shell(&["cat", DUMP_PATH])
            .await
            .map_err(|e| capture_failed(format!("could not be read: {e}")))?;
        if !out.success {
            let hint = if AdbError::is_multiple_devices_message(&out.stderr) {
                " (select a device with --serial)"
            } else {
                ""
            };
            return Err(capture_failed(format!(
                "could not be read (exit {:?}): {}{hint}",
                out.code,
                out.stderr.trim()
            )));
        }
        if out.stdout.trim().is_empty() {
            return Err(capture_failed("is empty".to_string()));
        }
        Ok(out.stdout)
    }
}

fn capture_failed(reason: String) -> ProbeError {
    ProbeError::CaptureFailed {
        path: DUMP_PATH.to_string(),
        reason,
    }
}

fn warn_failed(step: &str, out: &ShellOutput) {
    log::warn!(
        "⚠️ {step} failed (exit {:?}): {}",
        out.code,
        out.stderr.trim()
    );
    if AdbError::is_multiple_devices_message(&out.stderr) {
        log::warn!("⚠️ Several devices are attached; select one with --serial");
    }
}
