use super::error::ProbeError;
use crate::adb::BridgePath;
use regex::{Regex, RegexBuilder};

/// On-device path the hierarchy is dumped to; overwritten on every run.
pub const DUMP_PATH: &str = "/sdcard/window_dump.xml";

pub const DEFAULT_MAX_HITS: usize = 20;

/// Reels overlay markers: relative timestamps, engagement counters and
/// sponsorship labels, French first with English fallbacks. Only the
/// visible `text`/`content-desc` values count, and counters need a number,
/// so class names and bare "Like"/"Comment" buttons stay silent.
pub const DEFAULT_MARKER_PATTERN: &str = concat!(
    r#"\b(?:text|content-desc)="[^"]*?(?:"#,
    r"il y a\s+\d+",
    r"|\b\d+\s*(?:min|minutes?|h|heures?|j|jours?|sem|semaines?)\b",
    r"|\b\d+\s*(?:minutes?|hours?|days?|weeks?)\s+ago\b",
    r"|\d[\d\s.,]*[km]?\s*(?:j(?:['’ ]|&apos;)?aime|likes?|vues?|views?|commentaires?|comments?|partages?|shares?)\b",
    r"|sponsoris|sponsored|publicit[ée]|partenariat\s+r[ée]mun[ée]r[ée]|paid partnership",
    r#")[^"]*""#,
);

/// Raw parameters as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub adb_path: Option<String>,
    pub serial: Option<String>,
    pub pattern: String,
    pub max_hits: usize,
    pub with_context: bool,
}

impl Default for ProbeRequest {
    fn default() -> Self {
        Self {
            adb_path: None,
            serial: None,
            pattern: DEFAULT_MARKER_PATTERN.to_string(),
            max_hits: DEFAULT_MAX_HITS,
            with_context: false,
        }
    }
}

/// Validated settings for one capture-and-scan run.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub bridge_path: BridgePath,
    pub pattern: Regex,
    pub max_hits: usize,
    pub with_context: bool,
}

impl ProbeConfig {
    pub fn new(
        bridge_path: BridgePath,
        pattern: &str,
        max_hits: usize,
        with_context: bool,
    ) -> Result<Self, ProbeError> {
        let pattern = compile_pattern(pattern)?;
        Ok(Self {
            bridge_path,
            pattern,
            max_hits,
            with_context,
        })
    }
}

pub fn compile_pattern(pattern: &str) -> Result<Regex, ProbeError> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}
