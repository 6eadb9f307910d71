use super::scan::MatchRecord;
use crate::adb::BridgePath;
use serde::Serialize;
use std::fmt::Write as _;

const MAX_LINE_BYTES: usize = 240;
const EXCERPT_SPAN: usize = 80;

pub const NO_MATCH_HINT: &str = "No marker found in the UI dump: the overlay text is probably not exposed in the UI tree, OCR on a screenshot is needed instead.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    pub bridge_path: BridgePath,
    pub dump_path: String,
    pub capture_bytes: usize,
    pub hit_count: usize,
    pub matches: Vec<MatchRecord>,
}

impl ProbeReport {
    pub fn has_hits(&self) -> bool {
        self.hit_count > 0
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "📄 UI dump {} ({} bytes) via {}",
            self.dump_path, self.capture_bytes, self.bridge_path
        );
        if !self.has_hits() {
            let _ = writeln!(out, "⚠️ {NO_MATCH_HINT}");
            return out;
        }

        let _ = writeln!(
            out,
            "✅ {} hit(s), showing {}",
            self.hit_count,
            self.matches.len()
        );
        for record in &self.matches {
            for line in record.context_before.iter().flatten() {
                let _ = writeln!(out, "   - {}", excerpt(line, ""));
            }
            let _ = writeln!(
                out,
                "  L{}: {}",
                record.line_number,
                excerpt(&record.line, &record.matched_text)
            );
            for line in record.context_after.iter().flatten() {
                let _ = writeln!(out, "   + {}", excerpt(line, ""));
            }
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Shorten very long lines (compressed dumps are often one line) around the match.
fn excerpt(line: &str, needle: &str) -> String {
    if line.len() <= MAX_LINE_BYTES {
        return line.to_string();
    }
    let start = if needle.is_empty() {
        0
    } else {
        line.find(needle).unwrap_or(0)
    };
    let end = start + needle.len();

    let mut from = start.saturating_sub(EXCERPT_SPAN);
    while !line.is_char_boundary(from) {
        from -= 1;
    }
    let mut to = (end + EXCERPT_SPAN).min(line.len());
    while !line.is_char_boundary(to) {
        to += 1;
    }

    format!(
        "{}{}{}",
        if from > 0 { "…" } else { "" },
        &line[from..to],
        if to < line.len() { "…" } else { "" }
    )
}
