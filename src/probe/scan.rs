use regex::Regex;
use serde::Serialize;

/// One line of the dump that matched the marker pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// 1-based line number in the dump
    pub line_number: usize,
    pub line: String,
    pub matched_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_before: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_after: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Number of matching lines, including those beyond `max_hits`
    pub hit_count: usize,
    pub matches: Vec<MatchRecord>,
}

/// Scan `text` line by line in document order, keeping at most `max_hits` records.
pub fn scan_lines(text: &str, pattern: &Regex, max_hits: usize, with_context: bool) -> ScanOutcome {
    let lines: Vec<&str> = text.lines().collect();
    let mut outcome = ScanOutcome::default();

    for (idx, line) in lines.iter().enumerate() {
        let Some(found) = pattern.find(line) else {
            continue;
        };
        outcome.hit_count += 1;
        if outcome.matches.len() >= max_hits {
            continue;
        }

        let (context_before, context_after) = if with_context {
            let before = idx
                .checked_sub(1)
                .map(|prev| vec![lines[prev].to_string()])
                .unwrap_or_default();
            let after = lines
                .get(idx + 1)
                .map(|next| vec![next.to_string()])
                .unwrap_or_default();
            (Some(before), Some(after))
        } else {
            (None, None)
        };

        outcome.matches.push(MatchRecord {
            line_number: idx + 1,
            line: line.to_string(),
            matched_text: found.as_str().to_string(),
            context_before,
            context_after,
        });
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::config::compile_pattern;

    #[test]
    fn counts_lines_not_occurrences() {
        let re = compile_pattern("vues").unwrap();
        let text = "10 vues 20 vues\nrien\n30 VUES\n";
        let outcome = scan_lines(text, &re, 20, false);
        assert_eq!(outcome.hit_count, 2);
        assert_eq!(outcome.matches[0].line_number, 1);
        assert_eq!(outcome.matches[0].matched_text, "vues");
        assert_eq!(outcome.matches[1].line_number, 3);
        assert_eq!(outcome.matches[1].matched_text, "VUES");
    }

    #[test]
    fn truncates_to_max_hits_but_counts_all() {
        let re = compile_pattern("hit").unwrap();
        let text = "hit 1\nhit 2\nmiss\nhit 3\nhit 4\nhit 5";
        let outcome = scan_lines(text, &re, 2, false);
        assert_eq!(outcome.hit_count, 5);
        assert_eq!(outcome.matches.len(), 2);
        assert_eq!(outcome.matches[1].line, "hit 2");
    }

    #[test]
    fn zero_max_hits_keeps_count_only() {
        let re = compile_pattern("a").unwrap();
        let outcome = scan_lines("a\na", &re, 0, true);
        assert_eq!(outcome.hit_count, 2);
        assert!(outcome.matches.is_empty());
    }

    #[test]
    fn context_lines_at_edges() {
        let re = compile_pattern("mark").unwrap();
        let text = "mark first\nmiddle\nmark last";
        let outcome = scan_lines(text, &re, 10, true);

        let first = &outcome.matches[0];
        assert_eq!(first.context_before, Some(vec![]));
        assert_eq!(first.context_after, Some(vec!["middle".to_string()]));

        let last = &outcome.matches[1];
        assert_eq!(last.context_before, Some(vec!["middle".to_string()]));
        assert_eq!(last.context_after, Some(vec![]));
    }

    #[test]
    fn no_context_unless_requested() {
        let re = compile_pattern("mark").unwrap();
        let outcome = scan_lines("a\nmark\nb", &re, 10, false);
        assert_eq!(outcome.matches[0].context_before, None);
        assert_eq!(outcome.matches[0].context_after, None);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let re = compile_pattern("aime$").unwrap();
        let outcome = scan_lines("12 J'aime\r\n3 commentaires\r\n", &re, 5, false);
        assert_eq!(outcome.hit_count, 1);
        assert_eq!(outcome.matches[0].line, "12 J'aime");
    }
}
