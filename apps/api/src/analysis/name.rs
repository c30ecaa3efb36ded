//! Name Resolver — finds the candidate's name in the leading lines of a
//! résumé via an ordered list of strategies, first success wins.
//!
//! Scope: ASCII capitalized-word sequences only. Hyphenated or accented names
//! are out of pattern and resolve as absent. That is a documented limitation,
//! not an error path.

use crate::analysis::patterns::{cached_regex, NON_NAME_WORDS};
use crate::analysis::text::ResumeText;

/// Lines scanned by the leading-lines strategy.
const LEADING_SCAN_LINES: usize = 15;
/// Lines scanned by the labelled-name strategy.
const LABELLED_SCAN_LINES: usize = 20;

/// Optional courtesy title, then two or more capitalized words anchored at
/// line start, closed by a dash or end of line.
const LEADING_NAME_PATTERN: &str =
    r"^(?:Mr\.|Mrs\.|Ms\.|Dr\.|Prof\.)?\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)(?:\s*[-–—]|\s*$)";

/// Explicit label followed by two or more capitalized words. The label is
/// case-insensitive; the captured name stays strictly capitalized.
const LABELLED_NAME_PATTERN: &str =
    r"(?i:Name|Full Name|Candidate Name)[:\s]+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)";

/// Ordered resolution strategies. The resolver runs them in sequence and
/// short-circuits on the first hit; tier order is part of the contract.
const STRATEGIES: &[fn(&ResumeText) -> Option<String>] =
    &[from_leading_lines, from_name_label];

/// Resolves the candidate name, or `None` when no tier matches. Absence is a
/// normal outcome.
pub fn resolve_name(text: &ResumeText) -> Option<String> {
    STRATEGIES.iter().find_map(|strategy| strategy(text))
}

/// Tier 1: scan the first lines for a bare capitalized name, skipping lines
/// that look like section headers.
fn from_leading_lines(text: &ResumeText) -> Option<String> {
    let re = cached_regex(LEADING_NAME_PATTERN);
    for line in text.leading_lines(LEADING_SCAN_LINES) {
        if contains_non_name_word(line) {
            continue;
        }
        if let Some(caps) = re.captures(line) {
            let candidate = caps[1].to_string();
            // Guards against spans like "Personal Skills" slipping through
            // on lines that themselves passed the header check.
            if !contains_non_name_word(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Tier 2: look for an explicit "Name:" style label.
fn from_name_label(text: &ResumeText) -> Option<String> {
    let re = cached_regex(LABELLED_NAME_PATTERN);
    for line in text.leading_lines(LABELLED_SCAN_LINES) {
        if let Some(caps) = re.captures(line) {
            let candidate = caps[1].to_string();
            if !contains_non_name_word(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Case-insensitive substring test against the non-name vocabulary.
fn contains_non_name_word(span: &str) -> bool {
    let lower = span.to_lowercase();
    NON_NAME_WORDS.iter().any(|word| lower.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_on_first_line() {
        let text = ResumeText::from("John Doe\nSoftware Engineer\n");
        assert_eq!(resolve_name(&text), Some("John Doe".to_string()));
    }

    #[test]
    fn test_name_with_courtesy_title() {
        let text = ResumeText::from("Dr. Jane Smith\nResearcher");
        assert_eq!(resolve_name(&text), Some("Jane Smith".to_string()));
    }

    #[test]
    fn test_name_followed_by_dash() {
        let text = ResumeText::from("John Doe - Curriculum\n");
        assert_eq!(resolve_name(&text), Some("John Doe".to_string()));
    }

    #[test]
    fn test_header_lines_are_skipped() {
        // "Professional Summary" contains two stop-words; the real name is below.
        let text = ResumeText::from("Professional Summary\nJohn Doe\n");
        assert_eq!(resolve_name(&text), Some("John Doe".to_string()));
    }

    #[test]
    fn test_stop_word_phrase_never_resolves_as_name() {
        let text = ResumeText::from("Professional Skills Area\n");
        assert_eq!(resolve_name(&text), None);
    }

    #[test]
    fn test_single_word_is_not_a_name() {
        let text = ResumeText::from("John\n");
        assert_eq!(resolve_name(&text), None);
    }

    #[test]
    fn test_labelled_name_fallback() {
        let text = ResumeText::from("ACME CORP\nname: John Doe\n");
        assert_eq!(resolve_name(&text), Some("John Doe".to_string()));
    }

    #[test]
    fn test_candidate_name_label() {
        let text = ResumeText::from("ACME CORP\nCandidate Name: Jane Ann Smith\n");
        assert_eq!(resolve_name(&text), Some("Jane Ann Smith".to_string()));
    }

    #[test]
    fn test_labelled_lowercase_name_is_rejected() {
        // The label is case-insensitive but the name itself must be capitalized.
        let text = ResumeText::from("Name: john doe\n");
        assert_eq!(resolve_name(&text), None);
    }

    #[test]
    fn test_name_beyond_scan_window_is_absent() {
        let filler = "x\n".repeat(20);
        let text = ResumeText::new(format!("{filler}John Doe\n"));
        assert_eq!(resolve_name(&text), None);
    }

    #[test]
    fn test_all_caps_line_does_not_match() {
        let text = ResumeText::from("JOHN DOE\n");
        assert_eq!(resolve_name(&text), None);
    }
}
