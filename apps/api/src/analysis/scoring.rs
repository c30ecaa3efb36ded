//! Compliance Scorer — starts at 100 and applies independent deduction rules
//! against the full text. The rule table is the single source of truth: the
//! numeric score is always regenerable from the returned issue list.

use serde::Serialize;

use crate::analysis::patterns::{cached_regex, PHONE_PATTERNS};
use crate::analysis::text::ResumeText;

/// Score at or above which a résumé is considered ATS friendly.
pub const ATS_FRIENDLY_THRESHOLD: u32 = 70;

const IMAGE_EXT_PATTERN: &str = r"(?i)\.(jpg|png|jpeg|gif)";
const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";
const BULLET_GLYPHS: &[char] = &['•', '●', '◆', '■', '★'];

const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 1500;

/// One deduction rule. Each rule is evaluated exactly once per run,
/// independently of the others.
struct Rule {
    penalty: u32,
    message: &'static str,
    triggered: fn(&ResumeText) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        penalty: 20,
        message: "Contains table-like formatting (| character)",
        triggered: |t| t.full().contains('|'),
    },
    Rule {
        penalty: 20,
        message: "Mentions image files (possible use of images)",
        triggered: |t| cached_regex(IMAGE_EXT_PATTERN).is_match(t.full()),
    },
    Rule {
        penalty: 10,
        message: "Uses special bullet characters",
        triggered: |t| t.full().contains(BULLET_GLYPHS),
    },
    Rule {
        penalty: 10,
        message: "No phone number found",
        triggered: |t| !has_phone_number(t),
    },
    Rule {
        penalty: 10,
        message: "No email address found",
        triggered: |t| !cached_regex(EMAIL_PATTERN).is_match(t.full()),
    },
    Rule {
        penalty: 10,
        message: "CV is very short (<200 words)",
        triggered: |t| t.word_count() < MIN_WORDS,
    },
    Rule {
        penalty: 10,
        message: "CV is very long (>1500 words)",
        triggered: |t| t.word_count() > MAX_WORDS,
    },
];

/// The compliance score plus the issues that produced it, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub score: u32,
    pub issues: Vec<String>,
}

impl ScoreReport {
    pub fn is_ats_friendly(&self) -> bool {
        self.score >= ATS_FRIENDLY_THRESHOLD
    }
}

/// Scores one résumé. Deductions are non-exclusive; the score floors at 0.
pub fn score(text: &ResumeText) -> ScoreReport {
    let mut total_penalty = 0u32;
    let mut issues = Vec::new();

    for rule in RULES {
        if (rule.triggered)(text) {
            total_penalty += rule.penalty;
            issues.push(rule.message.to_string());
        }
    }

    ScoreReport {
        score: 100u32.saturating_sub(total_penalty),
        issues,
    }
}

/// Presence test over the configured phone formats; the first matching
/// pattern short-circuits. The matched number itself is never extracted.
fn has_phone_number(text: &ResumeText) -> bool {
    PHONE_PATTERNS
        .iter()
        .any(|pattern| cached_regex(pattern).is_match(text.full()))
}

/// Penalty attached to an issue message, if it belongs to the rule table.
/// Lets callers (and tests) regenerate a score from an issue list.
pub fn penalty_for(message: &str) -> Option<u32> {
    RULES
        .iter()
        .find(|rule| rule.message == message)
        .map(|rule| rule.penalty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filler(words: usize) -> String {
        "lorem ".repeat(words)
    }

    fn score_of(doc: &str) -> ScoreReport {
        score(&ResumeText::from(doc))
    }

    #[test]
    fn test_clean_resume_scores_100() {
        let doc = format!(
            "John Doe\nSoftware Engineer\nContact: john@example.com +94 76 325 3332\n{}",
            filler(250)
        );
        let report = score_of(&doc);
        assert_eq!(report.score, 100);
        assert!(report.issues.is_empty());
        assert!(report.is_ats_friendly());
    }

    #[test]
    fn test_table_row_short_no_contacts_scores_50() {
        let doc = format!("name | role | years\n{}", filler(40));
        let report = score_of(&doc);
        assert_eq!(report.score, 50);
        assert_eq!(report.issues.len(), 4);
        assert!(report
            .issues
            .contains(&"CV is very short (<200 words)".to_string()));
        assert!(report
            .issues
            .contains(&"Contains table-like formatting (| character)".to_string()));
        assert!(!report.is_ats_friendly());
    }

    #[test]
    fn test_image_and_bullet_no_contacts_scores_50() {
        let doc = format!("● Uploaded photo.jpg to the site\n{}", filler(250));
        let report = score_of(&doc);
        assert_eq!(report.score, 50);
        assert!(report
            .issues
            .contains(&"Mentions image files (possible use of images)".to_string()));
        assert!(report
            .issues
            .contains(&"Uses special bullet characters".to_string()));
    }

    #[test]
    fn test_phone_number_satisfies_contact_rule() {
        let doc = format!("Call 076 325 3332, mail x@example.com\n{}", filler(250));
        let report = score_of(&doc);
        assert!(!report.issues.contains(&"No phone number found".to_string()));
        assert!(!report.issues.contains(&"No email address found".to_string()));
    }

    #[test]
    fn test_us_phone_format_matches() {
        let doc = format!("Phone: 555-123-4567, mail x@example.com\n{}", filler(250));
        let report = score_of(&doc);
        assert!(!report.issues.contains(&"No phone number found".to_string()));
    }

    #[test]
    fn test_very_long_resume_penalized() {
        let doc = format!("x@example.com +94 76 325 3332\n{}", filler(1600));
        let report = score_of(&doc);
        assert_eq!(report.score, 90);
        assert_eq!(
            report.issues,
            vec!["CV is very long (>1500 words)".to_string()]
        );
    }

    #[test]
    fn test_worst_case_stays_in_bounds() {
        // Every co-occurring rule fires: 20+20+10+10+10+10.
        let report = score_of("| photo.jpg ● x");
        assert_eq!(report.score, 20);
        assert_eq!(report.issues.len(), 6);
    }

    #[test]
    fn test_score_regenerates_from_issue_list() {
        for doc in [
            "| photo.jpg ● x",
            "plain short text",
            &format!("x@example.com +94 76 325 3332\n{}", filler(250)),
        ] {
            let report = score_of(doc);
            let total: u32 = report
                .issues
                .iter()
                .map(|issue| penalty_for(issue).expect("issue must come from the rule table"))
                .sum();
            assert_eq!(report.score, 100u32.saturating_sub(total));
        }
    }

    #[test]
    fn test_rule_messages_are_unique() {
        for rule in RULES {
            assert_eq!(
                RULES.iter().filter(|r| r.message == rule.message).count(),
                1,
                "duplicate rule message: {}",
                rule.message
            );
        }
    }
}
