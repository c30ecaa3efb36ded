//! Profession Classifier — picks a "<Context> <Profession>" label out of free
//! text using tiered search windows over a static taxonomy.
//!
//! There is no global best-match scoring. Within a window, the first taxonomy
//! entry, first context, first surface form that matches wins; changing that
//! order changes outputs, so it is part of the contract.

use serde::Serialize;

use crate::analysis::patterns::{cached_regex, PROFESSIONS, PROFESSION_INDICATORS};
use crate::analysis::text::ResumeText;

/// Lines joined into the header window.
const HEADER_LINES: usize = 10;
/// Lines scanned for role/title indicator keywords.
const INDICATOR_SCAN_LINES: usize = 20;

/// Header-window matches are the most reliable source location.
pub const HEADER_TIER: u8 = 2;
/// Indicator-line and full-text matches.
pub const BODY_TIER: u8 = 1;

/// A resolved profession label plus the confidence tier of the window that
/// produced it (higher = more reliable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfessionMatch {
    pub label: String,
    pub tier: u8,
}

/// Ordered search windows, first hit wins.
const WINDOWS: &[fn(&ResumeText) -> Option<ProfessionMatch>] =
    &[in_header, in_indicator_lines, in_full_text];

/// Resolves the best-matching profession, or `None` when no taxonomy pair
/// matches anywhere in the text.
pub fn resolve_profession(text: &ResumeText) -> Option<ProfessionMatch> {
    WINDOWS.iter().find_map(|window| window(text))
}

/// Tier 2: the first lines concatenated, where a title line usually sits.
fn in_header(text: &ResumeText) -> Option<ProfessionMatch> {
    let header = text.leading_lines(HEADER_LINES).join(" ");
    find_in_window(&header).map(|label| ProfessionMatch {
        label,
        tier: HEADER_TIER,
    })
}

/// Tier 1: any leading line carrying a role/title keyword, searched on its own.
fn in_indicator_lines(text: &ResumeText) -> Option<ProfessionMatch> {
    for line in text.leading_lines(INDICATOR_SCAN_LINES) {
        let lower = line.to_lowercase();
        if !PROFESSION_INDICATORS.iter().any(|kw| lower.contains(kw)) {
            continue;
        }
        if let Some(label) = find_in_window(line) {
            return Some(ProfessionMatch {
                label,
                tier: BODY_TIER,
            });
        }
    }
    None
}

/// Tier 1: the whole document, last resort.
fn in_full_text(text: &ResumeText) -> Option<ProfessionMatch> {
    find_in_window(text.full()).map(|label| ProfessionMatch {
        label,
        tier: BODY_TIER,
    })
}

/// Runs the taxonomy over one window. Traversal is declaration order of the
/// profession table, then context order, then surface-form order.
fn find_in_window(window: &str) -> Option<String> {
    for (profession, contexts) in PROFESSIONS {
        for context in *contexts {
            for pattern in pair_patterns(profession, context) {
                if cached_regex(&pattern).is_match(window) {
                    return Some(render_label(context, profession));
                }
            }
        }
    }
    None
}

/// The four surface forms tried for one (profession, context) pair, in fixed
/// order: "context profession", "profession context", then the two
/// parenthetical forms with arbitrary non-parenthesis text inside.
fn pair_patterns(profession: &str, context: &str) -> [String; 4] {
    let p = regex::escape(profession);
    let c = regex::escape(context);
    [
        format!(r"(?i)\b{c}\s+{p}\b"),
        format!(r"(?i)\b{p}\s+{c}\b"),
        format!(r"(?i)\b{p}\s*\([^)]*{c}[^)]*\)"),
        format!(r"(?i)\b{c}\s*\([^)]*{p}[^)]*\)"),
    ]
}

fn render_label(context: &str, profession: &str) -> String {
    format!("{} {}", capitalize(context), capitalize(profession))
}

/// First character uppercased, the rest lowercased ("it" -> "It",
/// "machine learning" -> "Machine learning").
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
