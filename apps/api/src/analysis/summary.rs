//! Extraction Pipeline — runs the four analyzers over one immutable text and
//! aggregates their results.

use serde::Serialize;

use crate::analysis::name::resolve_name;
use crate::analysis::profession::resolve_profession;
use crate::analysis::scoring::{score, ScoreReport};
use crate::analysis::skills::collect_skills;
use crate::analysis::text::ResumeText;

/// The sole output of the core: name, profession label, skill set, and the
/// compliance score report. Absent name/profession and an empty skill list
/// are normal outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeSummary {
    pub name: Option<String>,
    pub profession: Option<String>,
    pub skills: Vec<String>,
    pub report: ScoreReport,
}

/// Summarizes one résumé. Pure and deterministic: the analyzers only read the
/// shared text, so re-running on the same input always yields the same
/// summary.
pub fn summarize(text: &ResumeText) -> ResumeSummary {
    ResumeSummary {
        name: resolve_name(text),
        profession: resolve_profession(text).map(|m| m.label),
        skills: collect_skills(text).into_iter().collect(),
        report: score(text),
    }
}
