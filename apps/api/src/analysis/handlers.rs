//! HTTP handlers — thin consumers of the extraction pipeline. All résumé
//! logic lives in the sibling modules; these only move bytes and JSON.

use axum::extract::Multipart;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::summary::{summarize, ResumeSummary};
use crate::analysis::text::ResumeText;
use crate::errors::AppError;
use crate::extract::extract_resume_text;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub name: Option<String>,
    pub profession: Option<String>,
    pub skills: Vec<String>,
    pub ats_score: u32,
    pub issues: Vec<String>,
    pub is_ats_friendly: bool,
}

impl From<ResumeSummary> for AnalyzeResponse {
    fn from(summary: ResumeSummary) -> Self {
        let is_ats_friendly = summary.report.is_ats_friendly();
        AnalyzeResponse {
            name: summary.name,
            profession: summary.profession,
            skills: summary.skills,
            ats_score: summary.report.score,
            issues: summary.report.issues,
            is_ats_friendly,
        }
    }
}

/// POST /api/v1/analyze — multipart upload, field `pdf`.
pub async fn handle_analyze_pdf(
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("pdf") {
            continue;
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
        if bytes.is_empty() {
            return Err(AppError::Validation("uploaded file is empty".to_string()));
        }

        let text = extract_resume_text(&bytes)?;
        return Ok(Json(respond(&text)));
    }

    Err(AppError::Validation(
        "missing multipart field 'pdf'".to_string(),
    ))
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub raw_text: String,
}

/// POST /api/v1/analyze/text — pre-decoded résumé text as JSON.
pub async fn handle_analyze_text(
    Json(req): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if req.raw_text.trim().is_empty() {
        return Err(AppError::Validation("raw_text must not be empty".to_string()));
    }

    let text = ResumeText::new(req.raw_text);
    Ok(Json(respond(&text)))
}

fn respond(text: &ResumeText) -> AnalyzeResponse {
    let summary = summarize(text);
    info!(
        score = summary.report.score,
        issues = summary.report.issues.len(),
        words = text.word_count(),
        "resume analyzed"
    );
    summary.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_mirrors_summary() {
        let text = ResumeText::from(
            "John Doe\nSoftware Engineer\nContact: john@example.com +94 76 325 3332\n",
        );
        let response: AnalyzeResponse = summarize(&text).into();
        assert_eq!(response.name.as_deref(), Some("John Doe"));
        assert_eq!(response.profession.as_deref(), Some("Software Engineer"));
        // Three lines only: the short-length deduction applies.
        assert_eq!(response.ats_score, 90);
        assert!(response.is_ats_friendly);
    }

    #[test]
    fn test_friendliness_threshold_is_70() {
        // Pipe + short with contacts present: 100 - 20 - 10 = 70, still friendly.
        let text = ResumeText::from("a | b\njohn@example.com +94 76 325 3332\n");
        let response: AnalyzeResponse = summarize(&text).into();
        assert_eq!(response.ats_score, 70);
        assert!(response.is_ats_friendly);

        // One more deduction tips it under the threshold.
        let text = ResumeText::from("a | b ●\njohn@example.com +94 76 325 3332\n");
        let response: AnalyzeResponse = summarize(&text).into();
        assert_eq!(response.ats_score, 60);
        assert!(!response.is_ats_friendly);
    }
}
