//! Document decoding boundary. The analysis core never sees bytes; it is
//! only ever handed text that came out of here (or arrived pre-decoded).

use crate::analysis::text::ResumeText;
use crate::errors::AppError;

/// Decodes an uploaded PDF into résumé text.
///
/// This is the one genuinely fallible step in front of the pipeline: a
/// corrupt or image-only PDF surfaces as `PdfExtraction`, and the caller must
/// treat that as "nothing to summarize" rather than invoking the core.
pub fn extract_resume_text(bytes: &[u8]) -> Result<ResumeText, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::PdfExtraction(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(AppError::PdfExtraction(
            "document contains no extractable text".to_string(),
        ));
    }

    Ok(ResumeText::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_fail_with_extraction_error() {
        let result = extract_resume_text(b"not a pdf at all");
        assert!(matches!(result, Err(AppError::PdfExtraction(_))));
    }

    #[test]
    fn test_empty_body_fails_with_extraction_error() {
        let result = extract_resume_text(b"");
        assert!(matches!(result, Err(AppError::PdfExtraction(_))));
    }
}
