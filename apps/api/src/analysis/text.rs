//! Decoded résumé text. Built once at the decoding boundary, read-only for
//! every analyzer after that.

/// The decoded document content: the full string plus its line split.
///
/// Analyzers borrow this immutably and never see the original file, so the
/// same instance can feed all four of them (they are order-independent).
#[derive(Debug, Clone)]
pub struct ResumeText {
    full: String,
    lines: Vec<String>,
}

impl ResumeText {
    pub fn new(full: String) -> Self {
        let lines = full.lines().map(|l| l.trim().to_string()).collect();
        Self { full, lines }
    }

    /// The whole document as one string.
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Trimmed lines in document order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// At most the first `n` lines.
    pub fn leading_lines(&self, n: usize) -> &[String] {
        &self.lines[..self.lines.len().min(n)]
    }

    /// Whitespace-delimited word count over the full text.
    pub fn word_count(&self) -> usize {
        self.full.split_whitespace().count()
    }
}

impl From<&str> for ResumeText {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}
