//! Diagnostic data model for `fuzzrank check`.
//!
//! A diagnostic carries a severity, a one-line summary, optional detail and,
//! when the problem can be located, a source range plus a snippet of the
//! offending line.

use serde::{Deserialize, Serialize};

/// Format version of [`DiagnosticReport`].
pub const REPORT_FORMAT_VERSION: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reserved for severities added later that older readers do not know.
    Unknown,
    Error,
    Warning,
}

/// A position in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pos {
    /// One-based line number.
    pub line: usize,
    /// One-based count of Unicode characters from the start of the line.
    pub column: usize,
    /// Zero-based byte offset into the source.
    pub byte: usize,
}

/// Source span of a diagnostic. `start` is inclusive, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Pos>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Pos>,
}

/// A fact about an expression that helps explain a diagnostic, such as a
/// candidate replacement for an unknown word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticExpressionValue {
    pub traversal: String,
    pub statement: String,
}

/// Source excerpt around a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticSnippet {
    /// Summary of the enclosing context, if any. Serialized as null when absent.
    pub context: Option<String>,
    pub code: String,
    /// Line number of the first line of `code`.
    pub start_line: usize,
    /// Character offset into `code` where the highlighted span starts.
    pub highlight_start_offset: usize,
    /// Character offset into `code` where the highlighted span ends.
    pub highlight_end_offset: usize,
    #[serde(default)]
    pub values: Vec<DiagnosticExpressionValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<DiagnosticRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<DiagnosticSnippet>,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Error, summary, detail)
    }

    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Warning, summary, detail)
    }

    fn new(severity: Severity, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity,
            summary: summary.into(),
            detail: detail.into(),
            address: None,
            range: None,
            snippet: None,
        }
    }

    pub fn with_range(mut self, range: DiagnosticRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn with_snippet(mut self, snippet: DiagnosticSnippet) -> Self {
        self.snippet = Some(snippet);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Diagnostics list plus summary counts, so consumers do not have to
/// re-derive validity themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub format_version: String,
    pub valid: bool,
    pub error_count: usize,
    pub warning_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReport {
    /// Anything that is not an error counts as a warning.
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        let error_count = diagnostics.iter().filter(|d| d.is_error()).count();
        let warning_count = diagnostics.len() - error_count;

        Self {
            format_version: REPORT_FORMAT_VERSION.to_string(),
            valid: error_count == 0,
            error_count,
            warning_count,
            diagnostics,
        }
    }
}
