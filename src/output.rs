//! Output layer for fuzzrank CLI.
//!
//! Centralizes stdout/stderr separation and human vs JSON output modes.
//! - stdout: data (the "answer" - matches, distances, reports, JSON)
//! - stderr: diagnostics (progress, verbose messages, human-mode errors)

use colored::Colorize;
use serde::Serialize;
use std::fmt::Write as _;

use crate::diagnostic::{Diagnostic, DiagnosticReport, Severity};
use crate::suggest::{SuggestError, WordScore};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Output helper that centralizes all CLI output
#[derive(Debug, Clone)]
pub struct Output {
    pub mode: OutputMode,
    pub quiet: bool,
    pub verbose: bool,
}

impl Output {
    pub fn new(json: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            mode: if json {
                OutputMode::Json
            } else {
                OutputMode::Human
            },
            quiet,
            verbose,
        }
    }

    /// Write data to stdout (the command's "answer")
    pub fn data(&self, message: &str) {
        println!("{}", message);
    }

    /// Write JSON data to stdout
    /// Returns error if serialization fails (should be propagated to become JSON error)
    pub fn json<T: Serialize>(&self, data: &T) -> Result<(), serde_json::Error> {
        let json = serde_json::to_string_pretty(data)?;
        println!("{}", json);
        Ok(())
    }

    /// Write a verbose diagnostic message to stderr
    /// Only shown with --verbose in human mode
    pub fn verbose(&self, message: &str) {
        if self.mode == OutputMode::Json || self.quiet || !self.verbose {
            return;
        }
        eprintln!("{}", message);
    }

    /// Write a warning to stderr
    /// Shown in human mode unless --quiet, suppressed in JSON mode
    pub fn warn(&self, message: &str) {
        if self.mode == OutputMode::Json || self.quiet {
            return;
        }
        eprintln!("{}", message);
    }

    /// Check if we're in JSON mode
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }
}

// =============================================================================
// JSON Response Types
// =============================================================================

/// Schema version for JSON error envelopes.
pub const ERROR_SCHEMA_VERSION: &str = "1.0.0";

/// Tool version from Cargo.toml.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON error response using envelope structure (written to stdout with non-zero exit).
#[derive(Debug, Serialize)]
pub struct JsonError {
    pub ok: bool,
    pub schema_id: &'static str,
    pub schema_version: &'static str,
    pub tool_version: &'static str,
    pub generated_at: String,
    pub severity: &'static str,
    pub errors: Vec<JsonErrorInfo>,
    /// Always null for error responses
    pub data: Option<()>,
}

#[derive(Debug, Serialize)]
pub struct JsonErrorInfo {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl JsonError {
    pub const SCHEMA_ID: &'static str = "fuzzrank.error";

    pub fn new(message: impl Into<String>) -> Self {
        Self::with_code("internal_error", message, None)
    }

    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::with_code("internal_error", message, Some(details.into()))
    }

    pub fn with_code(
        code: &'static str,
        message: impl Into<String>,
        details: Option<String>,
    ) -> Self {
        Self {
            ok: false,
            schema_id: Self::SCHEMA_ID,
            schema_version: ERROR_SCHEMA_VERSION,
            tool_version: TOOL_VERSION,
            generated_at: chrono::Utc::now().to_rfc3339(),
            severity: "error",
            errors: vec![JsonErrorInfo {
                code,
                message: message.into(),
                details,
            }],
            data: None,
        }
    }

    /// Print this error as JSON to stdout
    /// Panics if serialization fails (should never happen for JsonError)
    pub fn print(&self) {
        let json =
            serde_json::to_string_pretty(self).expect("JsonError serialization should never fail");
        println!("{}", json);
    }
}

impl From<&SuggestError> for JsonError {
    fn from(err: &SuggestError) -> Self {
        Self::with_code(err.code(), err.to_string(), None)
    }
}

/// JSON success response for the rank command
#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub ok: bool,
    pub input: String,
    pub threshold: i64,
    pub limit: i64,
    pub matches: Vec<WordScore>,
}

/// JSON success response for the distance command
#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    pub ok: bool,
    pub a: String,
    pub b: String,
    pub distance: usize,
}

/// JSON response for --help flag
#[derive(Debug, Serialize)]
pub struct HelpResponse {
    pub ok: bool,
    pub help: String,
}

impl HelpResponse {
    pub fn new(help_text: String) -> Self {
        Self {
            ok: true,
            help: help_text,
        }
    }

    pub fn print(&self) {
        let json = serde_json::to_string_pretty(self)
            .expect("HelpResponse serialization should never fail");
        println!("{}", json);
    }
}

/// JSON response for --version flag
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub ok: bool,
    pub version: String,
}

impl VersionResponse {
    pub fn new(version: String) -> Self {
        Self { ok: true, version }
    }

    pub fn print(&self) {
        let json = serde_json::to_string_pretty(self)
            .expect("VersionResponse serialization should never fail");
        println!("{}", json);
    }
}

// =============================================================================
// Human rendering
// =============================================================================

/// Ranked matches as aligned `score  word` lines.
pub fn format_matches(matches: &[WordScore]) -> String {
    let width = matches
        .iter()
        .map(|m| m.score.to_string().len())
        .max()
        .unwrap_or(1);
    let mut out = String::new();
    for m in matches {
        let _ = writeln!(out, "{:>width$}  {}", m.score, m.word, width = width);
    }
    out.trim_end().to_string()
}

fn severity_label(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::Error => "Error".red().bold(),
        Severity::Warning => "Warning".yellow().bold(),
        Severity::Unknown => "Unknown".bold(),
    }
}

/// One diagnostic in the human format:
///
/// ```text
/// Error: Unknown word
///
///   on words.txt line 3:
///    3: raed
///
/// Did you mean "read"?
/// ```
pub fn format_diagnostic(diag: &Diagnostic) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", severity_label(diag.severity), diag.summary);

    if let Some(range) = &diag.range {
        let filename = range.filename.as_deref().unwrap_or("<unknown>");
        match range.start {
            Some(start) => {
                let _ = writeln!(out, "\n  on {} line {}:", filename, start.line);
            }
            None => {
                let _ = writeln!(out, "\n  on {}:", filename);
            }
        }
        if let Some(snippet) = &diag.snippet {
            for (i, line) in snippet.code.lines().enumerate() {
                let _ = writeln!(out, "  {:>3}: {}", snippet.start_line + i, line);
            }
        }
    }

    if !diag.detail.is_empty() {
        let _ = writeln!(out, "\n{}", diag.detail);
    }
    out.trim_end().to_string()
}

/// Human-readable report: every diagnostic followed by a summary line.
pub fn format_report(report: &DiagnosticReport) -> String {
    let mut out = String::new();
    for diag in &report.diagnostics {
        let _ = writeln!(out, "{}\n", format_diagnostic(diag));
    }
    let _ = write!(
        out,
        "{} error(s), {} warning(s)",
        report.error_count, report.warning_count
    );
    out
}
