//! Check command: validate word lists against a vocabulary.
//!
//! Every non-blank line that is not a `#` comment holds one word. Words
//! that are not in the vocabulary become error diagnostics with "did you
//! mean" suggestions; words that only differ in case become warnings.

use anyhow::{bail, Result};
use std::collections::HashSet;

use crate::diagnostic::{
    Diagnostic, DiagnosticExpressionValue, DiagnosticRange, DiagnosticReport, DiagnosticSnippet,
    Pos,
};
use crate::exit_codes;
use crate::input::{self, STDIN_ARG};
use crate::output::{format_report, Output};
use crate::suggest::{self, Limit, SuggestError, Threshold, WordScore};

/// A word found on one line of the source.
#[derive(Debug, PartialEq)]
struct Located<'a> {
    word: &'a str,
    /// Line text without its terminator
    line: &'a str,
    line_no: usize,
    start: Pos,
    end: Pos,
    /// Char offsets of `word` within `line`
    highlight: (usize, usize),
}

/// Split `text` into words with their positions.
fn locate_words(text: &str) -> Vec<Located<'_>> {
    let mut found = Vec::new();
    let mut line_offset = 0;

    for (idx, raw) in text.split_inclusive('\n').enumerate() {
        let line = raw.trim_end_matches(['\n', '\r']);
        let offset = line_offset;
        line_offset += raw.len();

        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }

        let lead_bytes = line.len() - line.trim_start().len();
        let lead_chars = line[..lead_bytes].chars().count();
        let word_chars = word.chars().count();
        let line_no = idx + 1;

        found.push(Located {
            word,
            line,
            line_no,
            start: Pos {
                line: line_no,
                column: lead_chars + 1,
                byte: offset + lead_bytes,
            },
            end: Pos {
                line: line_no,
                column: lead_chars + word_chars + 1,
                byte: offset + lead_bytes + word.len(),
            },
            highlight: (lead_chars, lead_chars + word_chars),
        });
    }

    found
}

fn locate(diag: Diagnostic, filename: &str, at: &Located<'_>) -> Diagnostic {
    diag.with_range(DiagnosticRange {
        filename: Some(filename.to_string()),
        start: Some(at.start),
        end: Some(at.end),
    })
}

fn snippet(at: &Located<'_>, values: Vec<DiagnosticExpressionValue>) -> DiagnosticSnippet {
    DiagnosticSnippet {
        context: None,
        code: at.line.to_string(),
        start_line: at.line_no,
        highlight_start_offset: at.highlight.0,
        highlight_end_offset: at.highlight.1,
        values,
    }
}

fn suggestion_detail(matches: &[WordScore]) -> String {
    match matches {
        [] => String::new(),
        [only] => format!("Did you mean \"{}\"?", only.word),
        [first, rest @ ..] => {
            let others: Vec<String> = rest.iter().map(|m| format!("\"{}\"", m.word)).collect();
            format!(
                "Did you mean \"{}\"? Other close matches: {}.",
                first.word,
                others.join(", ")
            )
        }
    }
}

/// Diagnostics for one source. `vocabulary` must not be empty.
fn check_source(
    filename: &str,
    text: &str,
    vocabulary: &[String],
    threshold: Threshold,
    limit: Limit,
) -> Result<Vec<Diagnostic>, SuggestError> {
    let known: HashSet<&str> = vocabulary.iter().map(String::as_str).collect();
    let mut diagnostics = Vec::new();

    for at in locate_words(text) {
        if known.contains(at.word) {
            continue;
        }

        let lowered = at.word.to_lowercase();
        if let Some(spelled) = vocabulary.iter().find(|v| v.to_lowercase() == lowered) {
            let value = DiagnosticExpressionValue {
                traversal: at.word.to_string(),
                statement: format!("should be \"{}\"", spelled),
            };
            let diag = Diagnostic::warning(
                "Word differs only in case",
                format!("\"{}\" is spelled \"{}\" in the vocabulary.", at.word, spelled),
            );
            diagnostics.push(locate(diag, filename, &at).with_snippet(snippet(&at, vec![value])));
            continue;
        }

        let (detail, values) = match suggest::rank(at.word, vocabulary, threshold, limit) {
            Ok(matches) => {
                let values = matches
                    .iter()
                    .map(|m| DiagnosticExpressionValue {
                        traversal: m.word.clone(),
                        statement: format!("is {} edit(s) away", m.score),
                    })
                    .collect();
                (suggestion_detail(&matches), values)
            }
            Err(SuggestError::NoMatches { threshold }) => (
                format!("No vocabulary word is within {} edit(s).", threshold),
                Vec::new(),
            ),
            Err(e) => return Err(e),
        };

        let diag = Diagnostic::error(
            "Unknown word",
            format!("\"{}\" is not in the vocabulary. {}", at.word, detail),
        );
        diagnostics.push(locate(diag, filename, &at).with_snippet(snippet(&at, values)));
    }

    Ok(diagnostics)
}

pub fn check(
    output: &Output,
    paths: &[String],
    vocabulary: &[String],
    threshold: i64,
    limit: i64,
) -> Result<i32> {
    if paths.len() > 1 && paths.iter().any(|p| p == STDIN_ARG) {
        bail!("'-' (stdin) cannot be combined with other paths");
    }
    if vocabulary.is_empty() {
        bail!("No vocabulary configured. Use --vocabulary <FILE> or set [vocabulary] in fuzzrank.toml");
    }

    let limit = Limit::from_sentinel(limit)?;
    let threshold = Threshold::from_sentinel(threshold)?;

    let mut diagnostics = Vec::new();
    for path in paths {
        let text = input::read_source(path)?;
        let name = input::source_name(path);
        let found = check_source(&name, &text, vocabulary, threshold, limit)?;
        output.verbose(&format!("{}: {} diagnostic(s)", name, found.len()));
        diagnostics.extend(found);
    }

    let report = DiagnosticReport::from_diagnostics(diagnostics);
    if output.is_json() {
        output.json(&report)?;
    } else if report.diagnostics.is_empty() {
        output.data("Success! The word list is valid.");
    } else {
        output.data(&format_report(&report));
    }

    if report.diagnostics.is_empty() {
        return Ok(exit_codes::SUCCESS);
    }
    // Any diagnostic is a finding, warnings included
    Ok(exit_codes::FINDINGS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;

    fn vocab() -> Vec<String> {
        ["read", "write", "list", "delete", "deny", "sudo"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn run(text: &str) -> Vec<Diagnostic> {
        check_source(
            "words.txt",
            text,
            &vocab(),
            Threshold::MaxDistance(2),
            Limit::from_sentinel(3).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_locate_words_skips_blank_and_comments() {
        let found = locate_words("read\n\n# note\n  write  \n");
        let words: Vec<&str> = found.iter().map(|l| l.word).collect();
        assert_eq!(words, vec!["read", "write"]);
        assert_eq!(found[1].line_no, 4);
    }

    #[test]
    fn test_locate_words_positions() {
        let found = locate_words("read\n  écrire\r\n");
        let at = &found[1];
        assert_eq!(at.line, "  écrire");
        assert_eq!(at.start, Pos { line: 2, column: 3, byte: 7 });
        // "écrire" is 6 chars and 7 bytes
        assert_eq!(at.end, Pos { line: 2, column: 9, byte: 14 });
        assert_eq!(at.highlight, (2, 8));
    }

    #[test]
    fn test_known_words_produce_nothing() {
        assert!(run("read\nwrite\nlist\n").is_empty());
    }

    #[test]
    fn test_unknown_word_suggests_closest() {
        let diags = run("raed\n");
        assert_eq!(diags.len(), 1);
        let diag = &diags[0];
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.summary, "Unknown word");
        assert!(diag.detail.contains("Did you mean \"read\"?"));

        let snippet = diag.snippet.as_ref().unwrap();
        assert_eq!(snippet.code, "raed");
        assert_eq!(snippet.values[0].traversal, "read");
        assert_eq!(snippet.values[0].statement, "is 2 edit(s) away");

        let range = diag.range.as_ref().unwrap();
        assert_eq!(range.filename.as_deref(), Some("words.txt"));
        assert_eq!(range.start.unwrap().byte, 0);
        assert_eq!(range.end.unwrap().byte, 4);
    }

    #[test]
    fn test_only_words_within_threshold_are_suggested() {
        // "dent" is one edit from "deny"; "delete" is three away
        let diags = run("dent\n");
        let values: Vec<&str> = diags[0]
            .snippet
            .as_ref()
            .unwrap()
            .values
            .iter()
            .map(|v| v.traversal.as_str())
            .collect();
        assert_eq!(values, vec!["deny"]);
    }

    #[test]
    fn test_unknown_word_without_close_match() {
        let diags = run("zzzzzzzz\n");
        assert_eq!(diags[0].severity, Severity::Error);
        assert!(diags[0]
            .detail
            .contains("No vocabulary word is within 2 edit(s)."));
        assert!(diags[0].snippet.as_ref().unwrap().values.is_empty());
    }

    #[test]
    fn test_case_only_difference_is_warning() {
        let diags = run("Read\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert_eq!(diags[0].summary, "Word differs only in case");
        assert!(diags[0].detail.contains("\"Read\" is spelled \"read\""));
    }

    #[test]
    fn test_report_from_mixed_source() {
        let report = DiagnosticReport::from_diagnostics(run("read\nREAD\nwrtie\n"));
        assert!(!report.valid);
        assert_eq!(report.error_count, 1);
        assert_eq!(report.warning_count, 1);
    }

    #[test]
    fn test_suggestion_detail() {
        let one = vec![WordScore {
            word: "read".into(),
            score: 1,
        }];
        assert_eq!(suggestion_detail(&one), "Did you mean \"read\"?");

        let two = vec![
            WordScore {
                word: "read".into(),
                score: 1,
            },
            WordScore {
                word: "reed".into(),
                score: 2,
            },
        ];
        assert_eq!(
            suggestion_detail(&two),
            "Did you mean \"read\"? Other close matches: \"reed\"."
        );
    }
}
