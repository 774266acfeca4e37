//! Rank command: order candidates by edit distance from an input word.
//!
//! Candidates come from positional arguments, then from `--from` (a file or
//! `-` for stdin, one candidate per line).

use anyhow::{Context, Result};

use crate::exit_codes;
use crate::input;
use crate::output::{format_matches, Output, RankResponse};
use crate::suggest::{rank_with_sentinels, WordScore};

/// Positional candidates followed by the lines of `from`, if given.
fn collect_candidates(mut candidates: Vec<String>, from: Option<&str>) -> Result<Vec<String>> {
    if let Some(source) = from {
        let text = input::read_source(source)
            .with_context(|| format!("Failed to read candidates from {}", source))?;
        candidates.extend(input::lines_to_words(&text));
    }
    Ok(candidates)
}

pub fn rank(
    output: &Output,
    word: &str,
    candidates: Vec<String>,
    from: Option<&str>,
    threshold: i64,
    limit: i64,
) -> Result<i32> {
    let candidates = collect_candidates(candidates, from)?;
    output.verbose(&format!(
        "Ranking {} candidate(s) against '{}' (threshold {}, limit {})",
        candidates.len(),
        word,
        threshold,
        limit
    ));

    let matches: Vec<WordScore> = rank_with_sentinels(word, &candidates, threshold, limit)?;

    if output.is_json() {
        output.json(&RankResponse {
            ok: true,
            input: word.to_string(),
            threshold,
            limit,
            matches,
        })?;
    } else {
        output.data(&format_matches(&matches));
    }

    Ok(exit_codes::SUCCESS)
}
