//! Edit-distance scoring and ranking for "did you mean" suggestions.
//!
//! Distances are measured in Unicode scalar values, not bytes, so a
//! multi-byte character costs one edit on each side.

use serde::Serialize;
use std::fmt;
use std::num::NonZeroUsize;
use thiserror::Error;

/// Errors returned by [`rank`] and the sentinel parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("no matches found using threshold: {threshold}")]
    NoMatches { threshold: Threshold },
}

impl SuggestError {
    /// Stable code used in JSON error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            SuggestError::InvalidArgument(_) => "invalid_argument",
            SuggestError::NoMatches { .. } => "no_matches",
        }
    }
}

/// Maximum distance a candidate may have to be kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// Keep every candidate (sentinel `-1`).
    Unfiltered,
    MaxDistance(usize),
}

impl Threshold {
    pub const SENTINEL: i64 = -1;

    pub fn from_sentinel(value: i64) -> Result<Self, SuggestError> {
        match value {
            Self::SENTINEL => Ok(Threshold::Unfiltered),
            v if v >= 0 => Ok(Threshold::MaxDistance(v as usize)),
            v => Err(SuggestError::InvalidArgument(format!(
                "threshold must be non-negative, or -1 to disable filtering (got {})",
                v
            ))),
        }
    }

    pub fn as_sentinel(self) -> i64 {
        match self {
            Threshold::Unfiltered => Self::SENTINEL,
            Threshold::MaxDistance(d) => d as i64,
        }
    }

    fn admits(self, score: usize) -> bool {
        match self {
            Threshold::Unfiltered => true,
            Threshold::MaxDistance(max) => score <= max,
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_sentinel())
    }
}

/// Maximum number of ranked results to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// Return every match (sentinel `-1`).
    Unlimited,
    AtMost(NonZeroUsize),
}

impl Limit {
    pub const SENTINEL: i64 = -1;

    pub fn from_sentinel(value: i64) -> Result<Self, SuggestError> {
        match value {
            Self::SENTINEL => Ok(Limit::Unlimited),
            v if v > 0 => NonZeroUsize::new(v as usize)
                .map(Limit::AtMost)
                .ok_or_else(|| Self::invalid(v)),
            v => Err(Self::invalid(v)),
        }
    }

    pub fn as_sentinel(self) -> i64 {
        match self {
            Limit::Unlimited => Self::SENTINEL,
            Limit::AtMost(n) => n.get() as i64,
        }
    }

    /// Number of results to keep out of `available` candidates.
    fn effective(self, available: usize) -> usize {
        match self {
            Limit::Unlimited => available,
            Limit::AtMost(n) => n.get().min(available),
        }
    }

    fn invalid(value: i64) -> SuggestError {
        SuggestError::InvalidArgument(format!(
            "limit must be positive, or -1 to mean unlimited (got {})",
            value
        ))
    }
}

/// One candidate and its distance from the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordScore {
    pub word: String,
    pub score: usize,
}

/// Levenshtein distance between `a` and `b`, counted in chars.
///
/// Keeps a single row sized by the shorter input.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let (long, short) = if a.chars().count() >= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short: Vec<char> = short.chars().collect();
    if short.is_empty() {
        return long.chars().count();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, cl) in long.chars().enumerate() {
        // d[i-1][j-1] for the cell being filled
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cs) in short.iter().enumerate() {
            let above = row[j + 1];
            let value = if cl == *cs {
                diagonal
            } else {
                1 + std::cmp::min(std::cmp::min(above, row[j]), diagonal)
            };
            diagonal = above;
            row[j + 1] = value;
        }
    }

    row[short.len()]
}

/// Rank `candidates` by distance from `input`.
///
/// Candidates over `threshold` are dropped, the rest are stable-sorted by
/// ascending score (ties keep input order) and cut to `limit`.
pub fn rank<S: AsRef<str>>(
    input: &str,
    candidates: &[S],
    threshold: Threshold,
    limit: Limit,
) -> Result<Vec<WordScore>, SuggestError> {
    let keep = limit.effective(candidates.len());

    let mut matches: Vec<WordScore> = candidates
        .iter()
        .map(|candidate| {
            let word = candidate.as_ref();
            WordScore {
                word: word.to_string(),
                score: levenshtein(input, word),
            }
        })
        .filter(|m| threshold.admits(m.score))
        .collect();

    if matches.is_empty() {
        return Err(SuggestError::NoMatches { threshold });
    }

    // sort_by_key is stable
    matches.sort_by_key(|m| m.score);
    matches.truncate(keep);
    Ok(matches)
}

/// [`rank`] with integer arguments where `-1` means "no filtering" for the
/// threshold and "no cap" for the limit. A limit of 0 is rejected before
/// any scoring.
pub fn rank_with_sentinels<S: AsRef<str>>(
    input: &str,
    candidates: &[S],
    threshold: i64,
    limit: i64,
) -> Result<Vec<WordScore>, SuggestError> {
    let limit = Limit::from_sentinel(limit)?;
    let threshold = Threshold::from_sentinel(threshold)?;
    rank(input, candidates, threshold, limit)
}
