//! Exit code policy for fuzzrank.
//!
//! ## Results (0-3)
//!
//! - `0` = Success (distance printed, matches found, word list valid)
//! - `1` = Findings (`check` reported at least one diagnostic)
//! - `2` = Usage error (bad flags or arguments, rejected limit/threshold)
//! - `3` = No candidate survived the threshold
//!
//! ## Operational Failures (10+)
//!
//! - `10` = General operational failure (unreadable input, internal errors)
//! - `12` = Configuration error
//!
//! Automation can tell "the input has problems" (1-3) apart from "we couldn't
//! run at all" (10+).

/// Exit code: success
pub const SUCCESS: i32 = 0;

/// Exit code: diagnostics were reported
pub const FINDINGS: i32 = 1;

/// Exit code: invalid usage
pub const USAGE: i32 = 2;

/// Exit code: nothing within the threshold
pub const NO_MATCHES: i32 = 3;

/// Exit code: general operational failure
pub const OPERATIONAL_FAILURE: i32 = 10;

/// Exit code: configuration error
pub const CONFIG_ERROR: i32 = 12;

/// Exit code for a ranking failure.
pub fn for_suggest_error(err: &crate::suggest::SuggestError) -> i32 {
    match err {
        crate::suggest::SuggestError::InvalidArgument(_) => USAGE,
        crate::suggest::SuggestError::NoMatches { .. } => NO_MATCHES,
    }
}
