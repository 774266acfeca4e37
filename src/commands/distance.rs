//! Distance command: edit distance between two strings.

use anyhow::Result;

use crate::exit_codes;
use crate::output::{DistanceResponse, Output};
use crate::suggest::levenshtein;

pub fn distance(output: &Output, a: &str, b: &str) -> Result<i32> {
    let distance = levenshtein(a, b);

    if output.is_json() {
        output.json(&DistanceResponse {
            ok: true,
            a: a.to_string(),
            b: b.to_string(),
            distance,
        })?;
    } else {
        output.data(&distance.to_string());
    }

    Ok(exit_codes::SUCCESS)
}
