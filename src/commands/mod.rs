//! Command implementations for fuzzrank CLI.
//!
//! Each submodule contains one subcommand. Commands return the process exit
//! code on success; failures propagate as errors and are mapped to exit
//! codes in `main`.

mod check;
mod distance;
mod rank;

pub use check::check;
pub use distance::distance;
pub use rank::rank;
