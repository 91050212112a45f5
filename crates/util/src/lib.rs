//! algo-practice-util - Input generators and result checks
//!
//! Shared by the sort and search crates' tests and by the CLI's `generate`
//! subcommand.

pub mod check;
pub mod fuzzer;

// Re-exports for convenience
pub use check::{is_permutation_of, is_sorted, is_sorted_by, is_stable, tag_positions};
pub use fuzzer::{reversed_sequence, sorted_sequence, Fuzzer, Shape};
