//! algo-practice-cli - JSON-in, JSON-out front end for the sort and search
//! crates.
//!
//! Provides the core logic used by the `algo-practice` binary:
//! - `sort`    : sort a JSON array of integers, optionally one index range
//! - `search`  : binary search a sorted JSON array
//! - `bfs`     : breadth-first order of a graph given as a JSON edge list
//! - `generate`: emit a seeded test sequence

pub mod config;
pub mod error;
pub mod logging;

use algo_practice_search::{binary_search, Graph};
use algo_practice_sort::Algorithm;
use algo_practice_util::fuzzer::{Fuzzer, Shape};

pub use config::SortConfig;
pub use error::CliError;

/// Sort a JSON array of integers and return it as compact JSON.
///
/// # Examples
///
/// ```
/// use algo_practice_cli::sort_json;
/// use algo_practice_sort::Algorithm;
///
/// assert_eq!(sort_json("[3, 1, 2]", Algorithm::Quick).unwrap(), "[1,2,3]");
/// ```
pub fn sort_json(input: &str, algorithm: Algorithm) -> Result<String, CliError> {
    let mut values: Vec<i64> = serde_json::from_str(input)?;
    tracing::info!(%algorithm, len = values.len(), "sorting");
    algorithm.sort(&mut values);
    Ok(serde_json::to_string(&values)?)
}

/// Quick sort only the inclusive index range `[low, high]` of a JSON array.
pub fn sort_range_json(input: &str, low: usize, high: usize) -> Result<String, CliError> {
    let mut values: Vec<i64> = serde_json::from_str(input)?;
    algo_practice_sort::quick_sort_range(&mut values, low, high)?;
    Ok(serde_json::to_string(&values)?)
}

/// Look up `target` in a sorted JSON array; returns the index or `null`.
pub fn search_json(input: &str, target: i64) -> Result<String, CliError> {
    let values: Vec<i64> = serde_json::from_str(input)?;
    if !algo_practice_util::is_sorted(&values) {
        tracing::warn!("search input is not sorted; result may be wrong");
    }
    Ok(serde_json::to_string(&binary_search(&values, &target))?)
}

/// Breadth-first order over all components of a graph on `nodes` vertices
/// given as a JSON array of `[src, dest]` pairs.
pub fn bfs_json(input: &str, nodes: usize) -> Result<String, CliError> {
    let edges: Vec<(usize, usize)> = serde_json::from_str(input)?;
    let graph = Graph::from_edges(&edges, nodes)?;
    Ok(serde_json::to_string(&graph.bfs_all())?)
}

/// Generate a sequence of `len` integers; a seed makes the output repeatable.
pub fn generate_json(shape: Shape, len: usize, seed: Option<u64>) -> Result<String, CliError> {
    let fuzzer = Fuzzer::new(seed.map(seed_bytes));
    let values = fuzzer.sequence(shape, len);
    Ok(serde_json::to_string(&values)?)
}

/// Expand a numeric seed into the 32-byte PRNG seed.
pub fn seed_bytes(seed: u64) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    for chunk in bytes.chunks_exact_mut(8) {
        chunk.copy_from_slice(&seed.to_le_bytes());
    }
    bytes
}
