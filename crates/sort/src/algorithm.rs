use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{merge_sort, quick_sort, quick_sort_iterative};

/// Selects one of the sorting entry points by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[default]
    Merge,
    Quick,
    QuickIterative,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown algorithm `{0}` (expected merge, quick or quick-iterative)")]
pub struct UnknownAlgorithm(pub String);

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Merge, Algorithm::Quick, Algorithm::QuickIterative];

    /// Sort `arr` in non-decreasing order with this algorithm.
    ///
    /// # Examples
    ///
    /// ```
    /// use algo_practice_sort::Algorithm;
    ///
    /// for algorithm in Algorithm::ALL {
    ///     let mut arr = vec![3, 1, 2];
    ///     algorithm.sort(&mut arr);
    ///     assert_eq!(arr, vec![1, 2, 3]);
    /// }
    /// ```
    pub fn sort<T: Ord + Clone>(&self, arr: &mut [T]) {
        match self {
            Algorithm::Merge => merge_sort(arr),
            Algorithm::Quick => quick_sort(arr),
            Algorithm::QuickIterative => quick_sort_iterative(arr),
        }
    }

    /// Whether equal elements keep their input order.
    pub fn is_stable(&self) -> bool {
        matches!(self, Algorithm::Merge)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::QuickIterative => "quick-iterative",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
