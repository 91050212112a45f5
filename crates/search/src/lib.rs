//! algo-practice-search - Lookup and traversal routines
//!
//! - [`binary_search`] over slices sorted in non-decreasing order, returning
//!   `None` when the target is absent.
//! - [`Graph`], an undirected adjacency list with breadth-first traversal.
//!
//! # Example
//!
//! ```
//! use algo_practice_search::{binary_search, Graph};
//!
//! assert_eq!(binary_search(&[2, 3, 4, 10, 40], &25), None);
//!
//! let graph = Graph::from_edges(&[(0, 1), (0, 2), (1, 3)], 4).unwrap();
//! assert_eq!(graph.bfs_from(0), vec![0, 1, 2, 3]);
//! ```

pub mod binary;
pub mod graph;

pub use binary::{binary_search, binary_search_by};
pub use graph::{Graph, GraphError};
