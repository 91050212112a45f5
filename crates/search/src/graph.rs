//! Undirected adjacency-list graph with breadth-first traversal.

use std::collections::VecDeque;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge ({src}, {dest}) references a vertex outside 0..{n}")]
    VertexOutOfRange { src: usize, dest: usize, n: usize },
}

/// Vertices `0..n` with neighbour lists kept in edge insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
}

impl Graph {
    /// Build an undirected graph on `n` vertices.
    ///
    /// Each edge `(src, dest)` appends `dest` to `src`'s neighbours and `src`
    /// to `dest`'s, so traversal order follows the edge list.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexOutOfRange`] if either endpoint is `>= n`.
    pub fn from_edges(edges: &[(usize, usize)], n: usize) -> Result<Self, GraphError> {
        let mut adj = vec![Vec::new(); n];
        for &(src, dest) in edges {
            if src >= n || dest >= n {
                return Err(GraphError::VertexOutOfRange { src, dest, n });
            }
            adj[src].push(dest);
            adj[dest].push(src);
        }
        Ok(Self { adj })
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Neighbours of `v` in edge insertion order.
    ///
    /// # Panics
    ///
    /// If `v >= self.len()`.
    pub fn neighbours(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Vertices reachable from `start`, in breadth-first order.
    ///
    /// # Panics
    ///
    /// If `start >= self.len()`.
    pub fn bfs_from(&self, start: usize) -> Vec<usize> {
        let mut discovered = vec![false; self.len()];
        let mut order = Vec::new();
        self.visit(start, &mut discovered, &mut order);
        order
    }

    /// Breadth-first order over every component.
    ///
    /// Vertices are tried as sources in ascending order; each one not yet
    /// discovered starts a new traversal, so isolated vertices show up in
    /// their numeric position.
    ///
    /// # Examples
    ///
    /// ```
    /// use algo_practice_search::Graph;
    ///
    /// let graph = Graph::from_edges(&[(0, 3), (3, 1)], 5).unwrap();
    /// assert_eq!(graph.bfs_all(), vec![0, 3, 1, 2, 4]);
    /// ```
    pub fn bfs_all(&self) -> Vec<usize> {
        tracing::debug!(vertices = self.len(), "breadth-first traversal");
        let mut discovered = vec![false; self.len()];
        let mut order = Vec::with_capacity(self.len());
        for v in 0..self.len() {
            if !discovered[v] {
                self.visit(v, &mut discovered, &mut order);
            }
        }
        order
    }

    fn visit(&self, start: usize, discovered: &mut [bool], order: &mut Vec<usize>) {
        discovered[start] = true;
        let mut queue = VecDeque::from([start]);
        while let Some(v) = queue.pop_front() {
            order.push(v);
            for &u in &self.adj[v] {
                if !discovered[u] {
                    discovered[u] = true;
                    queue.push_back(u);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRACTICE_EDGES: [(usize, usize); 11] = [
        (1, 2),
        (1, 3),
        (1, 4),
        (2, 5),
        (2, 6),
        (5, 9),
        (5, 10),
        (4, 7),
        (4, 8),
        (7, 11),
        (7, 12),
    ];

    #[test]
    fn test_bfs_all_practice_graph() {
        let graph = Graph::from_edges(&PRACTICE_EDGES, 15).unwrap();
        assert_eq!(graph.bfs_all(), (0..15).collect::<Vec<_>>());
    }

    #[test]
    fn test_bfs_from_visits_one_component() {
        let graph = Graph::from_edges(&PRACTICE_EDGES, 15).unwrap();
        assert_eq!(graph.bfs_from(4), vec![4, 1, 7, 8, 2, 3, 11, 12, 5, 6, 9, 10]);
    }

    #[test]
    fn test_neighbours_follow_edge_order() {
        let graph = Graph::from_edges(&PRACTICE_EDGES, 15).unwrap();
        assert_eq!(graph.neighbours(1), &[2, 3, 4]);
        assert_eq!(graph.neighbours(4), &[1, 7, 8]);
        assert!(graph.neighbours(0).is_empty());
    }

    #[test]
    #[should_panic]
    fn test_neighbours_out_of_range_panics() {
        let graph = Graph::from_edges(&[(0, 1)], 2).unwrap();
        graph.neighbours(2);
    }

    #[test]
    fn test_out_of_range_edge() {
        assert_eq!(
            Graph::from_edges(&[(0, 1), (1, 3)], 3),
            Err(GraphError::VertexOutOfRange { src: 1, dest: 3, n: 3 })
        );
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::from_edges(&[], 0).unwrap();
        assert!(graph.is_empty());
        assert!(graph.bfs_all().is_empty());
    }

    #[test]
    fn test_self_loop_and_parallel_edges() {
        let graph = Graph::from_edges(&[(0, 0), (0, 1), (0, 1)], 2).unwrap();
        assert_eq!(graph.bfs_all(), vec![0, 1]);
    }
}
