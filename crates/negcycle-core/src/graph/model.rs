//! Dense weighted graph model
//!
//! Nodes are identified by their insertion index. Weights live in a
//! row-major `n x n` matrix where `matrix[from][to]` is the weight of the
//! edge `from -> to`. A derived outgoing-edge list is rebuilt whenever the
//! matrix is assigned.

use serde::Serialize;

use crate::error::{NegCycleError, Result};
use crate::graph::types::EdgeWeight;

/// A named node; its index is its position in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub index: usize,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    matrix: Vec<Vec<EdgeWeight>>,
    edges: Vec<Vec<(usize, f64)>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from node names and a row-major matrix (`None` = no edge)
    pub fn from_weights<S: AsRef<str>>(names: &[S], rows: &[Vec<Option<f64>>]) -> Result<Self> {
        let mut graph = Graph::new();
        for name in names {
            graph.add_node(name.as_ref());
        }
        graph.set_matrix(
            rows.iter()
                .map(|row| row.iter().copied().map(EdgeWeight::from).collect())
                .collect(),
        );
        graph.validate()?;
        Ok(graph)
    }

    /// Empty nodes, matrix, and the outgoing-edge list
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.matrix.clear();
        self.edges.clear();
    }

    /// Append a node and return its index
    pub fn add_node(&mut self, name: impl Into<String>) -> usize {
        let index = self.nodes.len();
        self.nodes.push(Node {
            index,
            name: name.into(),
        });
        index
    }

    /// Replace the whole weight matrix.
    ///
    /// The matrix is stored as given. Callers keep it square and sized to
    /// the node list; every strategy checks this through [`Graph::validate`]
    /// before relaxing anything.
    pub fn set_matrix(&mut self, matrix: Vec<Vec<EdgeWeight>>) {
        self.matrix = matrix;
        self.rebuild_edges();
    }

    /// Assign a single cell, growing the matrix to the node count if needed
    pub fn set_edge(&mut self, from: usize, to: usize, weight: impl Into<EdgeWeight>) -> Result<()> {
        let n = self.nodes.len();
        for index in [from, to] {
            if index >= n {
                return Err(NegCycleError::node_out_of_range(index, n));
            }
        }

        self.matrix.resize_with(n, Vec::new);
        for (i, row) in self.matrix.iter_mut().enumerate() {
            if row.len() < n {
                let start = row.len();
                row.extend((start..n).map(|j| {
                    if i == j {
                        EdgeWeight::Finite(0.0)
                    } else {
                        EdgeWeight::Absent
                    }
                }));
            }
        }

        self.matrix[from][to] = weight.into();
        self.rebuild_edges();
        Ok(())
    }

    /// Weight of `from -> to`, `Absent` when there is no edge or either index
    /// is out of range
    pub fn edge_weight(&self, from: usize, to: usize) -> EdgeWeight {
        self.matrix
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(EdgeWeight::Absent)
    }

    /// Existing outgoing edges of `from` as `(to, weight)`
    pub fn outgoing(&self, from: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.edges.get(from).into_iter().flatten().copied()
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Display name of a node, empty for unknown indexes
    pub fn name(&self, index: usize) -> &str {
        self.nodes.get(index).map_or("", |n| n.name.as_str())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Check that the matrix is square, matches the node count, and holds
    /// only real weights
    pub fn validate(&self) -> Result<()> {
        let n = self.nodes.len();
        if self.matrix.len() != n {
            crate::bail_malformed!("matrix has {} rows for {} nodes", self.matrix.len(), n);
        }
        for (from, row) in self.matrix.iter().enumerate() {
            if row.len() != n {
                crate::bail_malformed!("row {} has {} columns, expected {}", from, row.len(), n);
            }
            for (to, weight) in row.iter().enumerate() {
                if let EdgeWeight::Finite(w) = weight {
                    if !w.is_finite() {
                        crate::bail_malformed!("edge {} -> {} has non-finite weight {}", from, to, w);
                    }
                }
            }
        }
        Ok(())
    }

    /// Validate the graph and the source index before a run
    pub fn check_source(&self, source: usize) -> Result<()> {
        if self.is_empty() {
            return Err(NegCycleError::EmptyGraph);
        }
        self.validate()?;
        if source >= self.nodes.len() {
            return Err(NegCycleError::node_out_of_range(source, self.nodes.len()));
        }
        Ok(())
    }

    fn rebuild_edges(&mut self) {
        self.edges = self
            .matrix
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter_map(|(to, weight)| weight.finite().map(|w| (to, w)))
                    .collect()
            })
            .collect();
    }
}
