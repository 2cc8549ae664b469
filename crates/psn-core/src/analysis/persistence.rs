use super::error::AnalysisError;
use super::paths::ResiduePath;
use crate::core::graph::network::ResidueNetwork;
use nalgebra::DMatrix;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// One node of a persistence graph: the residue identifier and its
/// occurrence frequency across the path collection (`n_weight`).
#[derive(Debug, Clone, PartialEq)]
pub struct PersistenceNode {
    pub label: String,
    pub weight: f64,
}

/// A derived graph recording how often each node and edge occurs across a
/// path collection.
///
/// Node weights (`n_weight`) and edge weights (`e_weight`) are occurrence
/// counts divided by the total number of paths, so they lie in `[0, 1]`.
/// Nodes and edges never visited by any path are absent, not present with
/// weight zero. The result depends only on the multiset of paths, not their
/// order; node insertion order is first-encounter order until
/// [`PersistenceGraph::reorder`] imposes the canonical one.
#[derive(Debug, Clone, Default)]
pub struct PersistenceGraph {
    graph: UnGraph<PersistenceNode, f64>,
    index: HashMap<String, NodeIndex>,
    total_paths: usize,
}

impl PersistenceGraph {
    /// Aggregates a path collection into a persistence graph.
    ///
    /// Every node visited by a path increments that node's counter once, and
    /// every consecutive pair increments the undirected edge's counter once;
    /// counters are then normalized by the number of paths.
    pub fn from_paths(paths: &[ResiduePath]) -> Self {
        let total_paths = paths.len();
        let mut graph: UnGraph<PersistenceNode, f64> = UnGraph::new_undirected();
        let mut index: HashMap<String, NodeIndex> = HashMap::new();
        let mut node_counts: Vec<usize> = Vec::new();
        let mut edge_order: Vec<(NodeIndex, NodeIndex)> = Vec::new();
        let mut edge_counts: HashMap<(NodeIndex, NodeIndex), usize> = HashMap::new();

        for path in paths {
            let mut previous: Option<NodeIndex> = None;
            for label in path.nodes() {
                let node = match index.get(label) {
                    Some(&node) => node,
                    None => {
                        let node = graph.add_node(PersistenceNode {
                            label: label.clone(),
                            weight: 0.0,
                        });
                        index.insert(label.clone(), node);
                        node_counts.push(0);
                        node
                    }
                };
                node_counts[node.index()] += 1;
                if let Some(previous) = previous {
                    let key = if previous.index() < node.index() {
                        (previous, node)
                    } else {
                        (node, previous)
                    };
                    let count = edge_counts.entry(key).or_insert_with(|| {
                        edge_order.push(key);
                        0
                    });
                    *count += 1;
                }
                previous = Some(node);
            }
        }

        for (position, count) in node_counts.iter().enumerate() {
            graph[NodeIndex::new(position)].weight = *count as f64 / total_paths as f64;
        }
        for key in edge_order {
            let weight = edge_counts[&key] as f64 / total_paths as f64;
            graph.add_edge(key.0, key.1, weight);
        }

        Self {
            graph,
            index,
            total_paths,
        }
    }

    /// The number of paths this graph was aggregated from.
    pub fn total_paths(&self) -> usize {
        self.total_paths
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The occurrence frequency of a residue, if any path visited it.
    pub fn n_weight(&self, label: &str) -> Option<f64> {
        self.index.get(label).map(|&node| self.graph[node].weight)
    }

    /// The occurrence frequency of an edge, if any path traversed it.
    pub fn e_weight(&self, a: &str, b: &str) -> Option<f64> {
        let (&na, &nb) = (self.index.get(a)?, self.index.get(b)?);
        self.graph
            .find_edge(na, nb)
            .and_then(|e| self.graph.edge_weight(e))
            .copied()
    }

    /// Iterates over the nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &PersistenceNode> {
        self.graph.node_indices().map(|node| &self.graph[node])
    }

    /// Iterates over the edges as `(a_label, b_label, e_weight)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()].label.as_str(),
                self.graph[e.target()].label.as_str(),
                *e.weight(),
            )
        })
    }

    /// Drops nodes and edges below the given occurrence thresholds.
    ///
    /// Comparison is strict less-than: entries exactly at a threshold are
    /// kept. Dropping a node drops its incident edges. Relative node order
    /// is preserved.
    pub fn filter(&self, node_threshold: f64, edge_threshold: f64) -> Self {
        let mut graph = UnGraph::new_undirected();
        let mut index = HashMap::new();
        let mut kept: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        for node in self.graph.node_indices() {
            let weight = &self.graph[node];
            if weight.weight >= node_threshold {
                let new_node = graph.add_node(weight.clone());
                index.insert(weight.label.clone(), new_node);
                kept.insert(node, new_node);
            }
        }
        for edge in self.graph.edge_references() {
            if *edge.weight() >= edge_threshold
                && let (Some(&a), Some(&b)) = (kept.get(&edge.source()), kept.get(&edge.target()))
            {
                graph.add_edge(a, b, *edge.weight());
            }
        }
        Self {
            graph,
            index,
            total_paths: self.total_paths,
        }
    }

    /// Rescales node and edge weights so the respective maxima become
    /// exactly 1.0. Idempotent once applied; a no-op on an empty graph.
    pub fn normalize(&self) -> Self {
        let mut normalized = self.clone();
        let max_node = self
            .graph
            .node_indices()
            .map(|node| self.graph[node].weight)
            .fold(f64::NEG_INFINITY, f64::max);
        if max_node > 0.0 {
            for node in normalized.graph.node_weights_mut() {
                node.weight /= max_node;
            }
        }
        let max_edge = self
            .graph
            .edge_references()
            .map(|e| *e.weight())
            .fold(f64::NEG_INFINITY, f64::max);
        if max_edge > 0.0 {
            for weight in normalized.graph.edge_weights_mut() {
                *weight /= max_edge;
            }
        }
        normalized
    }

    /// Rebuilds the graph with nodes in canonical identifier order.
    ///
    /// Only nodes present in this graph are kept (sparsity is preserved);
    /// exported matrices then compare directly across runs over the same
    /// residue universe.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidResidue`] if this graph holds a node
    /// absent from `identifiers`.
    pub fn reorder(&self, identifiers: &[String]) -> Result<Self, AnalysisError> {
        for node in self.nodes() {
            if !identifiers.contains(&node.label) {
                return Err(AnalysisError::InvalidResidue(node.label.clone()));
            }
        }
        let mut graph = UnGraph::new_undirected();
        let mut index = HashMap::new();
        for label in identifiers {
            if let Some(&old) = self.index.get(label) {
                let node = graph.add_node(self.graph[old].clone());
                index.insert(label.clone(), node);
            }
        }
        for edge in self.graph.edge_references() {
            let a = index[&self.graph[edge.source()].label];
            let b = index[&self.graph[edge.target()].label];
            graph.add_edge(a, b, *edge.weight());
        }
        Ok(Self {
            graph,
            index,
            total_paths: self.total_paths,
        })
    }

    /// Exports the edge weights as a dense symmetric matrix over the full
    /// canonical residue universe; absent nodes and edges are zero.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidResidue`] if this graph holds a node
    /// absent from `identifiers`.
    pub fn to_matrix(&self, identifiers: &[String]) -> Result<DMatrix<f64>, AnalysisError> {
        let positions: HashMap<&str, usize> = identifiers
            .iter()
            .enumerate()
            .map(|(position, label)| (label.as_str(), position))
            .collect();
        let mut matrix = DMatrix::zeros(identifiers.len(), identifiers.len());
        for (a, b, weight) in self.edges() {
            let &pa = positions
                .get(a)
                .ok_or_else(|| AnalysisError::InvalidResidue(a.to_string()))?;
            let &pb = positions
                .get(b)
                .ok_or_else(|| AnalysisError::InvalidResidue(b.to_string()))?;
            matrix[(pa, pb)] = weight;
            matrix[(pb, pa)] = weight;
        }
        Ok(matrix)
    }

    /// Exports the node weights as a scalar array aligned to the canonical
    /// residue universe; absent nodes are zero.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidResidue`] if this graph holds a node
    /// absent from `identifiers`.
    pub fn node_weight_array(&self, identifiers: &[String]) -> Result<Vec<f64>, AnalysisError> {
        let positions: HashMap<&str, usize> = identifiers
            .iter()
            .enumerate()
            .map(|(position, label)| (label.as_str(), position))
            .collect();
        let mut values = vec![0.0; identifiers.len()];
        for node in self.nodes() {
            let &position = positions
                .get(node.label.as_str())
                .ok_or_else(|| AnalysisError::InvalidResidue(node.label.clone()))?;
            values[position] = node.weight;
        }
        Ok(values)
    }
}

/// The union of a path collection's edges carrying the original interaction
/// weights, as a dense symmetric matrix over the canonical universe.
///
/// This is the subnetwork actually traversed by the paths, in contrast to
/// the occurrence frequencies of [`PersistenceGraph`].
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidResidue`] if a path visits a residue
/// absent from the network.
pub fn subnetwork_from_paths(
    network: &ResidueNetwork,
    paths: &[ResiduePath],
) -> Result<DMatrix<f64>, AnalysisError> {
    let n = network.node_count();
    let mut matrix = DMatrix::zeros(n, n);
    for path in paths {
        for pair in path.nodes().windows(2) {
            let a = network
                .index_of(&pair[0])
                .ok_or_else(|| AnalysisError::InvalidResidue(pair[0].clone()))?;
            let b = network
                .index_of(&pair[1])
                .ok_or_else(|| AnalysisError::InvalidResidue(pair[1].clone()))?;
            let weight = network.weight(a, b).unwrap_or(0.0);
            matrix[(a.index(), b.index())] = weight;
            matrix[(b.index(), a.index())] = weight;
        }
    }
    Ok(matrix)
}
