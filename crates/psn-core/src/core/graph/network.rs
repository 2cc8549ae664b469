use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Structural metadata for one residue node.
///
/// The `chain` is the chain or segment identifier from the reference structure
/// (empty for positionally labeled residues, which all belong to one unnamed
/// segment), `seqnum` the residue sequence number, and `name` the residue name
/// (e.g. `"ALA"`), which may be empty when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResidueInfo {
    pub chain: String,
    pub seqnum: isize,
    pub name: String,
}

impl ResidueInfo {
    pub fn new(chain: impl Into<String>, seqnum: isize, name: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
            seqnum,
            name: name.into(),
        }
    }

    /// Positional fallback residue used when no reference structure is given.
    /// `position` is 1-based, so the labels run `"1".."N"`.
    pub fn positional(position: usize) -> Self {
        Self {
            chain: String::new(),
            seqnum: position as isize,
            name: String::new(),
        }
    }

    /// The unique identifier label of this residue, `"{chain}{seqnum}"`
    /// (e.g. `"A57"`, `"B1042"`, or `"12"` for positional residues).
    pub fn label(&self) -> String {
        format!("{}{}", self.chain, self.seqnum)
    }
}

/// An undirected, weighted network over residue identifiers.
///
/// This struct is the central data structure of the library. Nodes are labeled
/// with residue identifier strings derived once at construction time; node
/// insertion order is the canonical matrix row order and is never changed, so
/// a node's [`NodeIndex`] equals its canonical position. Edge weights are
/// interaction strengths; an absent edge means no interaction.
#[derive(Debug, Clone, Default)]
pub struct ResidueNetwork {
    /// The underlying graph; node weights are the identifier labels.
    graph: UnGraph<String, f64>,
    /// Lookup map from identifier label to node index.
    index: HashMap<String, NodeIndex>,
    /// Residue metadata in canonical order, aligned with node indices.
    residues: Vec<ResidueInfo>,
    /// Identifier labels in canonical order.
    labels: Vec<String>,
}

impl ResidueNetwork {
    pub(crate) fn from_parts(
        graph: UnGraph<String, f64>,
        index: HashMap<String, NodeIndex>,
        residues: Vec<ResidueInfo>,
        labels: Vec<String>,
    ) -> Self {
        Self {
            graph,
            index,
            residues,
            labels,
        }
    }

    /// Number of residues (nodes) in the network.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of interactions (edges) in the network.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Identifier labels in canonical (matrix row) order.
    pub fn identifiers(&self) -> &[String] {
        &self.labels
    }

    /// Residue metadata in canonical order.
    pub fn residues(&self) -> &[ResidueInfo] {
        &self.residues
    }

    /// Looks up the node index of an identifier label.
    ///
    /// # Arguments
    ///
    /// * `label` - The identifier to look up.
    ///
    /// # Return
    ///
    /// Returns `Some(NodeIndex)` if the residue exists, otherwise `None`.
    pub fn index_of(&self, label: &str) -> Option<NodeIndex> {
        self.index.get(label).copied()
    }

    /// Returns `true` if the network contains a residue with the given label.
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// The identifier label of a node.
    pub fn label(&self, node: NodeIndex) -> &str {
        &self.graph[node]
    }

    /// The residue metadata of a node.
    pub fn residue(&self, node: NodeIndex) -> &ResidueInfo {
        &self.residues[node.index()]
    }

    /// The interaction weight between two residues, if they interact.
    pub fn weight(&self, a: NodeIndex, b: NodeIndex) -> Option<f64> {
        self.graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e))
            .copied()
    }

    /// The number of interaction partners of a residue.
    pub fn degree(&self, node: NodeIndex) -> usize {
        self.graph.neighbors(node).count()
    }

    /// Neighbors of a node in ascending canonical order.
    ///
    /// All traversals in the analysis layer expand neighbors in this order,
    /// which pins breadth-first tie-breaking and makes every search
    /// deterministic across runs and platforms.
    pub fn neighbors_ordered(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut neighbors: Vec<NodeIndex> = self.graph.neighbors(node).collect();
        neighbors.sort_unstable();
        neighbors
    }

    /// Iterates over all edges as `(a, b, weight)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, f64)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source(), e.target(), *e.weight()))
    }

    /// Access the underlying petgraph graph (for advanced operations).
    pub fn inner(&self) -> &UnGraph<String, f64> {
        &self.graph
    }
}
