use super::error::AnalysisError;
use crate::core::graph::network::ResidueNetwork;
use crate::core::io::table::PathRecord;
use petgraph::graph::NodeIndex;
use std::cmp::Ordering;
use std::collections::VecDeque;
use tracing::warn;

/// An ordered walk over residue identifiers, with its derived weight
/// statistics. Immutable once computed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResiduePath {
    nodes: Vec<String>,
    sum_weight: f64,
    avg_weight: f64,
}

impl ResiduePath {
    /// Builds a path from identifier labels and the traversed edge weights.
    /// `edge_weights` must hold one entry per consecutive node pair.
    pub fn from_labels(nodes: Vec<String>, edge_weights: &[f64]) -> Self {
        let sum_weight: f64 = edge_weights.iter().sum();
        let avg_weight = if edge_weights.is_empty() {
            0.0
        } else {
            sum_weight / edge_weights.len() as f64
        };
        Self {
            nodes,
            sum_weight,
            avg_weight,
        }
    }

    /// Builds a path from node indices, reading edge weights off the network.
    pub(crate) fn trace(network: &ResidueNetwork, indices: &[NodeIndex]) -> Self {
        let nodes: Vec<String> = indices
            .iter()
            .map(|&ix| network.label(ix).to_string())
            .collect();
        let edge_weights: Vec<f64> = indices
            .windows(2)
            .map(|pair| network.weight(pair[0], pair[1]).unwrap_or(0.0))
            .collect();
        Self::from_labels(nodes, &edge_weights)
    }

    /// The residue identifiers along the path, endpoints included.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// The number of nodes on the path (the path "length").
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn source(&self) -> &str {
        &self.nodes[0]
    }

    pub fn target(&self) -> &str {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Sum of the traversed edge weights.
    pub fn sum_weight(&self) -> f64 {
        self.sum_weight
    }

    /// Average traversed edge weight, `sum_weight / (node_count - 1)`.
    pub fn avg_weight(&self) -> f64 {
        self.avg_weight
    }

    /// The fixed-shape table row of this path.
    pub fn record(&self) -> PathRecord {
        PathRecord {
            path: self.nodes.join(","),
            source: self.source().to_string(),
            target: self.target().to_string(),
            length: self.node_count(),
            sum_weight: self.sum_weight,
            avg_weight: self.avg_weight,
        }
    }
}

/// Converts a sorted path collection into table rows, preserving its order.
pub fn path_records(paths: &[ResiduePath]) -> Vec<PathRecord> {
    paths.iter().map(ResiduePath::record).collect()
}

/// The outcome of a batch path search: the paths found, plus the
/// source/target pairs that were skipped because no path connects them.
#[derive(Debug, Clone, Default)]
pub struct PathSearch {
    pub paths: Vec<ResiduePath>,
    pub skipped: Vec<(String, String)>,
}

/// Sort keys for path collections. Ties keep discovery order (stable sort).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathSort {
    /// Fewest nodes first.
    #[default]
    Length,
    /// Highest summed weight first.
    CumulativeWeight,
    /// Highest average weight first.
    AvgWeight,
    /// Lexicographic order of the node sequence.
    Nodes,
}

/// Resource bounds for simple-path enumeration.
///
/// `max_steps` caps the number of node expansions across one pair's
/// depth-first search; it is the pluggable guard against runaway enumeration
/// on dense graphs. `None` leaves the enumeration bounded only by the length
/// cutoff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_steps: Option<u64>,
}

/// Breadth-first shortest path between two nodes, fewest hops.
///
/// Neighbors are expanded in ascending canonical order, so among equally
/// short paths the one through the lowest-ordered residues is returned;
/// the tie-break is deterministic across runs and platforms.
pub(crate) fn bfs_shortest(
    network: &ResidueNetwork,
    source: NodeIndex,
    target: NodeIndex,
) -> Option<Vec<NodeIndex>> {
    if source == target {
        return Some(vec![source]);
    }
    let n = network.node_count();
    let mut predecessor: Vec<Option<NodeIndex>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();
    visited[source.index()] = true;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for neighbor in network.neighbors_ordered(current) {
            if visited[neighbor.index()] {
                continue;
            }
            visited[neighbor.index()] = true;
            predecessor[neighbor.index()] = Some(current);
            if neighbor == target {
                let mut path = vec![target];
                let mut walk = current;
                loop {
                    path.push(walk);
                    match predecessor[walk.index()] {
                        Some(prev) => walk = prev,
                        None => break,
                    }
                }
                path.reverse();
                return Some(path);
            }
            queue.push_back(neighbor);
        }
    }
    None
}

fn resolve(network: &ResidueNetwork, label: &str) -> Result<NodeIndex, AnalysisError> {
    network
        .index_of(label)
        .ok_or_else(|| AnalysisError::InvalidResidue(label.to_string()))
}

/// Computes the shortest path for every (source, target) pair.
///
/// Pairs with equal endpoints are ignored. A pair in different connected
/// components is skipped with a warning and recorded in
/// [`PathSearch::skipped`]; it never aborts the batch.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidResidue`] when a source or target label is
/// absent from the network, and [`AnalysisError::EmptySelection`] when no
/// valid pair remains.
pub fn shortest_paths(
    network: &ResidueNetwork,
    sources: &[String],
    targets: &[String],
) -> Result<PathSearch, AnalysisError> {
    let pairs = endpoint_pairs(network, sources, targets)?;
    let mut search = PathSearch::default();
    for (source, target) in pairs {
        match bfs_shortest(network, source, target) {
            Some(indices) => search.paths.push(ResiduePath::trace(network, &indices)),
            None => {
                warn!(
                    source = network.label(source),
                    target = network.label(target),
                    "no path exists between selected residues, skipping pair"
                );
                search.skipped.push((
                    network.label(source).to_string(),
                    network.label(target).to_string(),
                ));
            }
        }
    }
    Ok(search)
}

/// Enumerates all simple paths of at most `max_length` nodes per pair.
///
/// For each pair the shortest path is checked first: when none exists, or the
/// shortest already exceeds the cutoff, the pair is skipped with a warning
/// (no enumeration is attempted). Enumeration is depth-first with neighbors
/// expanded in ascending canonical order, so discovery order is
/// deterministic.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidResidue`] for unknown labels,
/// [`AnalysisError::EmptySelection`] when no valid pair remains, and
/// [`AnalysisError::SearchBudgetExhausted`] when `limits.max_steps` is hit —
/// a partial enumeration would silently bias any aggregate built from it, so
/// the search aborts instead of truncating.
pub fn simple_paths(
    network: &ResidueNetwork,
    sources: &[String],
    targets: &[String],
    max_length: usize,
    limits: &SearchLimits,
) -> Result<PathSearch, AnalysisError> {
    let pairs = endpoint_pairs(network, sources, targets)?;
    let mut search = PathSearch::default();
    for (source, target) in pairs {
        match bfs_shortest(network, source, target) {
            None => {
                warn!(
                    source = network.label(source),
                    target = network.label(target),
                    "no path exists between selected residues, skipping pair"
                );
                search
                    .skipped
                    .push(labels_of(network, source, target));
            }
            Some(shortest) if shortest.len() > max_length => {
                warn!(
                    source = network.label(source),
                    target = network.label(target),
                    shortest = shortest.len(),
                    cutoff = max_length,
                    "no path within the length cutoff, skipping pair"
                );
                search
                    .skipped
                    .push(labels_of(network, source, target));
            }
            Some(_) => {
                enumerate_simple(network, source, target, max_length, limits, &mut search.paths)?;
            }
        }
    }
    Ok(search)
}

fn labels_of(network: &ResidueNetwork, a: NodeIndex, b: NodeIndex) -> (String, String) {
    (network.label(a).to_string(), network.label(b).to_string())
}

/// Depth-first enumeration of simple paths from `source` to `target`.
fn enumerate_simple(
    network: &ResidueNetwork,
    source: NodeIndex,
    target: NodeIndex,
    max_length: usize,
    limits: &SearchLimits,
    out: &mut Vec<ResiduePath>,
) -> Result<(), AnalysisError> {
    let mut on_path = vec![false; network.node_count()];
    let mut path = vec![source];
    on_path[source.index()] = true;
    let mut steps: u64 = 0;

    // Stack of per-depth neighbor lists with a cursor into each.
    let mut stack: Vec<(Vec<NodeIndex>, usize)> = vec![(network.neighbors_ordered(source), 0)];

    while let Some((neighbors, cursor)) = stack.last_mut() {
        if *cursor >= neighbors.len() {
            stack.pop();
            if let Some(done) = path.pop() {
                on_path[done.index()] = false;
            }
            continue;
        }
        let next = neighbors[*cursor];
        *cursor += 1;

        if on_path[next.index()] {
            continue;
        }
        if let Some(max_steps) = limits.max_steps {
            steps += 1;
            if steps > max_steps {
                return Err(AnalysisError::SearchBudgetExhausted { max_steps });
            }
        }
        if next == target {
            path.push(next);
            out.push(ResiduePath::trace(network, &path));
            path.pop();
            continue;
        }
        if path.len() + 1 >= max_length {
            // One more hop could only reach the target, handled above.
            continue;
        }
        path.push(next);
        on_path[next.index()] = true;
        stack.push((network.neighbors_ordered(next), 0));
    }
    Ok(())
}

/// Resolves the (source, target) pair product, dropping equal endpoints.
fn endpoint_pairs(
    network: &ResidueNetwork,
    sources: &[String],
    targets: &[String],
) -> Result<Vec<(NodeIndex, NodeIndex)>, AnalysisError> {
    let sources = sources
        .iter()
        .map(|label| resolve(network, label))
        .collect::<Result<Vec<_>, _>>()?;
    let targets = targets
        .iter()
        .map(|label| resolve(network, label))
        .collect::<Result<Vec<_>, _>>()?;

    let mut pairs = Vec::new();
    for &source in &sources {
        for &target in &targets {
            if source != target {
                pairs.push((source, target));
            }
        }
    }
    if pairs.is_empty() {
        return Err(AnalysisError::EmptySelection);
    }
    Ok(pairs)
}

/// Sorts a path collection by the requested key; ties keep discovery order.
pub fn sort_paths(mut paths: Vec<ResiduePath>, sort_by: PathSort) -> Vec<ResiduePath> {
    match sort_by {
        PathSort::Length => paths.sort_by_key(ResiduePath::node_count),
        PathSort::CumulativeWeight => paths.sort_by(|a, b| {
            b.sum_weight
                .partial_cmp(&a.sum_weight)
                .unwrap_or(Ordering::Equal)
        }),
        PathSort::AvgWeight => paths.sort_by(|a, b| {
            b.avg_weight
                .partial_cmp(&a.avg_weight)
                .unwrap_or(Ordering::Equal)
        }),
        PathSort::Nodes => paths.sort_by(|a, b| a.nodes.cmp(&b.nodes)),
    }
    paths
}
