use crate::core::graph::network::ResidueNetwork;
use std::collections::VecDeque;

/// The closed set of centrality measures. Dispatch is an explicit match, so
/// adding a measure extends this enum and every match over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CentralityKind {
    Degree,
    Betweenness,
}

impl CentralityKind {
    pub const ALL: [CentralityKind; 2] = [CentralityKind::Degree, CentralityKind::Betweenness];

    pub fn name(&self) -> &'static str {
        match self {
            CentralityKind::Degree => "degree",
            CentralityKind::Betweenness => "betweenness",
        }
    }
}

/// Computes a centrality measure for every residue, aligned to canonical
/// order.
pub fn centrality(network: &ResidueNetwork, kind: CentralityKind) -> Vec<f64> {
    match kind {
        CentralityKind::Degree => degree_centrality(network),
        CentralityKind::Betweenness => betweenness_centrality(network),
    }
}

/// Degree centrality: degree divided by `n - 1`.
pub fn degree_centrality(network: &ResidueNetwork) -> Vec<f64> {
    let n = network.node_count();
    if n <= 1 {
        return vec![1.0; n];
    }
    network
        .inner()
        .node_indices()
        .map(|node| network.degree(node) as f64 / (n - 1) as f64)
        .collect()
}

/// Betweenness centrality by Brandes' algorithm over unweighted shortest
/// paths, endpoints excluded, normalized by `(n - 1)(n - 2)` so values lie
/// in `[0, 1]` for undirected graphs.
pub fn betweenness_centrality(network: &ResidueNetwork) -> Vec<f64> {
    let n = network.node_count();
    let mut betweenness = vec![0.0; n];

    for source in 0..n {
        // Single-source shortest-path counting.
        let mut stack: Vec<usize> = Vec::new();
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0; n];
        let mut distance = vec![-1i64; n];
        sigma[source] = 1.0;
        distance[source] = 0;
        let mut queue = VecDeque::new();
        queue.push_back(source);
        while let Some(current) = queue.pop_front() {
            stack.push(current);
            for neighbor in network.neighbors_ordered(petgraph::graph::NodeIndex::new(current)) {
                let neighbor = neighbor.index();
                if distance[neighbor] < 0 {
                    distance[neighbor] = distance[current] + 1;
                    queue.push_back(neighbor);
                }
                if distance[neighbor] == distance[current] + 1 {
                    sigma[neighbor] += sigma[current];
                    predecessors[neighbor].push(current);
                }
            }
        }
        // Dependency accumulation.
        let mut delta = vec![0.0; n];
        while let Some(node) = stack.pop() {
            for &predecessor in &predecessors[node] {
                delta[predecessor] += sigma[predecessor] / sigma[node] * (1.0 + delta[node]);
            }
            if node != source {
                betweenness[node] += delta[node];
            }
        }
    }

    if n > 2 {
        let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
        for value in &mut betweenness {
            *value *= scale;
        }
    }
    betweenness
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::builder::build_network;
    use nalgebra::DMatrix;

    /// A 1-2-3 chain.
    fn chain_network() -> ResidueNetwork {
        let matrix = DMatrix::from_row_slice(
            3,
            3,
            &[0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0],
        );
        build_network(&matrix, None).unwrap()
    }

    /// A star with center 1 and leaves 2, 3, 4.
    fn star_network() -> ResidueNetwork {
        let matrix = DMatrix::from_row_slice(
            4,
            4,
            &[
                0.0, 1.0, 1.0, 1.0, //
                1.0, 0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, 0.0,
            ],
        );
        build_network(&matrix, None).unwrap()
    }

    #[test]
    fn degree_centrality_divides_by_n_minus_one() {
        let values = degree_centrality(&chain_network());
        assert_eq!(values, vec![0.5, 1.0, 0.5]);
    }

    #[test]
    fn betweenness_of_chain_middle_is_one() {
        let values = betweenness_centrality(&chain_network());
        assert_eq!(values, vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn betweenness_of_star_center_is_one() {
        let values = betweenness_centrality(&star_network());
        assert!((values[0] - 1.0).abs() < 1e-12);
        assert_eq!(&values[1..], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let network = chain_network();
        assert_eq!(
            centrality(&network, CentralityKind::Degree),
            degree_centrality(&network)
        );
        assert_eq!(
            centrality(&network, CentralityKind::Betweenness),
            betweenness_centrality(&network)
        );
    }
}
