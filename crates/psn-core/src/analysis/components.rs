use crate::core::graph::network::ResidueNetwork;
use petgraph::graph::NodeIndex;
use std::collections::VecDeque;

/// One connected component; members are sorted by (chain, sequence number)
/// for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponent {
    pub members: Vec<String>,
}

impl ConnectedComponent {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Finds the connected components of the network.
///
/// Components are discovered by breadth-first search seeded in ascending
/// canonical order, so their numbering is deterministic.
pub fn connected_components(network: &ResidueNetwork) -> Vec<ConnectedComponent> {
    let n = network.node_count();
    let mut visited = vec![false; n];
    let mut components = Vec::new();

    for seed in 0..n {
        if visited[seed] {
            continue;
        }
        let mut member_indices = Vec::new();
        let mut queue = VecDeque::new();
        visited[seed] = true;
        queue.push_back(NodeIndex::new(seed));
        while let Some(current) = queue.pop_front() {
            member_indices.push(current);
            for neighbor in network.neighbors_ordered(current) {
                if !visited[neighbor.index()] {
                    visited[neighbor.index()] = true;
                    queue.push_back(neighbor);
                }
            }
        }
        member_indices.sort_by_key(|&node| {
            let residue = network.residue(node);
            (residue.chain.clone(), residue.seqnum)
        });
        components.push(ConnectedComponent {
            members: member_indices
                .iter()
                .map(|&node| network.label(node).to_string())
                .collect(),
        });
    }
    components
}

/// The 1-based component id of every residue, aligned to canonical order,
/// for structure annotation.
pub fn component_array(network: &ResidueNetwork, components: &[ConnectedComponent]) -> Vec<f64> {
    let mut values = vec![0.0; network.node_count()];
    for (number, component) in components.iter().enumerate() {
        for label in &component.members {
            if let Some(node) = network.index_of(label) {
                values[node.index()] = (number + 1) as f64;
            }
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::builder::build_network;
    use crate::core::graph::network::ResidueInfo;
    use nalgebra::DMatrix;

    fn split_network() -> ResidueNetwork {
        // A1-A2 and B1-B2, disconnected.
        let matrix = DMatrix::from_row_slice(
            4,
            4,
            &[
                0.0, 1.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 1.0, //
                0.0, 0.0, 1.0, 0.0,
            ],
        );
        let residues = vec![
            ResidueInfo::new("A", 1, ""),
            ResidueInfo::new("A", 2, ""),
            ResidueInfo::new("B", 1, ""),
            ResidueInfo::new("B", 2, ""),
        ];
        build_network(&matrix, Some(residues)).unwrap()
    }

    #[test]
    fn finds_components_in_canonical_seed_order() {
        let components = connected_components(&split_network());
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].members, vec!["A1", "A2"]);
        assert_eq!(components[1].members, vec!["B1", "B2"]);
    }

    #[test]
    fn isolated_nodes_form_singleton_components() {
        let matrix = DMatrix::zeros(2, 2);
        let network = build_network(&matrix, None).unwrap();
        let components = connected_components(&network);
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].len(), 1);
    }

    #[test]
    fn component_array_is_one_based_and_aligned() {
        let network = split_network();
        let components = connected_components(&network);
        let values = component_array(&network, &components);
        assert_eq!(values, vec![1.0, 1.0, 2.0, 2.0]);
    }
}
