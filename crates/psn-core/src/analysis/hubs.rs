use crate::core::graph::network::ResidueNetwork;
use tracing::warn;

/// A residue whose degree meets the hub cutoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hub {
    pub label: String,
    pub degree: usize,
}

/// Hub sort orders; ties keep canonical order (stable sort).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Finds all residues with degree `>= min_degree`.
///
/// An empty result warns and returns an empty list; having no hubs is not an
/// error. With `order = None` hubs come back in canonical order.
pub fn hubs(network: &ResidueNetwork, min_degree: usize, order: Option<SortOrder>) -> Vec<Hub> {
    let mut found: Vec<Hub> = network
        .inner()
        .node_indices()
        .filter_map(|node| {
            let degree = network.degree(node);
            (degree >= min_degree).then(|| Hub {
                label: network.label(node).to_string(),
                degree,
            })
        })
        .collect();
    if found.is_empty() {
        warn!(
            min_degree,
            "no hubs with the requested minimum connectivity were found"
        );
        return found;
    }
    match order {
        Some(SortOrder::Ascending) => found.sort_by_key(|hub| hub.degree),
        Some(SortOrder::Descending) => found.sort_by_key(|hub| std::cmp::Reverse(hub.degree)),
        None => {}
    }
    found
}

/// The hub degree of every residue (zero for non-hubs), aligned to canonical
/// order, for structure annotation.
pub fn degree_array(network: &ResidueNetwork, hubs: &[Hub]) -> Vec<f64> {
    let mut values = vec![0.0; network.node_count()];
    for hub in hubs {
        if let Some(node) = network.index_of(&hub.label) {
            values[node.index()] = hub.degree as f64;
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::builder::build_network;
    use nalgebra::DMatrix;

    /// A star: node 1 connected to 2, 3, 4; plus the 2-3 edge.
    fn star_network() -> ResidueNetwork {
        let matrix = DMatrix::from_row_slice(
            4,
            4,
            &[
                0.0, 1.0, 1.0, 1.0, //
                1.0, 0.0, 1.0, 0.0, //
                1.0, 1.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, 0.0,
            ],
        );
        build_network(&matrix, None).unwrap()
    }

    #[test]
    fn finds_nodes_at_or_above_cutoff() {
        let found = hubs(&star_network(), 2, None);
        let labels: Vec<&str> = found.iter().map(|h| h.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "3"]);
        assert_eq!(found[0].degree, 3);
    }

    #[test]
    fn descending_sort_puts_highest_degree_first() {
        let found = hubs(&star_network(), 2, Some(SortOrder::Descending));
        assert_eq!(found[0].label, "1");
        // The two degree-2 hubs keep canonical order.
        assert_eq!(found[1].label, "2");
        assert_eq!(found[2].label, "3");
    }

    #[test]
    fn no_hubs_is_empty_not_an_error() {
        let found = hubs(&star_network(), 10, Some(SortOrder::Descending));
        assert!(found.is_empty());
    }

    #[test]
    fn degree_array_zeroes_non_hubs() {
        let network = star_network();
        let found = hubs(&network, 3, None);
        let values = degree_array(&network, &found);
        assert_eq!(values, vec![3.0, 0.0, 0.0, 0.0]);
    }
}
