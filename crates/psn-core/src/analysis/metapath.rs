use super::paths::{PathSearch, ResiduePath, bfs_shortest};
use super::persistence::PersistenceGraph;
use super::progress::{Progress, ProgressReporter};
use crate::core::graph::network::{ResidueInfo, ResidueNetwork};
use nalgebra::DMatrix;
use petgraph::graph::NodeIndex;
use tracing::debug;

/// The final artifact of a whole-selection analysis: the thresholded (and
/// optionally normalized) persistence graph in canonical node order,
/// together with its dense exports and skip diagnostics.
#[derive(Debug, Clone)]
pub struct Metapath {
    /// The filtered persistence graph, nodes in canonical order.
    pub graph: PersistenceGraph,
    /// Dense symmetric `e_weight` matrix over the canonical universe.
    pub matrix: DMatrix<f64>,
    /// Per-residue `n_weight` array aligned to the canonical universe.
    pub node_weights: Vec<f64>,
    /// Residue-pair combinations examined.
    pub total_pairs: usize,
    /// Combinations dropped because no path connects them.
    pub skipped_pairs: usize,
    /// Paths that survived and entered the aggregation.
    pub path_count: usize,
}

/// Generates all unordered residue-pair combinations honoring the minimum
/// separation.
///
/// Residues on the same chain (equal chain strings; positional residues all
/// share the empty chain) must be at least `res_space` positions apart in
/// canonical order; cross-chain pairs are always included.
pub fn combinations(residues: &[ResidueInfo], res_space: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..residues.len() {
        for j in (i + 1)..residues.len() {
            let same_chain = residues[i].chain == residues[j].chain;
            if !same_chain || j - i >= res_space {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Computes the shortest path for every combination of the whole selection.
///
/// Pairs in different connected components are dropped silently from the
/// pool (debug-logged and counted in [`PathSearch::skipped`]); one progress
/// increment is reported per combination.
pub fn collect_shortest_paths(
    network: &ResidueNetwork,
    res_space: usize,
    reporter: &ProgressReporter,
) -> PathSearch {
    let pairs = combinations(network.residues(), res_space);
    reporter.report(Progress::TaskStart {
        total_steps: pairs.len() as u64,
    });
    let mut search = PathSearch::default();
    for (i, j) in pairs {
        let (source, target) = (NodeIndex::new(i), NodeIndex::new(j));
        match bfs_shortest(network, source, target) {
            Some(indices) => search.paths.push(ResiduePath::trace(network, &indices)),
            None => {
                debug!(
                    source = network.label(source),
                    target = network.label(target),
                    "no path between combination endpoints, dropping pair"
                );
                search.skipped.push((
                    network.label(source).to_string(),
                    network.label(target).to_string(),
                ));
            }
        }
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);
    search
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::builder::build_network;

    fn residue(chain: &str, seqnum: isize) -> ResidueInfo {
        ResidueInfo::new(chain, seqnum, "")
    }

    #[test]
    fn same_chain_pairs_honor_minimum_separation() {
        let residues = vec![
            residue("A", 1),
            residue("A", 2),
            residue("A", 3),
            residue("A", 4),
        ];
        let pairs = combinations(&residues, 3);
        assert_eq!(pairs, vec![(0, 3)]);
        for (i, j) in pairs {
            assert!(j - i >= 3);
        }
    }

    #[test]
    fn cross_chain_pairs_ignore_res_space() {
        let residues = vec![residue("A", 1), residue("A", 2), residue("B", 1)];
        let pairs = combinations(&residues, 3);
        assert_eq!(pairs, vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn zero_separation_yields_every_pair() {
        let residues = vec![residue("A", 1), residue("A", 2), residue("A", 3)];
        assert_eq!(combinations(&residues, 0).len(), 3);
    }

    #[test]
    fn collect_drops_disconnected_pairs_silently() {
        // A1-A2 connected, B1 isolated.
        let matrix = nalgebra::DMatrix::from_row_slice(
            3,
            3,
            &[0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        );
        let residues = vec![residue("A", 1), residue("A", 2), residue("B", 1)];
        let network = build_network(&matrix, Some(residues)).unwrap();
        let search = collect_shortest_paths(&network, 0, &ProgressReporter::new());
        assert_eq!(search.paths.len(), 1);
        assert_eq!(search.skipped.len(), 2);
    }
}
