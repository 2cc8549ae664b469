use super::WorkflowError;
use crate::analysis::config::MetapathConfig;
use crate::analysis::metapath::{Metapath, collect_shortest_paths};
use crate::analysis::persistence::PersistenceGraph;
use crate::analysis::progress::{Progress, ProgressReporter};
use crate::core::graph::network::ResidueNetwork;
use tracing::{info, instrument, warn};

/// Extracts the metapath of the whole residue selection.
///
/// Enumerates all residue-pair combinations honoring the minimum separation,
/// computes their pairwise shortest paths, aggregates them into a persistence
/// graph, filters it by the occurrence thresholds, optionally normalizes the
/// weights, and reorders the result into the canonical identifier order for
/// export.
#[instrument(skip_all, name = "metapath_workflow")]
pub fn run(
    network: &ResidueNetwork,
    config: &MetapathConfig,
    reporter: &ProgressReporter,
) -> Result<Metapath, WorkflowError> {
    // === Phase 1: Pairwise shortest paths ===
    reporter.report(Progress::PhaseStart {
        name: "Pairwise shortest paths",
    });
    info!(
        residues = network.node_count(),
        res_space = config.res_space,
        "collecting shortest paths over all residue-pair combinations"
    );
    let search = collect_shortest_paths(network, config.res_space, reporter);
    let total_pairs = search.paths.len() + search.skipped.len();
    if !search.skipped.is_empty() {
        info!(
            dropped = search.skipped.len(),
            of = total_pairs,
            "combinations without a connecting path were dropped"
        );
    }
    if search.paths.is_empty() {
        warn!("no combination is connected; the metapath will be empty");
    }
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Aggregation ===
    let persistence = PersistenceGraph::from_paths(&search.paths);

    // === Phase 3: Filtering and normalization ===
    let filtered = persistence.filter(config.node_threshold, config.edge_threshold);
    info!(
        nodes_before = persistence.node_count(),
        nodes_after = filtered.node_count(),
        edges_before = persistence.edge_count(),
        edges_after = filtered.edge_count(),
        "applied occurrence thresholds"
    );
    let reduced = if config.normalize {
        filtered.normalize()
    } else {
        filtered
    };

    // === Phase 4: Canonical reordering and export ===
    let identifiers = network.identifiers();
    let ordered = reduced.reorder(identifiers)?;
    let matrix = ordered.to_matrix(identifiers)?;
    let node_weights = ordered.node_weight_array(identifiers)?;

    info!(
        nodes = ordered.node_count(),
        edges = ordered.edge_count(),
        "metapath workflow complete"
    );
    Ok(Metapath {
        graph: ordered,
        matrix,
        node_weights,
        total_pairs,
        skipped_pairs: search.skipped.len(),
        path_count: search.paths.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::config::MetapathConfigBuilder;
    use crate::core::graph::builder::build_network;
    use crate::core::graph::network::ResidueInfo;
    use nalgebra::DMatrix;

    /// Two chains bridged through a single linker residue:
    /// A1-A2-A3 and B1-B2 with A3-B1.
    fn bridged_network() -> ResidueNetwork {
        let mut matrix = DMatrix::zeros(5, 5);
        for (i, j) in [(0, 1), (1, 2), (2, 3), (3, 4)] {
            matrix[(i, j)] = 1.0;
            matrix[(j, i)] = 1.0;
        }
        let residues = vec![
            ResidueInfo::new("A", 1, ""),
            ResidueInfo::new("A", 2, ""),
            ResidueInfo::new("A", 3, ""),
            ResidueInfo::new("B", 1, ""),
            ResidueInfo::new("B", 2, ""),
        ];
        build_network(&matrix, Some(residues)).unwrap()
    }

    fn config(node_threshold: f64, edge_threshold: f64, normalize: bool) -> MetapathConfig {
        MetapathConfigBuilder::new()
            .res_space(0)
            .node_threshold(node_threshold)
            .edge_threshold(edge_threshold)
            .normalize(normalize)
            .build()
            .unwrap()
    }

    #[test]
    fn metapath_covers_all_connected_pairs() {
        let network = bridged_network();
        let metapath = run(&network, &config(0.0, 0.0, false), &ProgressReporter::new()).unwrap();
        assert_eq!(metapath.total_pairs, 10);
        assert_eq!(metapath.skipped_pairs, 0);
        assert_eq!(metapath.path_count, 10);
        // Every residue lies on at least one path.
        assert!(metapath.node_weights.iter().all(|&w| w > 0.0));
    }

    #[test]
    fn matrix_is_canonical_and_symmetric() {
        let network = bridged_network();
        let metapath = run(&network, &config(0.0, 0.0, false), &ProgressReporter::new()).unwrap();
        assert_eq!(metapath.matrix.nrows(), 5);
        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(metapath.matrix[(i, j)], metapath.matrix[(j, i)]);
            }
        }
        // The bridge edge A3-B1 is the most traversed one.
        let bridge = metapath.matrix[(2, 3)];
        assert!(metapath
            .graph
            .edges()
            .all(|(_, _, weight)| weight <= bridge));
    }

    #[test]
    fn thresholds_prune_rarely_used_residues() {
        let network = bridged_network();
        // Node occurrence frequencies on the chain are 0.4/0.7/0.8/0.7/0.4,
        // so a 0.75 threshold keeps only the central linker.
        let loose = run(&network, &config(0.0, 0.0, false), &ProgressReporter::new()).unwrap();
        let tight = run(&network, &config(0.75, 0.0, false), &ProgressReporter::new()).unwrap();
        assert!(tight.graph.node_count() < loose.graph.node_count());
    }

    #[test]
    fn normalization_rescales_maxima_to_one() {
        let network = bridged_network();
        let metapath = run(&network, &config(0.0, 0.0, true), &ProgressReporter::new()).unwrap();
        let max_node = metapath
            .node_weights
            .iter()
            .cloned()
            .fold(f64::MIN, f64::max);
        assert_eq!(max_node, 1.0);
        let max_edge = metapath
            .graph
            .edges()
            .map(|(_, _, weight)| weight)
            .fold(f64::MIN, f64::max);
        assert_eq!(max_edge, 1.0);
    }

    #[test]
    fn disconnected_universe_yields_empty_metapath() {
        let matrix = DMatrix::zeros(3, 3);
        let network = build_network(&matrix, None).unwrap();
        let metapath = run(&network, &config(0.1, 0.1, false), &ProgressReporter::new()).unwrap();
        assert_eq!(metapath.path_count, 0);
        assert_eq!(metapath.skipped_pairs, 3);
        assert_eq!(metapath.graph.node_count(), 0);
        assert!(metapath.matrix.iter().all(|&v| v == 0.0));
    }
}
