use super::WorkflowError;
use crate::analysis::config::{PathMode, PathsConfig};
use crate::analysis::paths::{self, ResiduePath, path_records};
use crate::analysis::persistence::subnetwork_from_paths;
use crate::core::graph::network::ResidueNetwork;
use crate::core::io::table::PathRecord;
use nalgebra::DMatrix;
use tracing::{info, instrument, warn};

/// The outcome of a source/target paths analysis.
#[derive(Debug, Clone)]
pub struct PathsResult {
    /// The paths found, in the requested sort order.
    pub paths: Vec<ResiduePath>,
    /// Table rows mirroring `paths`, ready for output.
    pub records: Vec<PathRecord>,
    /// Union of the traversed edges with their interaction weights, dense
    /// over the canonical universe.
    pub subnetwork: DMatrix<f64>,
    /// Pairs skipped because no path connects them (within the cutoff).
    pub skipped: Vec<(String, String)>,
}

/// Runs a paths analysis between two residue selections.
///
/// Selections must already be expanded to identifier labels (see
/// [`crate::core::selection::expand_selection`]). Per-pair connectivity
/// failures are recovered and reported through [`PathsResult::skipped`].
#[instrument(skip_all, name = "paths_workflow")]
pub fn run(network: &ResidueNetwork, config: &PathsConfig) -> Result<PathsResult, WorkflowError> {
    // === Phase 1: Path search ===
    info!(
        sources = config.sources.len(),
        targets = config.targets.len(),
        "searching paths between selections"
    );
    let search = match config.mode {
        PathMode::Shortest => paths::shortest_paths(network, &config.sources, &config.targets)?,
        PathMode::Simple { max_length } => paths::simple_paths(
            network,
            &config.sources,
            &config.targets,
            max_length,
            &config.limits,
        )?,
    };
    if !search.skipped.is_empty() {
        warn!(
            skipped = search.skipped.len(),
            "some pairs had no connecting path and were excluded"
        );
    }

    // === Phase 2: Sorting and tabulation ===
    let sorted = paths::sort_paths(search.paths, config.sort);
    let records = path_records(&sorted);

    // === Phase 3: Traversed subnetwork ===
    let subnetwork = subnetwork_from_paths(network, &sorted)?;

    info!(found = sorted.len(), "paths workflow complete");
    Ok(PathsResult {
        paths: sorted,
        records,
        subnetwork,
        skipped: search.skipped,
    })
}

/// The dense matrix of a single path's edges, for per-path export.
pub fn path_matrix(
    network: &ResidueNetwork,
    path: &ResiduePath,
) -> Result<DMatrix<f64>, WorkflowError> {
    Ok(subnetwork_from_paths(network, std::slice::from_ref(path))?)
}
