//! # Workflows Module
//!
//! The public API layer: complete analysis procedures tying the [`core`] and
//! [`analysis`] layers together. Each workflow loads nothing by itself beyond
//! what its arguments name, logs its phases, and returns a plain result
//! struct for the caller to print or write.
//!
//! - **[`paths`]** - Shortest or bounded simple paths between two residue
//!   selections, sorted and tabulated
//! - **[`metapath`]** - Whole-selection metapath extraction
//! - **[`network`]** - Connected components, hubs, and centrality measures
//!
//! [`core`]: crate::core
//! [`analysis`]: crate::analysis

pub mod metapath;
pub mod network;
pub mod paths;

use crate::analysis::config::ConfigError;
use crate::analysis::error::AnalysisError;
use crate::core::graph::builder::{BuildError, build_network};
use crate::core::graph::network::ResidueNetwork;
use crate::core::io::matrix::{MatrixError, load_matrix};
use crate::core::io::pdb::{PdbError, read_residues};
use crate::core::selection::SelectionError;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("failed to load adjacency matrix: {0}")]
    Matrix(#[from] MatrixError),

    #[error("failed to read reference structure: {0}")]
    Structure(#[from] PdbError),

    #[error("failed to build network: {0}")]
    Build(#[from] BuildError),

    #[error("invalid residue selection: {0}")]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Loads the adjacency matrix and, when a reference structure is given, the
/// residue identifiers, and builds the labeled network.
///
/// This is the shared entry phase of every workflow. Construction-time
/// errors are fatal and surfaced immediately.
pub fn load_network(
    matrix_path: &Path,
    reference: Option<&Path>,
) -> Result<ResidueNetwork, WorkflowError> {
    let matrix = load_matrix(matrix_path)?;
    let residues = match reference {
        Some(path) => Some(read_residues(path)?),
        None => None,
    };
    let network = build_network(&matrix, residues)?;
    tracing::info!(
        nodes = network.node_count(),
        edges = network.edge_count(),
        "network loaded"
    );
    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_network_labels_from_matrix_alone() {
        let dir = tempfile::tempdir().unwrap();
        let matrix_path = dir.path().join("psn.dat");
        std::fs::write(&matrix_path, "0 1\n1 0\n").unwrap();
        let network = load_network(&matrix_path, None).unwrap();
        assert_eq!(network.identifiers(), &["1".to_string(), "2".to_string()]);
        assert_eq!(network.edge_count(), 1);
    }

    #[test]
    fn load_network_rejects_identifier_count_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let matrix_path = dir.path().join("psn.dat");
        std::fs::write(&matrix_path, "0 1\n1 0\n").unwrap();
        let pdb_path = dir.path().join("ref.pdb");
        let mut pdb = std::fs::File::create(&pdb_path).unwrap();
        // One residue only, against a 2x2 matrix.
        writeln!(
            pdb,
            "ATOM      1  CA  ALA A   1       1.000   2.000   3.000  1.00  0.00"
        )
        .unwrap();
        drop(pdb);
        let err = load_network(&matrix_path, Some(&pdb_path)).unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Build(BuildError::Mismatch {
                residues: 1,
                dimension: 2
            })
        ));
    }

    #[test]
    fn load_network_surfaces_malformed_matrix_as_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let matrix_path = dir.path().join("psn.dat");
        std::fs::write(&matrix_path, "0 1 0\n1 0 0\n").unwrap();
        let err = load_network(&matrix_path, None).unwrap_err();
        assert!(matches!(err, WorkflowError::Matrix(MatrixError::NotSquare { .. })));
    }
}
