pub mod centrality;
pub mod metapath;
pub mod network;
pub mod paths;

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use psnpath::core::graph::network::ResidueNetwork;
use psnpath::workflows;
use std::path::Path;

/// Validates the shared inputs and builds the labeled network.
///
/// The adjacency matrix is checked by hand rather than marked required in
/// clap, so a missing matrix exits with code 1 like every other fatal error.
pub(crate) fn load_network(input: &InputArgs) -> Result<ResidueNetwork> {
    let Some(matrix) = &input.adj_matrix else {
        return Err(CliError::Argument(
            "the graph adjacency matrix must be specified (see --adj-matrix)".to_string(),
        ));
    };
    let network = workflows::load_network(matrix, input.reference.as_deref())?;
    println!(
        "Graph loaded! {} nodes, {} edges",
        network.node_count(),
        network.edge_count()
    );
    Ok(network)
}

/// The reference structure path, required whenever a PDB output was asked for.
pub(crate) fn reference_for_output(input: &InputArgs) -> Result<&Path> {
    input.reference.as_deref().ok_or_else(|| {
        CliError::Argument(
            "a reference structure must be supplied when writing PDB output (see --reference)"
                .to_string(),
        )
    })
}
