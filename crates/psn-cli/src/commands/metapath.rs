use crate::cli::MetapathArgs;
use crate::config::{
    DEFAULT_EDGE_THRESHOLD, DEFAULT_NODE_THRESHOLD, DEFAULT_RES_SPACE, PartialConfig,
};
use crate::error::{CliError, Result};
use crate::progress::CliProgressHandler;
use psnpath::analysis::config::MetapathConfigBuilder;
use psnpath::analysis::progress::ProgressReporter;
use psnpath::core::io::matrix::write_matrix;
use psnpath::core::io::pdb::replace_bfactor_column;
use psnpath::workflows;
use std::path::PathBuf;
use tracing::info;

pub fn run(args: MetapathArgs, file_config: &PartialConfig) -> Result<()> {
    if args.metapath_pdb.is_some() && args.input.reference.is_none() {
        return Err(CliError::Argument(
            "a reference structure must be supplied when writing PDB output (see --reference)"
                .to_string(),
        ));
    }

    let network = super::load_network(&args.input)?;

    let config = MetapathConfigBuilder::new()
        .res_space(
            args.res_space
                .or(file_config.metapath.res_space)
                .unwrap_or(DEFAULT_RES_SPACE),
        )
        .node_threshold(
            args.node_threshold
                .or(file_config.metapath.node_threshold)
                .unwrap_or(DEFAULT_NODE_THRESHOLD),
        )
        .edge_threshold(
            args.edge_threshold
                .or(file_config.metapath.edge_threshold)
                .unwrap_or(DEFAULT_EDGE_THRESHOLD),
        )
        .normalize(args.normalize || file_config.metapath.normalize.unwrap_or(false))
        .build()?;

    let handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(handler.callback());
    let metapath = workflows::metapath::run(&network, &config, &reporter)?;

    println!(
        "Metapath: {} of {} residue pairs connected; {} nodes and {} edges kept",
        metapath.path_count,
        metapath.total_pairs,
        metapath.graph.node_count(),
        metapath.graph.edge_count()
    );

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from("metapath.dat"));
    write_matrix(&metapath.matrix, &output, None)?;
    println!("Metapath matrix written to {}", output.display());

    if let Some(out) = &args.metapath_pdb {
        let reference = super::reference_for_output(&args.input)?;
        replace_bfactor_column(reference, out, &metapath.node_weights)?;
        info!(path = %out.display(), "node occurrence weights written");
        println!("Node occurrence weights written to {}", out.display());
    }

    Ok(())
}
