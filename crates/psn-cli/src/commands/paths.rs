use crate::cli::{PathsArgs, SortKey};
use crate::config::{DEFAULT_MAX_LENGTH, PartialConfig};
use crate::error::Result;
use psnpath::analysis::config::{PathMode, PathsConfigBuilder};
use psnpath::analysis::paths::SearchLimits;
use psnpath::core::io::matrix::write_matrix;
use psnpath::core::io::table::{write_path_table, write_path_table_to_path};
use psnpath::core::selection::expand_selection;
use psnpath::workflows;
use std::io;
use tracing::info;

pub fn run(args: PathsArgs, file_config: &PartialConfig) -> Result<()> {
    let network = super::load_network(&args.input)?;

    let sources = expand_selection(&args.source, network.identifiers())?;
    let targets = expand_selection(&args.target, network.identifiers())?;

    let max_length = args
        .max_length
        .or(file_config.paths.maximum_path_length)
        .unwrap_or(DEFAULT_MAX_LENGTH);
    let mode = if args.all_paths {
        PathMode::Simple { max_length }
    } else {
        PathMode::Shortest
    };
    let limits = SearchLimits {
        max_steps: args.max_steps.or(file_config.paths.max_steps),
    };
    let config = PathsConfigBuilder::new()
        .sources(sources)
        .targets(targets)
        .mode(mode)
        .sort(args.sort.unwrap_or(SortKey::Length).into())
        .limits(limits)
        .build()?;

    let result = workflows::paths::run(&network, &config)?;

    if result.paths.is_empty() {
        println!("No paths were found between the selected residues");
    } else {
        println!(
            "{} paths found ({} pairs skipped)",
            result.paths.len(),
            result.skipped.len()
        );
    }

    match &args.output {
        Some(path) => {
            write_path_table_to_path(path, &result.records)?;
            println!("Path table written to {}", path.display());
        }
        None => write_path_table(io::stdout().lock(), &result.records)?,
    }

    if let Some(path) = &args.paths_dat {
        write_matrix(&result.subnetwork, path, Some(1))?;
        println!("Traversed subnetwork written to {}", path.display());
    }

    if let Some(dir) = &args.write_paths {
        std::fs::create_dir_all(dir)?;
        for (number, path) in result.paths.iter().enumerate() {
            let matrix = workflows::paths::path_matrix(&network, path)?;
            write_matrix(&matrix, dir.join(format!("path{}.dat", number + 1)), Some(1))?;
        }
        info!(count = result.paths.len(), dir = %dir.display(), "per-path matrices written");
        println!(
            "{} path matrices written to {}",
            result.paths.len(),
            dir.display()
        );
    }

    Ok(())
}
