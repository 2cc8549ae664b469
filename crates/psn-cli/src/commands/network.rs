use crate::cli::NetworkArgs;
use crate::config::{DEFAULT_HUBS_CUTOFF, PartialConfig};
use crate::error::{CliError, Result};
use psnpath::analysis::config::NetworkConfig;
use psnpath::analysis::hubs::SortOrder;
use psnpath::core::io::pdb::replace_bfactor_column;
use psnpath::core::io::table::write_hub_table;
use psnpath::workflows;
use std::io;
use tracing::info;

pub fn run(args: NetworkArgs, file_config: &PartialConfig) -> Result<()> {
    if !args.components && !args.hubs {
        return Err(CliError::Argument(
            "nothing to do: request --components and/or --hubs".to_string(),
        ));
    }
    if (args.components_pdb.is_some() || args.hubs_pdb.is_some()) && args.input.reference.is_none()
    {
        return Err(CliError::Argument(
            "a reference structure must be supplied when writing PDB output (see --reference)"
                .to_string(),
        ));
    }

    let network = super::load_network(&args.input)?;

    let config = NetworkConfig {
        components: args.components,
        hubs_cutoff: args.hubs.then(|| {
            args.hubs_cutoff
                .or(file_config.network.hubs_cutoff)
                .unwrap_or(DEFAULT_HUBS_CUTOFF)
        }),
        hub_sort: args.hubs.then_some(SortOrder::Descending),
        centrality: Vec::new(),
    };
    let result = workflows::network::run(&network, &config);

    if let Some(components) = &result.components {
        for (number, component) in components.iter().enumerate() {
            println!(
                "Connected component {} ({} elements): {}",
                number + 1,
                component.len(),
                component.members.join(", ")
            );
        }
        if let (Some(out), Some(values)) = (&args.components_pdb, &result.component_values) {
            let reference = super::reference_for_output(&args.input)?;
            replace_bfactor_column(reference, out, values)?;
            info!(path = %out.display(), "connected component ids written");
            println!("Connected component ids written to {}", out.display());
        }
    }

    if let Some(found) = &result.hubs {
        if found.is_empty() {
            println!("No hubs were found");
        } else {
            println!("Hubs:\nNode\tk");
            let rows: Vec<(String, usize)> = found
                .iter()
                .map(|hub| (hub.label.clone(), hub.degree))
                .collect();
            write_hub_table(io::stdout().lock(), &rows)?;
        }
        if let (Some(out), Some(values)) = (&args.hubs_pdb, &result.degree_values) {
            let reference = super::reference_for_output(&args.input)?;
            replace_bfactor_column(reference, out, values)?;
            info!(path = %out.display(), "hub degrees written");
            println!("Hub degrees written to {}", out.display());
        }
    }

    Ok(())
}
