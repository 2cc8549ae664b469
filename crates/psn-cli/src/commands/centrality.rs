use crate::cli::{CentralityArgs, CentralityChoice};
use crate::config::PartialConfig;
use crate::error::{CliError, Result};
use psnpath::analysis::centrality::CentralityKind;
use psnpath::analysis::config::NetworkConfig;
use psnpath::core::io::pdb::replace_bfactor_column;
use psnpath::core::io::table::write_value_table;
use psnpath::workflows;
use std::io;
use std::path::PathBuf;

pub fn run(args: CentralityArgs, _file_config: &PartialConfig) -> Result<()> {
    if args.pdb_prefix.is_some() && args.input.reference.is_none() {
        return Err(CliError::Argument(
            "a reference structure must be supplied when writing PDB output (see --reference)"
                .to_string(),
        ));
    }

    let network = super::load_network(&args.input)?;

    let kinds = match args.centrality.unwrap_or(CentralityChoice::All) {
        CentralityChoice::All => CentralityKind::ALL.to_vec(),
        CentralityChoice::Degree => vec![CentralityKind::Degree],
        CentralityChoice::Betweenness => vec![CentralityKind::Betweenness],
    };
    let config = NetworkConfig {
        centrality: kinds,
        ..Default::default()
    };
    let result = workflows::network::run(&network, &config);

    for (kind, values) in &result.centrality {
        println!("{} centrality:", kind.name());
        write_value_table(io::stdout().lock(), network.identifiers(), values)?;
        if let Some(prefix) = &args.pdb_prefix {
            let reference = super::reference_for_output(&args.input)?;
            let out = PathBuf::from(format!("{}_{}.pdb", prefix.display(), kind.name()));
            replace_bfactor_column(reference, &out, values)?;
            println!("{} centrality written to {}", kind.name(), out.display());
        }
    }

    Ok(())
}
