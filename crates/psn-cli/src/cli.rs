use clap::{Args, Parser, Subcommand, ValueEnum};
use psnpath::analysis::paths::PathSort;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "PSN-Path CLI - A command-line interface for path analysis and metapath extraction in protein structure networks.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Optional TOML file with analysis defaults; explicit flags win
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate connected components and hubs of the network.
    Network(NetworkArgs),
    /// Calculate shortest or all simple paths between two residue selections.
    Paths(PathsArgs),
    /// Extract the metapath summarizing path usage across the whole selection.
    Metapath(MetapathArgs),
    /// Calculate centrality measures over all residues.
    Centrality(CentralityArgs),
}

/// Inputs shared by every analysis.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Adjacency matrix of the protein structure network
    #[arg(short = 'a', long = "adj-matrix", value_name = "DAT")]
    pub adj_matrix: Option<PathBuf>,

    /// Reference structure used to derive residue identifiers
    #[arg(short = 'r', long = "reference", value_name = "PDB")]
    pub reference: Option<PathBuf>,
}

/// Arguments for the `network` subcommand.
#[derive(Args, Debug)]
pub struct NetworkArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Calculate connected components
    #[arg(short = 'c', long)]
    pub components: bool,

    /// Calculate hubs
    #[arg(short = 'u', long)]
    pub hubs: bool,

    /// Minimum number of connections for hubs
    #[arg(short = 'k', long = "hubs-cutoff", value_name = "INT")]
    pub hubs_cutoff: Option<usize>,

    /// Save connected component ids in a PDB B-factor column
    #[arg(long = "components-pdb", value_name = "PATH")]
    pub components_pdb: Option<PathBuf>,

    /// Save hub degrees in a PDB B-factor column
    #[arg(long = "hubs-pdb", value_name = "PATH")]
    pub hubs_pdb: Option<PathBuf>,
}

/// Arguments for the `paths` subcommand.
#[derive(Args, Debug)]
pub struct PathsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Source residue selection, e.g. "A1:A10,A57"
    #[arg(long, value_name = "SELECTION")]
    pub source: String,

    /// Target residue selection
    #[arg(long, value_name = "SELECTION")]
    pub target: String,

    /// Enumerate all simple paths instead of one shortest path per pair
    #[arg(long = "all-paths")]
    pub all_paths: bool,

    /// Maximum number of residues on a simple path (see --all-paths)
    #[arg(short = 'l', long = "maximum-path-length", value_name = "INT")]
    pub max_length: Option<usize>,

    /// How to sort the paths in output
    #[arg(short = 's', long = "sort-paths", value_enum, value_name = "KEY")]
    pub sort: Option<SortKey>,

    /// Abort simple-path enumeration after this many search steps
    #[arg(long = "max-steps", value_name = "INT")]
    pub max_steps: Option<u64>,

    /// Write the path table to a file instead of standard output
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the union of the traversed edges as a matrix
    #[arg(long = "paths-dat", value_name = "PATH")]
    pub paths_dat: Option<PathBuf>,

    /// Write one matrix per path (path1.dat, path2.dat, ...) into a directory
    #[arg(long = "write-paths", value_name = "DIR")]
    pub write_paths: Option<PathBuf>,
}

/// Arguments for the `metapath` subcommand.
#[derive(Args, Debug)]
pub struct MetapathArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Minimum sequence separation between same-chain endpoint pairs
    #[arg(long = "res-space", value_name = "INT")]
    pub res_space: Option<usize>,

    /// Drop nodes whose occurrence frequency falls below this value
    #[arg(long = "node-threshold", value_name = "FLOAT")]
    pub node_threshold: Option<f64>,

    /// Drop edges whose occurrence frequency falls below this value
    #[arg(long = "edge-threshold", value_name = "FLOAT")]
    pub edge_threshold: Option<f64>,

    /// Rescale weights so the node and edge maxima become 1.0
    #[arg(long)]
    pub normalize: bool,

    /// Output path for the metapath matrix
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Save node occurrence weights in a PDB B-factor column
    #[arg(long = "metapath-pdb", value_name = "PATH")]
    pub metapath_pdb: Option<PathBuf>,
}

/// Arguments for the `centrality` subcommand.
#[derive(Args, Debug)]
pub struct CentralityArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Which centrality measure to calculate
    #[arg(short = 'c', long, value_enum, value_name = "MEASURE")]
    pub centrality: Option<CentralityChoice>,

    /// Save each measure as B-factors in PREFIX_<measure>.pdb
    #[arg(long = "pdb-prefix", value_name = "PREFIX")]
    pub pdb_prefix: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Length,
    CumulativeWeight,
    AvgWeight,
    Path,
}

impl From<SortKey> for PathSort {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Length => PathSort::Length,
            SortKey::CumulativeWeight => PathSort::CumulativeWeight,
            SortKey::AvgWeight => PathSort::AvgWeight,
            SortKey::Path => PathSort::Nodes,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CentralityChoice {
    All,
    Degree,
    Betweenness,
}
