use psnpath::analysis::config::ConfigError;
use psnpath::core::io::matrix::MatrixError;
use psnpath::core::io::pdb::PdbError;
use psnpath::core::io::table::TableError;
use psnpath::core::selection::SelectionError;
use psnpath::workflows::WorkflowError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Invalid residue selection: {0}")]
    Selection(#[from] SelectionError),

    #[error("Invalid analysis parameters: {0}")]
    AnalysisConfig(#[from] ConfigError),

    #[error("Failed to write matrix: {0}")]
    Matrix(#[from] MatrixError),

    #[error("Failed to write table: {0}")]
    Table(#[from] TableError),

    #[error("Failed to annotate structure: {0}")]
    Structure(#[from] PdbError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
