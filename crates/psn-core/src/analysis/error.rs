use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("residue not found in network: '{0}'")]
    InvalidResidue(String),

    #[error("no path exists between '{start}' and '{target}'")]
    NoPathFound { start: String, target: String },

    #[error("the source and target selections produce no valid residue pairs")]
    EmptySelection,

    #[error("simple-path enumeration exceeded the step budget of {max_steps}")]
    SearchBudgetExhausted { max_steps: u64 },
}
