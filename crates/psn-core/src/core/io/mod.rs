//! # I/O Module
//!
//! Reading and writing of the flat formats the tool exchanges with its
//! collaborators:
//!
//! - **[`matrix`]** - Whitespace-delimited square numeric matrices (network
//!   input and matrix export)
//! - **[`table`]** - Tab-delimited result tables (paths, hubs, centrality)
//! - **[`pdb`]** - Reference-structure residue extraction and per-residue
//!   scalar annotation via the B-factor column
pub mod matrix;
pub mod pdb;
pub mod table;
