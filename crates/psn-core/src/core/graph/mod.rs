//! The residue network model and its construction.

pub mod builder;
pub mod network;

pub use builder::{BuildError, build_network};
pub use network::{ResidueInfo, ResidueNetwork};
