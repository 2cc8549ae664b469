//! # PSN-Path Core Library
//!
//! A modernized, high-performance library for the analysis of protein structure
//! networks (PSNs): weighted graphs whose nodes are residues and whose edge
//! weights are interaction strengths derived from molecular dynamics ensembles.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the stateless residue network model
//!   (`ResidueNetwork`), adjacency-matrix and table I/O, reference-structure
//!   residue extraction and annotation, and residue-selection parsing.
//!
//! - **[`analysis`]: The Logic Core.** Implements the path-analysis engine:
//!   shortest and simple path search, persistence-graph aggregation, metapath
//!   reduction, connected components, hubs, and centrality measures, together
//!   with their configuration, error, and progress-reporting types.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing
//!   layer. It ties `analysis` and `core` together to execute complete analysis
//!   procedures, such as whole-selection metapath extraction, and provides a
//!   simple and powerful entry point for end-users of the library.

pub mod analysis;
pub mod core;
pub mod workflows;
