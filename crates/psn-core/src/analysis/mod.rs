//! # Analysis Module
//!
//! This module implements the path-analysis engine for protein structure
//! networks, providing the computational framework every workflow builds on.
//!
//! ## Overview
//!
//! The analysis module turns a labeled residue network into derived results:
//! shortest and bounded-length simple paths between residue selections, the
//! persistence graph aggregating a path collection, the filtered and
//! optionally normalized metapath of a whole selection, and the classic
//! whole-network measures (connected components, hubs, centrality).
//!
//! All operations are pure functions over immutable inputs producing new
//! derived structures; per-pair failures are recovered locally and reported
//! through skip counters rather than aborting a batch.
//!
//! ## Architecture
//!
//! - **Path Search** ([`paths`]) - Breadth-first shortest paths with pinned
//!   tie-breaking, depth-first simple-path enumeration with a hard length
//!   cutoff and a pluggable step budget, and path sorting
//! - **Aggregation** ([`persistence`]) - Occurrence-frequency persistence
//!   graphs and path-union subnetworks
//! - **Metapath Reduction** ([`metapath`]) - Residue-pair combinations,
//!   whole-selection path collection, threshold filtering and normalization
//! - **Network Measures** ([`components`], [`hubs`], [`centrality`]) -
//!   Connected components, degree hubs, and centrality measures
//! - **Configuration** ([`config`]) - Validated parameter sets for the
//!   workflows
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress
//!   reporting for long pair loops
//! - **Error Handling** ([`error`]) - Analysis-specific error types

pub mod centrality;
pub mod components;
pub mod config;
pub mod error;
pub mod hubs;
pub mod metapath;
pub mod paths;
pub mod persistence;
pub mod progress;
