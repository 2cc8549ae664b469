use crate::analysis::centrality::{CentralityKind, centrality};
use crate::analysis::components::{ConnectedComponent, component_array, connected_components};
use crate::analysis::config::NetworkConfig;
use crate::analysis::hubs::{Hub, degree_array, hubs};
use crate::core::graph::network::ResidueNetwork;
use tracing::{info, instrument};

/// The outcome of a whole-network analysis. Each field is present only when
/// the corresponding measure was requested.
#[derive(Debug, Clone, Default)]
pub struct NetworkResult {
    pub components: Option<Vec<ConnectedComponent>>,
    /// 1-based component id per residue, canonical order.
    pub component_values: Option<Vec<f64>>,
    pub hubs: Option<Vec<Hub>>,
    /// Hub degree per residue (zero for non-hubs), canonical order.
    pub degree_values: Option<Vec<f64>>,
    /// Centrality values per requested measure, canonical order.
    pub centrality: Vec<(CentralityKind, Vec<f64>)>,
}

/// Runs the requested whole-network measures.
#[instrument(skip_all, name = "network_workflow")]
pub fn run(network: &ResidueNetwork, config: &NetworkConfig) -> NetworkResult {
    let mut result = NetworkResult::default();

    if config.components {
        let components = connected_components(network);
        info!(count = components.len(), "connected components found");
        result.component_values = Some(component_array(network, &components));
        result.components = Some(components);
    }

    if let Some(min_degree) = config.hubs_cutoff {
        let found = hubs(network, min_degree, config.hub_sort);
        info!(count = found.len(), min_degree, "hubs found");
        result.degree_values = Some(degree_array(network, &found));
        result.hubs = Some(found);
    }

    for &kind in &config.centrality {
        result.centrality.push((kind, centrality(network, kind)));
    }

    result
}
