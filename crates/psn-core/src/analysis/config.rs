use super::centrality::CentralityKind;
use super::hubs::SortOrder;
use super::paths::{PathSort, SearchLimits};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Which path search a paths analysis runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMode {
    /// One breadth-first shortest path per pair.
    Shortest,
    /// All simple paths of at most `max_length` nodes per pair.
    Simple { max_length: usize },
}

/// Parameters of a source/target paths analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct PathsConfig {
    pub sources: Vec<String>,
    pub targets: Vec<String>,
    pub mode: PathMode,
    pub sort: PathSort,
    pub limits: SearchLimits,
}

#[derive(Debug, Default)]
pub struct PathsConfigBuilder {
    sources: Option<Vec<String>>,
    targets: Option<Vec<String>>,
    mode: Option<PathMode>,
    sort: Option<PathSort>,
    limits: Option<SearchLimits>,
}

impl PathsConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sources(mut self, sources: Vec<String>) -> Self {
        self.sources = Some(sources);
        self
    }

    pub fn targets(mut self, targets: Vec<String>) -> Self {
        self.targets = Some(targets);
        self
    }

    pub fn mode(mut self, mode: PathMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn sort(mut self, sort: PathSort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn limits(mut self, limits: SearchLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn build(self) -> Result<PathsConfig, ConfigError> {
        let sources = self
            .sources
            .ok_or(ConfigError::MissingParameter("sources"))?;
        let targets = self
            .targets
            .ok_or(ConfigError::MissingParameter("targets"))?;
        if let Some(PathMode::Simple { max_length }) = self.mode
            && max_length < 2
        {
            return Err(ConfigError::InvalidValue {
                name: "max_length",
                reason: format!("a path needs at least 2 nodes, got {max_length}"),
            });
        }
        Ok(PathsConfig {
            sources,
            targets,
            mode: self.mode.unwrap_or(PathMode::Shortest),
            sort: self.sort.unwrap_or_default(),
            limits: self.limits.unwrap_or_default(),
        })
    }
}

/// Parameters of a whole-selection metapath extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct MetapathConfig {
    pub res_space: usize,
    pub node_threshold: f64,
    pub edge_threshold: f64,
    pub normalize: bool,
}

#[derive(Debug, Default)]
pub struct MetapathConfigBuilder {
    res_space: Option<usize>,
    node_threshold: Option<f64>,
    edge_threshold: Option<f64>,
    normalize: Option<bool>,
}

impl MetapathConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn res_space(mut self, res_space: usize) -> Self {
        self.res_space = Some(res_space);
        self
    }

    pub fn node_threshold(mut self, threshold: f64) -> Self {
        self.node_threshold = Some(threshold);
        self
    }

    pub fn edge_threshold(mut self, threshold: f64) -> Self {
        self.edge_threshold = Some(threshold);
        self
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = Some(normalize);
        self
    }

    pub fn build(self) -> Result<MetapathConfig, ConfigError> {
        let node_threshold = self
            .node_threshold
            .ok_or(ConfigError::MissingParameter("node_threshold"))?;
        let edge_threshold = self
            .edge_threshold
            .ok_or(ConfigError::MissingParameter("edge_threshold"))?;
        for (name, value) in [
            ("node_threshold", node_threshold),
            ("edge_threshold", edge_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    name,
                    reason: format!("occurrence thresholds lie in [0, 1], got {value}"),
                });
            }
        }
        Ok(MetapathConfig {
            res_space: self.res_space.ok_or(ConfigError::MissingParameter("res_space"))?,
            node_threshold,
            edge_threshold,
            normalize: self.normalize.unwrap_or(false),
        })
    }
}

/// Which whole-network measures a network analysis computes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetworkConfig {
    pub components: bool,
    /// Minimum degree for hub detection, when hubs are requested.
    pub hubs_cutoff: Option<usize>,
    pub hub_sort: Option<SortOrder>,
    pub centrality: Vec<CentralityKind>,
}
