use crate::error::{CliError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_HUBS_CUTOFF: usize = 3;
pub const DEFAULT_MAX_LENGTH: usize = 10;
pub const DEFAULT_RES_SPACE: usize = 3;
pub const DEFAULT_NODE_THRESHOLD: f64 = 0.1;
pub const DEFAULT_EDGE_THRESHOLD: f64 = 0.1;

/// Analysis defaults loaded from an optional TOML file.
///
/// Every field is optional: explicit CLI flags take precedence, file values
/// fill the gaps, and the built-in defaults above apply last.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialConfig {
    #[serde(default)]
    pub network: NetworkSection,
    #[serde(default)]
    pub paths: PathsSection,
    #[serde(default)]
    pub metapath: MetapathSection,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct NetworkSection {
    pub hubs_cutoff: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PathsSection {
    pub maximum_path_length: Option<usize>,
    pub max_steps: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct MetapathSection {
    pub res_space: Option<usize>,
    pub node_threshold: Option<f64>,
    pub edge_threshold: Option<f64>,
    pub normalize: Option<bool>,
}

impl PartialConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("cannot read '{}': {e}", path.display()))
        })?;
        toml::from_str(&text)
            .map_err(|e| CliError::Config(format!("cannot parse '{}': {e}", path.display())))
    }
}
