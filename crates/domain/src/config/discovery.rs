use crate::dns_record::RecordType;
use crate::graph::Layer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_max_layers")]
    pub max_layers: Layer,

    /// Domains of one layer resolved at the same time.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    #[serde(default = "default_record_types")]
    pub record_types: Vec<RecordType>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            max_layers: default_max_layers(),
            concurrency: default_concurrency(),
            record_types: default_record_types(),
        }
    }
}

fn default_max_layers() -> Layer {
    3
}

fn default_concurrency() -> usize {
    8
}

fn default_record_types() -> Vec<RecordType> {
    RecordType::ALL.to_vec()
}
