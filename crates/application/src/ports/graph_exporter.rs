use async_trait::async_trait;
use dnsmap_domain::{DiscoveryGraph, DomainError, DomainName, ExportFormat, Position};
use std::collections::BTreeMap;
use std::path::Path;

/// Everything an exporter may need, computed once per export.
#[derive(Debug, Clone)]
pub struct GraphSnapshot {
    pub start: DomainName,
    pub graph: DiscoveryGraph,
    pub positions: BTreeMap<DomainName, Position>,
    pub dot: String,
}

#[async_trait]
pub trait GraphExporter: Send + Sync {
    fn format(&self) -> ExportFormat;

    async fn export(&self, snapshot: &GraphSnapshot, output: &Path) -> Result<(), DomainError>;
}
