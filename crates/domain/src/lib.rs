//! dnsmap domain layer
pub mod config;
pub mod discovery;
pub mod dns_record;
pub mod domain_name;
pub mod dot;
pub mod errors;
pub mod extraction;
pub mod graph;
pub mod layout;

pub use config::{
    CliOverrides, ConfigError, DiscoveryConfig, ExplorerConfig, ExportConfig, ExportFormat,
    LayoutConfig, LogFormat, LoggingConfig, ResolverConfig,
};
pub use discovery::{
    discover_with, validate_run, DiscoveryOutcome, DiscoveryState, LayerSummary, Termination,
};
pub use dns_record::{LookupFailure, LookupOutcome, LookupTally, RecordSet, RecordType};
pub use domain_name::DomainName;
pub use dot::{to_dot, LayerPalette};
pub use errors::DomainError;
pub use extraction::{extract, extract_links, ExtractedLink};
pub use graph::{DiscoveryGraph, Edge, EdgeOrigin, GraphNode, Layer};
pub use layout::{hierarchical_layout, LayoutOptions, Position};
