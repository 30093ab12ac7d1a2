pub mod discovery;
pub mod errors;
pub mod export;
pub mod layout;
pub mod logging;
pub mod resolver;
pub mod root;

pub use discovery::DiscoveryConfig;
pub use errors::ConfigError;
pub use export::{ExportConfig, ExportFormat};
pub use layout::LayoutConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, ExplorerConfig};
