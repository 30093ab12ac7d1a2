use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::discovery::DiscoveryConfig;
use super::errors::ConfigError;
use super::export::{ExportConfig, ExportFormat};
use super::layout::LayoutConfig;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use crate::graph::Layer;

const LOCAL_CONFIG_PATH: &str = "dnsmap.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnsmap/config.toml";

/// Main configuration structure for dnsmap
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ExplorerConfig {
    /// Layer bound, concurrency and queried record types
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Nameservers and per-query timeout
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Spacing of the hierarchical layout
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Output directory, formats and layer colors
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ExplorerConfig {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsmap.toml in current directory
    /// 3. /etc/dnsmap/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(layers) = overrides.max_layers {
            self.discovery.max_layers = layers;
        }
        if let Some(concurrency) = overrides.concurrency {
            self.discovery.concurrency = concurrency;
        }
        if let Some(nameservers) = overrides.nameservers {
            if !nameservers.is_empty() {
                self.resolver.nameservers = nameservers;
            }
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.resolver.query_timeout_ms = timeout;
        }
        if overrides.export {
            self.export.enabled = true;
        }
        if let Some(dir) = overrides.output_dir {
            self.export.output_dir = dir;
        }
        if let Some(formats) = overrides.formats {
            if !formats.is_empty() {
                self.export.formats = formats;
            }
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.discovery.max_layers == 0 {
            return Err(ConfigError::Validation(
                "max_layers must be at least 1".to_string(),
            ));
        }

        if self.discovery.concurrency == 0 {
            return Err(ConfigError::Validation(
                "concurrency must be at least 1".to_string(),
            ));
        }

        if self.discovery.record_types.is_empty() {
            return Err(ConfigError::Validation(
                "No record types configured".to_string(),
            ));
        }

        if self.resolver.nameservers.is_empty() {
            return Err(ConfigError::Validation(
                "No nameservers configured".to_string(),
            ));
        }
        self.resolver.socket_addrs()?;

        if self.resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "query_timeout_ms must be greater than 0".to_string(),
            ));
        }

        if !(self.layout.x_spacing > 0.0 && self.layout.y_spacing > 0.0) {
            return Err(ConfigError::Validation(format!(
                "Layout spacing must be positive (x={}, y={})",
                self.layout.x_spacing, self.layout.y_spacing
            )));
        }

        if self.export.enabled && self.export.formats.is_empty() {
            return Err(ConfigError::Validation(
                "Export enabled without any format".to_string(),
            ));
        }
        self.export.palette()?;

        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub max_layers: Option<Layer>,
    pub concurrency: Option<usize>,
    pub nameservers: Option<Vec<String>>,
    pub query_timeout_ms: Option<u64>,
    pub export: bool,
    pub output_dir: Option<PathBuf>,
    pub formats: Option<Vec<ExportFormat>>,
    pub log_level: Option<String>,
}
