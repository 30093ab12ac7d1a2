use dnsmap_domain::{CliOverrides, ExplorerConfig};

/// Loads, overrides and validates the configuration.
pub fn load_config(
    path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<ExplorerConfig> {
    let config = ExplorerConfig::load(path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
