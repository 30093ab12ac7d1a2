use clap::Parser;
use dnsmap_domain::{CliOverrides, ExportFormat};
use std::path::PathBuf;
use tracing::info;

mod bootstrap;
mod di;
mod report;

#[derive(Parser)]
#[command(name = "dnsmap")]
#[command(version)]
#[command(about = "dnsmap - layered DNS relationship discovery and graph export")]
struct Cli {
    /// Domain to start discovery from
    domain: String,

    /// Number of breadth-first layers to explore
    #[arg(short = 'l', long, value_name = "N")]
    layers: Option<u32>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Export the graph after discovery
    #[arg(short = 'e', long)]
    export: bool,

    /// Directory for exported files
    #[arg(short = 'o', long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Export format (dot, json, svg, png); repeatable
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    formats: Vec<ExportFormat>,

    /// Nameserver as ip[:port]; repeatable, tried in order
    #[arg(short = 'n', long = "nameserver", value_name = "ADDR")]
    nameservers: Vec<String>,

    /// Per-query timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Domains resolved concurrently within a layer
    #[arg(long)]
    concurrency: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Write the effective configuration to FILE
    #[arg(long, value_name = "FILE")]
    save_config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        max_layers: cli.layers,
        concurrency: cli.concurrency,
        nameservers: Some(cli.nameservers.clone()),
        query_timeout_ms: cli.timeout_ms,
        export: cli.export,
        output_dir: cli.output_dir.clone(),
        formats: Some(cli.formats.clone()),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting dnsmap v{}", env!("CARGO_PKG_VERSION"));

    if let Some(path) = &cli.save_config {
        config.save(path)?;
        info!(path = %path, "Configuration saved");
    }

    let services = di::Services::new(&config)?;

    let report = services
        .explore
        .execute(&cli.domain, config.discovery.max_layers)
        .await?;

    report::print_exploration(&report);

    if config.export.enabled {
        let exported = services
            .export
            .execute(
                &report.start,
                &report.outcome.graph,
                &config.export.output_dir,
                &config.export.formats,
            )
            .await;
        report::print_exports(&exported);
    }

    Ok(())
}
