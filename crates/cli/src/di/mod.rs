use dnsmap_application::use_cases::{ExploreDomainUseCase, ExploreSettings, ExportGraphUseCase};
use dnsmap_domain::ExplorerConfig;
use dnsmap_infrastructure::dns::WireRecordResolver;
use dnsmap_infrastructure::export::default_exporters;
use std::sync::Arc;
use tracing::debug;

pub struct Services {
    pub explore: ExploreDomainUseCase,
    pub export: ExportGraphUseCase,
}

impl Services {
    pub fn new(config: &ExplorerConfig) -> anyhow::Result<Self> {
        let resolver = Arc::new(WireRecordResolver::from_config(&config.resolver)?);
        let settings = ExploreSettings::from_config(config);
        debug!(
            record_types = settings.record_types.len(),
            concurrency = settings.concurrency,
            "Discovery settings"
        );

        let export = ExportGraphUseCase::new(
            default_exporters(),
            config.export.palette()?,
            config.layout.options(),
        );

        Ok(Self {
            explore: ExploreDomainUseCase::new(resolver, settings),
            export,
        })
    }
}
