use crate::ports::RecordResolver;
use dnsmap_domain::{
    validate_run, DiscoveryOutcome, DiscoveryState, DomainError, DomainName, ExplorerConfig,
    Layer, LayerSummary, LookupTally, RecordSet, RecordType, Termination,
};
use futures::stream::{self, StreamExt};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ExploreSettings {
    pub record_types: Vec<RecordType>,
    pub query_timeout: Duration,
    pub concurrency: usize,
}

impl ExploreSettings {
    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self {
            record_types: config.discovery.record_types.clone(),
            query_timeout: config.resolver.query_timeout(),
            concurrency: config.discovery.concurrency,
        }
    }
}

impl Default for ExploreSettings {
    fn default() -> Self {
        Self::from_config(&ExplorerConfig::default())
    }
}

/// One explored layer with the records behind it.
#[derive(Debug, Clone)]
pub struct LayerReport {
    pub summary: LayerSummary,
    pub records: BTreeMap<DomainName, RecordSet>,
}

#[derive(Debug, Clone)]
pub struct ExplorationReport {
    pub start: DomainName,
    pub outcome: DiscoveryOutcome,
    pub layers: Vec<LayerReport>,
    pub elapsed: Duration,
}

impl ExplorationReport {
    pub fn lookups(&self) -> LookupTally {
        let mut total = LookupTally::default();
        for layer in &self.layers {
            total.merge(layer.summary.lookups);
        }
        total
    }
}

pub struct ExploreDomainUseCase {
    resolver: Arc<dyn RecordResolver>,
    settings: ExploreSettings,
}

impl ExploreDomainUseCase {
    pub fn new(resolver: Arc<dyn RecordResolver>, settings: ExploreSettings) -> Self {
        Self { resolver, settings }
    }

    pub async fn execute(
        &self,
        start: &str,
        max_layers: Layer,
    ) -> Result<ExplorationReport, DomainError> {
        let start = validate_run(start, max_layers)?;
        if self.settings.record_types.is_empty() {
            return Err(DomainError::ConfigError(
                "No record types to query".to_string(),
            ));
        }

        let started = Instant::now();
        info!(domain = %start, max_layers, "Starting layered DNS discovery");

        let mut state = DiscoveryState::new(start.clone());
        let mut layers = Vec::new();

        let termination = loop {
            let pending = state.pending();
            if pending.is_empty() {
                info!(
                    completed_layers = state.completed_layers(),
                    "No domains left to explore"
                );
                break Termination::FrontierExhausted;
            }

            let layer = state.next_layer();
            info!(layer, domains = pending.len(), "Resolving layer");

            let records = self.resolve_layer(pending).await;
            let (next, summary) = state.advance(&records);
            state = next;

            info!(
                layer = summary.layer,
                resolved = summary.resolved.len(),
                discovered = summary.discovered,
                answered = summary.lookups.answered,
                failed = summary.lookups.failed,
                "Layer complete"
            );
            layers.push(LayerReport { summary, records });

            if state.completed_layers() == max_layers {
                break if state.is_exhausted() {
                    Termination::FrontierExhausted
                } else {
                    Termination::LayerBound
                };
            }
        };

        let outcome = state.finish(termination);
        info!(
            domains = outcome.graph.node_count(),
            edges = outcome.graph.edge_count(),
            unexplored = outcome.unexplored.len(),
            termination = ?outcome.termination,
            "Discovery finished"
        );

        Ok(ExplorationReport {
            start,
            outcome,
            layers,
            elapsed: started.elapsed(),
        })
    }

    /// Resolves a whole frontier with bounded concurrency. Results are keyed
    /// by domain so merging does not depend on completion order.
    async fn resolve_layer(&self, pending: Vec<DomainName>) -> BTreeMap<DomainName, RecordSet> {
        let resolver = &self.resolver;
        let types = self.settings.record_types.as_slice();
        let timeout = self.settings.query_timeout;

        stream::iter(pending)
            .map(|domain| async move {
                let records = resolver.resolve(&domain, types, timeout).await;
                let tally = records.tally();
                debug!(
                    domain = %domain,
                    answered = tally.answered,
                    failed = tally.failed,
                    "Domain resolved"
                );
                for (record_type, failure) in records.failures() {
                    debug!(
                        domain = %domain,
                        record_type = %record_type,
                        failure = ?failure,
                        "Lookup absorbed"
                    );
                }
                (domain, records)
            })
            .buffer_unordered(self.settings.concurrency.max(1))
            .collect()
            .await
    }
}
