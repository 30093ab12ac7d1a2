//! Breadth-first layer stepping over the domain graph.
//!
//! [`DiscoveryState`] is consumed and returned by every layer step, so each
//! step can be driven and inspected on its own. Record resolution happens
//! outside: the caller asks for [`DiscoveryState::pending`], resolves those
//! domains however it likes, and feeds the results to
//! [`DiscoveryState::advance`].

use crate::dns_record::{LookupTally, RecordSet};
use crate::domain_name::DomainName;
use crate::errors::DomainError;
use crate::extraction::extract_links;
use crate::graph::{DiscoveryGraph, Layer};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The configured number of layers was explored.
    LayerBound,
    /// No unvisited domain was left to resolve.
    FrontierExhausted,
}

/// What one layer step did.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSummary {
    pub layer: Layer,
    pub resolved: Vec<DomainName>,
    pub discovered: usize,
    pub lookups: LookupTally,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryState {
    graph: DiscoveryGraph,
    frontier: BTreeSet<DomainName>,
    completed_layers: Layer,
}

/// Frozen result of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryOutcome {
    pub graph: DiscoveryGraph,
    pub completed_layers: Layer,
    pub termination: Termination,
    /// Domains discovered by the last layer but never resolved.
    pub unexplored: BTreeSet<DomainName>,
}

impl DiscoveryState {
    pub fn new(start: DomainName) -> Self {
        Self {
            graph: DiscoveryGraph::new(),
            frontier: BTreeSet::from([start]),
            completed_layers: 0,
        }
    }

    pub fn completed_layers(&self) -> Layer {
        self.completed_layers
    }

    pub fn next_layer(&self) -> Layer {
        self.completed_layers + 1
    }

    pub fn graph(&self) -> &DiscoveryGraph {
        &self.graph
    }

    /// Frontier minus every visited domain, in lexicographic order.
    pub fn pending(&self) -> Vec<DomainName> {
        self.frontier
            .iter()
            .filter(|d| !self.graph.contains(d))
            .cloned()
            .collect()
    }

    pub fn is_exhausted(&self) -> bool {
        self.frontier.iter().all(|d| self.graph.contains(d))
    }

    /// Explores one layer using `resolved` as the records of each pending
    /// domain. Pending domains missing from `resolved` count as having no
    /// records; entries for other domains are ignored.
    pub fn advance(mut self, resolved: &BTreeMap<DomainName, RecordSet>) -> (Self, LayerSummary) {
        let layer = self.next_layer();
        let to_resolve = self.pending();
        let empty = RecordSet::new();

        for domain in &to_resolve {
            self.graph.add_node(domain.clone(), layer);
        }

        let mut next_frontier = BTreeSet::new();
        let mut lookups = LookupTally::default();

        for domain in &to_resolve {
            let records = resolved.get(domain).unwrap_or(&empty);
            lookups.merge(records.tally());

            for link in extract_links(records, domain) {
                // visited already includes the whole layer being resolved
                if self.graph.contains(&link.target) {
                    continue;
                }
                self.graph
                    .add_edge(domain.clone(), link.target.clone(), link.via);
                next_frontier.insert(link.target);
            }
        }

        let summary = LayerSummary {
            layer,
            resolved: to_resolve,
            discovered: next_frontier.len(),
            lookups,
        };

        self.frontier = next_frontier;
        self.completed_layers = layer;
        (self, summary)
    }

    pub fn finish(self, termination: Termination) -> DiscoveryOutcome {
        let unexplored = self
            .frontier
            .into_iter()
            .filter(|d| !self.graph.contains(d))
            .collect();
        DiscoveryOutcome {
            graph: self.graph,
            completed_layers: self.completed_layers,
            termination,
            unexplored,
        }
    }
}

/// Rejects run parameters that would explore nothing.
pub fn validate_run(start: &str, max_layers: Layer) -> Result<DomainName, DomainError> {
    if max_layers == 0 {
        return Err(DomainError::ConfigError(
            "max_layers must be at least 1".to_string(),
        ));
    }
    DomainName::parse(start)
        .map_err(|e| DomainError::ConfigError(format!("Invalid start domain: {}", e)))
}

/// Runs a whole discovery synchronously, resolving each domain with
/// `resolve` exactly once.
pub fn discover_with<F>(
    start: &str,
    max_layers: Layer,
    mut resolve: F,
) -> Result<DiscoveryOutcome, DomainError>
where
    F: FnMut(&DomainName) -> RecordSet,
{
    let start = validate_run(start, max_layers)?;
    let mut state = DiscoveryState::new(start);

    loop {
        let pending = state.pending();
        if pending.is_empty() {
            return Ok(state.finish(Termination::FrontierExhausted));
        }

        let resolved: BTreeMap<DomainName, RecordSet> = pending
            .into_iter()
            .map(|domain| {
                let records = resolve(&domain);
                (domain, records)
            })
            .collect();

        let (next, _) = state.advance(&resolved);
        state = next;

        if state.completed_layers() == max_layers {
            let termination = if state.is_exhausted() {
                Termination::FrontierExhausted
            } else {
                Termination::LayerBound
            };
            return Ok(state.finish(termination));
        }
    }
}
