use dnsmap_application::ports::GraphSnapshot;
use dnsmap_domain::{
    hierarchical_layout, to_dot, DiscoveryGraph, DomainName, EdgeOrigin, LayerPalette,
    LayoutOptions, RecordType,
};

pub fn d(name: &str) -> DomainName {
    DomainName::parse(name).unwrap()
}

/// Builds a small discovery graph and its export snapshot.
pub struct SnapshotBuilder {
    start: DomainName,
    graph: DiscoveryGraph,
}

impl SnapshotBuilder {
    pub fn new(start: &str) -> Self {
        let mut graph = DiscoveryGraph::new();
        graph.add_node(d(start), 1);
        Self {
            start: d(start),
            graph,
        }
    }

    pub fn node(mut self, domain: &str, layer: u32) -> Self {
        self.graph.add_node(d(domain), layer);
        self
    }

    pub fn parent_edge(mut self, source: &str, target: &str) -> Self {
        self.graph.add_edge(d(source), d(target), EdgeOrigin::Parent);
        self
    }

    pub fn record_edge(mut self, source: &str, target: &str, via: RecordType) -> Self {
        self.graph
            .add_edge(d(source), d(target), EdgeOrigin::Record(via));
        self
    }

    pub fn build(self) -> GraphSnapshot {
        GraphSnapshot {
            positions: hierarchical_layout(&self.graph, LayoutOptions::default()),
            dot: to_dot(&self.graph, &LayerPalette::default()),
            start: self.start,
            graph: self.graph,
        }
    }
}
