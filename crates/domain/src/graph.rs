use crate::dns_record::RecordType;
use crate::domain_name::DomainName;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fmt;

/// 1-based breadth-first depth at which a domain was first visited.
pub type Layer = u32;

/// What made the source domain point at the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeOrigin {
    Parent,
    Record(RecordType),
}

impl EdgeOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeOrigin::Parent => "parent",
            EdgeOrigin::Record(record_type) => record_type.as_str(),
        }
    }
}

impl fmt::Display for EdgeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: DomainName,
    pub target: DomainName,
    pub via: EdgeOrigin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub domain: DomainName,
    pub layer: Layer,
}

/// Layer-tagged nodes and directed edges, both kept in insertion order.
///
/// A node's layer is fixed by its first insertion. Edges are not
/// deduplicated and may point at domains that never became nodes (targets
/// left in the frontier when the layer bound was reached).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveryGraph {
    nodes: Vec<GraphNode>,
    index: FxHashMap<DomainName, usize>,
    edges: Vec<Edge>,
}

impl DiscoveryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` and leaves the existing layer untouched when the
    /// domain is already a node.
    pub fn add_node(&mut self, domain: DomainName, layer: Layer) -> bool {
        if self.index.contains_key(&domain) {
            return false;
        }
        self.index.insert(domain.clone(), self.nodes.len());
        self.nodes.push(GraphNode { domain, layer });
        true
    }

    pub fn add_edge(&mut self, source: DomainName, target: DomainName, via: EdgeOrigin) {
        self.edges.push(Edge {
            source,
            target,
            via,
        });
    }

    pub fn contains(&self, domain: &DomainName) -> bool {
        self.index.contains_key(domain)
    }

    pub fn layer_of(&self, domain: &DomainName) -> Option<Layer> {
        self.index.get(domain).map(|&i| self.nodes[i].layer)
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Domains grouped by layer, each group in lexicographic order.
    pub fn layers(&self) -> BTreeMap<Layer, Vec<&DomainName>> {
        let mut grouped: BTreeMap<Layer, Vec<&DomainName>> = BTreeMap::new();
        for node in &self.nodes {
            grouped.entry(node.layer).or_default().push(&node.domain);
        }
        for domains in grouped.values_mut() {
            domains.sort();
        }
        grouped
    }

    /// Every node's domain in lexicographic order.
    pub fn sorted_domains(&self) -> Vec<&DomainName> {
        let mut domains: Vec<&DomainName> = self.nodes.iter().map(|n| &n.domain).collect();
        domains.sort();
        domains
    }
}
