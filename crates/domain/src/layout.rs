//! Layered, parent-relative placement of discovery graph nodes.

use crate::domain_name::DomainName;
use crate::graph::{DiscoveryGraph, Layer};
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub x_spacing: f64,
    pub y_spacing: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            x_spacing: 3.0,
            y_spacing: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

fn stacked_y(count: usize, index: usize, center: f64, spacing: f64) -> f64 {
    let half_span = (count as f64 - 1.0) / 2.0;
    center + (half_span - index as f64) * spacing
}

fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Places every node at `x = layer * x_spacing`.
///
/// The lowest layer is stacked in lexicographic order around `y = 0`. Each
/// later layer is ordered by the mean `y` of its already placed predecessors
/// (0 when there are none), highest first with ties broken by name, then
/// stacked `y_spacing` apart around the mean of those targets. Same-layer
/// nodes therefore never overlap.
pub fn hierarchical_layout(
    graph: &DiscoveryGraph,
    options: LayoutOptions,
) -> BTreeMap<DomainName, Position> {
    let mut predecessors: FxHashMap<&DomainName, BTreeSet<&DomainName>> = FxHashMap::default();
    for edge in graph.edges() {
        predecessors
            .entry(&edge.target)
            .or_default()
            .insert(&edge.source);
    }

    let mut positions: BTreeMap<DomainName, Position> = BTreeMap::new();

    for (rank, (layer, domains)) in graph.layers().into_iter().enumerate() {
        let x = layer_x(layer, options.x_spacing);

        if rank == 0 {
            let count = domains.len();
            for (index, domain) in domains.into_iter().enumerate() {
                let y = stacked_y(count, index, 0.0, options.y_spacing);
                positions.insert(domain.clone(), Position { x, y });
            }
            continue;
        }

        let mut targets: Vec<(&DomainName, f64)> = domains
            .into_iter()
            .map(|domain| {
                let placed_parents = predecessors
                    .get(domain)
                    .into_iter()
                    .flatten()
                    .filter_map(|p| positions.get(*p).map(|pos| pos.y));
                (domain, mean(placed_parents).unwrap_or(0.0))
            })
            .collect();

        targets.sort_by(|(a_name, a_y), (b_name, b_y)| {
            b_y.total_cmp(a_y).then_with(|| a_name.cmp(b_name))
        });

        let center = mean(targets.iter().map(|(_, y)| *y)).unwrap_or(0.0);
        let count = targets.len();
        for (index, (domain, _)) in targets.into_iter().enumerate() {
            let y = stacked_y(count, index, center, options.y_spacing);
            positions.insert(domain.clone(), Position { x, y });
        }
    }

    positions
}

fn layer_x(layer: Layer, spacing: f64) -> f64 {
    f64::from(layer) * spacing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeOrigin;

    fn d(name: &str) -> DomainName {
        DomainName::parse(name).unwrap()
    }

    #[test]
    fn test_stacked_y_is_centered() {
        assert_eq!(stacked_y(1, 0, 0.0, 1.0), 0.0);
        assert_eq!(stacked_y(3, 0, 0.0, 1.0), 1.0);
        assert_eq!(stacked_y(3, 2, 0.0, 1.0), -1.0);
        assert_eq!(stacked_y(2, 0, 5.0, 2.0), 6.0);
    }

    #[test]
    fn test_empty_graph_has_no_positions() {
        let positions = hierarchical_layout(&DiscoveryGraph::new(), LayoutOptions::default());
        assert!(positions.is_empty());
    }

    #[test]
    fn test_orphan_in_later_layer_targets_zero() {
        let mut graph = DiscoveryGraph::new();
        graph.add_node(d("root.example"), 1);
        graph.add_node(d("orphan.example"), 2);
        graph.add_edge(d("elsewhere.example"), d("orphan.example"), EdgeOrigin::Parent);

        let positions = hierarchical_layout(&graph, LayoutOptions::default());
        assert_eq!(positions[&d("orphan.example")], Position { x: 6.0, y: 0.0 });
    }
}
