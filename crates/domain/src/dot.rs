//! DOT text rendering of a discovery graph.

use crate::graph::{DiscoveryGraph, Layer};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Fill colors keyed by layer, with a fallback for unlisted layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerPalette {
    colors: BTreeMap<Layer, String>,
    default_color: String,
}

impl LayerPalette {
    pub fn new(default_color: impl Into<String>) -> Self {
        Self {
            colors: BTreeMap::new(),
            default_color: default_color.into(),
        }
    }

    pub fn with_color(mut self, layer: Layer, color: impl Into<String>) -> Self {
        self.colors.insert(layer, color.into());
        self
    }

    pub fn from_map(colors: BTreeMap<Layer, String>, default_color: impl Into<String>) -> Self {
        Self {
            colors,
            default_color: default_color.into(),
        }
    }

    pub fn color_for(&self, layer: Layer) -> &str {
        self.colors
            .get(&layer)
            .map(String::as_str)
            .unwrap_or(&self.default_color)
    }

    pub fn default_color(&self) -> &str {
        &self.default_color
    }
}

impl Default for LayerPalette {
    fn default() -> Self {
        LayerPalette::new("#DDA0DD")
            .with_color(1, "#6624a8")
            .with_color(2, "#4ECDC4")
            .with_color(3, "#45B7D1")
            .with_color(4, "#96CEB4")
    }
}

/// Quotes `id` as a DOT string literal.
pub fn quote_id(id: &str) -> String {
    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    for c in id.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Renders nodes then edges in the graph's insertion order.
///
/// Edges take the fill color of their source node; edges whose source is
/// not a node use the palette's default color.
pub fn to_dot(graph: &DiscoveryGraph, palette: &LayerPalette) -> String {
    let mut out = String::new();
    out.push_str("digraph dns {\n");
    out.push_str("    node [style=filled];\n");

    // writing to a String cannot fail
    for node in graph.nodes() {
        let _ = writeln!(
            out,
            "    {} [fillcolor={}];",
            quote_id(node.domain.as_str()),
            quote_id(palette.color_for(node.layer))
        );
    }

    for edge in graph.edges() {
        let color = graph
            .layer_of(&edge.source)
            .map(|layer| palette.color_for(layer))
            .unwrap_or(palette.default_color());
        let _ = writeln!(
            out,
            "    {} -> {} [color={}];",
            quote_id(edge.source.as_str()),
            quote_id(edge.target.as_str()),
            quote_id(color)
        );
    }

    out.push_str("}\n");
    out
}
