use super::{export_error, write_file};
use async_trait::async_trait;
use dnsmap_application::ports::{GraphExporter, GraphSnapshot};
use dnsmap_domain::{DomainError, ExportFormat, Layer};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Serialize)]
struct GraphDocument<'a> {
    start: &'a str,
    nodes: Vec<NodeEntry<'a>>,
    edges: Vec<EdgeEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct NodeEntry<'a> {
    domain: &'a str,
    layer: Layer,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<f64>,
}

#[derive(Debug, Serialize)]
struct EdgeEntry<'a> {
    source: &'a str,
    target: &'a str,
    via: &'static str,
}

/// Nodes with their layer and layout position, edges with provenance.
pub struct JsonFileExporter;

impl JsonFileExporter {
    pub fn render(snapshot: &GraphSnapshot) -> Result<String, DomainError> {
        let nodes = snapshot
            .graph
            .nodes()
            .iter()
            .map(|node| {
                let position = snapshot.positions.get(&node.domain);
                NodeEntry {
                    domain: node.domain.as_str(),
                    layer: node.layer,
                    x: position.map(|p| p.x),
                    y: position.map(|p| p.y),
                }
            })
            .collect();

        let edges = snapshot
            .graph
            .edges()
            .iter()
            .map(|edge| EdgeEntry {
                source: edge.source.as_str(),
                target: edge.target.as_str(),
                via: edge.via.as_str(),
            })
            .collect();

        let document = GraphDocument {
            start: snapshot.start.as_str(),
            nodes,
            edges,
        };

        serde_json::to_string_pretty(&document)
            .map_err(|e| export_error(ExportFormat::Json, e.to_string()))
    }
}

#[async_trait]
impl GraphExporter for JsonFileExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    async fn export(&self, snapshot: &GraphSnapshot, output: &Path) -> Result<(), DomainError> {
        let json = Self::render(snapshot)?;
        write_file(ExportFormat::Json, output, json.as_bytes()).await?;
        debug!(path = %output.display(), "JSON snapshot written");
        Ok(())
    }
}
