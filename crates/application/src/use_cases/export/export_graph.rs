use crate::ports::{GraphExporter, GraphSnapshot};
use dnsmap_domain::{
    hierarchical_layout, to_dot, DiscoveryGraph, DomainError, DomainName, ExportFormat,
    LayerPalette, LayoutOptions,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug)]
pub struct ExportedFile {
    pub format: ExportFormat,
    pub result: Result<PathBuf, DomainError>,
}

pub struct ExportGraphUseCase {
    exporters: Vec<Arc<dyn GraphExporter>>,
    palette: LayerPalette,
    layout: LayoutOptions,
}

impl ExportGraphUseCase {
    pub fn new(
        exporters: Vec<Arc<dyn GraphExporter>>,
        palette: LayerPalette,
        layout: LayoutOptions,
    ) -> Self {
        Self {
            exporters,
            palette,
            layout,
        }
    }

    pub fn snapshot(&self, start: &DomainName, graph: &DiscoveryGraph) -> GraphSnapshot {
        GraphSnapshot {
            start: start.clone(),
            graph: graph.clone(),
            positions: hierarchical_layout(graph, self.layout),
            dot: to_dot(graph, &self.palette),
        }
    }

    pub fn file_name(start: &DomainName, format: ExportFormat) -> String {
        format!("dns_graph_{}.{}", start.as_str(), format.extension())
    }

    /// Writes one file per requested format. A failing format is reported in
    /// its own entry and does not stop the others.
    pub async fn execute(
        &self,
        start: &DomainName,
        graph: &DiscoveryGraph,
        output_dir: &Path,
        formats: &[ExportFormat],
    ) -> Vec<ExportedFile> {
        let snapshot = self.snapshot(start, graph);
        let mut exported = Vec::with_capacity(formats.len());

        for &format in formats {
            let path = output_dir.join(Self::file_name(start, format));
            let result = match self.exporters.iter().find(|e| e.format() == format) {
                Some(exporter) => exporter.export(&snapshot, &path).await.map(|_| path),
                None => Err(DomainError::ExportFailed {
                    format: format.to_string(),
                    reason: "no exporter registered".to_string(),
                }),
            };

            match &result {
                Ok(path) => info!(format = %format, path = %path.display(), "Graph exported"),
                Err(e) => warn!(format = %format, error = %e, "Graph export failed"),
            }
            exported.push(ExportedFile { format, result });
        }

        exported
    }
}
