pub mod dot_file;
pub mod graphviz;
pub mod json_file;

pub use dot_file::DotFileExporter;
pub use graphviz::GraphvizExporter;
pub use json_file::JsonFileExporter;

use dnsmap_application::ports::GraphExporter;
use dnsmap_domain::{DomainError, ExportFormat};
use std::path::Path;
use std::sync::Arc;

/// One exporter per supported format.
pub fn default_exporters() -> Vec<Arc<dyn GraphExporter>> {
    vec![
        Arc::new(DotFileExporter),
        Arc::new(JsonFileExporter),
        Arc::new(GraphvizExporter::new(ExportFormat::Svg)),
        Arc::new(GraphvizExporter::new(ExportFormat::Png)),
    ]
}

pub(crate) fn export_error(format: ExportFormat, reason: impl Into<String>) -> DomainError {
    DomainError::ExportFailed {
        format: format.to_string(),
        reason: reason.into(),
    }
}

pub(crate) async fn write_file(
    format: ExportFormat,
    output: &Path,
    bytes: &[u8],
) -> Result<(), DomainError> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            export_error(format, format!("cannot create {}: {}", parent.display(), e))
        })?;
    }
    tokio::fs::write(output, bytes)
        .await
        .map_err(|e| export_error(format, format!("cannot write {}: {}", output.display(), e)))
}
