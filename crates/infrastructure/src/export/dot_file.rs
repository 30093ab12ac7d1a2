use super::write_file;
use async_trait::async_trait;
use dnsmap_application::ports::{GraphExporter, GraphSnapshot};
use dnsmap_domain::{DomainError, ExportFormat};
use std::path::Path;
use tracing::debug;

/// Writes the DOT text as-is.
pub struct DotFileExporter;

#[async_trait]
impl GraphExporter for DotFileExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Dot
    }

    async fn export(&self, snapshot: &GraphSnapshot, output: &Path) -> Result<(), DomainError> {
        write_file(ExportFormat::Dot, output, snapshot.dot.as_bytes()).await?;
        debug!(path = %output.display(), bytes = snapshot.dot.len(), "DOT file written");
        Ok(())
    }
}
