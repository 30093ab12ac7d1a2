use super::{export_error, write_file};
use async_trait::async_trait;
use dnsmap_application::ports::{GraphExporter, GraphSnapshot};
use dnsmap_domain::{DomainError, ExportFormat};
use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

const DEFAULT_DOT_BINARY: &str = "dot";

/// Renders SVG or PNG by piping the DOT text through Graphviz.
pub struct GraphvizExporter {
    format: ExportFormat,
    binary: String,
}

impl GraphvizExporter {
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            binary: DEFAULT_DOT_BINARY.to_string(),
        }
    }

    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    async fn render(&self, dot: &str) -> Result<Vec<u8>, DomainError> {
        let mut child = Command::new(&self.binary)
            .arg(format!("-T{}", self.format.extension()))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => export_error(
                    self.format,
                    format!("Graphviz '{}' executable not found", self.binary),
                ),
                _ => export_error(self.format, format!("cannot run '{}': {}", self.binary, e)),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(dot.as_bytes())
                .await
                .map_err(|e| export_error(self.format, format!("cannot feed Graphviz: {}", e)))?;
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| export_error(self.format, e.to_string()))?;

        if !output.status.success() {
            return Err(export_error(
                self.format,
                format!(
                    "Graphviz exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            ));
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl GraphExporter for GraphvizExporter {
    fn format(&self) -> ExportFormat {
        self.format
    }

    async fn export(&self, snapshot: &GraphSnapshot, output: &Path) -> Result<(), DomainError> {
        let rendered = self.render(&snapshot.dot).await?;
        write_file(self.format, output, &rendered).await?;
        debug!(
            format = %self.format,
            path = %output.display(),
            bytes = rendered.len(),
            "Graphviz rendering written"
        );
        Ok(())
    }
}
