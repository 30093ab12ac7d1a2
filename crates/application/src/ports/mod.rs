mod graph_exporter;
mod record_resolver;

pub use graph_exporter::{GraphExporter, GraphSnapshot};
pub use record_resolver::RecordResolver;
