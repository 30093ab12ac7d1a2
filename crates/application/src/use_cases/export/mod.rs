mod export_graph;

pub use export_graph::{ExportGraphUseCase, ExportedFile};
