pub mod discovery;
pub mod export;

pub use discovery::{ExplorationReport, ExploreDomainUseCase, ExploreSettings, LayerReport};
pub use export::{ExportGraphUseCase, ExportedFile};
