mod explore_domain;

pub use explore_domain::{ExplorationReport, ExploreDomainUseCase, ExploreSettings, LayerReport};
