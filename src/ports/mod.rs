mod artifact_store;
mod map_renderer;
mod narrative_client;

pub use artifact_store::ArtifactStore;
pub use map_renderer::MapRenderer;
pub use narrative_client::{MockNarrativeClient, NarrativeClient, NarrativeClientFactory};
