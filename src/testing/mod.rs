mod fake_narrative_client;
mod memory_artifact_store;

pub use fake_narrative_client::{ClientCall, FakeNarrativeClient, FakeNarrativeClientFactory};
pub use memory_artifact_store::MemoryArtifactStore;
