use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, OutputArtifact};
use crate::ports::ArtifactStore;

/// Keeps saved artifacts in memory.
#[derive(Clone, Default)]
pub struct MemoryArtifactStore {
    pub saved: Arc<Mutex<Vec<OutputArtifact>>>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_saved(&self) -> Vec<OutputArtifact> {
        self.saved.lock().unwrap().clone()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn save(&self, artifact: &OutputArtifact) -> Result<PathBuf, AppError> {
        self.saved.lock().unwrap().push(artifact.clone());
        Ok(PathBuf::from("memory").join(&artifact.file_name))
    }
}
