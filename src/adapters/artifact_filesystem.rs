use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::domain::{AppError, OutputArtifact};
use crate::ports::ArtifactStore;

/// Writes finished pages into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct FilesystemArtifactStore {
    dir: PathBuf,
}

impl FilesystemArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn save(&self, artifact: &OutputArtifact) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&artifact.file_name);
        fs::write(&path, &artifact.html)?;
        info!(path = %path.display(), bytes = artifact.html.len(), "wrote output document");
        Ok(path)
    }
}
