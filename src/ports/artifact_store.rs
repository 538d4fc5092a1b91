use std::path::PathBuf;

use crate::domain::{AppError, OutputArtifact};

/// Port for persisting the finished page.
pub trait ArtifactStore {
    /// Store the artifact and return where it was written.
    fn save(&self, artifact: &OutputArtifact) -> Result<PathBuf, AppError>;
}
