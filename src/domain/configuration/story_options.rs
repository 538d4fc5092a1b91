use std::path::PathBuf;

use crate::domain::PresentationParams;
use crate::domain::normalize::InlinePoint;

/// Default track file used when no input is given.
pub const DEFAULT_GPX_PATH: &str = "inputs/ottawa.gpx";

/// Where the trip points come from.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackInput {
    /// GPX file on disk.
    Gpx(PathBuf),
    /// Points given directly by the caller.
    Inline(Vec<InlinePoint>),
}

impl Default for TrackInput {
    fn default() -> Self {
        TrackInput::Gpx(PathBuf::from(DEFAULT_GPX_PATH))
    }
}

/// Options for the story command.
#[derive(Debug, Clone, Default)]
pub struct StoryOptions {
    /// Trip input.
    pub input: TrackInput,
    /// Tone, focus and length of the journal entry.
    pub params: PresentationParams,
    /// Explicit configuration file; `stroll.toml` is used when present otherwise.
    pub config_path: Option<PathBuf>,
    /// Override of the configured output directory.
    pub output_dir: Option<PathBuf>,
    /// Print the narrative prompt without calling the backend.
    pub prompt_preview: bool,
    /// Use the offline client instead of the generation API.
    pub mock: bool,
}
