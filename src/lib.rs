//! stroll-story: turn a recorded walk into a generated journal entry, an
//! illustration and a route map, assembled into one standalone HTML page.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::artifact_filesystem::FilesystemArtifactStore;
use adapters::map_renderer::LeafletMapRenderer;
use adapters::template::EmbeddedTemplateRenderer;
use app::AppContext;
use app::commands::story as story_command;
use app::config::{LazyClientFactory, MockClientFactory};
use domain::StoryConfig;
use domain::configuration::load_config;
use ports::NarrativeClientFactory;

pub use app::commands::story::StoryOutcome;
pub use domain::{
    AppError, Focus, InlinePoint, Length, PresentationParams, StoryOptions, Tone, TrackInput,
};

/// Run the story pipeline with the generation backend selected by `options`.
///
/// The API key is read from `GEMINI_API_KEY` unless `options.mock` or
/// `options.prompt_preview` is set.
pub fn story(options: StoryOptions) -> Result<StoryOutcome, AppError> {
    let config = load_config(options.config_path.as_deref())?;
    if options.mock {
        return run_story(&options, config, &MockClientFactory);
    }
    let factory = LazyClientFactory::new(config.gemini.clone());
    run_story(&options, config, &factory)
}

/// Run the story pipeline with a caller-supplied generation backend.
pub fn story_with_factory(
    options: StoryOptions,
    client_factory: &impl NarrativeClientFactory,
) -> Result<StoryOutcome, AppError> {
    let config = load_config(options.config_path.as_deref())?;
    run_story(&options, config, client_factory)
}

fn run_story(
    options: &StoryOptions,
    config: StoryConfig,
    client_factory: &impl NarrativeClientFactory,
) -> Result<StoryOutcome, AppError> {
    let output_dir = options.output_dir.clone().unwrap_or(config.output.dir);

    let ctx = AppContext::new(
        EmbeddedTemplateRenderer::new(),
        LeafletMapRenderer::new(EmbeddedTemplateRenderer::new()),
        FilesystemArtifactStore::new(output_dir),
    );

    story_command::execute(&ctx, options, client_factory)
}
