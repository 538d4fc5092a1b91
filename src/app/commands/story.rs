//! Story command: track input to finished HTML page.

use std::path::PathBuf;

use tracing::info;

use crate::adapters::gpx_parser::read_gpx_file;
use crate::app::AppContext;
use crate::domain::{
    AppError, Route, RouteTranscript, StoryOptions, TemplateRenderer, TrackInput, assemble,
    build_image_prompt, build_narrative_prompt, classify, normalize, normalize_inline,
};
use crate::ports::{ArtifactStore, MapRenderer, NarrativeClientFactory};

/// What a story run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryOutcome {
    /// Narrative prompt only; nothing was generated or written.
    Preview { prompt: String },
    /// Finished page written to `path`.
    Saved { path: PathBuf },
}

/// Execute the story pipeline.
///
/// The map is rendered before any backend call, text generation completes
/// before the image prompt is built, and nothing is written unless every
/// stage succeeds.
pub fn execute<T, M, S, F>(
    ctx: &AppContext<T, M, S>,
    options: &StoryOptions,
    client_factory: &F,
) -> Result<StoryOutcome, AppError>
where
    T: TemplateRenderer,
    M: MapRenderer,
    S: ArtifactStore,
    F: NarrativeClientFactory,
{
    let client = if options.prompt_preview { None } else { Some(client_factory.create()?) };

    let (route, transcript) = load_route(&options.input)?;
    info!(points = route.len(), "normalized track input");

    let prompt = build_narrative_prompt(ctx.templates(), &transcript, options.params)?;
    let Some(client) = client else {
        return Ok(StoryOutcome::Preview { prompt });
    };

    let classified = classify(&route);
    let map = ctx.maps().render(&classified)?;

    let narrative = client.generate_text(&prompt)?;
    info!(chars = narrative.text.len(), "generated narrative");

    let image_prompt = build_image_prompt(ctx.templates(), &narrative)?;
    let images = client.generate_images(&image_prompt)?;
    info!(images = images.len(), "generated illustrations");

    let artifact = assemble(ctx.templates(), &map, &narrative, &images)?;
    let path = ctx.store().save(&artifact)?;

    Ok(StoryOutcome::Saved { path })
}

fn load_route(input: &TrackInput) -> Result<(Route, RouteTranscript), AppError> {
    match input {
        TrackInput::Gpx(path) => {
            let track_file = read_gpx_file(path)?;
            normalize(&track_file, &path.display().to_string())
        }
        TrackInput::Inline(points) => normalize_inline(points),
    }
}
