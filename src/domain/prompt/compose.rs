use tracing::debug;

use super::template::{TemplateContext, TemplateRenderer};
use crate::domain::generation::NarrativeResult;
use crate::domain::presentation::PresentationParams;
use crate::domain::trip::RouteTranscript;
use crate::domain::AppError;

pub const NARRATIVE_PROMPT_TEMPLATE: &str = "narrative_prompt.j2";
pub const IMAGE_PROMPT_TEMPLATE: &str = "image_prompt.j2";

/// Build the journal-entry prompt from the route transcript.
///
/// Same inputs always give the same prompt text.
pub fn build_narrative_prompt(
    renderer: &impl TemplateRenderer,
    transcript: &RouteTranscript,
    params: PresentationParams,
) -> Result<String, AppError> {
    let context = TemplateContext::new()
        .with_var("transcript", transcript.as_str())
        .with_var("tone", params.tone.as_str())
        .with_var("focus", params.focus.prompt_label())
        .with_var("length", params.length.as_str());

    let prompt = renderer.render(NARRATIVE_PROMPT_TEMPLATE, &context)?;
    debug!(chars = prompt.len(), "built narrative prompt");
    Ok(prompt)
}

/// Build the illustration prompt from an already generated narrative.
pub fn build_image_prompt(
    renderer: &impl TemplateRenderer,
    narrative: &NarrativeResult,
) -> Result<String, AppError> {
    let context = TemplateContext::new().with_var("journal_entry", narrative.body_html());

    let prompt = renderer.render(IMAGE_PROMPT_TEMPLATE, &context)?;
    debug!(chars = prompt.len(), "built image prompt");
    Ok(prompt)
}
