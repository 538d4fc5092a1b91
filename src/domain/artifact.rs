//! Final document assembly.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::info;
use uuid::Uuid;

use crate::domain::AppError;
use crate::domain::generation::{ImagePayload, NarrativeResult};
use crate::domain::map::{BODY_MARKER, MapDocument};
use crate::domain::prompt::{TemplateContext, TemplateRenderer};

pub const NARRATIVE_BLOCK_TEMPLATE: &str = "narrative_block.html.j2";
pub const IMAGE_BLOCK_TEMPLATE: &str = "image_block.html.j2";

/// Finished HTML page and the file name it is stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub html: String,
    pub file_name: String,
}

impl OutputArtifact {
    /// Wrap finished HTML under a fresh `trip_<uuid>.html` name.
    pub fn new(html: String) -> Self {
        Self { html, file_name: format!("trip_{}.html", Uuid::new_v4().simple()) }
    }
}

/// Splice the narrative block, then one block per image, directly after the
/// document's body-opening tag. Everything else in the map page is kept as is.
///
/// The marker must occur exactly once; anything else is a broken map page.
pub fn assemble(
    renderer: &impl TemplateRenderer,
    map: &MapDocument,
    narrative: &NarrativeResult,
    images: &[ImagePayload],
) -> Result<OutputArtifact, AppError> {
    let html = map.html();
    let markers: Vec<usize> = html.match_indices(BODY_MARKER).map(|(index, _)| index).collect();
    let insert_at = match markers.as_slice() {
        [index] => index + BODY_MARKER.len(),
        [] => {
            return Err(AppError::Assembly(format!("map document has no {BODY_MARKER} marker")));
        }
        many => {
            return Err(AppError::Assembly(format!(
                "map document has {} {BODY_MARKER} markers; expected exactly one",
                many.len()
            )));
        }
    };

    let mut injected = renderer.render(
        NARRATIVE_BLOCK_TEMPLATE,
        &TemplateContext::new().with_var("narrative", narrative.body_html()),
    )?;
    for image in images {
        let context = TemplateContext::new()
            .with_var("mime_type", image.encoding.mime_type())
            .with_var("data", STANDARD.encode(&image.bytes));
        injected.push_str(&renderer.render(IMAGE_BLOCK_TEMPLATE, &context)?);
    }
    info!(images = images.len(), "assembled output document");

    let mut output = String::with_capacity(html.len() + injected.len());
    output.push_str(&html[..insert_at]);
    output.push_str(&injected);
    output.push_str(&html[insert_at..]);

    Ok(OutputArtifact::new(output))
}
