//! Narrative generation port definition.

use crate::domain::{AppError, ImagePayload, NarrativeResult};

/// Port for the text and image generation backend.
pub trait NarrativeClient {
    /// Generate the journal entry for a narrative prompt.
    fn generate_text(&self, prompt: &str) -> Result<NarrativeResult, AppError>;

    /// Generate illustrations for an image prompt.
    ///
    /// An empty list is a valid answer.
    fn generate_images(&self, prompt: &str) -> Result<Vec<ImagePayload>, AppError>;
}

impl<T: NarrativeClient + ?Sized> NarrativeClient for Box<T> {
    fn generate_text(&self, prompt: &str) -> Result<NarrativeResult, AppError> {
        (**self).generate_text(prompt)
    }

    fn generate_images(&self, prompt: &str) -> Result<Vec<ImagePayload>, AppError> {
        (**self).generate_images(prompt)
    }
}

const MOCK_NARRATIVE: &str = "<h3>A Stroll Through Town</h3>\n\
<p>The walk began under a mild sky and wound past the old stone buildings \
before following the water for a while. The pace was easy, with time to stop \
and look around.</p>\n\
<p>Next time: loop back along the other bank and finish at the market.</p>";

/// Offline client returning a canned narrative and no images.
#[derive(Debug, Clone, Default)]
pub struct MockNarrativeClient;

impl NarrativeClient for MockNarrativeClient {
    fn generate_text(&self, prompt: &str) -> Result<NarrativeResult, AppError> {
        tracing::info!(prompt_chars = prompt.len(), "mock narrative client: returning canned text");
        Ok(NarrativeResult::new(MOCK_NARRATIVE))
    }

    fn generate_images(&self, prompt: &str) -> Result<Vec<ImagePayload>, AppError> {
        tracing::info!(prompt_chars = prompt.len(), "mock narrative client: returning no images");
        Ok(Vec::new())
    }
}

/// Builds the client on demand, so runs that never reach generation need no credential.
pub trait NarrativeClientFactory {
    fn create(&self) -> Result<Box<dyn NarrativeClient>, AppError>;
}
