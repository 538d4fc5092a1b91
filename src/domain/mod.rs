pub mod artifact;
pub mod classify;
pub mod configuration;
pub mod error;
pub mod generation;
pub mod map;
pub mod normalize;
pub mod presentation;
pub mod prompt;
pub mod track;
pub mod trip;

pub use artifact::{OutputArtifact, assemble};
pub use classify::{ClassifiedPoint, ClassifiedRoute, PointRole, classify};
pub use configuration::{
    ApiCredential, GeminiApiConfig, OutputConfig, StoryConfig, StoryOptions, TrackInput,
};
pub use error::AppError;
pub use generation::{ImageEncoding, ImagePayload, NarrativeResult, ResponsePart};
pub use map::{MapDocument, MapModel, Marker, MarkerColor, Polyline};
pub use normalize::{InlinePoint, normalize, normalize_inline};
pub use presentation::{Focus, Length, PresentationParams, Tone};
pub use prompt::{TemplateContext, TemplateRenderer, build_image_prompt, build_narrative_prompt};
pub use track::TrackFile;
pub use trip::{Route, RouteTranscript, TripPoint};
