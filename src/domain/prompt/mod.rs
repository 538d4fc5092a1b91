//! Prompt composition for the generation backend.

pub mod compose;
pub mod template;

pub use compose::{IMAGE_PROMPT_TEMPLATE, NARRATIVE_PROMPT_TEMPLATE, build_image_prompt, build_narrative_prompt};
pub use template::{TemplateContext, TemplateRenderer};
