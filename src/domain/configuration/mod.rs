pub mod loader;
pub mod story_config;
pub mod story_options;

pub use loader::{DEFAULT_CONFIG_FILE, load_config, parse_config_content};
pub use story_config::{ApiCredential, GeminiApiConfig, OutputConfig, StoryConfig};
pub use story_options::{StoryOptions, TrackInput};
