pub mod artifact_filesystem;
pub mod gpx_parser;
pub mod map_renderer;
pub mod narrative_client;
pub mod template;
