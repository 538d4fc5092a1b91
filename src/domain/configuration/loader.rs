//! Story configuration loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::domain::AppError;
use crate::domain::configuration::StoryConfig;

/// Configuration file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "stroll.toml";

/// Load the story configuration.
///
/// An explicitly requested file must exist. Without one, `stroll.toml` is
/// read if present and built-in defaults are used otherwise.
pub fn load_config(path: Option<&Path>) -> Result<StoryConfig, AppError> {
    let (path, explicit) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound && !explicit => {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(StoryConfig::default());
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(AppError::config_error(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        Err(err) => return Err(err.into()),
    };

    debug!(path = %path.display(), "loading configuration");
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<StoryConfig, AppError> {
    let config: StoryConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn story_config_parses_from_toml() {
        let toml = r#"
[gemini]
text_model = "gemini-2.5-flash"
timeout_secs = 30
max_retries = 5

[output]
dir = "trips"
"#;
        let config = parse_config_content(toml).unwrap();
        assert_eq!(config.gemini.text_model, "gemini-2.5-flash");
        assert_eq!(config.gemini.image_model, "gemini-2.0-flash-exp");
        assert_eq!(config.gemini.timeout_secs, 30);
        assert_eq!(config.gemini.max_retries, 5);
        assert_eq!(config.gemini.retry_delay_ms, 1000);
        assert_eq!(config.output.dir, PathBuf::from("trips"));
    }

    #[test]
    fn empty_content_gives_defaults() {
        let config = parse_config_content("").unwrap();
        assert_eq!(
            config.gemini.api_url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta"
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = parse_config_content("[gemini]\nmodel = \"x\"\n");
        assert!(matches!(result, Err(AppError::TomlParse(_))));

        let result = parse_config_content("[logging]\nlevel = \"debug\"\n");
        assert!(matches!(result, Err(AppError::TomlParse(_))));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let result = parse_config_content("[gemini]\nmax_retries = 0\n");
        assert!(matches!(result, Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = load_config(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[output]\ndir = \"elsewhere\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("elsewhere"));
    }
}
