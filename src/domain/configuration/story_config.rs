//! Story configuration domain models.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `stroll.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoryConfig {
    /// Generation API configuration.
    #[serde(default)]
    pub gemini: GeminiApiConfig,
    /// Output location.
    #[serde(default)]
    pub output: OutputConfig,
}

impl StoryConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.gemini.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

/// Generation API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// Base URL; requests go to `{api_url}/models/{model}:generateContent`.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model used for the journal entry.
    #[serde(default = "default_text_model")]
    pub text_model: String,
    /// Model used for the illustration.
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Maximum attempts per request.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base delay between retries in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.max_retries == 0 {
            return Err(AppError::InvalidConfig("max_retries must be greater than 0".to_string()));
        }
        if self.retry_delay_ms == 0 {
            return Err(AppError::InvalidConfig(
                "retry_delay_ms must be greater than 0".to_string(),
            ));
        }
        if self.text_model.trim().is_empty() {
            return Err(AppError::InvalidConfig("text_model must not be empty".to_string()));
        }
        if self.image_model.trim().is_empty() {
            return Err(AppError::InvalidConfig("image_model must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Output location for generated pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_output_dir() }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.dir.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("output dir must not be empty".to_string()));
        }
        Ok(())
    }
}

/// API key for the generation backend.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    pub fn new(key: impl Into<String>) -> Result<Self, AppError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(AppError::config_error("API key must not be empty"));
        }
        Ok(Self(key))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiCredential([REDACTED])")
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_text_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_image_model() -> String {
    "gemini-2.0-flash-exp".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("outputs")
}
