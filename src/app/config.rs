//! Process environment access for the story command.

use std::env;

use crate::adapters::narrative_client::{HttpNarrativeClient, RetryPolicy, RetryingNarrativeClient};
use crate::domain::{ApiCredential, AppError, GeminiApiConfig};
use crate::ports::{MockNarrativeClient, NarrativeClient, NarrativeClientFactory};

/// Environment variable holding the generation API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Read the API key from the environment.
pub fn load_credential() -> Result<ApiCredential, AppError> {
    let key = env::var(API_KEY_ENV).map_err(|_| {
        AppError::config_error(format!("Environment variable {} is not set", API_KEY_ENV))
    })?;
    ApiCredential::new(key)
        .map_err(|_| AppError::config_error(format!("Environment variable {} is empty", API_KEY_ENV)))
}

/// Builds the HTTP client, wrapped with retries, when generation is first needed.
pub struct LazyClientFactory {
    config: GeminiApiConfig,
}

impl LazyClientFactory {
    pub fn new(config: GeminiApiConfig) -> Self {
        Self { config }
    }
}

impl NarrativeClientFactory for LazyClientFactory {
    fn create(&self) -> Result<Box<dyn NarrativeClient>, AppError> {
        let transport = HttpNarrativeClient::new(load_credential()?, &self.config)?;
        let retry_policy = RetryPolicy::from_config(&self.config);
        Ok(Box::new(RetryingNarrativeClient::new(Box::new(transport), retry_policy)))
    }
}

/// Offline factory; never reads the environment.
pub struct MockClientFactory;

impl NarrativeClientFactory for MockClientFactory {
    fn create(&self) -> Result<Box<dyn NarrativeClient>, AppError> {
        Ok(Box::new(MockNarrativeClient))
    }
}
