use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ImageEncoding, ImagePayload, NarrativeResult};
use crate::ports::{NarrativeClient, NarrativeClientFactory};

/// A call observed by [`FakeNarrativeClient`], with its prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCall {
    Text(String),
    Images(String),
}

#[derive(Clone)]
pub struct FakeNarrativeClient {
    pub calls: Arc<Mutex<Vec<ClientCall>>>,
    pub narrative: String,
    pub images: Vec<ImagePayload>,
    pub fail_text: bool,
}

impl FakeNarrativeClient {
    pub fn new(narrative: impl Into<String>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(vec![])),
            narrative: narrative.into(),
            images: vec![],
            fail_text: false,
        }
    }

    pub fn with_png(mut self, bytes: &[u8]) -> Self {
        self.images.push(ImagePayload::new(bytes.to_vec(), ImageEncoding::Png));
        self
    }

    pub fn failing() -> Self {
        Self { fail_text: true, ..Self::new("") }
    }

    pub fn get_calls(&self) -> Vec<ClientCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl NarrativeClient for FakeNarrativeClient {
    fn generate_text(&self, prompt: &str) -> Result<NarrativeResult, AppError> {
        self.calls.lock().unwrap().push(ClientCall::Text(prompt.to_string()));
        if self.fail_text {
            return Err(AppError::generation_status("fake backend unavailable", 503));
        }
        Ok(NarrativeResult::new(self.narrative.clone()))
    }

    fn generate_images(&self, prompt: &str) -> Result<Vec<ImagePayload>, AppError> {
        self.calls.lock().unwrap().push(ClientCall::Images(prompt.to_string()));
        Ok(self.images.clone())
    }
}

pub struct FakeNarrativeClientFactory {
    pub client: FakeNarrativeClient,
}

impl FakeNarrativeClientFactory {
    pub fn new(client: FakeNarrativeClient) -> Self {
        Self { client }
    }
}

impl NarrativeClientFactory for FakeNarrativeClientFactory {
    fn create(&self) -> Result<Box<dyn NarrativeClient>, AppError> {
        Ok(Box::new(self.client.clone()))
    }
}
