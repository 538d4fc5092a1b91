//! Retry wrapper for generation client operations.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::warn;

use crate::domain::{AppError, GeminiApiConfig, ImagePayload, NarrativeResult};
use crate::ports::NarrativeClient;

const MAX_DELAY_MS: u64 = 30_000;
const MAX_LOGGED_CHARS: usize = 512;

/// Wording of transport failures that carry no HTTP status.
const TRANSIENT_WORDING: [&str; 5] =
    ["timed out", "timeout", "connect", "temporary", "failed to read response body"];

/// Attempt budget and backoff bounds for generation calls.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay_ms: u64,
    max_delay_ms: u64,
}

impl RetryPolicy {
    pub fn from_config(config: &GeminiApiConfig) -> Self {
        Self {
            max_attempts: config.max_retries.max(1),
            base_delay_ms: config.retry_delay_ms.max(1),
            max_delay_ms: MAX_DELAY_MS.max(config.retry_delay_ms),
        }
    }

    /// Whether `error` is worth another attempt.
    fn should_retry(&self, error: &AppError) -> bool {
        let AppError::Generation { message, status, .. } = error else {
            return false;
        };
        match status {
            Some(code) => matches!(code, 408 | 429) || *code >= 500,
            None => {
                let lower = message.to_ascii_lowercase();
                TRANSIENT_WORDING.iter().any(|wording| lower.contains(wording))
            }
        }
    }

    /// Server hint when present, otherwise doubling backoff from the base delay plus jitter.
    fn delay_after(&self, failed_attempt: u32, error: &AppError) -> Duration {
        if let AppError::Generation { retry_after_ms: Some(hint), .. } = error {
            return Duration::from_millis((*hint).min(self.max_delay_ms));
        }

        let doublings = failed_attempt.saturating_sub(1).min(6);
        let backoff_ms = self.base_delay_ms.saturating_mul(1 << doublings).min(self.max_delay_ms);
        let total_ms = backoff_ms.saturating_add(jitter_ms(backoff_ms));
        Duration::from_millis(total_ms.min(self.max_delay_ms))
    }
}

/// Wraps another client and retries transient failures.
pub struct RetryingNarrativeClient {
    inner: Box<dyn NarrativeClient>,
    policy: RetryPolicy,
}

impl RetryingNarrativeClient {
    pub fn new(inner: Box<dyn NarrativeClient>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    fn with_retry<T>(
        &self,
        operation: &str,
        call: impl Fn(&dyn NarrativeClient) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut attempt = 1;
        loop {
            let error = match call(self.inner.as_ref()) {
                Ok(value) => return Ok(value),
                Err(error) => error,
            };
            if attempt >= self.policy.max_attempts || !self.policy.should_retry(&error) {
                return Err(error);
            }

            let delay = self.policy.delay_after(attempt, &error);
            warn!(
                operation,
                attempt,
                max_attempts = self.policy.max_attempts,
                delay_ms = delay.as_millis() as u64,
                error = %loggable(&error),
                "generation request failed, retrying"
            );
            thread::sleep(delay);
            attempt += 1;
        }
    }
}

impl NarrativeClient for RetryingNarrativeClient {
    fn generate_text(&self, prompt: &str) -> Result<NarrativeResult, AppError> {
        self.with_retry("generate_text", |client| client.generate_text(prompt))
    }

    fn generate_images(&self, prompt: &str) -> Result<Vec<ImagePayload>, AppError> {
        self.with_retry("generate_images", |client| client.generate_images(prompt))
    }
}

fn jitter_ms(backoff_ms: u64) -> u64 {
    let cap = backoff_ms / 4;
    if cap == 0 {
        return 0;
    }
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::from(elapsed.subsec_nanos()))
        .unwrap_or(0);
    nanos % cap
}

/// Single-line, bounded rendering of an error for log fields.
fn loggable(error: &AppError) -> String {
    let text = match error {
        AppError::Generation { message, status: Some(code), .. } => {
            format!("status={}: {}", code, message)
        }
        other => other.to_string(),
    };

    let mut line = text
        .chars()
        .take(MAX_LOGGED_CHARS)
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if text.chars().count() > MAX_LOGGED_CHARS {
        line.push_str(" [truncated]");
    }
    line
}
