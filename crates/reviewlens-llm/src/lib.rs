//! ReviewLens LLM Provider Layer
//!
//! Pluggable implementations of the `LlmProvider` trait from `reviewlens-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic scripted provider for testing
//! - `OllamaProvider`: Local Ollama API integration
//! - `OpenAiProvider`: OpenAI-compatible chat completions API
//!
//! Providers never read credentials from the environment; callers pass
//! them in when constructing a provider.
//!
//! # Examples
//!
//! ```
//! use reviewlens_llm::MockProvider;
//! use reviewlens_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("Positive");
//! let result = provider.generate("Classify: great phone").unwrap();
//! assert_eq!(result, "Positive");
//! ```

#![warn(missing_docs)]

pub mod ollama;
pub mod openai;

use reviewlens_domain::traits::LlmProvider as LlmProviderTrait;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

/// Default timeout for a single LLM request (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Credentials rejected by the provider
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The blocking runtime could not be created
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

#[derive(Debug, Clone)]
enum MockReply {
    Respond(String),
    Fail(String),
}

/// Mock LLM provider for deterministic testing
///
/// Rules are matched in insertion order against the prompt by substring;
/// the first rule whose needle occurs in the prompt decides the reply.
/// Prompts matching no rule get the default response.
///
/// # Examples
///
/// ```
/// use reviewlens_llm::MockProvider;
/// use reviewlens_domain::traits::LlmProvider;
///
/// let mut provider = MockProvider::default();
/// provider.respond_when("battery", "Negative");
/// provider.fail_when("timeout");
///
/// assert_eq!(provider.generate("the battery died").unwrap(), "Negative");
/// assert!(provider.generate("timeout please").is_err());
/// assert_eq!(provider.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    rules: Arc<Mutex<Vec<(String, MockReply)>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            rules: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Reply with `response` to prompts containing `needle`
    pub fn respond_when(&mut self, needle: impl Into<String>, response: impl Into<String>) {
        self.rules
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((needle.into(), MockReply::Respond(response.into())));
    }

    /// Fail prompts containing `needle` with a communication error
    pub fn fail_when(&mut self, needle: impl Into<String>) {
        let needle = needle.into();
        let message = format!("mock failure for '{}'", needle);
        self.rules
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((needle, MockReply::Fail(message)));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Every prompt received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.prompts.lock().unwrap_or_else(PoisonError::into_inner).push(prompt.to_string());

        let rules = self.rules.lock().unwrap_or_else(PoisonError::into_inner);
        match rules.iter().find(|(needle, _)| prompt.contains(needle.as_str())) {
            Some((_, MockReply::Respond(response))) => Ok(response.clone()),
            Some((_, MockReply::Fail(message))) => Err(LlmError::Communication(message.clone())),
            None => Ok(self.default_response.clone()),
        }
    }
}
