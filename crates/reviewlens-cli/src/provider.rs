//! Provider construction from configuration and flags.

use crate::config::{ProviderKind, ProviderSettings};
use crate::error::{CliError, Result};
use reviewlens_domain::traits::LlmProvider;
use reviewlens_llm::{ollama, openai, LlmError, MockProvider, OllamaProvider, OpenAiProvider};
use std::time::Duration;
use tracing::info;

/// Summary text returned by the mock provider
const MOCK_SUMMARY: &str = "(mock summary: no language model was contacted)";

/// Any of the supported providers behind one type
pub enum AnyProvider {
    /// Offline scripted provider
    Mock(MockProvider),
    /// Local Ollama server
    Ollama(OllamaProvider),
    /// OpenAI-compatible API
    OpenAi(OpenAiProvider),
}

impl LlmProvider for AnyProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> std::result::Result<String, Self::Error> {
        match self {
            AnyProvider::Mock(p) => p.generate(prompt),
            AnyProvider::Ollama(p) => p.generate(prompt),
            AnyProvider::OpenAi(p) => p.generate(prompt),
        }
    }
}

/// Build the configured provider
///
/// `api_key` is only consulted for the OpenAI-compatible provider.
pub fn build_provider(
    settings: &ProviderSettings,
    api_key: Option<&str>,
) -> Result<AnyProvider> {
    let timeout = Duration::from_secs(settings.timeout_secs);

    let provider = match settings.kind {
        ProviderKind::Mock => {
            let mut mock = MockProvider::new(MOCK_SUMMARY);
            mock.respond_when("Classify the sentiment", settings.mock_label.clone());
            AnyProvider::Mock(mock)
        }
        ProviderKind::Ollama => {
            let endpoint = settings.endpoint.as_deref().unwrap_or(ollama::DEFAULT_ENDPOINT);
            let model = settings.model.as_deref().unwrap_or("llama3");
            let provider = OllamaProvider::with_timeout(endpoint, model, timeout)?
                .with_temperature(settings.temperature);
            info!("Using Ollama model '{}' at {}", provider.model(), endpoint);
            AnyProvider::Ollama(provider)
        }
        ProviderKind::OpenAi => {
            let api_key = api_key.ok_or_else(|| {
                CliError::Config(
                    "OPENAI_API_KEY is not set; pass --api-key or use --provider mock".to_string(),
                )
            })?;
            let base_url = settings.endpoint.as_deref().unwrap_or(openai::DEFAULT_BASE_URL);
            let model = settings.model.as_deref().unwrap_or(openai::DEFAULT_MODEL);
            let provider = OpenAiProvider::new(base_url, api_key, model, timeout)?
                .with_temperature(settings.temperature);
            info!("Using chat model '{}' at {}", provider.model(), base_url);
            AnyProvider::OpenAi(provider)
        }
    };

    Ok(provider)
}
