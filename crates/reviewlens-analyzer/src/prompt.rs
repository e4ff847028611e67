//! LLM prompts for sentiment classification and summarization

use reviewlens_domain::traits::{LlmProvider, ReviewModel};
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the review text in each template
pub const REVIEW_PLACEHOLDER: &str = "{review}";

const SENTIMENT_TEMPLATE: &str =
    "Classify the sentiment of this product review as Positive or Negative:\n\n{review}";

const SUMMARY_TEMPLATE: &str = "Summarize the following positive product reviews and highlight their greatest features:\n\n{review}";

/// Templates for the two model requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptTemplates {
    /// Sentiment classification prompt
    pub sentiment: String,

    /// Positive review summary prompt
    pub summary: String,
}

impl PromptTemplates {
    /// Both templates must contain the review placeholder
    pub fn validate(&self) -> Result<(), String> {
        for (name, template) in [("sentiment", &self.sentiment), ("summary", &self.summary)] {
            if !template.contains(REVIEW_PLACEHOLDER) {
                return Err(format!(
                    "{} prompt must contain the {} placeholder",
                    name, REVIEW_PLACEHOLDER
                ));
            }
        }
        Ok(())
    }

    /// Render the classification prompt for one review
    pub fn sentiment_prompt(&self, review_text: &str) -> String {
        self.sentiment.replace(REVIEW_PLACEHOLDER, review_text)
    }

    /// Render the summary prompt for concatenated reviews
    pub fn summary_prompt(&self, combined_text: &str) -> String {
        self.summary.replace(REVIEW_PLACEHOLDER, combined_text)
    }
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            sentiment: SENTIMENT_TEMPLATE.to_string(),
            summary: SUMMARY_TEMPLATE.to_string(),
        }
    }
}

/// Adapts a raw [`LlmProvider`] to the [`ReviewModel`] capabilities
pub struct PromptedModel<L> {
    provider: L,
    templates: PromptTemplates,
}

impl<L: LlmProvider> PromptedModel<L> {
    /// Wrap a provider with the default templates
    pub fn new(provider: L) -> Self {
        Self::with_templates(provider, PromptTemplates::default())
    }

    /// Wrap a provider with custom templates
    pub fn with_templates(provider: L, templates: PromptTemplates) -> Self {
        Self {
            provider,
            templates,
        }
    }

    /// The wrapped provider
    pub fn provider(&self) -> &L {
        &self.provider
    }
}

impl<L: LlmProvider> ReviewModel for PromptedModel<L> {
    type Error = L::Error;

    fn classify_sentiment(&self, review_text: &str) -> Result<String, Self::Error> {
        self.provider
            .generate(&self.templates.sentiment_prompt(review_text))
    }

    fn summarize(&self, combined_text: &str) -> Result<String, Self::Error> {
        self.provider
            .generate(&self.templates.summary_prompt(combined_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewlens_llm::MockProvider;

    #[test]
    fn test_sentiment_prompt_includes_review() {
        let prompt = PromptTemplates::default().sentiment_prompt("Battery lasts two days");
        assert!(prompt.starts_with("Classify the sentiment of this product review"));
        assert!(prompt.ends_with("\n\nBattery lasts two days"));
    }

    #[test]
    fn test_summary_prompt_includes_reviews() {
        let prompt = PromptTemplates::default().summary_prompt("Great. Fast.");
        assert!(prompt.contains("highlight their greatest features"));
        assert!(prompt.ends_with("Great. Fast."));
    }

    #[test]
    fn test_template_without_placeholder_rejected() {
        let templates = PromptTemplates {
            summary: "Summarize please".to_string(),
            ..PromptTemplates::default()
        };
        assert!(templates.validate().is_err());
    }

    #[test]
    fn test_prompted_model_routes_prompts() {
        let provider = MockProvider::new("ok");
        let model = PromptedModel::new(provider.clone());

        model.classify_sentiment("nice").unwrap();
        model.summarize("nice too").unwrap();

        let prompts = provider.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains("Positive or Negative"));
        assert!(prompts[1].contains("Summarize"));
    }
}
