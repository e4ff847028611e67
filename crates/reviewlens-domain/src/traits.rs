//! Trait definitions for external interactions
//!
//! These traits define the boundaries between pipeline logic and the
//! language-model infrastructure. Implementations live in other crates.

/// Trait for raw text completion
///
/// Implemented by the infrastructure layer (reviewlens-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a completion for the prompt
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}

/// The review capabilities the pipeline consumes
///
/// Implemented by the application layer (reviewlens-analyzer) on top of an
/// [`LlmProvider`], or directly by test fakes.
pub trait ReviewModel {
    /// Error type for model requests
    type Error;

    /// Ask for a Positive/Negative judgement; the answer is free text
    fn classify_sentiment(&self, review_text: &str) -> Result<String, Self::Error>;

    /// Summarize a concatenation of positive reviews
    fn summarize(&self, combined_text: &str) -> Result<String, Self::Error>;
}
