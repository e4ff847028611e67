//! ReviewLens Analyzer
//!
//! Classifies review sentiment with a language model and aggregates the
//! results of an extraction pass into summary statistics.
//!
//! # Overview
//!
//! Given the records parsed by `reviewlens-extractor`, a selected product
//! and a selected year, the analyzer:
//!
//! - asks the model for a Positive/Negative label on every review of the product
//! - summarizes the first few positive reviews
//! - counts negative reviews and orders placed in the selected year
//!
//! The pipeline never fails: model errors become warnings or diagnostic
//! summary text, and a report is always produced.
//!
//! # Architecture
//!
//! ```text
//! Text → parse_batch → ParsedBatch → filter(product) → classify → aggregate → AnalysisReport
//! ```
//!
//! # Example Usage
//!
//! ```
//! use reviewlens_analyzer::{AnalyzerConfig, PromptedModel, ReviewAnalyzer};
//! use reviewlens_llm::MockProvider;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut llm = MockProvider::new("Great camera and battery.");
//! llm.respond_when("Classify the sentiment", "Positive");
//!
//! let analyzer = ReviewAnalyzer::new(PromptedModel::new(llm), AnalyzerConfig::default())?;
//! let selection = analyzer.selection("ABC", 2024)?;
//!
//! let report = analyzer.analyze(
//!     "product_id: ABC\nreview_text: Great phone\norder_date: 2024-05-01\nrating: 5",
//!     &selection,
//! );
//!
//! assert_eq!(report.statistics.valid_count, 1);
//! assert_eq!(report.statistics.orders_in_year_count, 1);
//! assert_eq!(report.statistics.positive_summary_text, "Great camera and battery.");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod aggregator;
mod analyzer;
mod classifier;
mod config;
mod error;
mod prompt;
mod types;


pub use aggregator::{compute_statistics, count_orders_in_year, summarize_positive};
pub use analyzer::ReviewAnalyzer;
pub use classifier::classify_reviews;
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
pub use prompt::{PromptTemplates, PromptedModel};
pub use types::{AnalysisReport, ClassificationOutcome, ClassificationWarning, Selection};
