//! Core ReviewAnalyzer implementation

use crate::aggregator::{compute_statistics, summarize_positive};
use crate::classifier::classify_reviews;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::types::{AnalysisReport, Selection};
use reviewlens_domain::traits::ReviewModel;
use reviewlens_extractor::{parse_batch, ParsedBatch};
use std::fmt::Display;
use tracing::info;

/// Runs extraction, classification and aggregation for one input
pub struct ReviewAnalyzer<M>
where
    M: ReviewModel,
{
    model: M,
    config: AnalyzerConfig,
}

impl<M> ReviewAnalyzer<M>
where
    M: ReviewModel,
    M::Error: Display,
{
    /// Create a new analyzer around a ready-to-use model
    pub fn new(model: M, config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate().map_err(AnalyzerError::Config)?;
        Ok(Self { model, config })
    }

    /// The model requests are sent to
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Build a selection checked against the configured year range
    pub fn selection(&self, product_id: &str, year: i32) -> Result<Selection, AnalyzerError> {
        self.config.selection(product_id, year)
    }

    /// Parse `text` and analyze it for `selection`
    pub fn analyze(&self, text: &str, selection: &Selection) -> AnalysisReport {
        let batch = parse_batch(text);
        self.analyze_batch(&batch, selection)
    }

    /// Analyze an already parsed batch
    ///
    /// Lets callers change the selection without re-reading the input.
    pub fn analyze_batch(&self, batch: &ParsedBatch, selection: &Selection) -> AnalysisReport {
        info!(
            "Analyzing product '{}' for year {} over {} valid records",
            selection.product_id,
            selection.year,
            batch.valid.len()
        );

        let outcome = classify_reviews(
            &self.model,
            selection,
            &batch.valid,
            self.config.warning_excerpt_chars,
        );

        let positive_summary = summarize_positive(
            &self.model,
            selection,
            outcome.positive(),
            self.config.summary_review_limit,
        );

        let statistics = compute_statistics(batch, &outcome, selection, positive_summary);

        info!(
            "Analysis complete: {} total, {} valid, {} invalid, {} negative, {} orders in {}",
            statistics.total_entries,
            statistics.valid_count,
            statistics.invalid_count,
            statistics.negative_count,
            statistics.orders_in_year_count,
            selection.year
        );

        AnalysisReport {
            selection: selection.clone(),
            statistics,
            classified: outcome.classified,
            warnings: outcome.warnings,
            invalid_entries: batch.invalid.clone(),
        }
    }
}
