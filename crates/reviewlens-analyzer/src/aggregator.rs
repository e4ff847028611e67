//! Summary statistics over classified records

use crate::types::{ClassificationOutcome, Selection};
use reviewlens_domain::traits::ReviewModel;
use reviewlens_domain::{SummaryStatistics, ValidRecord};
use reviewlens_extractor::ParsedBatch;
use std::fmt::Display;
use tracing::{info, warn};

/// Count valid records of any product ordered in `year`
///
/// The product selection is deliberately not applied here.
pub fn count_orders_in_year(records: &[ValidRecord], year: i32) -> usize {
    records.iter().filter(|r| r.order_year() == year).count()
}

/// Summarize up to `limit` positive reviews with one model request
///
/// Reviews are joined with a single space in filter order. A failed
/// request yields an error message instead of a summary.
pub fn summarize_positive<'a, M, I>(
    model: &M,
    selection: &Selection,
    positive: I,
    limit: usize,
) -> String
where
    M: ReviewModel,
    M::Error: Display,
    I: IntoIterator<Item = &'a ValidRecord>,
{
    let reviews: Vec<&str> = positive
        .into_iter()
        .take(limit)
        .map(|r| r.review_text.as_str())
        .collect();

    if reviews.is_empty() {
        return format!(
            "No positive reviews found for product '{}'.",
            selection.product_id
        );
    }

    let combined = reviews.join(" ");
    info!("Summarizing {} positive reviews", reviews.len());

    match model.summarize(&combined) {
        Ok(summary) => summary,
        Err(e) => {
            warn!("Summary request failed: {}", e);
            format!("Error generating summary: {}", e)
        }
    }
}

/// Assemble the statistics for one selection
pub fn compute_statistics(
    batch: &ParsedBatch,
    outcome: &ClassificationOutcome,
    selection: &Selection,
    positive_summary_text: String,
) -> SummaryStatistics {
    SummaryStatistics {
        total_entries: batch.total_entries,
        valid_count: batch.valid.len(),
        invalid_count: batch.invalid.len(),
        positive_summary_text,
        negative_count: outcome.negative_count(),
        orders_in_year_count: count_orders_in_year(&batch.valid, selection.year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PromptedModel;
    use chrono::NaiveDate;
    use reviewlens_llm::MockProvider;

    fn record(product: &str, review: &str, year: i32) -> ValidRecord {
        ValidRecord {
            ordinal: 1,
            product_id: product.to_string(),
            review_text: review.to_string(),
            order_date: NaiveDate::from_ymd_opt(year, 6, 15).unwrap(),
            rating: None,
        }
    }

    #[test]
    fn test_count_orders_ignores_product() {
        let records = vec![
            record("apple", "a", 2024),
            record("samsung", "b", 2024),
            record("apple", "c", 2023),
        ];
        assert_eq!(count_orders_in_year(&records, 2024), 2);
        assert_eq!(count_orders_in_year(&records, 2022), 0);
    }

    #[test]
    fn test_summary_caps_reviews() {
        let provider = MockProvider::new("summary");
        let model = PromptedModel::new(provider.clone());
        let records: Vec<_> = ["one", "two", "three", "four", "five"]
            .iter()
            .map(|r| record("apple", r, 2024))
            .collect();

        let summary = summarize_positive(&model, &Selection::new("apple", 2024), &records, 3);

        assert_eq!(summary, "summary");
        assert_eq!(provider.call_count(), 1);
        let prompt = &provider.prompts()[0];
        assert!(prompt.ends_with("one two three"));
        assert!(!prompt.contains("four"));
    }

    #[test]
    fn test_summary_without_positives() {
        let provider = MockProvider::new("unused");
        let model = PromptedModel::new(provider.clone());

        let summary = summarize_positive(
            &model,
            &Selection::new("Pixel", 2024),
            Vec::<ValidRecord>::new().iter(),
            3,
        );

        assert_eq!(summary, "No positive reviews found for product 'pixel'.");
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_summary_failure_becomes_message() {
        let mut provider = MockProvider::default();
        provider.fail_when("Summarize");
        let model = PromptedModel::new(provider);
        let records = vec![record("apple", "great", 2024)];

        let summary = summarize_positive(&model, &Selection::new("apple", 2024), &records, 3);

        assert!(summary.starts_with("Error generating summary: "));
        assert!(summary.contains("mock failure"));
    }
}
