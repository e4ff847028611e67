//! Sentiment classification of the selected product's reviews

use crate::types::{ClassificationOutcome, ClassificationWarning, Selection};
use reviewlens_domain::traits::ReviewModel;
use reviewlens_domain::{ClassifiedRecord, Sentiment, ValidRecord};
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Classify every record of the selected product, one request at a time
///
/// Requests are issued serially in record order with no retries. A failed
/// request marks the record `Unclassified` and adds a warning; the
/// remaining records are still classified.
pub fn classify_reviews<M>(
    model: &M,
    selection: &Selection,
    records: &[ValidRecord],
    excerpt_chars: usize,
) -> ClassificationOutcome
where
    M: ReviewModel,
    M::Error: Display,
{
    let mut outcome = ClassificationOutcome::default();

    for record in records
        .iter()
        .filter(|r| r.matches_product(&selection.product_id))
    {
        let sentiment = match model.classify_sentiment(&record.review_text) {
            Ok(response) => {
                let sentiment = Sentiment::from_response(&response);
                debug!(
                    "Review #{} classified {} (response: {:?})",
                    record.ordinal,
                    sentiment.as_str(),
                    response
                );
                sentiment
            }
            Err(e) => {
                let warning = ClassificationWarning {
                    ordinal: record.ordinal,
                    product_id: record.product_id.clone(),
                    excerpt: record.review_text.chars().take(excerpt_chars).collect(),
                    error: e.to_string(),
                };
                warn!("{}", warning);
                outcome.warnings.push(warning);
                Sentiment::Unclassified
            }
        };

        outcome.classified.push(ClassifiedRecord {
            record: record.clone(),
            sentiment,
        });
    }

    info!(
        "Classified {} reviews for '{}': {} positive, {} negative, {} unclassified",
        outcome.classified.len(),
        selection.product_id,
        outcome.positive_count(),
        outcome.negative_count(),
        outcome.unclassified_count()
    );

    outcome
}
