//! Request and response types for analysis

use reviewlens_domain::{ClassifiedRecord, InvalidEntry, Sentiment, SummaryStatistics, ValidRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product and year an analysis focuses on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Product identifier, lowercased
    pub product_id: String,

    /// Year for the order count
    pub year: i32,
}

impl Selection {
    /// Create a selection; the product id is case-folded
    pub fn new(product_id: &str, year: i32) -> Self {
        Self {
            product_id: product_id.to_lowercase(),
            year,
        }
    }
}

/// A classification request that failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationWarning {
    /// Ordinal of the record's block
    pub ordinal: usize,

    /// Product of the record
    pub product_id: String,

    /// Leading characters of the review text
    pub excerpt: String,

    /// Error reported by the model
    pub error: String,
}

impl fmt::Display for ClassificationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LLM error on review #{} ({}): {}... - {}",
            self.ordinal, self.product_id, self.excerpt, self.error
        )
    }
}

/// Records of the selected product, each tagged with a sentiment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationOutcome {
    /// Every filtered record in filter order
    pub classified: Vec<ClassifiedRecord>,

    /// One warning per failed request
    pub warnings: Vec<ClassificationWarning>,
}

impl ClassificationOutcome {
    /// Records in the Positive bucket, in filter order
    pub fn positive(&self) -> impl Iterator<Item = &ValidRecord> {
        self.with_sentiment(Sentiment::Positive)
    }

    /// Records in the Negative bucket, in filter order
    pub fn negative(&self) -> impl Iterator<Item = &ValidRecord> {
        self.with_sentiment(Sentiment::Negative)
    }

    /// Number of positive records
    pub fn positive_count(&self) -> usize {
        self.positive().count()
    }

    /// Number of negative records
    pub fn negative_count(&self) -> usize {
        self.negative().count()
    }

    /// Number of records in neither bucket
    pub fn unclassified_count(&self) -> usize {
        self.with_sentiment(Sentiment::Unclassified).count()
    }

    fn with_sentiment(&self, sentiment: Sentiment) -> impl Iterator<Item = &ValidRecord> {
        self.classified
            .iter()
            .filter(move |c| c.sentiment == sentiment)
            .map(|c| &c.record)
    }
}

/// Everything one analysis pass produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The selection analyzed
    pub selection: Selection,

    /// Counts and summary text
    pub statistics: SummaryStatistics,

    /// Records of the selected product with their sentiment
    pub classified: Vec<ClassifiedRecord>,

    /// Failed classification requests
    pub warnings: Vec<ClassificationWarning>,

    /// Rejected blocks in input order
    pub invalid_entries: Vec<InvalidEntry>,
}
