//! Record module - raw blocks, extracted fields and validated records

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One blank-line-delimited span of the input, before any parsing
///
/// Ordinals are 1-based and follow the order of the input. Empty spans
/// are blocks too; they count toward the total entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBlock {
    /// 1-based position in the split sequence
    pub ordinal: usize,

    /// The block text exactly as split from the input
    pub text: String,
}

impl RawBlock {
    /// Create a new block
    pub fn new(ordinal: usize, text: impl Into<String>) -> Self {
        Self {
            ordinal,
            text: text.into(),
        }
    }
}

/// The value found after an `order_date:` label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderDateField {
    /// A strict `YYYY-MM-DD` token; it may still fail calendar parsing
    WellFormed(String),

    /// The label is present but the value is not a 4-2-2 digit token
    Malformed(String),
}

/// Fields found in a block by independent pattern searches
///
/// Every field is optional; absence is a normal outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    /// Token after `product_id:`
    pub product_id: Option<String>,

    /// Rest of the line after `review_text:`
    pub review_text: Option<String>,

    /// Value after `order_date:`
    pub order_date: Option<OrderDateField>,

    /// Digits after `rating:`
    pub rating: Option<u64>,
}

/// A block that passed validation
///
/// Invariant: `product_id` is lowercase and non-empty, `review_text` is
/// non-empty, and `order_date` is a real calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidRecord {
    /// Ordinal of the block this record came from
    pub ordinal: usize,

    /// Product identifier, lowercased
    pub product_id: String,

    /// Review text as captured
    pub review_text: String,

    /// Parsed order date
    pub order_date: NaiveDate,

    /// Optional star rating
    pub rating: Option<u64>,
}

impl ValidRecord {
    /// Whether this record belongs to the given (already lowercased) product
    pub fn matches_product(&self, product_id: &str) -> bool {
        self.product_id == product_id
    }

    /// Calendar year of the order
    pub fn order_year(&self) -> i32 {
        self.order_date.year()
    }
}
