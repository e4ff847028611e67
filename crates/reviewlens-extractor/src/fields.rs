//! Independent label searches over a block

use regex::Regex;
use reviewlens_domain::{ExtractedFields, OrderDateField};
use std::sync::LazyLock;
use tracing::warn;

static PRODUCT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)product_id:\s*(\w+)").expect("product_id pattern is valid"));

static REVIEW_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)review_text:\s*(.+)").expect("review_text pattern is valid"));

// Labels below are case-sensitive.
static ORDER_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"order_date:\s*([0-9]{4}-[0-9]{2}-[0-9]{2})").expect("order_date pattern is valid")
});

static ORDER_DATE_ANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"order_date:[ \t]*(\S+)").expect("order_date fallback is valid"));

static RATING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rating:\s*([0-9]+)").expect("rating pattern is valid"));

/// Extracts the four labelled fields from block text
///
/// Each field is found by its own search of the whole block, so labels may
/// appear in any order and any subset may be missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldExtractor;

impl FieldExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }

    /// Search `text` for every field
    pub fn extract(&self, text: &str) -> ExtractedFields {
        ExtractedFields {
            product_id: capture(&PRODUCT_ID, text),
            review_text: capture(&REVIEW_TEXT, text),
            order_date: self.order_date(text),
            rating: self.rating(text),
        }
    }

    /// A strict date token wins; otherwise any value after the label is malformed
    fn order_date(&self, text: &str) -> Option<OrderDateField> {
        if let Some(raw) = capture(&ORDER_DATE, text) {
            return Some(OrderDateField::WellFormed(raw));
        }
        capture(&ORDER_DATE_ANY, text).map(OrderDateField::Malformed)
    }

    fn rating(&self, text: &str) -> Option<u64> {
        let digits = capture(&RATING, text)?;
        match digits.parse() {
            Ok(rating) => Some(rating),
            Err(e) => {
                warn!("Ignoring rating '{}': {}", digits, e);
                None
            }
        }
    }
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
