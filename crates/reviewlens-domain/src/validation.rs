//! Validation outcomes for blocks that could not become records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason a block was rejected
///
/// Issues are reported in declaration order, with `InvalidDateFormat` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationIssue {
    /// No `product_id:` token found
    MissingProductId,

    /// No `review_text:` text found
    MissingReviewText,

    /// No `order_date:` value found
    MissingOrderDate,

    /// An order date was found but is not a calendar date
    InvalidDateFormat,
}

impl ValidationIssue {
    /// Human-readable description
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationIssue::MissingProductId => "Missing or malformed product_id",
            ValidationIssue::MissingReviewText => "Missing or malformed review_text",
            ValidationIssue::MissingOrderDate => "Missing or malformed order_date",
            ValidationIssue::InvalidDateFormat => "Invalid date format",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected block, kept for diagnostic display only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidEntry {
    /// 1-based block position
    pub ordinal: usize,

    /// Original block text
    pub raw_text: String,

    /// Issues in reporting order; never empty
    pub issues: Vec<ValidationIssue>,
}

impl InvalidEntry {
    /// Whether the entry carries the given issue
    pub fn has_issue(&self, issue: ValidationIssue) -> bool {
        self.issues.contains(&issue)
    }
}
