//! Sentiment labels assigned by the language model

use crate::ValidRecord;
use serde::{Deserialize, Serialize};

/// Outcome of classifying one review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// Response mentioned "Positive"
    Positive,

    /// Response mentioned "Negative" (and not "Positive")
    Negative,

    /// The request failed or the response carried neither label
    Unclassified,
}

impl Sentiment {
    /// Interpret a free-text model response
    ///
    /// Matching is case-sensitive and "Positive" wins when both labels appear.
    pub fn from_response(response: &str) -> Self {
        if response.contains("Positive") {
            Sentiment::Positive
        } else if response.contains("Negative") {
            Sentiment::Negative
        } else {
            Sentiment::Unclassified
        }
    }

    /// Lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Unclassified => "unclassified",
        }
    }
}

/// A valid record tagged with its sentiment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    /// The classified record
    pub record: ValidRecord,

    /// Assigned label
    pub sentiment: Sentiment,
}
