//! ReviewLens Domain Layer
//!
//! Core data model and trait interfaces for the review analysis pipeline.
//! This crate performs no I/O; parsing, classification and presentation
//! live in other crates.
//!
//! ## Key Concepts
//!
//! - **Record block**: one blank-line-delimited unit of raw input text
//! - **Valid record**: a block with a product id, review text and a parseable order date
//! - **Invalid entry**: a block that failed validation, with its ordered issues
//! - **Sentiment bucket**: Positive or Negative, as judged by a language model
//! - **Summary statistics**: counts derived from one analysis pass
//!
//! ## Architecture
//!
//! ```text
//! raw text → RawBlock → ExtractedFields → ValidRecord | InvalidEntry
//!                                            ↓ (selected product)
//!                                      ClassifiedRecord → SummaryStatistics
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod record;
pub mod sentiment;
pub mod statistics;
pub mod traits;
pub mod validation;

// Re-exports for convenience
pub use record::{ExtractedFields, OrderDateField, RawBlock, ValidRecord};
pub use sentiment::{ClassifiedRecord, Sentiment};
pub use statistics::SummaryStatistics;
pub use validation::{InvalidEntry, ValidationIssue};
