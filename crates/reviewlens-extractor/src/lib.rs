//! ReviewLens Extractor
//!
//! Turns a free-text batch of review/order records into validated records
//! and diagnostics.
//!
//! # Architecture
//!
//! ```text
//! Text → split_blocks → RawBlock → FieldExtractor → ExtractedFields → validate_block
//!                                                                      ↓
//!                                                    ValidRecord | InvalidEntry
//! ```
//!
//! Every stage is pure and total: malformed input produces diagnostics,
//! never errors.
//!
//! # Example Usage
//!
//! ```
//! use reviewlens_extractor::parse_batch;
//!
//! let batch = parse_batch(
//!     "product_id: ABC\nreview_text: Great phone\norder_date: 2024-05-01\nrating: 5\n\n\
//!      product_id: XYZ\nreview_text: Bad\norder_date: not-a-date",
//! );
//!
//! assert_eq!(batch.total_entries, 2);
//! assert_eq!(batch.valid.len(), 1);
//! assert_eq!(batch.valid[0].product_id, "abc");
//! assert_eq!(batch.invalid.len(), 1);
//! ```

#![warn(missing_docs)]

mod fields;
mod splitter;
mod validator;

pub use fields::FieldExtractor;
pub use splitter::split_blocks;
pub use validator::{parse_order_date, validate_block, BlockOutcome};

use reviewlens_domain::{InvalidEntry, ValidRecord};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::{debug, info};

/// Result of running the whole extraction pipeline over one input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedBatch {
    /// Number of blocks produced by the splitter
    pub total_entries: usize,

    /// Blocks that became records, in input order
    pub valid: Vec<ValidRecord>,

    /// Blocks that were rejected, in input order
    pub invalid: Vec<InvalidEntry>,
}

/// Decode uploaded bytes as UTF-8, replacing invalid sequences
pub fn decode_input(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Split, extract and validate every block of `text`
///
/// Each block is validated exactly once, so
/// `total_entries == valid.len() + invalid.len()` always holds.
pub fn parse_batch(text: &str) -> ParsedBatch {
    let blocks = split_blocks(text);
    let extractor = FieldExtractor::new();

    let mut batch = ParsedBatch {
        total_entries: blocks.len(),
        ..ParsedBatch::default()
    };

    for block in blocks {
        let fields = extractor.extract(&block.text);
        match validate_block(block, fields) {
            BlockOutcome::Valid(record) => batch.valid.push(record),
            BlockOutcome::Invalid(entry) => {
                debug!("Block #{} rejected: {:?}", entry.ordinal, entry.issues);
                batch.invalid.push(entry);
            }
        }
    }

    info!(
        "Parsed {} entries: {} valid, {} invalid",
        batch.total_entries,
        batch.valid.len(),
        batch.invalid.len()
    );

    batch
}
