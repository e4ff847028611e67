//! Summary statistics for one analysis pass

use serde::{Deserialize, Serialize};

/// Counts and summary text produced by the aggregator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Every block produced by the splitter, empty ones included
    pub total_entries: usize,

    /// Blocks that became valid records
    pub valid_count: usize,

    /// Blocks rejected with issues
    pub invalid_count: usize,

    /// Model summary of positive reviews, or a diagnostic message
    pub positive_summary_text: String,

    /// Reviews of the selected product labelled Negative
    pub negative_count: usize,

    /// Valid records of any product ordered in the selected year
    pub orders_in_year_count: usize,
}
