//! Error types for the Analyzer

use thiserror::Error;

/// Errors raised while setting up an analysis
///
/// Running an analysis never fails; these cover construction only.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Invalid analyzer configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Product or year selection rejected
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}
