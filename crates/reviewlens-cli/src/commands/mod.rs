//! Command implementations.

pub mod analyze;
pub mod config;
pub mod validate;

pub use self::analyze::execute_analyze;
pub use self::config::execute_config;
pub use self::validate::execute_validate;

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Read an input batch, replacing undecodable bytes.
pub(crate) fn read_batch(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(reviewlens_extractor::decode_input(&bytes).into_owned())
}
