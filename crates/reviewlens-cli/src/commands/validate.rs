//! Validate command implementation.

use super::read_batch;
use crate::cli::ValidateArgs;
use crate::error::Result;
use crate::output::Formatter;
use reviewlens_extractor::parse_batch;

/// Execute the validate command.
pub fn execute_validate(args: ValidateArgs, formatter: &Formatter) -> Result<()> {
    let text = read_batch(&args.file)?;
    let batch = parse_batch(&text);

    print!("{}", formatter.format_batch(&batch)?);

    Ok(())
}
