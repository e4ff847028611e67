//! Analyze command implementation.

use super::read_batch;
use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::provider::build_provider;
use reviewlens_analyzer::{AnalysisReport, PromptedModel, ReviewAnalyzer};
use tracing::info;

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let report = run_analysis(args, config)?;
    print!("{}", formatter.format_report(&report)?);
    Ok(())
}

/// Run the full pipeline for the arguments and return the report.
pub fn run_analysis(args: AnalyzeArgs, config: &Config) -> Result<AnalysisReport> {
    let mut settings = config.provider.clone();
    if let Some(provider) = args.provider {
        settings.kind = provider.into();
    }
    if args.model.is_some() {
        settings.model = args.model;
    }

    let analyzer_config = &config.analyzer;
    let defaults = analyzer_config.default_selection();
    let product = args.product.unwrap_or(defaults.product_id);
    let year = args.year.unwrap_or(defaults.year);
    if product.trim().is_empty() {
        return Err(CliError::InvalidInput("product id must not be empty".to_string()));
    }

    // Reject a bad selection before any network setup
    let selection = analyzer_config.selection(&product, year)?;

    let text = read_batch(&args.file)?;
    let provider = build_provider(&settings, args.api_key.as_deref())?;
    let model = PromptedModel::with_templates(provider, analyzer_config.prompts.clone());
    let analyzer = ReviewAnalyzer::new(model, analyzer_config.clone())?;

    info!(
        "Analyzing {} for product '{}' in {}",
        args.file.display(),
        selection.product_id,
        selection.year
    );

    Ok(analyzer.analyze(&text, &selection))
}
