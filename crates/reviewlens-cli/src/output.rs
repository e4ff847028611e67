//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use reviewlens_analyzer::AnalysisReport;
use reviewlens_domain::InvalidEntry;
use reviewlens_extractor::ParsedBatch;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a full analysis report.
    pub fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_report_text(report)),
        }
    }

    /// Format the result of a validation-only run.
    pub fn format_batch(&self, batch: &ParsedBatch) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "total_entries": batch.total_entries,
                "valid_count": batch.valid.len(),
                "invalid_count": batch.invalid.len(),
                "invalid_entries": batch.invalid,
            }))?),
            OutputFormat::Table => {
                let mut out = String::new();
                out.push_str(&self.heading("Summary Statistics"));
                out.push_str(&self.counts_table(
                    batch.total_entries,
                    batch.valid.len(),
                    batch.invalid.len(),
                ));
                out.push('\n');
                if !batch.invalid.is_empty() {
                    out.push('\n');
                    out.push_str(&self.invalid_entries(&batch.invalid));
                }
                Ok(out)
            }
        }
    }

    fn format_report_text(&self, report: &AnalysisReport) -> String {
        let stats = &report.statistics;
        let product = &report.selection.product_id;
        let mut out = String::new();

        out.push_str(&self.heading("Summary Statistics"));
        out.push_str(&self.counts_table(
            stats.total_entries,
            stats.valid_count,
            stats.invalid_count,
        ));
        out.push_str("\n\n");

        out.push_str(&self.heading(&format!("Positive Review Summary for Product '{}'", product)));
        out.push_str(&stats.positive_summary_text);
        out.push_str("\n\n");

        out.push_str(&self.heading(&format!("Total Negative Reviews for Product '{}'", product)));
        out.push_str(&stats.negative_count.to_string());
        out.push_str("\n\n");

        out.push_str(&self.heading(&format!("Total Orders in {}", report.selection.year)));
        out.push_str(&stats.orders_in_year_count.to_string());
        out.push('\n');

        if !report.warnings.is_empty() {
            out.push('\n');
            for warning in &report.warnings {
                out.push_str(&self.warning(&warning.to_string()));
                out.push('\n');
            }
        }

        if !report.invalid_entries.is_empty() {
            out.push('\n');
            out.push_str(&self.invalid_entries(&report.invalid_entries));
        }

        out
    }

    fn counts_table(&self, total: usize, valid: usize, invalid: usize) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Total entries", "Valid entries", "Invalid entries"]);
        builder.push_record([total.to_string(), valid.to_string(), invalid.to_string()]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format invalid entries with their raw text and issues.
    pub fn invalid_entries(&self, entries: &[InvalidEntry]) -> String {
        let mut out = self.heading("Invalid Entries");
        for entry in entries {
            out.push_str(&self.colorize(&format!("Entry #{}", entry.ordinal), "magenta"));
            out.push('\n');
            for line in entry.raw_text.lines() {
                out.push_str("    ");
                out.push_str(line);
                out.push('\n');
            }
            let issues: Vec<&str> = entry.issues.iter().map(|i| i.as_str()).collect();
            out.push_str(&self.error(&format!("Issues: {}", issues.join("; "))));
            out.push_str("\n---\n");
        }
        out
    }

    fn heading(&self, title: &str) -> String {
        format!("{}\n", self.colorize(title, "cyan"))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().bold().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use reviewlens_analyzer::{ClassificationWarning, Selection};
    use reviewlens_domain::{ClassifiedRecord, Sentiment, SummaryStatistics, ValidRecord, ValidationIssue};

    fn create_test_report() -> AnalysisReport {
        AnalysisReport {
            selection: Selection::new("apple", 2025),
            statistics: SummaryStatistics {
                total_entries: 3,
                valid_count: 2,
                invalid_count: 1,
                positive_summary_text: "Users love the camera.".to_string(),
                negative_count: 1,
                orders_in_year_count: 2,
            },
            classified: vec![ClassifiedRecord {
                record: ValidRecord {
                    ordinal: 1,
                    product_id: "apple".to_string(),
                    review_text: "Great camera".to_string(),
                    order_date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
                    rating: Some(5),
                },
                sentiment: Sentiment::Positive,
            }],
            warnings: vec![ClassificationWarning {
                ordinal: 2,
                product_id: "apple".to_string(),
                excerpt: "Broken".to_string(),
                error: "timeout".to_string(),
            }],
            invalid_entries: vec![InvalidEntry {
                ordinal: 3,
                raw_text: "review_text: orphan".to_string(),
                issues: vec![ValidationIssue::MissingProductId, ValidationIssue::MissingOrderDate],
            }],
        }
    }

    #[test]
    fn test_table_report_sections() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&create_test_report()).unwrap();

        assert!(output.contains("Summary Statistics"));
        assert!(output.contains("Total entries"));
        assert!(output.contains("Positive Review Summary for Product 'apple'"));
        assert!(output.contains("Users love the camera."));
        assert!(output.contains("Total Negative Reviews for Product 'apple'"));
        assert!(output.contains("Total Orders in 2025"));
        assert!(output.contains("LLM error on review #2 (apple): Broken... - timeout"));
        assert!(output.contains("Entry #3"));
        assert!(output.contains("Missing or malformed product_id; Missing or malformed order_date"));
    }

    #[test]
    fn test_json_report() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_report(&create_test_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["statistics"]["orders_in_year_count"], 2);
        assert_eq!(value["invalid_entries"][0]["issues"][0], "MissingProductId");
    }

    #[test]
    fn test_batch_json_counts() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let batch = reviewlens_extractor::parse_batch("product_id: a\n\nproduct_id: b");
        let value: serde_json::Value =
            serde_json::from_str(&formatter.format_batch(&batch).unwrap()).unwrap();
        assert_eq!(value["total_entries"], 2);
        assert_eq!(value["invalid_count"], 2);
    }

    #[test]
    fn test_batch_table_without_invalid_entries() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let batch = reviewlens_extractor::parse_batch(
            "product_id: a\nreview_text: ok\norder_date: 2024-01-01",
        );
        let output = formatter.format_batch(&batch).unwrap();
        assert!(output.contains("Valid entries"));
        assert!(!output.contains("Invalid Entries"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("careful"), "⚠ careful");
    }
}
