//! Configuration for the Analyzer

use crate::error::AnalyzerError;
use crate::prompt::PromptTemplates;
use crate::types::Selection;
use serde::{Deserialize, Serialize};

/// Configuration for the Analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum positive reviews fed into the summary request
    pub summary_review_limit: usize,

    /// Characters of review text quoted in classification warnings
    pub warning_excerpt_chars: usize,

    /// Product analyzed when none is given
    pub default_product_id: String,

    /// Year counted when none is given
    pub default_year: i32,

    /// Earliest selectable year
    pub min_year: i32,

    /// Latest selectable year
    pub max_year: i32,

    /// Prompt templates for the two model requests
    pub prompts: PromptTemplates,
}

impl AnalyzerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.summary_review_limit == 0 {
            return Err("summary_review_limit must be greater than 0".to_string());
        }
        if self.min_year > self.max_year {
            return Err(format!(
                "min_year {} cannot exceed max_year {}",
                self.min_year, self.max_year
            ));
        }
        if !(self.min_year..=self.max_year).contains(&self.default_year) {
            return Err(format!(
                "default_year {} is outside [{}, {}]",
                self.default_year, self.min_year, self.max_year
            ));
        }
        self.prompts.validate()
    }

    /// Build a selection, checking the year against the configured range
    ///
    /// The product id is case-folded; any text is accepted.
    pub fn selection(&self, product_id: &str, year: i32) -> Result<Selection, AnalyzerError> {
        if !(self.min_year..=self.max_year).contains(&year) {
            return Err(AnalyzerError::InvalidSelection(format!(
                "year {} is outside [{}, {}]",
                year, self.min_year, self.max_year
            )));
        }
        Ok(Selection::new(product_id, year))
    }

    /// Selection built from the configured defaults
    pub fn default_selection(&self) -> Selection {
        Selection::new(&self.default_product_id, self.default_year)
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            summary_review_limit: 3,
            warning_excerpt_chars: 50,
            default_product_id: "apple".to_string(),
            default_year: 2025,
            min_year: 2000,
            max_year: 2100,
            prompts: PromptTemplates::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AnalyzerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_summary_limit_rejected() {
        let config = AnalyzerConfig {
            summary_review_limit: 0,
            ..AnalyzerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_year_out_of_range_rejected() {
        let config = AnalyzerConfig {
            default_year: 1999,
            ..AnalyzerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_selection_year_bounds() {
        let config = AnalyzerConfig::default();
        assert!(config.selection("apple", 2000).is_ok());
        assert!(config.selection("apple", 2100).is_ok());
        assert!(matches!(
            config.selection("apple", 2101),
            Err(AnalyzerError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_default_selection() {
        let selection = AnalyzerConfig::default().default_selection();
        assert_eq!(selection.product_id, "apple");
        assert_eq!(selection.year, 2025);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AnalyzerConfig = toml::from_str("default_product_id = \"pixel\"\n").unwrap();
        assert_eq!(config.default_product_id, "pixel");
        assert_eq!(config.summary_review_limit, 3);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AnalyzerConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AnalyzerConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
