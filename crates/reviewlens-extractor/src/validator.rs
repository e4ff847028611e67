//! Block validation

use chrono::{Datelike, NaiveDate};
use reviewlens_domain::{
    ExtractedFields, InvalidEntry, OrderDateField, RawBlock, ValidRecord, ValidationIssue,
};

/// Outcome of validating one block; exactly one per block
#[derive(Debug, Clone, PartialEq)]
pub enum BlockOutcome {
    /// All required fields present and the date parsed
    Valid(ValidRecord),

    /// At least one issue was found
    Invalid(InvalidEntry),
}

/// Accepted date layouts for a well-formed token
const DATE_FORMATS: &[&str] = &["%Y-%m-%d"];

/// Earliest calendar year an order date may carry
const MIN_ORDER_YEAR: i32 = 1;

/// Parse an order date, tolerating surrounding whitespace
///
/// Returns `None` for tokens that are not real calendar dates
/// (e.g. `2025-13-45` or `2023-02-29`). Years before 1 are rejected.
pub fn parse_order_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .filter(|date| date.year() >= MIN_ORDER_YEAR)
}

/// Classify a block as a valid record or an invalid entry
///
/// Missing-field issues are reported as product id, review text, order
/// date; a date that is present but unparsable adds `InvalidDateFormat`
/// last. A missing date never yields `InvalidDateFormat`.
pub fn validate_block(block: RawBlock, fields: ExtractedFields) -> BlockOutcome {
    let mut issues = Vec::new();

    if fields.product_id.is_none() {
        issues.push(ValidationIssue::MissingProductId);
    }
    if fields.review_text.is_none() {
        issues.push(ValidationIssue::MissingReviewText);
    }
    if fields.order_date.is_none() {
        issues.push(ValidationIssue::MissingOrderDate);
    }

    let order_date = match &fields.order_date {
        Some(OrderDateField::WellFormed(raw)) => {
            let parsed = parse_order_date(raw);
            if parsed.is_none() {
                issues.push(ValidationIssue::InvalidDateFormat);
            }
            parsed
        }
        Some(OrderDateField::Malformed(_)) => {
            issues.push(ValidationIssue::InvalidDateFormat);
            None
        }
        None => None,
    };

    match (fields.product_id, fields.review_text, order_date) {
        (Some(product_id), Some(review_text), Some(order_date)) if issues.is_empty() => {
            BlockOutcome::Valid(ValidRecord {
                ordinal: block.ordinal,
                product_id: product_id.to_lowercase(),
                review_text,
                order_date,
                rating: fields.rating,
            })
        }
        _ => BlockOutcome::Invalid(InvalidEntry {
            ordinal: block.ordinal,
            raw_text: block.text,
            issues,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldExtractor;

    fn validate(text: &str) -> BlockOutcome {
        let fields = FieldExtractor::new().extract(text);
        validate_block(RawBlock::new(1, text), fields)
    }

    fn issues(text: &str) -> Vec<ValidationIssue> {
        match validate(text) {
            BlockOutcome::Invalid(entry) => entry.issues,
            BlockOutcome::Valid(record) => panic!("expected invalid, got {:?}", record),
        }
    }

    #[test]
    fn test_valid_record() {
        let outcome = validate("product_id: ABC\nreview_text: Great phone\norder_date: 2024-05-01\nrating: 5");
        assert_eq!(
            outcome,
            BlockOutcome::Valid(ValidRecord {
                ordinal: 1,
                product_id: "abc".to_string(),
                review_text: "Great phone".to_string(),
                order_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                rating: Some(5),
            })
        );
    }

    #[test]
    fn test_rating_is_optional() {
        match validate("product_id: ABC\nreview_text: Fine\norder_date: 2024-05-01") {
            BlockOutcome::Valid(record) => assert_eq!(record.rating, None),
            other => panic!("expected valid, got {:?}", other),
        }
    }

    #[test]
    fn test_unparsable_date_label_present() {
        assert_eq!(
            issues("product_id: ABC\nreview_text: Bad\norder_date: not-a-date"),
            vec![ValidationIssue::InvalidDateFormat]
        );
    }

    #[test]
    fn test_impossible_calendar_date() {
        assert_eq!(
            issues("product_id: ABC\nreview_text: Bad\norder_date: 2025-13-45"),
            vec![ValidationIssue::InvalidDateFormat]
        );
    }

    #[test]
    fn test_year_zero_is_invalid_date() {
        assert_eq!(
            issues("product_id: a\nreview_text: x\norder_date: 0000-05-01"),
            vec![ValidationIssue::InvalidDateFormat]
        );
        assert_eq!(parse_order_date("0000-05-01"), None);
        assert_eq!(
            parse_order_date("0001-01-01"),
            NaiveDate::from_ymd_opt(1, 1, 1)
        );
    }

    #[test]
    fn test_non_leap_day() {
        assert_eq!(
            issues("product_id: ABC\nreview_text: Bad\norder_date: 2023-02-29"),
            vec![ValidationIssue::InvalidDateFormat]
        );
    }

    #[test]
    fn test_missing_issues_in_fixed_order() {
        assert_eq!(
            issues("rating: 4"),
            vec![
                ValidationIssue::MissingProductId,
                ValidationIssue::MissingReviewText,
                ValidationIssue::MissingOrderDate,
            ]
        );
    }

    #[test]
    fn test_date_issue_comes_after_missing_fields() {
        assert_eq!(
            issues("order_date: 2024-02-30"),
            vec![
                ValidationIssue::MissingProductId,
                ValidationIssue::MissingReviewText,
                ValidationIssue::InvalidDateFormat,
            ]
        );
    }

    #[test]
    fn test_invalid_entry_keeps_raw_text_and_ordinal() {
        let text = "review_text: orphan";
        let fields = FieldExtractor::new().extract(text);
        match validate_block(RawBlock::new(7, text), fields) {
            BlockOutcome::Invalid(entry) => {
                assert_eq!(entry.ordinal, 7);
                assert_eq!(entry.raw_text, text);
            }
            other => panic!("expected invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_order_date() {
        assert_eq!(
            parse_order_date(" 2024-05-01 "),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
        assert_eq!(parse_order_date("2024-00-10"), None);
    }
}
