//! Splitting raw input into record blocks

use regex::Regex;
use reviewlens_domain::RawBlock;
use std::sync::LazyLock;

/// A newline, optional whitespace, then another newline: one or more blank lines
static BLOCK_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("block separator pattern is valid"));

/// Split `text` into blocks separated by blank lines
///
/// The whole input is trimmed first. Every segment becomes a block,
/// including empty ones, and ordinals start at 1.
pub fn split_blocks(text: &str) -> Vec<RawBlock> {
    BLOCK_SEPARATOR
        .split(text.trim())
        .enumerate()
        .map(|(idx, span)| RawBlock::new(idx + 1, span))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block_splits_to_itself() {
        let text = "product_id: ABC\nreview_text: Great phone\norder_date: 2024-05-01";
        let blocks = split_blocks(text);
        assert_eq!(blocks, vec![RawBlock::new(1, text)]);
    }

    #[test]
    fn test_blank_lines_separate_blocks() {
        let blocks = split_blocks("a\n\nb\n\n\n\nc");
        let texts: Vec<_> = blocks.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert_eq!(blocks[2].ordinal, 3);
    }

    #[test]
    fn test_whitespace_only_separator_lines() {
        let blocks = split_blocks("a\n   \t\nb");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].text, "b");
    }

    #[test]
    fn test_single_newline_does_not_split() {
        let blocks = split_blocks("line one\nline two");
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_outer_whitespace_trimmed() {
        let blocks = split_blocks("\n\n  a\n\nb  \n\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "a");
        assert_eq!(blocks[1].text, "b");
    }

    #[test]
    fn test_empty_input_yields_one_empty_block() {
        let blocks = split_blocks("");
        assert_eq!(blocks, vec![RawBlock::new(1, "")]);
    }

    #[test]
    fn test_crlf_blank_line() {
        let blocks = split_blocks("a\r\n\r\nb");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "a\r");
    }
}
