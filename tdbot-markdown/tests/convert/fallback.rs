//! Parse failures fall back to the raw source.

use tdbot_markdown::ast::MdNode;
use tdbot_markdown::{
    ComrakParser, MarkdownParser, ParseError, ParserOptions, RichTextConverter,
};

struct FailingParser;

impl MarkdownParser for FailingParser {
    fn parse(&self, _source: &str) -> Result<MdNode, ParseError> {
        Err(ParseError::Parser("boom".to_string()))
    }
}

#[test]
fn test_failing_parser_returns_source() {
    let converter = RichTextConverter::with_parser(FailingParser);
    for source in ["**bold**", "", "> quote\n\n`code`", "😀 [x](tg://user?id=1)"] {
        let result = converter.convert(source);
        assert_eq!(result.text, source);
        assert!(result.annotations.is_empty());
    }
}

#[test]
fn test_oversized_source_falls_back() {
    let converter = RichTextConverter::with_parser(ComrakParser::new(ParserOptions {
        max_source_len: Some(8),
        ..ParserOptions::default()
    }));
    let result = converter.convert("**too long for the limit**");
    assert_eq!(result.text, "**too long for the limit**");
    assert!(result.annotations.is_empty());
}

#[test]
fn test_deep_nesting_falls_back() {
    let source = format!("{} deep", ">".repeat(64));
    let converter = RichTextConverter::with_options(ParserOptions {
        max_nesting_depth: 16,
        ..ParserOptions::default()
    });
    let result = converter.convert(&source);
    assert_eq!(result.text, source);
    assert!(result.annotations.is_empty());
}

#[test]
fn test_within_limits_converts() {
    let converter = RichTextConverter::with_options(ParserOptions {
        max_source_len: Some(64),
        max_nesting_depth: 16,
        ..ParserOptions::default()
    });
    let result = converter.convert("**ok**");
    assert_eq!(result.text, "ok");
    assert_eq!(result.annotations.len(), 1);
}
