//! Plain text, inline styles, code and paragraph handling.

use crate::common::{convert, render};
use insta::assert_snapshot;
use tdbot_markdown::{AnnotationKind, OffsetUnit, RichTextConverter, StyleAnnotation};

#[test]
fn test_plain_text_is_unchanged() {
    let result = convert("hello world");
    assert_eq!(result.text, "hello world");
    assert!(result.annotations.is_empty());
}

#[test]
fn test_empty_source() {
    let result = convert("");
    assert_eq!(result.text, "");
    assert!(result.annotations.is_empty());
}

#[test]
fn test_bold_at_start() {
    let result = convert("**bold** normal");
    assert_eq!(result.text, "bold normal");
    assert_eq!(
        result.annotations,
        vec![StyleAnnotation::new(AnnotationKind::Bold, 0, 4)]
    );
}

#[test]
fn test_sibling_offsets_shift() {
    let result = convert("a **b** c **d**");
    assert_eq!(result.text, "a b c d");
    assert_eq!(
        result.annotations,
        vec![
            StyleAnnotation::new(AnnotationKind::Bold, 2, 1),
            StyleAnnotation::new(AnnotationKind::Bold, 6, 1),
        ]
    );
}

#[test]
fn test_italic_and_strikethrough() {
    assert_snapshot!(render(&convert("*it* and ~~gone~~")), @r#"
    text: "it and gone"
    Italic 0+2 "it"
    Strikethrough 7+4 "gone"
    "#);
}

#[test]
fn test_nested_emphasis_is_pre_order() {
    assert_snapshot!(render(&convert("***both***")), @r#"
    text: "both"
    Italic 0+4 "both"
    Bold 0+4 "both"
    "#);
}

#[test]
fn test_inline_code() {
    assert_snapshot!(render(&convert("run `ls -la` now")), @r#"
    text: "run ls -la now"
    Code 4+6 "ls -la"
    "#);
}

#[test]
fn test_inline_code_is_verbatim() {
    let result = convert("`**not bold**`");
    assert_eq!(result.text, "**not bold**");
    assert_eq!(
        result.annotations,
        vec![StyleAnnotation::new(AnnotationKind::Code, 0, 12)]
    );
}

#[test]
fn test_fenced_code_block() {
    assert_snapshot!(render(&convert("```rust\nfn main() {}\n```")), @r#"
    text: "fn main() {}"
    Pre(rust) 0+12 "fn main() {}"
    "#);
}

#[test]
fn test_fenced_code_without_language() {
    let result = convert("```\nx = 1\n```");
    assert_eq!(
        result.annotations,
        vec![StyleAnnotation::new(
            AnnotationKind::PreformattedCode {
                language: String::new()
            },
            0,
            5
        )]
    );
}

#[test]
fn test_paragraphs_are_separated_by_newline() {
    assert_snapshot!(render(&convert("first\n\nsecond **b**")), @r#"
    text: "first\nsecond b"
    Bold 13+1 "b"
    "#);
}

#[test]
fn test_soft_break_keeps_newline() {
    let result = convert("line one\nline two");
    assert_eq!(result.text, "line one\nline two");
}

#[test]
fn test_hard_break_flattens_to_nothing() {
    let result = convert("a  \nb");
    assert_eq!(result.text, "ab");
}

#[test]
fn test_inline_html_passes_through() {
    let result = convert("a <b>x</b>");
    assert_eq!(result.text, "a <b>x</b>");
    assert!(result.annotations.is_empty());
}

#[test]
fn test_offsets_count_utf16_units() {
    assert_snapshot!(render(&convert("😀 **b** ✓ *i*")), @r#"
    text: "😀 b ✓ i"
    Bold 3+1 "b"
    Italic 7+1 "i"
    "#);
}

#[test]
fn test_offsets_in_chars() {
    let result = RichTextConverter::new()
        .offset_unit(OffsetUnit::Chars)
        .convert("😀 **b**");
    assert_eq!(
        result.annotations,
        vec![StyleAnnotation::new(AnnotationKind::Bold, 2, 1)]
    );
}

#[test]
fn test_bold_inside_italic_shifts_by_parent() {
    assert_snapshot!(render(&convert("x *a **b** c*")), @r#"
    text: "x a b c"
    Italic 2+5 "a b c"
    Bold 4+1 "b"
    "#);
}
