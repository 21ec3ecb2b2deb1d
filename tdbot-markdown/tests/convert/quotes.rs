//! Block quotes and the nesting-depth rule.

use crate::common::{convert, render};
use insta::assert_snapshot;
use tdbot_markdown::AnnotationKind;

#[test]
fn test_single_quote() {
    assert_snapshot!(render(&convert("> quoted")), @r#"
    text: "quoted"
    BlockQuote 0+6 "quoted"
    "#);
}

#[test]
fn test_quote_paragraphs_are_separated() {
    assert_snapshot!(render(&convert("> a\n>\n> b")), @r#"
    text: "a\nb"
    BlockQuote 0+3 "a\nb"
    "#);
}

#[test]
fn test_nested_quote_is_expandable() {
    let result = convert("> outer\n>> inner");
    assert_eq!(result.text, "outer\ninner");
    let wrappers: Vec<_> = result
        .annotations
        .iter()
        .filter(|a| {
            matches!(
                a.kind,
                AnnotationKind::BlockQuote | AnnotationKind::ExpandableBlockQuote
            )
        })
        .collect();
    assert_eq!(wrappers.len(), 1);
    assert_eq!(wrappers[0].kind, AnnotationKind::ExpandableBlockQuote);
    assert_eq!((wrappers[0].offset, wrappers[0].length), (0, 11));
}

#[test]
fn test_styles_inside_nested_quote_survive() {
    assert_snapshot!(render(&convert("> **top**\n>> *deep*")), @r#"
    text: "top\ndeep"
    ExpandableBlockQuote 0+8 "top\ndeep"
    Bold 0+3 "top"
    Italic 4+4 "deep"
    "#);
}

#[test]
fn test_quote_after_paragraph_is_shifted() {
    assert_snapshot!(render(&convert("intro\n\n> quoted")), @r#"
    text: "intro\nquoted"
    BlockQuote 6+6 "quoted"
    "#);
}

#[test]
fn test_quote_with_code_block() {
    assert_snapshot!(render(&convert("> ```sh\n> ls\n> ```")), @r#"
    text: "ls"
    BlockQuote 0+2 "ls"
    Pre(sh) 0+2 "ls"
    "#);
}

#[test]
fn test_quote_inside_list_inside_quote_has_one_wrapper() {
    assert_snapshot!(render(&convert("> - a\n>   > b")), @r#"
    text: "ab"
    BlockQuote 0+2 "ab"
    "#);
}
