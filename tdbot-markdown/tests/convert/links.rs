//! Links, mentions and tg:// handling.

use crate::common::{convert, render};
use insta::assert_snapshot;
use tdbot_markdown::{AnnotationKind, ParserOptions, RichTextConverter, StyleAnnotation};

#[test]
fn test_link_with_nested_bold() {
    assert_snapshot!(render(&convert("[**bold link**](http://x.com)")), @r#"
    text: "bold link"
    TextLink(http://x.com) 0+9 "bold link"
    Bold 0+9 "bold link"
    "#);
}

#[test]
fn test_link_after_text() {
    assert_snapshot!(render(&convert("see [docs](https://docs.rs) and *more*")), @r#"
    text: "see docs and more"
    TextLink(https://docs.rs) 4+4 "docs"
    Italic 13+4 "more"
    "#);
}

#[test]
fn test_mention_link() {
    let result = convert("[1](tg://user?id=1)");
    assert_eq!(result.text, "1");
    assert_eq!(
        result.annotations,
        vec![StyleAnnotation::new(
            AnnotationKind::MentionLink { user_id: 1 },
            0,
            1
        )]
    );
}

#[test]
fn test_mention_in_sentence() {
    assert_snapshot!(render(&convert("hi [Alice](tg://user?id=123456789)!")), @r#"
    text: "hi Alice!"
    MentionLink(123456789) 3+5 "Alice"
    "#);
}

#[test]
fn test_open_message_strips_channel_prefix() {
    assert_snapshot!(render(&convert("[chat](tg://openmessage?chat_id=-1001234)")), @r#"
    text: "chat"
    TextLink(tg://openmessage?chat_id=1234) 0+4 "chat"
    "#);
}

#[test]
fn test_open_message_keeps_message_id() {
    let result = convert("[msg](tg://openmessage?chat_id=-1001234&message_id=56)");
    assert_eq!(result.text, "msg");
    assert_eq!(
        result.annotations,
        vec![StyleAnnotation::new(
            AnnotationKind::TextLink {
                url: "tg://openmessage?chat_id=1234&message_id=56".to_string()
            },
            0,
            3
        )]
    );
}

#[test]
fn test_angle_autolink() {
    assert_snapshot!(render(&convert("<https://x.com>")), @r#"
    text: "https://x.com"
    TextLink(https://x.com) 0+13 "https://x.com"
    "#);
}

#[test]
fn test_bare_url_needs_autolink_option() {
    let plain = convert("go to https://x.com now");
    assert!(plain.annotations.is_empty());

    let linked = RichTextConverter::with_options(ParserOptions {
        autolink: true,
        ..ParserOptions::default()
    })
    .convert("go to https://x.com now");
    assert_eq!(linked.text, "go to https://x.com now");
    assert_eq!(
        linked.annotations,
        vec![StyleAnnotation::new(
            AnnotationKind::TextLink {
                url: "https://x.com".to_string()
            },
            6,
            13
        )]
    );
}
