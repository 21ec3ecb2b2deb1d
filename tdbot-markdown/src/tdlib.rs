//! TDLib JSON shapes for formatted text.
//!
//! These serialize to exactly what TDLib's JSON interface expects, `@type` discriminator
//! included, so the send and edit wrappers can embed them in requests unchanged.

use crate::annotation::{AnnotationKind, ConversionResult, StyleAnnotation};
use serde::{Deserialize, Serialize};

/// `formattedText`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type", rename = "formattedText")]
pub struct FormattedText {
    pub text: String,
    pub entities: Vec<TextEntity>,
}

/// `textEntity`. Offsets and lengths are TDLib `int32` in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type", rename = "textEntity")]
pub struct TextEntity {
    pub offset: i32,
    pub length: i32,
    #[serde(rename = "type")]
    pub kind: TextEntityType,
}

/// The `TextEntityType` variants the converter can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum TextEntityType {
    #[serde(rename = "textEntityTypeBold")]
    Bold,
    #[serde(rename = "textEntityTypeItalic")]
    Italic,
    #[serde(rename = "textEntityTypeStrikethrough")]
    Strikethrough,
    #[serde(rename = "textEntityTypeCode")]
    Code,
    #[serde(rename = "textEntityTypePreCode")]
    PreCode { language: String },
    #[serde(rename = "textEntityTypeTextUrl")]
    TextUrl { url: String },
    #[serde(rename = "textEntityTypeMentionName")]
    MentionName { user_id: i64 },
    #[serde(rename = "textEntityTypeBlockQuote")]
    BlockQuote,
    #[serde(rename = "textEntityTypeExpandableBlockQuote")]
    ExpandableBlockQuote,
}

impl From<AnnotationKind> for TextEntityType {
    fn from(kind: AnnotationKind) -> Self {
        match kind {
            AnnotationKind::Bold => TextEntityType::Bold,
            AnnotationKind::Italic => TextEntityType::Italic,
            AnnotationKind::Strikethrough => TextEntityType::Strikethrough,
            AnnotationKind::Code => TextEntityType::Code,
            AnnotationKind::PreformattedCode { language } => TextEntityType::PreCode { language },
            AnnotationKind::TextLink { url } => TextEntityType::TextUrl { url },
            AnnotationKind::MentionLink { user_id } => TextEntityType::MentionName { user_id },
            AnnotationKind::BlockQuote => TextEntityType::BlockQuote,
            AnnotationKind::ExpandableBlockQuote => TextEntityType::ExpandableBlockQuote,
        }
    }
}

impl From<StyleAnnotation> for TextEntity {
    fn from(annotation: StyleAnnotation) -> Self {
        TextEntity {
            offset: to_int32(annotation.offset),
            length: to_int32(annotation.length),
            kind: annotation.kind.into(),
        }
    }
}

/// Offsets are passed through as measured; convert with [`OffsetUnit::Utf16`](crate::OffsetUnit)
/// (the default) when the result is headed for TDLib.
impl From<ConversionResult> for FormattedText {
    fn from(result: ConversionResult) -> Self {
        FormattedText {
            text: result.text,
            entities: result.annotations.into_iter().map(Into::into).collect(),
        }
    }
}

fn to_int32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// `linkPreviewOptions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type", rename = "linkPreviewOptions")]
pub struct LinkPreviewOptions {
    pub is_disabled: bool,
}

/// `inputMessageText`, the content of a plain text `sendMessage` or `editMessageText`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type", rename = "inputMessageText")]
pub struct InputMessageText {
    pub text: FormattedText,
    pub link_preview_options: LinkPreviewOptions,
    pub clear_draft: bool,
}

impl InputMessageText {
    /// Message content with link previews disabled, which is how the bot sends by default.
    pub fn new(text: FormattedText) -> Self {
        Self {
            text,
            link_preview_options: LinkPreviewOptions { is_disabled: true },
            clear_draft: false,
        }
    }

    pub fn with_link_preview(mut self, enabled: bool) -> Self {
        self.link_preview_options.is_disabled = !enabled;
        self
    }

    /// Convert `markdown` and wrap it, previews disabled.
    pub fn from_markdown(markdown: &str) -> Self {
        Self::new(crate::parse_markdown_to_formatted_text(markdown))
    }
}
