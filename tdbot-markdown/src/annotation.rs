//! Conversion output: plain text plus style spans.

use crate::offsets::OffsetUnit;

/// What a span of text is styled as.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    Bold,
    Italic,
    Strikethrough,
    Code,
    PreformattedCode { language: String },
    TextLink { url: String },
    MentionLink { user_id: i64 },
    BlockQuote,
    ExpandableBlockQuote,
}

impl AnnotationKind {
    /// Short label used in logs and the CLI entity table.
    pub fn name(&self) -> &'static str {
        match self {
            AnnotationKind::Bold => "Bold",
            AnnotationKind::Italic => "Italic",
            AnnotationKind::Strikethrough => "Strikethrough",
            AnnotationKind::Code => "Code",
            AnnotationKind::PreformattedCode { .. } => "Pre",
            AnnotationKind::TextLink { .. } => "TextLink",
            AnnotationKind::MentionLink { .. } => "MentionLink",
            AnnotationKind::BlockQuote => "BlockQuote",
            AnnotationKind::ExpandableBlockQuote => "ExpandableBlockQuote",
        }
    }
}

/// One styled span. `offset` and `length` are in the unit of the [`ConversionResult`]
/// that holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleAnnotation {
    pub kind: AnnotationKind,
    pub offset: usize,
    pub length: usize,
}

impl StyleAnnotation {
    pub fn new(kind: AnnotationKind, offset: usize, length: usize) -> Self {
        Self {
            kind,
            offset,
            length,
        }
    }

    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// Flattened text and the annotations over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub text: String,
    pub annotations: Vec<StyleAnnotation>,
    /// Unit `annotations` are measured in
    pub unit: OffsetUnit,
}

impl ConversionResult {
    /// The text unchanged, no annotations.
    pub fn plain(text: impl Into<String>, unit: OffsetUnit) -> Self {
        Self {
            text: text.into(),
            annotations: Vec::new(),
            unit,
        }
    }

    /// Text covered by an annotation, if its span lands on character boundaries.
    pub fn covered_text(&self, annotation: &StyleAnnotation) -> Option<&str> {
        self.unit
            .slice(&self.text, annotation.offset, annotation.length)
    }

    /// Length of `text` in this result's unit.
    pub fn text_len(&self) -> usize {
        self.unit.measure(&self.text)
    }
}
