//! Flattens an [`MdNode`] tree into plain text plus style spans.
//!
//! # The High-Level Concept
//!
//! Every node converts to a [`Fragment`]: its own text and the annotations over that text, with
//! offsets relative to the start of the fragment. A parent never hands its running offset down.
//! It concatenates child fragments and shifts each child's annotations by the length it has
//! accumulated so far, so offsets stay correct no matter how deep the recursion goes.
//!
//! # The Algorithm
//!
//! 1. **Leaves:**
//!    - `text` → its value, no annotations
//!    - `inlineCode` / `code` → its value, one `Code` / `Pre` annotation over all of it
//!    - any other leaf → its value (or nothing), no annotations
//!
//! 2. **Styled containers** (`strong`, `emphasis`, `delete`, `link`):
//!    - Convert children as one fragment
//!    - Emit the node's own annotation over the whole fragment first, then the child annotations
//!
//! 3. **Block quotes:**
//!    - Convert children with wrapping suppressed
//!    - Measure the chain of directly nested quotes; two or more levels make it expandable
//!    - Only the outermost quote of a chain emits the wrapper
//!
//! 4. **Generic containers** (`root`, `paragraph`, anything unknown):
//!    - Concatenate child fragments, shifting annotations on merge
//!    - Under `root`, separate a paragraph from whatever follows it with a newline. Styled
//!      containers and quotes concatenate their children the same way `root` does.
//!
//! Annotations therefore come out in pre-order: a parent's span precedes the spans nested in it.

use crate::annotation::{AnnotationKind, ConversionResult, StyleAnnotation};
use crate::ast::MdNode;
use crate::links::classify_link;
use crate::offsets::OffsetUnit;
use crate::parser::{ComrakParser, MarkdownParser, ParserOptions};
use tracing::{debug, error};

/// Converts Markdown into a [`ConversionResult`], falling back to raw text when parsing fails.
#[derive(Debug, Clone, Default)]
pub struct RichTextConverter<P = ComrakParser> {
    parser: P,
    unit: OffsetUnit,
}

impl RichTextConverter<ComrakParser> {
    /// Comrak with default options, UTF-16 offsets.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self::with_parser(ComrakParser::new(options))
    }
}

impl<P: MarkdownParser> RichTextConverter<P> {
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            unit: OffsetUnit::default(),
        }
    }

    /// Measure offsets in `unit` instead of UTF-16 code units.
    pub fn offset_unit(mut self, unit: OffsetUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Convert `markdown`. Never fails: a parse error is logged and the source comes back
    /// unchanged with no annotations.
    pub fn convert(&self, markdown: &str) -> ConversionResult {
        match self.parser.parse(markdown) {
            Ok(root) => {
                let result = convert_tree(&root, self.unit);
                debug!(
                    tree_depth = root.depth(),
                    annotations = result.annotations.len(),
                    unit = self.unit.as_str(),
                    "converted markdown"
                );
                result
            }
            Err(err) => {
                error!(error = %err, source = markdown, "markdown parsing failed, sending plain text");
                ConversionResult::plain(markdown, self.unit)
            }
        }
    }
}

/// Flatten an already parsed tree.
pub fn convert_tree(root: &MdNode, unit: OffsetUnit) -> ConversionResult {
    let fragment = Walker { unit }.process(root, false);
    ConversionResult {
        text: fragment.text,
        annotations: fragment.annotations,
        unit,
    }
}

/// Text produced by one node, annotations relative to its start.
#[derive(Debug, Default)]
struct Fragment {
    text: String,
    /// `text` measured in the walker's unit
    len: usize,
    annotations: Vec<StyleAnnotation>,
}

impl Fragment {
    fn append(&mut self, child: Fragment) {
        let base = self.len;
        self.text.push_str(&child.text);
        self.len += child.len;
        self.annotations
            .extend(child.annotations.into_iter().map(|mut annotation| {
                annotation.offset += base;
                annotation
            }));
    }

    /// Prepend an annotation covering the whole fragment.
    fn wrap(mut self, kind: AnnotationKind) -> Fragment {
        self.annotations
            .insert(0, StyleAnnotation::new(kind, 0, self.len));
        self
    }
}

struct Walker {
    unit: OffsetUnit,
}

impl Walker {
    fn leaf(&self, value: &str) -> Fragment {
        Fragment {
            text: value.to_string(),
            len: self.unit.measure(value),
            annotations: Vec::new(),
        }
    }

    fn process(&self, node: &MdNode, suppress_quote_wrap: bool) -> Fragment {
        match node {
            MdNode::Text(value) => self.leaf(value),
            MdNode::InlineCode(value) => self.leaf(value).wrap(AnnotationKind::Code),
            MdNode::Code { lang, value } => {
                self.leaf(value).wrap(AnnotationKind::PreformattedCode {
                    language: lang.clone().unwrap_or_default(),
                })
            }
            MdNode::Leaf { .. } => self.leaf(&node.plain_text()),
            MdNode::Link { url, children } => self
                .concat(children, suppress_quote_wrap, true)
                .wrap(classify_link(url)),
            MdNode::Strong(children) => self
                .concat(children, suppress_quote_wrap, true)
                .wrap(AnnotationKind::Bold),
            MdNode::Emphasis(children) => self
                .concat(children, suppress_quote_wrap, true)
                .wrap(AnnotationKind::Italic),
            MdNode::Delete(children) => self
                .concat(children, suppress_quote_wrap, true)
                .wrap(AnnotationKind::Strikethrough),
            MdNode::Blockquote(children) => {
                let inner = self.concat(children, true, true);
                if suppress_quote_wrap {
                    inner
                } else if quote_depth(node) >= 2 {
                    inner.wrap(AnnotationKind::ExpandableBlockQuote)
                } else {
                    inner.wrap(AnnotationKind::BlockQuote)
                }
            }
            MdNode::Root(children) => self.concat(children, suppress_quote_wrap, true),
            MdNode::Paragraph(children) | MdNode::Container { children, .. } => {
                self.concat(children, suppress_quote_wrap, false)
            }
        }
    }

    /// Concatenate children. With `split_paragraphs`, every paragraph except the last child is
    /// followed by a newline.
    fn concat(
        &self,
        children: &[MdNode],
        suppress_quote_wrap: bool,
        split_paragraphs: bool,
    ) -> Fragment {
        let mut fragment = Fragment::default();
        let last = children.len().saturating_sub(1);
        for (i, child) in children.iter().enumerate() {
            fragment.append(self.process(child, suppress_quote_wrap));
            if split_paragraphs && i < last && matches!(child, MdNode::Paragraph(_)) {
                fragment.append(self.leaf("\n"));
            }
        }
        fragment
    }
}

/// Length of the chain of block quotes starting at `node`, following the first quote child at
/// each level. Zero if `node` is not a quote.
fn quote_depth(node: &MdNode) -> usize {
    let mut depth = 0;
    let mut current = Some(node);
    while let Some(MdNode::Blockquote(children)) = current {
        depth += 1;
        current = children
            .iter()
            .find(|child| matches!(child, MdNode::Blockquote(_)));
    }
    depth
}
