//! Markdown parsing (Markdown → MdNode)
//!
//! Pipeline: Markdown string → Comrak AST → [`MdNode`] tree.
//!
//! The comrak tree is adapted to mdast conventions, since that is the shape the converter's rules
//! are written against:
//!
//! | Comrak node        | MdNode                          | Notes                                   |
//! |--------------------|---------------------------------|-----------------------------------------|
//! | Document           | Root                            |                                         |
//! | Paragraph          | Paragraph                       |                                         |
//! | Text               | Text                            |                                         |
//! | SoftBreak          | Text("\n")                      | mdast keeps soft breaks inside text     |
//! | LineBreak          | Leaf "break"                    | no value, flattens to nothing           |
//! | Code               | InlineCode                      |                                         |
//! | CodeBlock          | Code                            | first info word as lang, one trailing newline dropped |
//! | BlockQuote         | Blockquote                      |                                         |
//! | Emph/Strong        | Emphasis/Strong                 |                                         |
//! | Strikethrough      | Delete                          | only with `strikethrough` enabled       |
//! | Link               | Link                            |                                         |
//! | Image              | Leaf "image"                    | alt text is not kept                    |
//! | HtmlBlock/Inline   | Leaf "html"                     | raw source passes through as text       |
//! | anything else      | Container / Leaf by kind name   |                                         |

use crate::ast::MdNode;
use crate::error::ParseError;
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use std::panic::{self, AssertUnwindSafe};

/// Default cap on source size, in bytes.
pub const DEFAULT_MAX_SOURCE_LEN: usize = 1024 * 1024;
/// Default cap on tree depth.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Anything that can turn Markdown source into an [`MdNode::Root`] tree.
///
/// # Examples
///
/// ```ignore
/// struct Verbatim;
///
/// impl MarkdownParser for Verbatim {
///     fn parse(&self, source: &str) -> Result<MdNode, ParseError> {
///         Ok(MdNode::Root(vec![MdNode::Text(source.to_string())]))
///     }
/// }
/// ```
pub trait MarkdownParser: Send + Sync {
    /// Parse `source` into a tree rooted at [`MdNode::Root`].
    fn parse(&self, source: &str) -> Result<MdNode, ParseError>;
}

/// Knobs for [`ComrakParser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Parse `~~text~~` as strikethrough
    pub strikethrough: bool,
    /// Turn bare urls into links
    pub autolink: bool,
    /// Reject sources longer than this many bytes
    pub max_source_len: Option<usize>,
    /// Reject trees nesting deeper than this
    pub max_nesting_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            strikethrough: true,
            autolink: false,
            max_source_len: Some(DEFAULT_MAX_SOURCE_LEN),
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// [`MarkdownParser`] backed by comrak.
#[derive(Debug, Clone, Default)]
pub struct ComrakParser {
    options: ParserOptions,
}

impl ComrakParser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    fn comrak_options(&self) -> ComrakOptions<'static> {
        let mut options = ComrakOptions::default();
        options.extension.strikethrough = self.options.strikethrough;
        options.extension.autolink = self.options.autolink;
        options
    }
}

impl MarkdownParser for ComrakParser {
    fn parse(&self, source: &str) -> Result<MdNode, ParseError> {
        if let Some(limit) = self.options.max_source_len {
            if source.len() > limit {
                return Err(ParseError::SourceTooLarge {
                    len: source.len(),
                    limit,
                });
            }
        }

        let options = self.comrak_options();
        let max_depth = self.options.max_nesting_depth;
        // comrak has no error channel; a panic inside it is the only way parsing can fail.
        panic::catch_unwind(AssertUnwindSafe(|| {
            let arena = Arena::new();
            let root = parse_document(&arena, source, &options);
            to_md_node(root, 1, max_depth)
        }))
        .map_err(|payload| ParseError::Parser(panic_message(payload.as_ref())))?
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "comrak panicked".to_string()
    }
}

/// Convert a comrak node and its subtree.
fn to_md_node<'a>(
    node: &'a AstNode<'a>,
    depth: usize,
    max_depth: usize,
) -> Result<MdNode, ParseError> {
    if depth > max_depth {
        return Err(ParseError::NestingTooDeep { limit: max_depth });
    }

    let children = || -> Result<Vec<MdNode>, ParseError> {
        node.children()
            .map(|child| to_md_node(child, depth + 1, max_depth))
            .collect()
    };

    let md = match &node.data.borrow().value {
        NodeValue::Document => MdNode::Root(children()?),
        NodeValue::Paragraph => MdNode::Paragraph(children()?),
        NodeValue::Text(text) => MdNode::Text(text.to_string()),
        NodeValue::SoftBreak => MdNode::Text("\n".to_string()),
        NodeValue::LineBreak => MdNode::leaf("break", None),
        NodeValue::Code(code) => MdNode::InlineCode(code.literal.clone()),
        NodeValue::CodeBlock(code_block) => MdNode::Code {
            lang: code_block
                .info
                .split_whitespace()
                .next()
                .map(str::to_string),
            value: strip_final_newline(&code_block.literal),
        },
        NodeValue::BlockQuote => MdNode::Blockquote(children()?),
        NodeValue::Strong => MdNode::Strong(children()?),
        NodeValue::Emph => MdNode::Emphasis(children()?),
        NodeValue::Strikethrough => MdNode::Delete(children()?),
        NodeValue::Link(link) => MdNode::Link {
            url: link.url.clone(),
            children: children()?,
        },
        NodeValue::Image(_) => MdNode::leaf("image", None),
        NodeValue::HtmlBlock(html) => {
            MdNode::leaf("html", Some(strip_final_newline(&html.literal)))
        }
        NodeValue::HtmlInline(html) => MdNode::leaf("html", Some(html.clone())),
        NodeValue::ThematicBreak => MdNode::leaf("thematicBreak", None),
        NodeValue::Heading(_) => MdNode::container("heading", children()?),
        NodeValue::List(_) => MdNode::container("list", children()?),
        NodeValue::Item(_) => MdNode::container("listItem", children()?),
        _ => {
            if node.first_child().is_some() {
                MdNode::container("unknown", children()?)
            } else {
                MdNode::leaf("unknown", None)
            }
        }
    };
    Ok(md)
}

fn strip_final_newline(literal: &str) -> String {
    let literal = literal.strip_suffix('\n').unwrap_or(literal);
    literal.strip_suffix('\r').unwrap_or(literal).to_string()
}

/// Parse with default [`ParserOptions`].
pub fn parse_markdown(source: &str) -> Result<MdNode, ParseError> {
    ComrakParser::default().parse(source)
}
