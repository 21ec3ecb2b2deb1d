//! The Markdown tree consumed by the converter.
//!
//! Node kinds follow mdast naming. Everything the converter treats specially gets its own
//! variant; anything else lands in [`MdNode::Container`] or [`MdNode::Leaf`] keyed by its mdast
//! type name, so no node is ever silently dropped.

use std::fmt::{self, Write};

/// A node of a parsed Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MdNode {
    Root(Vec<MdNode>),
    Paragraph(Vec<MdNode>),
    Text(String),
    Link { url: String, children: Vec<MdNode> },
    InlineCode(String),
    Code { lang: Option<String>, value: String },
    Blockquote(Vec<MdNode>),
    Strong(Vec<MdNode>),
    Emphasis(Vec<MdNode>),
    Delete(Vec<MdNode>),
    /// A container with no dedicated handling (heading, list, listItem, ...)
    Container { kind: String, children: Vec<MdNode> },
    /// A leaf with no dedicated handling (html, break, image, thematicBreak, ...)
    Leaf { kind: String, value: Option<String> },
}

impl MdNode {
    pub fn container(kind: impl Into<String>, children: Vec<MdNode>) -> Self {
        MdNode::Container {
            kind: kind.into(),
            children,
        }
    }

    pub fn leaf(kind: impl Into<String>, value: Option<String>) -> Self {
        MdNode::Leaf {
            kind: kind.into(),
            value,
        }
    }

    /// The mdast type name of this node.
    pub fn kind(&self) -> &str {
        match self {
            MdNode::Root(_) => "root",
            MdNode::Paragraph(_) => "paragraph",
            MdNode::Text(_) => "text",
            MdNode::Link { .. } => "link",
            MdNode::InlineCode(_) => "inlineCode",
            MdNode::Code { .. } => "code",
            MdNode::Blockquote(_) => "blockquote",
            MdNode::Strong(_) => "strong",
            MdNode::Emphasis(_) => "emphasis",
            MdNode::Delete(_) => "delete",
            MdNode::Container { kind, .. } | MdNode::Leaf { kind, .. } => kind.as_str(),
        }
    }

    /// Child nodes, or `None` for leaves.
    pub fn children(&self) -> Option<&[MdNode]> {
        match self {
            MdNode::Root(children)
            | MdNode::Paragraph(children)
            | MdNode::Blockquote(children)
            | MdNode::Strong(children)
            | MdNode::Emphasis(children)
            | MdNode::Delete(children)
            | MdNode::Link { children, .. }
            | MdNode::Container { children, .. } => Some(children.as_slice()),
            MdNode::Text(_) | MdNode::InlineCode(_) | MdNode::Code { .. } | MdNode::Leaf { .. } => {
                None
            }
        }
    }

    /// Literal payload of a leaf node.
    pub fn value(&self) -> Option<&str> {
        match self {
            MdNode::Text(value) | MdNode::InlineCode(value) | MdNode::Code { value, .. } => {
                Some(value.as_str())
            }
            MdNode::Leaf { value, .. } => value.as_deref(),
            _ => None,
        }
    }

    /// Depth-first concatenation of every descendant's literal value.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self.children() {
            Some(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
            None => out.push_str(self.value().unwrap_or_default()),
        }
    }

    /// Number of levels below (and including) this node.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .map(|children| children.iter().map(MdNode::depth).max().unwrap_or(0))
            .unwrap_or(0)
    }
}

/// Renders the tree one node per line, indented by depth.
impl fmt::Display for MdNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        render_tree(self, 0, &mut out)?;
        f.write_str(&out)
    }
}

fn render_tree(node: &MdNode, indent: usize, out: &mut String) -> fmt::Result {
    write!(out, "{}{}", "  ".repeat(indent), node.kind())?;
    match node {
        MdNode::Link { url, .. } => write!(out, " url={url:?}")?,
        MdNode::Code {
            lang: Some(lang), ..
        } => write!(out, " lang={lang:?}")?,
        _ => {}
    }
    if let Some(value) = node.value() {
        write!(out, " {value:?}")?;
    }
    out.push('\n');
    if let Some(children) = node.children() {
        for child in children {
            render_tree(child, indent + 1, out)?;
        }
    }
    Ok(())
}
