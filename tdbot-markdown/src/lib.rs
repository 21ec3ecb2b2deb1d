//! Markdown to TDLib rich text for tdbot
//!
//!     The bot's send and edit wrappers accept Markdown, but TDLib wants a `formattedText`: one
//!     plain string plus a flat list of entities, each an offset/length span over that string.
//!     This crate does that flattening and nothing else. It never talks to TDLib.
//!
//! Architecture
//!
//!     We never write a Markdown parser. comrak does the parsing and its arena AST is adapted into
//!     our own sum type ([`ast::MdNode`]) so that the core walk is a plain `match` with explicit
//!     catch-all arms. The parser sits behind the [`MarkdownParser`] trait so the converter can be
//!     driven by anything that produces a tree.
//!
//!     The file structure :
//!     .
//!     ├── error.rs        # ParseError
//!     ├── ast.rs          # MdNode, the tree the converter consumes
//!     ├── parser.rs       # MarkdownParser trait, comrak adapter, ParserOptions
//!     ├── convert.rs      # RichTextConverter, the tree → flat spans walk
//!     ├── annotation.rs   # StyleAnnotation, AnnotationKind, ConversionResult
//!     ├── links.rs        # tg:// url classification
//!     ├── offsets.rs      # OffsetUnit and offset helpers
//!     ├── tdlib.rs        # serde shapes for TDLib's JSON interface
//!     └── lib.rs
//!
//! Core Algorithm
//!
//!     See ./convert.rs. Every node returns its own text plus annotations relative to the start of
//!     that text; a parent shifts a child's annotations by the length it has accumulated so far
//!     before appending them. There is no shared offset counter.
//!
//! Offsets
//!
//!     TDLib counts offsets in UTF-16 code units, so that is the default [`OffsetUnit`]. `chars`
//!     and `bytes` exist for consumers that index differently.
//!
//! Failure
//!
//!     The only failure is in parsing (including the input size and nesting limits). It is
//!     logged and [`RichTextConverter::convert`] returns the raw input with no entities. A chat
//!     bot should send an unformatted message rather than drop it.
pub mod annotation;
pub mod ast;
pub mod convert;
pub mod error;
pub mod links;
pub mod offsets;
pub mod parser;
pub mod tdlib;

pub use annotation::{AnnotationKind, ConversionResult, StyleAnnotation};
pub use convert::{convert_tree, RichTextConverter};
pub use error::ParseError;
pub use offsets::OffsetUnit;
pub use parser::{ComrakParser, MarkdownParser, ParserOptions};
pub use tdlib::FormattedText;

/// Converts Markdown into a TDLib `formattedText` using the default parser and UTF-16 offsets.
///
/// This is what the bot's message wrappers call before building `inputMessageText`.
/// It never fails; see [`RichTextConverter::convert`].
pub fn parse_markdown_to_formatted_text(markdown: &str) -> FormattedText {
    RichTextConverter::new().convert(markdown).into()
}
