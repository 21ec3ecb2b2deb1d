//! Inspection views
//!
//! Each view renders one stage of the conversion pipeline:
//!
//! 1. **Parsing** - Markdown → MdNode tree
//!    - `ast`: the tree, one node per line
//!
//! 2. **Flattening** - tree → text + annotations
//!    - `entities`: the plain text followed by a table of spans and the text each one covers
//!    - `json`: the TDLib `formattedText` exactly as it would be sent
//!
//! Example: `tdmd inspect message.md entities --offset-unit chars`

use std::fmt::Write;
use tdbot_markdown::{
    AnnotationKind, ComrakParser, ConversionResult, FormattedText, MarkdownParser, OffsetUnit,
    ParserOptions, RichTextConverter,
};

/// All available inspection views
pub const AVAILABLE_VIEWS: &[&str] = &["entities", "ast", "json"];

pub const DEFAULT_VIEW: &str = "entities";

/// Render `source` through `view`.
pub fn execute_view(
    source: &str,
    view: &str,
    options: &ParserOptions,
    unit: OffsetUnit,
) -> Result<String, String> {
    match view {
        "ast" => ComrakParser::new(options.clone())
            .parse(source)
            .map(|root| root.to_string())
            .map_err(|e| e.to_string()),
        "entities" => {
            let result = RichTextConverter::with_options(options.clone())
                .offset_unit(unit)
                .convert(source);
            Ok(render_entity_table(&result))
        }
        "json" => {
            let formatted: FormattedText = RichTextConverter::with_options(options.clone())
                .offset_unit(unit)
                .convert(source)
                .into();
            serde_json::to_string_pretty(&formatted)
                .map(|json| json + "\n")
                .map_err(|e| e.to_string())
        }
        other => Err(format!(
            "Unknown view '{other}'. Available views: {}",
            AVAILABLE_VIEWS.join(", ")
        )),
    }
}

/// The converted text, then one row per annotation.
pub fn render_entity_table(result: &ConversionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "text ({} {}): {:?}",
        result.text_len(),
        result.unit.as_str(),
        result.text
    );
    if result.annotations.is_empty() {
        out.push_str("(no entities)\n");
        return out;
    }
    let _ = writeln!(out, "{:>6} {:>6}  {:<22} covers", "offset", "length", "kind");
    for annotation in &result.annotations {
        let kind = match &annotation.kind {
            AnnotationKind::PreformattedCode { language } if !language.is_empty() => {
                format!("Pre({language})")
            }
            AnnotationKind::TextLink { url } => format!("TextLink({url})"),
            AnnotationKind::MentionLink { user_id } => {
                format!("MentionLink({user_id})")
            }
            other => other.name().to_string(),
        };
        let covered = result.covered_text(annotation).unwrap_or("<invalid span>");
        let _ = writeln!(
            out,
            "{:>6} {:>6}  {:<22} {:?}",
            annotation.offset, annotation.length, kind, covered
        );
    }
    out
}
