//! Property tests over generated Markdown.

use crate::common::{assert_spans_in_bounds, convert};
use proptest::prelude::*;
use tdbot_markdown::{OffsetUnit, RichTextConverter};

/// Markdown assembled from markup fragments and short runs of mixed-width text.
fn markdown_soup() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        Just("**".to_string()),
        Just("*".to_string()),
        Just("_".to_string()),
        Just("~~".to_string()),
        Just("`".to_string()),
        Just("> ".to_string()),
        Just(">> ".to_string()),
        Just("\n".to_string()),
        Just("\n\n".to_string()),
        Just("```py\n".to_string()),
        Just("# ".to_string()),
        Just("- ".to_string()),
        Just("[link](http://a.b)".to_string()),
        Just("[m](tg://user?id=42)".to_string()),
        Just("[".to_string()),
        Just("](tg://openmessage?chat_id=-1009)".to_string()),
        Just("<i>".to_string()),
        "[a-zé😀✓ ]{0,8}",
    ];
    prop::collection::vec(piece, 0..40).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn spans_stay_inside_text(md in markdown_soup()) {
        assert_spans_in_bounds(&convert(&md));
    }

    #[test]
    fn spans_stay_inside_text_in_every_unit(md in markdown_soup()) {
        for unit in [OffsetUnit::Chars, OffsetUnit::Bytes] {
            let result = RichTextConverter::new().offset_unit(unit).convert(&md);
            assert_spans_in_bounds(&result);
        }
    }

    #[test]
    fn unit_choice_does_not_change_text(md in markdown_soup()) {
        let utf16 = RichTextConverter::new().convert(&md);
        let chars = RichTextConverter::new().offset_unit(OffsetUnit::Chars).convert(&md);
        prop_assert_eq!(&utf16.text, &chars.text);
        prop_assert_eq!(utf16.annotations.len(), chars.annotations.len());
        for (a, b) in utf16.annotations.iter().zip(&chars.annotations) {
            prop_assert_eq!(utf16.covered_text(a), chars.covered_text(b));
        }
    }

    #[test]
    fn unmarked_text_round_trips(text in "[a-z0-9]([a-z0-9 ,]{0,30}[a-z0-9])?") {
        let result = convert(&text);
        prop_assert_eq!(result.text, text);
        prop_assert!(result.annotations.is_empty());
    }
}
