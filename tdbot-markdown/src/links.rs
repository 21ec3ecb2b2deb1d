//! Link url classification.
//!
//! Two `tg://` forms get special treatment:
//!
//! - `tg://user?id=<N>` mentions a user by id and becomes [`AnnotationKind::MentionLink`].
//! - `tg://openmessage?chat_id=<M>` opens a chat. Supergroup and channel ids carry a `-100`
//!   prefix in the API but not in this link form, so the prefix is stripped. Parameters after
//!   `chat_id` (`&message_id=...`) are kept as written.
//!
//! Everything else is a [`AnnotationKind::TextLink`] with the url as written.

use crate::annotation::AnnotationKind;

const USER_PREFIX: &str = "tg://user?id=";
const OPEN_MESSAGE_PREFIX: &str = "tg://openmessage?chat_id=";
const CHANNEL_ID_PREFIX: &str = "-100";

/// Picks the annotation kind for a link pointing at `url`.
///
/// # Example
///
/// ```
/// use tdbot_markdown::annotation::AnnotationKind;
/// use tdbot_markdown::links::classify_link;
///
/// assert_eq!(classify_link("tg://user?id=42"), AnnotationKind::MentionLink { user_id: 42 });
/// ```
pub fn classify_link(url: &str) -> AnnotationKind {
    if let Some(rest) = url.strip_prefix(USER_PREFIX) {
        if let Some(user_id) = parse_leading_int(rest) {
            return AnnotationKind::MentionLink { user_id };
        }
    } else if let Some(rest) = url.strip_prefix(OPEN_MESSAGE_PREFIX) {
        let (chat_id, query) = rest.split_at(rest.find('&').unwrap_or(rest.len()));
        let chat_id = chat_id.strip_prefix(CHANNEL_ID_PREFIX).unwrap_or(chat_id);
        return AnnotationKind::TextLink {
            url: format!("{OPEN_MESSAGE_PREFIX}{chat_id}{query}"),
        };
    }
    AnnotationKind::TextLink {
        url: url.to_string(),
    }
}

/// Parses an optionally signed run of leading decimal digits, ignoring whatever follows.
///
/// `"42&x=1"` gives 42; `"abc"` and `""` give `None`, as does a value that overflows `i64`.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['-', '+']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}
