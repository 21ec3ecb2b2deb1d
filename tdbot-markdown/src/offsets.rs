//! Offset units.
//!
//! Rust strings are UTF-8, TDLib counts UTF-16 code units. Every length the converter records
//! goes through [`OffsetUnit::measure`] so the two never get mixed up.

use serde::{Deserialize, Serialize};

/// The unit annotation offsets and lengths are expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    /// UTF-16 code units (TDLib, Bot API)
    #[default]
    Utf16,
    /// Unicode scalar values
    Chars,
    /// UTF-8 bytes
    Bytes,
}

impl OffsetUnit {
    /// Length of `text` in this unit.
    pub fn measure(self, text: &str) -> usize {
        match self {
            OffsetUnit::Utf16 => text.encode_utf16().count(),
            OffsetUnit::Chars => text.chars().count(),
            OffsetUnit::Bytes => text.len(),
        }
    }

    /// Byte index in `text` of the position `offset` units from the start.
    ///
    /// Returns `None` when `offset` is past the end or falls inside a character
    /// (e.g. between the two halves of a surrogate pair).
    pub fn byte_index(self, text: &str, offset: usize) -> Option<usize> {
        if self == OffsetUnit::Bytes {
            return text.is_char_boundary(offset).then_some(offset);
        }
        let mut units = 0usize;
        for (idx, ch) in text.char_indices() {
            if units == offset {
                return Some(idx);
            }
            if units > offset {
                return None;
            }
            units += match self {
                OffsetUnit::Utf16 => ch.len_utf16(),
                _ => 1,
            };
        }
        (units == offset).then_some(text.len())
    }

    /// The slice of `text` covered by `offset..offset + length`.
    pub fn slice(self, text: &str, offset: usize, length: usize) -> Option<&str> {
        let start = self.byte_index(text, offset)?;
        let end = self.byte_index(text, offset.checked_add(length)?)?;
        text.get(start..end)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OffsetUnit::Utf16 => "utf16",
            OffsetUnit::Chars => "chars",
            OffsetUnit::Bytes => "bytes",
        }
    }
}

impl std::str::FromStr for OffsetUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utf16" | "utf-16" => Ok(OffsetUnit::Utf16),
            "chars" | "char" => Ok(OffsetUnit::Chars),
            "bytes" | "byte" | "utf8" | "utf-8" => Ok(OffsetUnit::Bytes),
            other => Err(format!(
                "unknown offset unit '{other}' (expected utf16, chars or bytes)"
            )),
        }
    }
}
