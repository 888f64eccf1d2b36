//! Static marker tables: comment markers, escapes, and hex noise.

use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

/// Single-character ASCII comment markers.
pub const ASCII_MARKERS: [char; 7] = ['#', ';', '%', '|', '\x1b', '-', '/'];

/// Two-character comment markers.
pub const TWO_CHAR_MARKERS: [&str; 2] = ["--", "//"];

/// Box-drawing glyphs; each one is a marker of its own.
pub const DRAWING_MARKERS: RangeInclusive<char> = '\u{2500}'..='\u{2561}';

/// Substrings stripped before hex validation, applied in this order.
pub const NOISE: [&str; 7] = [",", "$", "\\x", "0x", "h", ":", " "];

pub const BLOCK_COMMENT_START: &str = "/*";
pub const BLOCK_COMMENT_END: &str = "*/";

/// Resolve the character after a backslash inside quoted text.
pub fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        '\\' => Some('\\'),
        't' => Some('\t'),
        'r' => Some('\r'),
        _ => None,
    }
}

pub fn is_ascii_marker(c: char) -> bool {
    ASCII_MARKERS.contains(&c)
}

pub fn is_drawing_marker(c: char) -> bool {
    DRAWING_MARKERS.contains(&c)
}

pub fn is_two_char_marker(s: &str) -> bool {
    TWO_CHAR_MARKERS.contains(&s)
}

/// The ASCII one- and two-character markers, without the drawing range.
pub fn ascii_comment_markers() -> impl Iterator<Item = String> {
    ASCII_MARKERS
        .iter()
        .map(|c| c.to_string())
        .chain(TWO_CHAR_MARKERS.iter().map(|s| s.to_string()))
}

/// Strip every noise substring from `text`.
pub fn strip_noise(text: &str) -> String {
    NOISE.iter().fold(text.to_string(), |acc, noise| acc.replace(noise, ""))
}

/// Union of every comment marker. Membership is the only contract;
/// enumeration order is unspecified.
#[derive(Debug, Clone)]
pub struct MarkerTable {
    markers: HashSet<String>,
}

impl MarkerTable {
    pub fn build() -> Self {
        let markers = ascii_comment_markers()
            .chain(DRAWING_MARKERS.map(String::from))
            .collect();
        Self { markers }
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.markers.contains(marker)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(String::as_str)
    }

    /// Byte offset of the earliest marker occurring anywhere in `text`.
    pub fn earliest_in(&self, text: &str) -> Option<usize> {
        text.char_indices()
            .map(|(i, _)| i)
            .find(|&i| self.iter().any(|m| text[i..].starts_with(m)))
    }
}

impl Default for MarkerTable {
    fn default() -> Self {
        Self::build()
    }
}

/// Process-wide marker table.
pub static MARKERS: LazyLock<MarkerTable> = LazyLock::new(MarkerTable::build);
