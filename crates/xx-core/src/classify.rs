//! Token classification — five ordered passes over an immutable token value.
//!
//! Order matters: the ASCII test feeds the comment scan, binary literals are
//! normalized before the hex test, and the ASCII fallback only fills in what
//! the hex test left empty.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::markers::{is_ascii_marker, is_two_char_marker, strip_noise, MARKERS};
use crate::token::Token;

static RE_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9A-Fa-f]{2})+$").unwrap());

const BINARY_PREFIX: &str = "0y";
const BINARY_LEN: usize = 10;

pub type Pass = fn(Token) -> Token;

/// The classification passes in the order they must run.
pub const PASSES: [(&str, Pass); 5] = [
    ("ascii", test_ascii),
    ("comment", test_comment),
    ("binary", test_binary),
    ("hex", test_hex),
    ("ascii_fallback", ascii_fallback),
];

/// Run every pass over a freshly tokenized token.
pub fn classify(token: Token) -> Token {
    let token = PASSES.iter().fold(token, |tok, (_, pass)| pass(tok));
    tracing::debug!(
        line = token.line_number,
        raw = %token.raw_text,
        hex = %token.hex_representation,
        comment = token.ends_line(),
        "classified token"
    );
    token
}

/// Non-empty, even-length run of hex digits.
pub fn is_hex_string(text: &str) -> bool {
    RE_HEX.is_match(text)
}

/// Hex digits of the text's own byte values.
pub fn ascii_to_hex(text: &str) -> String {
    text.bytes().fold(String::with_capacity(text.len() * 2), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}

/// Pass 1: every character is 7-bit ASCII.
pub fn test_ascii(mut token: Token) -> Token {
    token.is_ascii = token.normalized_text.is_ascii();
    token
}

/// Pass 2: leading marker makes the token a comment; a non-ASCII token is
/// also cut at the earliest marker anywhere inside it.
pub fn test_comment(mut token: Token) -> Token {
    let mut chars = token.normalized_text.chars();
    let Some(first) = chars.next() else {
        return token;
    };
    if is_ascii_marker(first) {
        token.is_comment = true;
        return token;
    }
    if let Some(second) = chars.next() {
        if is_two_char_marker(&format!("{first}{second}")) {
            token.is_comment = true;
            return token;
        }
    }
    if !token.is_ascii {
        if let Some(at) = MARKERS.earliest_in(&token.normalized_text) {
            token.normalized_text.truncate(at);
            token.has_embedded_comment = true;
        }
    }
    token
}

/// Pass 3: `0y` followed by eight bits becomes two lowercase hex digits.
/// A bad digit is logged and the token is left alone.
pub fn test_binary(mut token: Token) -> Token {
    if token.is_quoted || token.len() != BINARY_LEN {
        return token;
    }
    let Some(bits) = token.normalized_text.strip_prefix(BINARY_PREFIX) else {
        return token;
    };
    if let Some(bad) = bits.chars().find(|c| !matches!(c, '0' | '1')) {
        tracing::error!(
            line = token.line_number,
            token = %token.raw_text,
            digit = %bad,
            "non binary digit in binary literal"
        );
        return token;
    }
    match u8::from_str_radix(bits, 2) {
        Ok(value) => token.normalized_text = format!("{value:02x}"),
        Err(err) => tracing::error!(
            line = token.line_number,
            token = %token.raw_text,
            "binary literal: {err}"
        ),
    }
    token
}

/// Pass 4: noise-stripped text that is valid hex is taken as-is.
pub fn test_hex(mut token: Token) -> Token {
    if token.is_comment || token.is_quoted {
        return token;
    }
    let stripped = strip_noise(&token.normalized_text);
    if is_hex_string(&stripped) {
        token.is_hex_literal = true;
        token.hex_representation = stripped.clone();
        token.normalized_text = stripped;
    }
    token
}

/// Pass 5: ASCII text with no hex form passes through as its own bytes.
pub fn ascii_fallback(mut token: Token) -> Token {
    if token.is_ascii && token.hex_representation.is_empty() && !token.is_comment {
        token.hex_representation = ascii_to_hex(&token.normalized_text);
    }
    token
}
