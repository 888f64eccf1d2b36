//! Tokenizer — splits a comment-filtered line on unquoted spaces.

use crate::markers::{ascii_comment_markers, resolve_escape};
use crate::token::Token;

const QUOTE: char = '"';
const ESCAPE: char = '\\';
const SPACE: char = ' ';

#[derive(Default)]
struct TokenizerState {
    tokens: Vec<Token>,
    buffer: String,
    quoted: bool,
    escaping: bool,
    /// A quote was seen since the last flush; survives an empty `""`.
    token_quoted: bool,
}

impl TokenizerState {
    fn flush(&mut self, line_number: usize) {
        let text = std::mem::take(&mut self.buffer);
        let is_quoted = std::mem::take(&mut self.token_quoted);
        let is_comment = contains_comment_marker(&text);
        self.tokens
            .push(Token::new(text, line_number).quoted(is_quoted).commented(is_comment));
    }
}

/// Substring test against the ASCII one- and two-character markers.
pub fn contains_comment_marker(text: &str) -> bool {
    ascii_comment_markers().any(|m| text.contains(m.as_str()))
}

/// Split one logical line into tokens. The final buffer is always flushed,
/// so every line yields at least one (possibly empty) token.
pub fn tokenize(line: &str, line_number: usize) -> Vec<Token> {
    let mut state = TokenizerState::default();

    for c in line.trim().chars() {
        if state.escaping {
            match resolve_escape(c) {
                Some(resolved) => state.buffer.push(resolved),
                None => {
                    state.buffer.push(ESCAPE);
                    state.buffer.push(c);
                }
            }
            state.escaping = false;
            continue;
        }
        match c {
            QUOTE => {
                state.quoted = !state.quoted;
                state.token_quoted = true;
            }
            ESCAPE if state.quoted => state.escaping = true,
            SPACE if !state.quoted => {
                if !state.buffer.is_empty() {
                    state.flush(line_number);
                }
            }
            _ => state.buffer.push(c),
        }
    }

    // Dangling backslash at end of line stays literal.
    if state.escaping {
        state.buffer.push(ESCAPE);
    }
    state.flush(line_number);
    state.tokens
}
