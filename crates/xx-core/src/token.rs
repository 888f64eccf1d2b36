//! Token value threaded through the classification passes.

/// One space-delimited unit of a comment-filtered line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Token {
    /// 1-based source line.
    pub line_number: usize,
    pub raw_text: String,
    /// Rewritten by the classification passes.
    pub normalized_text: String,
    /// Hex digits this token contributes; empty until derived.
    pub hex_representation: String,
    pub is_quoted: bool,
    pub is_ascii: bool,
    pub is_hex_literal: bool,
    /// The token itself starts a comment.
    pub is_comment: bool,
    /// A marker was found inside the token and the rest truncated.
    pub has_embedded_comment: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, line_number: usize) -> Self {
        let text = text.into();
        Self {
            line_number,
            normalized_text: text.clone(),
            raw_text: text,
            ..Default::default()
        }
    }

    pub fn quoted(mut self, is_quoted: bool) -> Self {
        self.is_quoted = is_quoted;
        self
    }

    pub fn commented(mut self, is_comment: bool) -> Self {
        self.is_comment = is_comment;
        self
    }

    /// Character length of the normalized text.
    pub fn len(&self) -> usize {
        self.normalized_text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.normalized_text.is_empty()
    }

    /// Whether this token ends the line's byte contribution.
    pub fn ends_line(&self) -> bool {
        self.is_comment || self.has_embedded_comment
    }
}
