//! Block comment filter — strips `/* ... */` spans, including ones that
//! cross line boundaries.

use crate::markers::{BLOCK_COMMENT_END, BLOCK_COMMENT_START};

/// Line preprocessor carrying block-comment state from one line to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentFilter {
    pub in_block_comment: bool,
    /// Text seen before a still-open block comment, fused onto the text
    /// that follows its close.
    pub carry: String,
}

impl CommentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter one physical line.
    ///
    /// Returns `None` while the line ends inside a block comment; the text
    /// gathered so far stays in `carry` until the comment closes.
    pub fn filter(&mut self, line: &str) -> Option<String> {
        let mut result = std::mem::take(&mut self.carry);
        let mut rest = line;

        loop {
            if self.in_block_comment {
                match rest.find(BLOCK_COMMENT_END) {
                    Some(end) => {
                        rest = &rest[end + BLOCK_COMMENT_END.len()..];
                        self.in_block_comment = false;
                    }
                    None => {
                        self.carry = result;
                        return None;
                    }
                }
            } else {
                match rest.find(BLOCK_COMMENT_START) {
                    Some(start) => {
                        result.push_str(&rest[..start]);
                        // The close may share the opener's `*`, as in `/*/`.
                        rest = &rest[start + 1..];
                        self.in_block_comment = true;
                    }
                    None => {
                        result.push_str(rest);
                        return Some(result);
                    }
                }
            }
        }
    }

    /// Consume the filter at end of input. Returns the pending text if the
    /// input ended inside an unterminated block comment.
    pub fn finish(self) -> Option<String> {
        self.in_block_comment.then_some(self.carry)
    }
}
