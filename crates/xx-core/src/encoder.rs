//! Line encoder and document assembler.

use crate::classify::{ascii_to_hex, classify};
use crate::comment::CommentFilter;
use crate::error::{Result, XxError};
use crate::token::Token;
use crate::tokenizer::tokenize;

/// Concatenate token hex up to (not including) the first comment token.
pub fn encode_line(tokens: &[Token]) -> String {
    tokens
        .iter()
        .take_while(|t| !t.ends_line())
        .map(|t| t.hex_representation.as_str())
        .collect()
}

/// Decode a hex string; `None` on odd length or a non-hex digit.
pub fn decode_hex(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
        .collect()
}

/// Decode a line's hex string, falling back to the string's own bytes when
/// it is ASCII but not valid hex.
pub fn decode_line(line: usize, hex: &str) -> Result<Vec<u8>> {
    if let Some(bytes) = decode_hex(hex) {
        return Ok(bytes);
    }
    if hex.is_ascii() {
        tracing::warn!(line, hex, "line is not valid hex, using its text bytes");
        if let Some(bytes) = decode_hex(&ascii_to_hex(hex)) {
            return Ok(bytes);
        }
    }
    Err(XxError::UndecodableLine { line, hex: hex.to_string() })
}

/// Tokenize and classify one logical line.
pub fn classify_line(line: &str, line_number: usize) -> Vec<Token> {
    tokenize(line, line_number).into_iter().map(classify).collect()
}

/// Streaming assembler over physical lines, numbered from 1.
#[derive(Debug, Default)]
pub struct Assembler {
    filter: CommentFilter,
    output: Vec<u8>,
    line_number: usize,
    swallowed_lines: usize,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next physical line and return the bytes it produced.
    pub fn push_line(&mut self, line: &str) -> Result<&[u8]> {
        self.line_number += 1;
        let start = self.output.len();

        let Some(logical) = self.filter.filter(line) else {
            self.swallowed_lines += 1;
            return Ok(&[]);
        };

        let tokens = classify_line(&logical, self.line_number);
        let hex = encode_line(&tokens);
        let bytes = decode_line(self.line_number, &hex)?;
        tracing::debug!(line = self.line_number, bytes = bytes.len(), "encoded line");
        self.output.extend_from_slice(&bytes);
        Ok(&self.output[start..])
    }

    /// Bytes produced so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// Consume the assembler and return the full output.
    pub fn finish(self) -> Vec<u8> {
        if let Some(pending) = self.filter.finish() {
            tracing::warn!(
                line = self.line_number,
                pending = %pending,
                "input ended inside a block comment, pending text dropped"
            );
        }
        tracing::info!(
            lines = self.line_number,
            swallowed = self.swallowed_lines,
            bytes = self.output.len(),
            "assembled"
        );
        self.output
    }
}

/// Assemble an ordered sequence of lines into one byte buffer.
pub fn assemble<I, S>(lines: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut asm = Assembler::new();
    for line in lines {
        asm.push_line(line.as_ref())?;
    }
    Ok(asm.finish())
}

/// Assemble a whole source text, split on line endings.
pub fn assemble_str(text: &str) -> Result<Vec<u8>> {
    assemble(text.lines())
}
