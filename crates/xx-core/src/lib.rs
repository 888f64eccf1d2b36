//! XX notation assembler — turns annotated hex text into raw bytes.
//!
//! Stages, applied to every source line in order:
//! 1. Block comment filtering (`/* ... */`, may span lines)
//! 2. Tokenization (spaces, quoted strings, escapes)
//! 3. Token classification (ASCII, comments, `0y` binary, hex, ASCII fallback)
//! 4. Line encoding (concatenate token hex, decode to bytes)

pub mod classify;
pub mod comment;
pub mod config;
pub mod dump;
pub mod encoder;
pub mod error;
pub mod markers;
pub mod token;
pub mod tokenizer;

pub use classify::classify;
pub use comment::CommentFilter;
pub use config::XxConfig;
pub use dump::hex_dump;
pub use encoder::{assemble, assemble_str, Assembler};
pub use error::{Result, XxError};
pub use token::Token;
pub use tokenizer::tokenize;
