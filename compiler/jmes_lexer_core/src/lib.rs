//! Low-level character cursor for the JMESPath lexer.
//!
//! This crate knows nothing about tokens. It provides:
//! - [`Cursor`]: single-pass traversal with one-character lookahead and a
//!   delimiter-bounded sub-scan for quoted spans
//! - [`Span`]: start/end character offsets used for diagnostics
//! - [`UnclosedDelimiter`]: the one failure a delimiter scan can produce

mod cursor;
mod span;

pub use cursor::{Cursor, UnclosedDelimiter};
pub use span::Span;
