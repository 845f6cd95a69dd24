//! Lexer for JMESPath expressions.
//!
//! Converts an expression into a stream of typed [`Token`]s for the parser.
//! Tokens are produced lazily: [`tokenize`] returns an iterator that does
//! no work until it is pulled, so a parser that stops early pays only for
//! what it read. [`lex`] drains the iterator into a [`TokenList`].
//!
//! ```text
//! a.b[0]  →  unquoted_identifier dot unquoted_identifier lbracket number rbracket eof
//! ```
//!
//! Errors are fatal and carry the expression plus the failing offset; see
//! [`LexError::render`] for a caret display. The deprecated bare-word
//! literal syntax (`` `foo` ``) is accepted with a [`LexWarning`] unless
//! [`LegacyLiterals::Reject`] is configured.

mod cook;
mod dispatch;
mod lex_error;
mod options;
mod token;
mod tokenizer;

pub use jmes_lexer_core::Span;
pub use lex_error::{LexError, LexErrorKind, LexWarning, LexWarningKind};
pub use options::{EndOffsets, LegacyLiterals, LexerOptions};
pub use token::{Token, TokenKind, TokenList, TokenValue};
pub use tokenizer::Tokens;

/// Tokenize an expression with default options.
///
/// Fails immediately with [`LexErrorKind::EmptyExpression`] if `expression`
/// is empty; every other error surfaces from the iterator.
pub fn tokenize(expression: &str) -> Result<Tokens<'_>, LexError> {
    Tokens::new(expression, LexerOptions::default())
}

/// Tokenize an expression with explicit options.
pub fn tokenize_with(expression: &str, options: LexerOptions) -> Result<Tokens<'_>, LexError> {
    Tokens::new(expression, options)
}

/// Lex an entire expression with default options.
pub fn lex(expression: &str) -> Result<TokenList, LexError> {
    lex_with(expression, LexerOptions::default())
}

/// Lex an entire expression with explicit options.
///
/// Stops at the first error.
pub fn lex_with(expression: &str, options: LexerOptions) -> Result<TokenList, LexError> {
    let mut tokens = tokenize_with(expression, options)?;
    let collected = tokens.by_ref().collect::<Result<Vec<_>, _>>()?;
    Ok(TokenList::new(collected, tokens.into_warnings()))
}

