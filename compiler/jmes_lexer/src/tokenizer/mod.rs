//! Lazy tokenizer driving a [`Cursor`] over one expression.
//!
//! # Architecture
//!
//! ```text
//! expression → Cursor → dispatch(char) → recognizer → Token
//! ```
//!
//! Each pull on [`Tokens`] looks up the current character in the dispatch
//! table and runs the matching recognizer. A recognizer consumes zero or
//! more characters and yields at most one token; whitespace yields none and
//! the loop dispatches again. When the cursor reaches EOF a single `Eof`
//! token is produced and the iterator is finished. The first error also
//! finishes it.

use std::iter::FusedIterator;

use jmes_lexer_core::{Cursor, Span};
use tracing::{debug, trace};

use crate::cook::{self, CookedLiteral};
use crate::dispatch::{self, Compound, Dispatch};
use crate::lex_error::{LexError, LexWarning};
use crate::options::{EndOffsets, LegacyLiterals, LexerOptions};
use crate::token::{Token, TokenKind, TokenValue};

/// Pull-based token stream over one expression.
///
/// Created by [`tokenize`](crate::tokenize) or
/// [`tokenize_with`](crate::tokenize_with). Yields `Ok` tokens ending with
/// exactly one `Eof`, or stops after the first `Err`.
pub struct Tokens<'src> {
    expression: &'src str,
    cursor: Cursor,
    options: LexerOptions,
    warnings: Vec<LexWarning>,
    finished: bool,
}

impl<'src> Tokens<'src> {
    /// Create a token stream. Fails on an empty expression.
    pub(crate) fn new(expression: &'src str, options: LexerOptions) -> Result<Self, LexError> {
        if expression.is_empty() {
            return Err(LexError::empty_expression());
        }
        Ok(Tokens {
            expression,
            cursor: Cursor::new(expression),
            options,
            warnings: Vec::new(),
            finished: false,
        })
    }

    /// The expression being tokenized.
    pub fn expression(&self) -> &'src str {
        self.expression
    }

    /// Warnings raised by the tokens produced so far.
    pub fn warnings(&self) -> &[LexWarning] {
        &self.warnings
    }

    /// Consume the stream, returning its warnings.
    pub fn into_warnings(self) -> Vec<LexWarning> {
        self.warnings
    }

    /// Produce the next token, skipping whitespace.
    ///
    /// Returns `Ok(None)` once `Eof` has been produced.
    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if self.finished {
            return Ok(None);
        }
        loop {
            let Some(c) = self.cursor.current() else {
                self.finished = true;
                return Ok(Some(Token::eof(self.cursor.len())));
            };
            let start = self.cursor.pos();
            let token = match dispatch::dispatch(c) {
                Dispatch::Whitespace => {
                    self.cursor.advance();
                    continue;
                }
                Dispatch::Identifier => self.identifier(start),
                Dispatch::Number => self.number(start)?,
                Dispatch::LeftBracket => self.left_bracket(start),
                Dispatch::Single(kind) => self.single(start, kind),
                Dispatch::Compound(op) => self.match_or_else(start, op),
                Dispatch::Literal => self.literal(start)?,
                Dispatch::QuotedIdentifier => self.quoted_identifier(start)?,
                Dispatch::RawString => self.raw_string(start)?,
                Dispatch::Unknown => {
                    return Err(LexError::unknown_token(start, c, self.expression));
                }
            };
            return Ok(Some(token));
        }
    }

    /// Span for a token that began at `start`.
    ///
    /// `legacy_end` is only used in [`EndOffsets::Legacy`] mode.
    #[inline]
    fn span(&self, start: usize, legacy_end: usize) -> Span {
        match self.options.end_offsets {
            EndOffsets::Exact => Span::new(start, self.cursor.offset()),
            EndOffsets::Legacy => Span::new(start, legacy_end),
        }
    }

    // ─── Identifiers & Numbers ─────────────────────────────────────

    fn identifier(&mut self, start: usize) -> Token {
        self.cursor.advance(); // first char already classified
        self.cursor.eat_while(dispatch::is_ident_continue);
        let text = self.cursor.slice_from(start);
        let span = self.span(start, text.len());
        Token::new(TokenKind::UnquotedIdentifier, TokenValue::Ident(text), span)
    }

    fn number(&mut self, start: usize) -> Result<Token, LexError> {
        self.cursor.advance(); // first char already classified
        self.cursor.eat_while(dispatch::is_number_continue);
        let text = self.cursor.slice_from(start);
        let Some(value) = cook::cook_number(&text) else {
            return Err(LexError::invalid_number(start, text, self.expression));
        };
        let span = self.span(start, text.len());
        Ok(Token::new(TokenKind::Number, TokenValue::Number(value), span))
    }

    // ─── Punctuation & Operators ───────────────────────────────────

    /// Single-character token whose value is its kind name.
    fn single(&mut self, start: usize, kind: TokenKind) -> Token {
        self.cursor.advance();
        let span = self.span(start, self.cursor.pos());
        Token::new(kind, TokenValue::Symbol(kind.name()), span)
    }

    fn left_bracket(&mut self, start: usize) -> Token {
        match self.cursor.advance() {
            Some(']') => {
                self.cursor.advance();
                let span = self.span(start, start + 1);
                Token::new(TokenKind::Flatten, TokenValue::Symbol("[]"), span)
            }
            Some('?') => {
                self.cursor.advance();
                let span = self.span(start, start + 1);
                Token::new(TokenKind::Filter, TokenValue::Symbol("[?"), span)
            }
            // The peeked character starts the next token.
            _ => {
                let span = self.span(start, start);
                Token::new(TokenKind::LBracket, TokenValue::Symbol("["), span)
            }
        }
    }

    /// Two-character operator if the next character completes it, else the
    /// single-character fallback with the next character left unconsumed.
    fn match_or_else(&mut self, start: usize, op: Compound) -> Token {
        if self.cursor.advance() == Some(op.expected) {
            self.cursor.advance();
            let span = self.span(start, start + 1);
            Token::new(op.matched, TokenValue::Symbol(op.pair), span)
        } else {
            let span = self.span(start, start);
            Token::new(op.fallback, TokenValue::Symbol(op.lone), span)
        }
    }

    // ─── Delimited Spans ───────────────────────────────────────────

    /// Scan a delimited span, attaching the expression to a failure.
    fn delimited(&mut self, delimiter: char) -> Result<String, LexError> {
        self.cursor
            .scan_until(delimiter)
            .map_err(|err| LexError::unclosed_delimiter(err, self.expression))
    }

    /// Legacy end offset of a delimited span: position after the scan
    /// minus `start`.
    #[inline]
    fn delimited_legacy_end(&self, start: usize) -> usize {
        self.cursor.pos() - start
    }

    fn literal(&mut self, start: usize) -> Result<Token, LexError> {
        let text = cook::unescape_backtick(&self.delimited('`')?);
        let allow_legacy = self.options.legacy_literals == LegacyLiterals::Warn;
        let span = self.span(start, self.delimited_legacy_end(start));
        let value = match cook::cook_literal(&text, allow_legacy) {
            CookedLiteral::Json(value) => value,
            CookedLiteral::Legacy(value) => {
                debug!(offset = start, literal = %text, "deprecated string literal syntax");
                self.warnings.push(LexWarning::deprecated_literal(span, text));
                value
            }
            CookedLiteral::Malformed => {
                return Err(LexError::malformed_literal(start, text, self.expression));
            }
        };
        Ok(Token::new(TokenKind::Literal, TokenValue::Json(value), span))
    }

    fn quoted_identifier(&mut self, start: usize) -> Result<Token, LexError> {
        let text = self.delimited('"')?;
        let span = self.span(start, self.delimited_legacy_end(start));
        match cook::cook_quoted_identifier(&text) {
            Ok(name) => Ok(Token::new(
                TokenKind::QuotedIdentifier,
                TokenValue::Ident(name),
                span,
            )),
            Err(message) => Err(LexError::malformed_quoted_identifier(
                start,
                format!("\"{text}\""),
                message,
                self.expression,
            )),
        }
    }

    fn raw_string(&mut self, start: usize) -> Result<Token, LexError> {
        let text = self.delimited('\'')?;
        let span = self.span(start, self.delimited_legacy_end(start));
        Ok(Token::new(
            TokenKind::Literal,
            TokenValue::Json(serde_json::Value::String(text)),
            span,
        ))
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Some(token)) => {
                trace!(
                    kind = %token.kind,
                    start = token.span.start,
                    end = token.span.end,
                    "token"
                );
                Some(Ok(token))
            }
            Ok(None) => None,
            Err(err) => {
                debug!(offset = err.offset, error = %err.kind, "tokenize aborted");
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}
