//! Token model: kinds, payloads, and the collected token list.

use std::fmt;

use jmes_lexer_core::Span;
use serde_json::{Number, Value};

use crate::lex_error::LexWarning;

/// Lexical category of a token.
///
/// A closed set: the parser matches on these exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TokenKind {
    // === Punctuation ===
    Dot,
    Star,
    Flatten,
    Filter,
    LBracket,
    RBracket,
    Comma,
    Colon,
    Current,
    Expref,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // === Comparison and pipes ===
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    Neq,
    Or,
    Pipe,

    // === Values ===
    Literal,
    QuotedIdentifier,
    UnquotedIdentifier,
    Number,

    // === Control ===
    /// A lone `=` or `!`. Reported as a token, not an error; the parser
    /// rejects it.
    Unknown,
    Eof,
}

impl TokenKind {
    /// The canonical lowercase name of this kind (`"lbracket"`, `"eof"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Dot => "dot",
            TokenKind::Star => "star",
            TokenKind::Flatten => "flatten",
            TokenKind::Filter => "filter",
            TokenKind::LBracket => "lbracket",
            TokenKind::RBracket => "rbracket",
            TokenKind::Comma => "comma",
            TokenKind::Colon => "colon",
            TokenKind::Current => "current",
            TokenKind::Expref => "expref",
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::LBrace => "lbrace",
            TokenKind::RBrace => "rbrace",
            TokenKind::Lt => "lt",
            TokenKind::Lte => "lte",
            TokenKind::Gt => "gt",
            TokenKind::Gte => "gte",
            TokenKind::Eq => "eq",
            TokenKind::Neq => "neq",
            TokenKind::Or => "or",
            TokenKind::Pipe => "pipe",
            TokenKind::Literal => "literal",
            TokenKind::QuotedIdentifier => "quoted_identifier",
            TokenKind::UnquotedIdentifier => "unquoted_identifier",
            TokenKind::Number => "number",
            TokenKind::Unknown => "unknown",
            TokenKind::Eof => "eof",
        }
    }

    /// Source spelling for kinds that always look the same.
    ///
    /// Returns `None` for variable-length kinds (identifiers, numbers,
    /// literals), for `Unknown` (either `=` or `!`), and for `Eof`.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Dot => Some("."),
            TokenKind::Star => Some("*"),
            TokenKind::Flatten => Some("[]"),
            TokenKind::Filter => Some("[?"),
            TokenKind::LBracket => Some("["),
            TokenKind::RBracket => Some("]"),
            TokenKind::Comma => Some(","),
            TokenKind::Colon => Some(":"),
            TokenKind::Current => Some("@"),
            TokenKind::Expref => Some("&"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::LBrace => Some("{"),
            TokenKind::RBrace => Some("}"),
            TokenKind::Lt => Some("<"),
            TokenKind::Lte => Some("<="),
            TokenKind::Gt => Some(">"),
            TokenKind::Gte => Some(">="),
            TokenKind::Eq => Some("=="),
            TokenKind::Neq => Some("!="),
            TokenKind::Or => Some("||"),
            TokenKind::Pipe => Some("|"),
            TokenKind::Literal
            | TokenKind::QuotedIdentifier
            | TokenKind::UnquotedIdentifier
            | TokenKind::Number
            | TokenKind::Unknown
            | TokenKind::Eof => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Semantic payload of a token.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum TokenValue {
    /// Fixed text: the kind name for single-character punctuation, the
    /// spelling for bracket and operator variants, `""` for `eof`.
    Symbol(&'static str),
    /// Identifier text (unescaped for quoted identifiers).
    Ident(String),
    /// Parsed integer for `number` tokens, exact at any magnitude.
    Number(Number),
    /// Parsed JSON for `literal` tokens; raw strings become JSON strings.
    Json(Value),
}

impl TokenValue {
    /// Text of a `Symbol` or `Ident` payload.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Symbol(s) => Some(s),
            TokenValue::Ident(s) => Some(s),
            TokenValue::Number(_) | TokenValue::Json(_) => None,
        }
    }

    /// Integer of a `Number` payload.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            TokenValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Integer of a `Number` payload, if it fits in an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    /// JSON of a `Json` payload.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            TokenValue::Json(v) => Some(v),
            _ => None,
        }
    }
}

/// A classified lexical unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Token {
    /// Create a new token.
    #[inline]
    pub fn new(kind: TokenKind, value: TokenValue, span: Span) -> Self {
        Token { kind, value, span }
    }

    /// The end marker. Both offsets equal the expression length.
    pub fn eof(len: usize) -> Self {
        Token {
            kind: TokenKind::Eof,
            value: TokenValue::Symbol(""),
            span: Span::point(len),
        }
    }

    /// Offset of the token's first character.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Diagnostic end offset (see [`EndOffsets`](crate::EndOffsets)).
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }
}

/// Every token of an expression plus the warnings raised while lexing it.
///
/// Produced by [`lex`](crate::lex). The last token is always `Eof`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
    warnings: Vec<LexWarning>,
}

impl TokenList {
    pub(crate) fn new(tokens: Vec<Token>, warnings: Vec<LexWarning>) -> Self {
        TokenList { tokens, warnings }
    }

    /// All tokens in source order, ending with `Eof`.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Non-fatal warnings, in the order they were raised.
    pub fn warnings(&self) -> &[LexWarning] {
        &self.warnings
    }

    /// Token kinds in source order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Number of tokens, including `Eof`.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// `true` only for a default-constructed list; lexing always yields `Eof`.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Split into tokens and warnings.
    pub fn into_parts(self) -> (Vec<Token>, Vec<LexWarning>) {
        (self.tokens, self.warnings)
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

#[cfg(test)]
mod tests;
