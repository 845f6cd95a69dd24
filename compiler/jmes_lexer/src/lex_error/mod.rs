//! Lexer errors and warnings.
//!
//! Every error is fatal to the tokenize call that raised it and carries:
//! - WHERE: `offset`, the character offset of the failure
//! - WHAT: `kind`, what went wrong
//! - the full `expression`, so callers can point a caret at the column
//!
//! The one non-fatal condition, the legacy literal fallback, is reported as
//! a [`LexWarning`] instead.

use jmes_lexer_core::{Span, UnclosedDelimiter};
use thiserror::Error;

/// A fatal lexer error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} (at offset {offset})")]
pub struct LexError {
    /// Character offset of the failure.
    pub offset: usize,
    /// What went wrong.
    pub kind: LexErrorKind,
    /// The expression being tokenized.
    pub expression: String,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// The expression has zero length.
    #[error("Invalid JMESPath expression: cannot be empty.")]
    EmptyExpression,
    /// A `'`, `"` or `` ` `` span was never closed.
    #[error("Unclosed {delimiter} delimiter")]
    UnclosedDelimiter { delimiter: char },
    /// No recognizer is registered for this character.
    #[error("Unknown token {found}")]
    UnknownToken { found: char },
    /// Backtick content is neither JSON nor a legacy bare string.
    #[error("Bad token {text}")]
    MalformedLiteral { text: String },
    /// Double-quoted content is not a valid JSON string.
    #[error("{message}")]
    MalformedQuotedIdentifier { text: String, message: String },
    /// A run of digits and `-` is not an integer literal (`-`, `1-2`).
    #[error("Invalid number {text}")]
    InvalidNumber { text: String },
}

impl LexError {
    /// Create an empty-expression error.
    #[cold]
    pub fn empty_expression() -> Self {
        Self {
            offset: 0,
            kind: LexErrorKind::EmptyExpression,
            expression: String::new(),
        }
    }

    /// Create an unclosed-delimiter error from a failed cursor scan.
    #[cold]
    pub fn unclosed_delimiter(err: UnclosedDelimiter, expression: &str) -> Self {
        Self {
            offset: err.start,
            kind: LexErrorKind::UnclosedDelimiter {
                delimiter: err.delimiter,
            },
            expression: expression.to_owned(),
        }
    }

    /// Create an unknown-token error.
    #[cold]
    pub fn unknown_token(offset: usize, found: char, expression: &str) -> Self {
        Self {
            offset,
            kind: LexErrorKind::UnknownToken { found },
            expression: expression.to_owned(),
        }
    }

    /// Create a malformed-literal error.
    #[cold]
    pub fn malformed_literal(offset: usize, text: impl Into<String>, expression: &str) -> Self {
        Self {
            offset,
            kind: LexErrorKind::MalformedLiteral { text: text.into() },
            expression: expression.to_owned(),
        }
    }

    /// Create a malformed-quoted-identifier error.
    #[cold]
    pub fn malformed_quoted_identifier(
        offset: usize,
        text: impl Into<String>,
        message: impl Into<String>,
        expression: &str,
    ) -> Self {
        Self {
            offset,
            kind: LexErrorKind::MalformedQuotedIdentifier {
                text: text.into(),
                message: message.into(),
            },
            expression: expression.to_owned(),
        }
    }

    /// Create an invalid-number error.
    #[cold]
    pub fn invalid_number(offset: usize, text: impl Into<String>, expression: &str) -> Self {
        Self {
            offset,
            kind: LexErrorKind::InvalidNumber { text: text.into() },
            expression: expression.to_owned(),
        }
    }

    /// The bare message, without offset or expression.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Caller-facing rendering with a caret under the failing column.
    ///
    /// ```text
    /// Bad jmespath expression: Unknown token ^:
    /// foo.^bar
    ///     ^
    /// ```
    ///
    /// `EmptyExpression` renders as its message alone.
    pub fn render(&self) -> String {
        if self.kind == LexErrorKind::EmptyExpression {
            return self.message();
        }
        let underline = " ".repeat(self.offset);
        format!(
            "Bad jmespath expression: {}:\n{}\n{underline}^",
            self.kind, self.expression
        )
    }
}

/// A non-fatal condition noticed while tokenizing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexWarning {
    /// Location of the token that triggered the warning.
    pub span: Span,
    /// What was noticed.
    pub kind: LexWarningKind,
}

/// What kind of warning was raised.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexWarningKind {
    /// A backtick literal was not valid JSON and was read as a bare string.
    ///
    /// This syntax is slated for removal; quote the string inside the
    /// backticks or use a `'raw string'` instead.
    #[error("deprecated string literal syntax: `{text}`")]
    DeprecatedLiteral { text: String },
}

impl LexWarning {
    /// Create a deprecated-literal warning.
    pub fn deprecated_literal(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            kind: LexWarningKind::DeprecatedLiteral { text: text.into() },
        }
    }
}
