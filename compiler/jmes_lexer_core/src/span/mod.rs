//! Source location spans.
//!
//! Offsets count characters, not bytes: an expression is scanned as a
//! sequence of `char`s and every position reported to callers indexes
//! into that sequence.

use std::fmt;

/// Character-offset span into an expression.
///
/// `start` is the offset of the first character. `end` is a diagnostic
/// hint whose exact meaning depends on the lexer's end-offset mode; in the
/// default mode it is exclusive (one past the last character).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Create a point span (zero-length).
    #[inline]
    pub const fn point(offset: usize) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Length of the span in characters.
    ///
    /// Saturates to zero for spans whose `end` precedes `start`, which the
    /// legacy end-offset mode can produce.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
