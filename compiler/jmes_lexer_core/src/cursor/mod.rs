//! Character cursor over an owned copy of the expression.
//!
//! The cursor walks the expression one `char` at a time. Once the last
//! character has been passed, [`Cursor::current()`] returns `None` (the
//! sentinel) and further calls to [`Cursor::advance()`] are no-ops.
//!
//! # Position at EOF
//!
//! Reaching the sentinel does not move the position: after advancing past
//! the final character, [`Cursor::pos()`] still reports the index of that
//! character. [`Cursor::offset()`] reports the number of consumed
//! characters instead, which equals the expression length at EOF.

use std::fmt;

/// A delimited span was opened but never closed.
///
/// Produced by [`Cursor::scan_until()`]. `start` is the offset of the
/// opening delimiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnclosedDelimiter {
    /// The delimiter that was never matched.
    pub delimiter: char,
    /// Offset of the opening delimiter.
    pub start: usize,
}

impl fmt::Display for UnclosedDelimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unclosed {} delimiter", self.delimiter)
    }
}

impl std::error::Error for UnclosedDelimiter {}

/// Single-pass cursor with one-character lookahead.
///
/// Owns its characters, so a cursor never borrows the caller's string and
/// independent cursors never share state.
///
/// # Invariant
///
/// `current == None` exactly when traversal has run past the last
/// character. While `current` is `Some`, `current == Some(chars[pos])`.
#[derive(Clone, Debug)]
pub struct Cursor {
    chars: Vec<char>,
    /// Current read position (character index into `chars`).
    pos: usize,
    /// Character at `pos`, or `None` once exhausted.
    current: Option<char>,
}

impl Cursor {
    /// Create a new cursor at position 0.
    ///
    /// An empty `text` produces a cursor that is already at EOF.
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let current = chars.first().copied();
        Self {
            chars,
            pos: 0,
            current,
        }
    }

    /// Returns the character at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Move forward by one character and return the new current character.
    ///
    /// At the last character the current becomes `None` and the position
    /// stays put. Calling again at EOF keeps returning `None`.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        if self.pos + 1 >= self.chars.len() {
            self.current = None;
        } else {
            self.pos += 1;
            self.current = Some(self.chars[self.pos]);
        }
        self.current
    }

    /// Returns `true` once traversal has run past the last character.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Current character index.
    ///
    /// Does not move past the last character; see the module docs.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of characters consumed so far.
    ///
    /// Equals [`pos()`](Self::pos) while content remains and
    /// [`len()`](Self::len) once the cursor is exhausted.
    #[inline]
    pub fn offset(&self) -> usize {
        if self.current.is_some() {
            self.pos
        } else {
            self.chars.len()
        }
    }

    /// Length of the expression in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` for a cursor over an empty expression.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Advance while `pred` returns `true` for the current character.
    ///
    /// Stops at the first non-matching character or at EOF.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    /// Collect the characters in `start..end` into a `String`.
    ///
    /// `end` is clamped to the expression length and `start` to `end`, so
    /// an out-of-range request yields an empty string.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Collect the characters from `start` up to the consumed offset.
    ///
    /// Equivalent to `self.slice(start, self.offset())`.
    pub fn slice_from(&self, start: usize) -> String {
        self.slice(start, self.offset())
    }

    /// Scan a delimited span and return its contents.
    ///
    /// The current character must be the opening `delimiter`. Characters are
    /// accumulated until `delimiter` recurs; the closing delimiter is then
    /// consumed. A backslash is kept in the buffer and the character after
    /// it is taken unconditionally, so an escaped delimiter never closes the
    /// span. Escape sequences are otherwise left as written.
    pub fn scan_until(&mut self, delimiter: char) -> Result<String, UnclosedDelimiter> {
        debug_assert_eq!(
            self.current,
            Some(delimiter),
            "scan_until must start on the opening delimiter"
        );
        let start = self.pos;
        let unclosed = UnclosedDelimiter { delimiter, start };
        let mut buf = String::new();
        self.advance(); // consume opener
        loop {
            let Some(mut c) = self.current else {
                return Err(unclosed);
            };
            if c == delimiter {
                break;
            }
            if c == '\\' {
                buf.push('\\');
                c = self.advance().ok_or(unclosed)?;
            }
            buf.push(c);
            self.advance();
        }
        self.advance(); // consume closer
        Ok(buf)
    }
}
