//! Character dispatch table.
//!
//! Maps the character under the cursor to the recognizer that handles it.
//! The table covers ASCII; every non-ASCII character is `Unknown`.

use crate::token::TokenKind;

/// A two-character operator whose first character may also stand alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Compound {
    /// Second character that completes the pair.
    pub expected: char,
    /// Kind and spelling when the pair matches.
    pub matched: TokenKind,
    pub pair: &'static str,
    /// Kind and spelling when it does not.
    pub fallback: TokenKind,
    pub lone: &'static str,
}

/// Recognizer selected for a token-start character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Dispatch {
    /// No recognizer: a fatal `UnknownToken` error.
    Unknown,
    Whitespace,
    Identifier,
    Number,
    /// `[`, `[]` or `[?`.
    LeftBracket,
    /// Single-character punctuation whose value is its kind name.
    Single(TokenKind),
    /// Match-or-else operator.
    Compound(Compound),
    /// `` ` `` JSON literal.
    Literal,
    /// `"` quoted identifier.
    QuotedIdentifier,
    /// `'` raw string literal.
    RawString,
}

const fn compound(
    expected: char,
    matched: TokenKind,
    pair: &'static str,
    fallback: TokenKind,
    lone: &'static str,
) -> Dispatch {
    Dispatch::Compound(Compound {
        expected,
        matched,
        pair,
        fallback,
        lone,
    })
}

const fn classify_ascii(b: u8) -> Dispatch {
    match b {
        b' ' | b'\t' | b'\n' | b'\r' => Dispatch::Whitespace,
        b'a'..=b'z' | b'A'..=b'Z' | b'_' => Dispatch::Identifier,
        b'0'..=b'9' | b'-' => Dispatch::Number,
        b'[' => Dispatch::LeftBracket,
        b'.' => Dispatch::Single(TokenKind::Dot),
        b'*' => Dispatch::Single(TokenKind::Star),
        b']' => Dispatch::Single(TokenKind::RBracket),
        b',' => Dispatch::Single(TokenKind::Comma),
        b':' => Dispatch::Single(TokenKind::Colon),
        b'@' => Dispatch::Single(TokenKind::Current),
        b'&' => Dispatch::Single(TokenKind::Expref),
        b'(' => Dispatch::Single(TokenKind::LParen),
        b')' => Dispatch::Single(TokenKind::RParen),
        b'{' => Dispatch::Single(TokenKind::LBrace),
        b'}' => Dispatch::Single(TokenKind::RBrace),
        b'<' => compound('=', TokenKind::Lte, "<=", TokenKind::Lt, "<"),
        b'>' => compound('=', TokenKind::Gte, ">=", TokenKind::Gt, ">"),
        b'=' => compound('=', TokenKind::Eq, "==", TokenKind::Unknown, "="),
        b'!' => compound('=', TokenKind::Neq, "!=", TokenKind::Unknown, "!"),
        b'|' => compound('|', TokenKind::Or, "||", TokenKind::Pipe, "|"),
        b'`' => Dispatch::Literal,
        b'"' => Dispatch::QuotedIdentifier,
        b'\'' => Dispatch::RawString,
        _ => Dispatch::Unknown,
    }
}

/// 128-entry lookup table indexed by ASCII code.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..128, always fits in u8"
)]
static DISPATCH_TABLE: [Dispatch; 128] = {
    let mut table = [Dispatch::Unknown; 128];
    let mut i = 0usize;
    while i < 128 {
        table[i] = classify_ascii(i as u8);
        i += 1;
    }
    table
};

/// Look up the recognizer for a token-start character.
#[inline]
pub(crate) fn dispatch(c: char) -> Dispatch {
    if c.is_ascii() {
        DISPATCH_TABLE[c as usize]
    } else {
        Dispatch::Unknown
    }
}

/// Returns `true` if `c` may continue an unquoted identifier.
#[inline]
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns `true` if `c` may continue a number.
#[inline]
pub(crate) fn is_number_continue(c: char) -> bool {
    c.is_ascii_digit() || c == '-'
}

#[cfg(test)]
mod tests;
