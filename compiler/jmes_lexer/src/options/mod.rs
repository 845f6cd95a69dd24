//! Tokenizer configuration.

/// How backtick content that is not valid JSON is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LegacyLiterals {
    /// Read it as a bare JSON string and record a deprecation warning.
    #[default]
    Warn,
    /// Reject it as a malformed literal.
    Reject,
}

/// How the `end` offset of a token is computed.
///
/// `start` is the same in both modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EndOffsets {
    /// `end` is one past the token's last character.
    #[default]
    Exact,
    /// The end offsets reported by earlier JMESPath lexers.
    ///
    /// - single-character punctuation: the cursor position after advancing,
    ///   which equals `start` when the token is the last character
    /// - identifiers and numbers: the lexeme length
    /// - `[]`, `[?` and two-character operators: `start + 1`
    /// - `[` and single-character operator fallbacks: `start`
    /// - quoted spans: cursor position after the scan minus `start`
    Legacy,
}

/// Options for [`tokenize_with`](crate::tokenize_with).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LexerOptions {
    pub legacy_literals: LegacyLiterals,
    pub end_offsets: EndOffsets,
}

impl LexerOptions {
    /// Default options: legacy literals warn, exact end offsets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how non-JSON backtick literals are treated.
    #[must_use]
    pub fn with_legacy_literals(mut self, legacy_literals: LegacyLiterals) -> Self {
        self.legacy_literals = legacy_literals;
        self
    }

    /// Set how `end` offsets are computed.
    #[must_use]
    pub fn with_end_offsets(mut self, end_offsets: EndOffsets) -> Self {
        self.end_offsets = end_offsets;
        self
    }
}

#[cfg(test)]
mod tests;
