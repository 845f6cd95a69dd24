//! Payload cooking for variable-length tokens.
//!
//! Turns the raw text captured by the cursor into token values:
//! - numbers: parse a signed integer, kept exact at any size
//! - backtick literals: unescape `` \` `` and parse JSON, with the legacy
//!   bare-string fallback
//! - quoted identifiers: parse as a JSON string
//!
//! Failures are returned as plain values; the tokenizer attaches offsets
//! and the expression.

use serde_json::{Number, Value};

/// Result of cooking a backtick literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CookedLiteral {
    /// Valid JSON.
    Json(Value),
    /// Not JSON; read as a bare string through the legacy fallback.
    Legacy(Value),
    /// Neither parse succeeded (or the fallback is disabled).
    Malformed,
}

/// Parse a run of digits and `-` as a signed integer of any size.
///
/// Accepts an optional leading `-` followed by at least one digit. Leading
/// zeros are dropped and `-0` is zero. Any other placement of `-` is
/// malformed.
pub(crate) fn cook_number(text: &str) -> Option<Number> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = digits.trim_start_matches('0');
    let canonical = match (negative, digits.is_empty()) {
        (_, true) => "0".to_owned(),
        (true, false) => format!("-{digits}"),
        (false, false) => digits.to_owned(),
    };
    serde_json::from_str::<Number>(&canonical).ok()
}

/// Undo the only escape a backtick literal defines: `` \` `` to `` ` ``.
pub(crate) fn unescape_backtick(text: &str) -> String {
    text.replace("\\`", "`")
}

/// Parse backtick content as JSON, falling back to a quoted string.
///
/// `text` must already have `` \` `` unescaped. The fallback wraps the
/// left-trimmed text in double quotes and parses that as a JSON string.
pub(crate) fn cook_literal(text: &str, allow_legacy: bool) -> CookedLiteral {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return CookedLiteral::Json(value);
    }
    if !allow_legacy {
        return CookedLiteral::Malformed;
    }
    let quoted = format!("\"{}\"", text.trim_start());
    match serde_json::from_str::<Value>(&quoted) {
        Ok(value) => CookedLiteral::Legacy(value),
        Err(_) => CookedLiteral::Malformed,
    }
}

/// Parse quoted-identifier content as a JSON string.
///
/// `text` is the content between the double quotes, escapes intact. On
/// failure returns the parser's message.
pub(crate) fn cook_quoted_identifier(text: &str) -> Result<String, String> {
    let quoted = format!("\"{text}\"");
    serde_json::from_str::<String>(&quoted).map_err(|err| parser_message(&err))
}

/// The JSON parser's message without its location suffix, cut at the
/// first `:`.
pub(crate) fn parser_message(err: &serde_json::Error) -> String {
    let full = err.to_string();
    let message = full
        .rsplit_once(" at line ")
        .map_or(full.as_str(), |(message, _)| message);
    match message.split_once(':') {
        Some((head, _)) => head.to_owned(),
        None => message.to_owned(),
    }
}
