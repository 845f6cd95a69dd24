use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

const ALL_KINDS: [TokenKind; 28] = [
    TokenKind::Dot,
    TokenKind::Star,
    TokenKind::Flatten,
    TokenKind::Filter,
    TokenKind::LBracket,
    TokenKind::RBracket,
    TokenKind::Comma,
    TokenKind::Colon,
    TokenKind::Current,
    TokenKind::Expref,
    TokenKind::LParen,
    TokenKind::RParen,
    TokenKind::LBrace,
    TokenKind::RBrace,
    TokenKind::Lt,
    TokenKind::Lte,
    TokenKind::Gt,
    TokenKind::Gte,
    TokenKind::Eq,
    TokenKind::Neq,
    TokenKind::Or,
    TokenKind::Pipe,
    TokenKind::Literal,
    TokenKind::QuotedIdentifier,
    TokenKind::UnquotedIdentifier,
    TokenKind::Number,
    TokenKind::Unknown,
    TokenKind::Eof,
];

// === TokenKind ===

#[test]
fn kind_names_match_wire_names() {
    let names: Vec<_> = ALL_KINDS.iter().map(|k| k.name()).collect();
    assert_eq!(
        names,
        vec![
            "dot",
            "star",
            "flatten",
            "filter",
            "lbracket",
            "rbracket",
            "comma",
            "colon",
            "current",
            "expref",
            "lparen",
            "rparen",
            "lbrace",
            "rbrace",
            "lt",
            "lte",
            "gt",
            "gte",
            "eq",
            "neq",
            "or",
            "pipe",
            "literal",
            "quoted_identifier",
            "unquoted_identifier",
            "number",
            "unknown",
            "eof",
        ]
    );
}

#[test]
fn kind_display_is_name() {
    for kind in ALL_KINDS {
        assert_eq!(kind.to_string(), kind.name());
    }
}

#[test]
fn fixed_lexemes() {
    assert_eq!(TokenKind::Dot.lexeme(), Some("."));
    assert_eq!(TokenKind::Flatten.lexeme(), Some("[]"));
    assert_eq!(TokenKind::Filter.lexeme(), Some("[?"));
    assert_eq!(TokenKind::Lte.lexeme(), Some("<="));
    assert_eq!(TokenKind::Or.lexeme(), Some("||"));
    assert_eq!(TokenKind::Pipe.lexeme(), Some("|"));
}

#[test]
fn variable_kinds_have_no_lexeme() {
    for kind in [
        TokenKind::Literal,
        TokenKind::QuotedIdentifier,
        TokenKind::UnquotedIdentifier,
        TokenKind::Number,
        TokenKind::Unknown,
        TokenKind::Eof,
    ] {
        assert_eq!(kind.lexeme(), None, "{kind}");
    }
}

#[test]
fn every_punctuation_kind_has_lexeme() {
    let with_lexeme = ALL_KINDS.iter().filter(|k| k.lexeme().is_some()).count();
    assert_eq!(with_lexeme, 22);
}

// === TokenValue ===

#[test]
fn value_accessors() {
    assert_eq!(TokenValue::Symbol("dot").as_str(), Some("dot"));
    assert_eq!(TokenValue::Ident("foo".into()).as_str(), Some("foo"));
    assert_eq!(TokenValue::Number(3.into()).as_str(), None);

    assert_eq!(TokenValue::Number((-4).into()).as_number(), Some(&Number::from(-4)));
    assert_eq!(TokenValue::Number((-4).into()).as_i64(), Some(-4));
    assert_eq!(TokenValue::Symbol("x").as_number(), None);
    assert_eq!(TokenValue::Symbol("x").as_i64(), None);

    let json = TokenValue::Json(json!({"k": [1]}));
    assert_eq!(json.as_json(), Some(&json!({"k": [1]})));
    assert_eq!(json.as_str(), None);
    assert_eq!(TokenValue::Ident("a".into()).as_json(), None);
}

#[test]
fn number_beyond_i64_has_no_i64_view() {
    let big: Number = match serde_json::from_str("99999999999999999999") {
        Ok(n) => n,
        Err(err) => panic!("{err}"),
    };
    let value = TokenValue::Number(big.clone());
    assert_eq!(value.as_number(), Some(&big));
    assert_eq!(value.as_i64(), None);
}

// === Token ===

#[test]
fn eof_token() {
    let eof = Token::eof(12);
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.value, TokenValue::Symbol(""));
    assert_eq!(eof.start(), 12);
    assert_eq!(eof.end(), 12);
}

#[test]
fn token_offsets() {
    let token = Token::new(
        TokenKind::UnquotedIdentifier,
        TokenValue::Ident("foo".into()),
        Span::new(4, 7),
    );
    assert_eq!(token.start(), 4);
    assert_eq!(token.end(), 7);
}

// === TokenList ===

#[test]
fn token_list_accessors() {
    let dot = Token::new(TokenKind::Dot, TokenValue::Symbol("dot"), Span::new(0, 1));
    let list = TokenList::new(vec![dot.clone(), Token::eof(1)], Vec::new());
    assert_eq!(list.len(), 2);
    assert!(!list.is_empty());
    assert_eq!(list.kinds(), vec![TokenKind::Dot, TokenKind::Eof]);
    assert_eq!(list.tokens()[0], dot);
    assert!(list.warnings().is_empty());
    assert_eq!(list.iter().count(), 2);
    assert_eq!((&list).into_iter().count(), 2);

    let (tokens, warnings) = list.into_parts();
    assert_eq!(tokens.len(), 2);
    assert!(warnings.is_empty());
}

#[test]
fn token_list_default_is_empty() {
    let list = TokenList::default();
    assert!(list.is_empty());
    assert_eq!(list.into_iter().count(), 0);
}
