use super::*;
use pretty_assertions::assert_eq;

#[test]
fn letters_and_underscore_start_identifiers() {
    for c in ('a'..='z').chain('A'..='Z').chain(['_']) {
        assert_eq!(dispatch(c), Dispatch::Identifier, "{c:?}");
    }
}

#[test]
fn digits_and_minus_start_numbers() {
    for c in ('0'..='9').chain(['-']) {
        assert_eq!(dispatch(c), Dispatch::Number, "{c:?}");
    }
}

#[test]
fn whitespace_set() {
    for c in [' ', '\t', '\n', '\r'] {
        assert_eq!(dispatch(c), Dispatch::Whitespace, "{c:?}");
    }
    // Vertical tab and form feed are not whitespace here.
    assert_eq!(dispatch('\u{0B}'), Dispatch::Unknown);
    assert_eq!(dispatch('\u{0C}'), Dispatch::Unknown);
}

#[test]
fn single_character_punctuation() {
    let cases = [
        ('.', TokenKind::Dot),
        ('*', TokenKind::Star),
        (']', TokenKind::RBracket),
        (',', TokenKind::Comma),
        (':', TokenKind::Colon),
        ('@', TokenKind::Current),
        ('&', TokenKind::Expref),
        ('(', TokenKind::LParen),
        (')', TokenKind::RParen),
        ('{', TokenKind::LBrace),
        ('}', TokenKind::RBrace),
    ];
    for (c, kind) in cases {
        assert_eq!(dispatch(c), Dispatch::Single(kind), "{c:?}");
    }
}

#[test]
fn compound_operators() {
    let Dispatch::Compound(lt) = dispatch('<') else {
        panic!("expected compound for '<'");
    };
    assert_eq!(lt.expected, '=');
    assert_eq!((lt.matched, lt.pair), (TokenKind::Lte, "<="));
    assert_eq!((lt.fallback, lt.lone), (TokenKind::Lt, "<"));

    let Dispatch::Compound(bang) = dispatch('!') else {
        panic!("expected compound for '!'");
    };
    assert_eq!((bang.matched, bang.fallback), (TokenKind::Neq, TokenKind::Unknown));

    let Dispatch::Compound(pipe) = dispatch('|') else {
        panic!("expected compound for '|'");
    };
    assert_eq!(pipe.expected, '|');
    assert_eq!((pipe.matched, pipe.fallback), (TokenKind::Or, TokenKind::Pipe));
}

#[test]
fn compound_spellings_agree_with_kind_lexemes() {
    for c in ['<', '>', '=', '!', '|'] {
        let Dispatch::Compound(op) = dispatch(c) else {
            panic!("expected compound for {c:?}");
        };
        assert_eq!(op.matched.lexeme(), Some(op.pair));
        assert!(op.pair.starts_with(c));
        assert!(op.pair.ends_with(op.expected));
        assert_eq!(op.lone.chars().next(), Some(c));
    }
}

#[test]
fn quote_characters() {
    assert_eq!(dispatch('`'), Dispatch::Literal);
    assert_eq!(dispatch('"'), Dispatch::QuotedIdentifier);
    assert_eq!(dispatch('\''), Dispatch::RawString);
    assert_eq!(dispatch('['), Dispatch::LeftBracket);
}

#[test]
fn unmapped_characters_are_unknown() {
    for c in ['#', '$', '%', '^', '+', '/', '\\', ';', '?', '~', '\0', '\u{7F}'] {
        assert_eq!(dispatch(c), Dispatch::Unknown, "{c:?}");
    }
}

#[test]
fn non_ascii_is_unknown() {
    for c in ['é', 'λ', '日', '\u{1F600}', '\u{A0}'] {
        assert_eq!(dispatch(c), Dispatch::Unknown, "{c:?}");
    }
}

#[test]
fn continuation_sets() {
    assert!(is_ident_continue('a'));
    assert!(is_ident_continue('Z'));
    assert!(is_ident_continue('7'));
    assert!(is_ident_continue('_'));
    assert!(!is_ident_continue('-'));
    assert!(!is_ident_continue('é'));

    assert!(is_number_continue('0'));
    assert!(is_number_continue('-'));
    assert!(!is_number_continue('.'));
    assert!(!is_number_continue('e'));
}
