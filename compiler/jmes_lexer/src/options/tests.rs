use super::*;

#[test]
fn defaults_warn_and_exact() {
    let options = LexerOptions::new();
    assert_eq!(options.legacy_literals, LegacyLiterals::Warn);
    assert_eq!(options.end_offsets, EndOffsets::Exact);
    assert_eq!(options, LexerOptions::default());
}

#[test]
fn builder_overrides_fields() {
    let options = LexerOptions::new()
        .with_legacy_literals(LegacyLiterals::Reject)
        .with_end_offsets(EndOffsets::Legacy);
    assert_eq!(options.legacy_literals, LegacyLiterals::Reject);
    assert_eq!(options.end_offsets, EndOffsets::Legacy);
}
