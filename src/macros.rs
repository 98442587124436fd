//! Utility macros for the front end.
//!
//! This module defines the helper macro used to declare entries of the
//! lexer's rule table:
//!
//! - `lexer_rule!` - Creates a single rule-table entry
//!
//! It reduces boilerplate in the lexer implementation.

/// Creates one entry of the lexer rule table.
///
/// With a single pattern argument the rule is a skip rule (whitespace,
/// comments): it consumes input but produces no token. With a pattern and
/// a `TokenKind` variant name, matches produce a token of that kind.
///
/// # Example
///
/// ```ignore
/// lexer_rule!(r"^\s+");              // skip
/// lexer_rule!(r"^;", Semicolon);     // token
/// ```
#[macro_export]
macro_rules! lexer_rule {
    ($pattern:literal) => {
        TokenRule {
            regex: Regex::new($pattern).unwrap(),
            kind: None,
        }
    };
    ($pattern:literal, $kind:ident) => {
        TokenRule {
            regex: Regex::new($pattern).unwrap(),
            kind: Some(TokenKind::$kind),
        }
    };
}
