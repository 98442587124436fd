//! Unit tests for error types.
//!
//! These pin down the display text of each error variant, since the
//! messages are part of the contract callers see on rejected input.

use crate::lexer::tokens::TokenKind;

use super::errors::{Error, LexError, SyntaxError};

#[test]
fn test_lex_error_display() {
    let error = LexError {
        found: '@',
        offset: 12,
    };

    assert_eq!(error.to_string(), "Unexpected character '@' at offset 12");
}

#[test]
fn test_unexpected_end_of_input_display() {
    let error = SyntaxError::UnexpectedEndOfInput {
        expected: TokenKind::Semicolon,
    };

    assert_eq!(
        error.to_string(),
        "Unexpected end of input, expected Semicolon"
    );
}

#[test]
fn test_unexpected_token_display() {
    let error = SyntaxError::UnexpectedToken {
        found: "}".to_string(),
        expected: TokenKind::CloseParen,
    };

    assert_eq!(
        error.to_string(),
        "Unexpected token: \"}\", expected CloseParen"
    );
}

#[test]
fn test_invalid_assignment_target_display() {
    let error = SyntaxError::InvalidAssignmentTarget;

    assert_eq!(
        error.to_string(),
        "Invalid left-hand side in assignment expression"
    );
}

#[test]
fn test_unexpected_primary_display() {
    let error = SyntaxError::UnexpectedPrimary;

    assert_eq!(error.to_string(), "Unexpected primary expression");
}

#[test]
fn test_error_from_lex_error() {
    let error: Error = LexError {
        found: '#',
        offset: 0,
    }
    .into();

    assert!(matches!(error, Error::Lex(_)));
    // Transparent: the wrapper adds nothing to the message
    assert_eq!(error.to_string(), "Unexpected character '#' at offset 0");
}

#[test]
fn test_error_from_syntax_error() {
    let error: Error = SyntaxError::InvalidAssignmentTarget.into();

    assert!(matches!(error, Error::Syntax(_)));
    assert_eq!(
        error.to_string(),
        "Invalid left-hand side in assignment expression"
    );
}
