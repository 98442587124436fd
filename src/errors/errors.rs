use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// Lexical error: no rule of the tokenizer table matches the character at
/// the current cursor position.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unexpected character {found:?} at offset {offset}")]
pub struct LexError {
    pub found: char,
    pub offset: usize,
}

/// Syntactic error: the token stream does not fit the grammar.
///
/// `UnexpectedEndOfInput` and `UnexpectedToken` are raised exclusively by
/// the parser's token-consumption primitive; the remaining variants come
/// from the assignment-target check, the primary-expression fallthrough
/// and numeric coercion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: TokenKind },
    #[error("Unexpected token: {found:?}, expected {expected}")]
    UnexpectedToken { found: String, expected: TokenKind },
    #[error("Invalid left-hand side in assignment expression")]
    InvalidAssignmentTarget,
    #[error("Unexpected primary expression")]
    UnexpectedPrimary,
    #[error("Invalid numeric literal {literal:?}")]
    MalformedNumericLiteral { literal: String },
}

/// Any failure a `parse` call can surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}
