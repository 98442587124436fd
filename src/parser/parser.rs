//! Parser state and entry point.
//!
//! This module contains the Parser struct and the `parse` function. The
//! parser is a single-token-lookahead recursive descent parser: it pulls
//! tokens from the tokenizer on demand and never backtracks. Every
//! terminal is consumed through `expect`, which is the single reporting
//! point for unexpected-token and end-of-input errors.

use crate::{
    ast::statements::Program,
    errors::errors::{Error, SyntaxError},
    lexer::{
        lexer::Tokenizer,
        tokens::{Token, TokenKind},
    },
};

use super::stmt::parse_statement_list;

/// The parser holds the tokenizer and exactly one lookahead token.
///
/// `lookahead` is `None` once the input is exhausted. No other parser
/// state exists; the tree under construction lives on the call stack.
pub struct Parser {
    tokenizer: Tokenizer,
    lookahead: Option<Token>,
}

impl Parser {
    /// Creates a parser over `source` and primes the lookahead, which may
    /// already fail on a lexically invalid first token.
    pub fn new(source: &str) -> Result<Parser, Error> {
        let mut tokenizer = Tokenizer::new(source);
        let lookahead = tokenizer.get_next_token()?;

        Ok(Parser {
            tokenizer,
            lookahead,
        })
    }

    /// Returns the kind of the lookahead token without consuming it.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    /// The token-consumption primitive: fails when the lookahead is absent
    /// or of the wrong kind, otherwise consumes it, pulls the next token
    /// in as the new lookahead, and returns the consumed token. Callers
    /// that have already dispatched on the lookahead kind still consume
    /// through here, passing the kind they saw.
    pub fn expect(&mut self, expected: TokenKind) -> Result<Token, Error> {
        let token = match &self.lookahead {
            None => return Err(SyntaxError::UnexpectedEndOfInput { expected }.into()),
            Some(token) if token.kind != expected => {
                return Err(SyntaxError::UnexpectedToken {
                    found: token.value.clone(),
                    expected,
                }
                .into())
            }
            Some(token) => token.clone(),
        };

        self.lookahead = self.tokenizer.get_next_token()?;

        Ok(token)
    }
}

/// Parses source text into a `Program`.
///
/// This is the crate's entry point. It fails with a lexical or syntax
/// error on the first malformed token; no partial tree is ever returned.
pub fn parse(source: &str) -> Result<Program, Error> {
    let mut parser = Parser::new(source)?;

    let body = parse_statement_list(&mut parser, None)?;

    Ok(Program { body })
}
