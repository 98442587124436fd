use crate::{
    ast::statements::{Stmt, VariableDeclaration},
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::expr::{parse_assignment_expr, parse_expr},
};

use super::parser::Parser;

/// StatementList
///   : Statement
///   | StatementList Statement
///   ;
///
/// Accumulates statements until end of input or until the lookahead equals
/// `stop` (used inside blocks to halt at `}` without consuming it). At
/// least one statement is required.
pub fn parse_statement_list(
    parser: &mut Parser,
    stop: Option<TokenKind>,
) -> Result<Vec<Stmt>, Error> {
    let mut statements = vec![parse_stmt(parser)?];

    while let Some(kind) = parser.current_token_kind() {
        if stop == Some(kind) {
            break;
        }
        statements.push(parse_stmt(parser)?);
    }

    Ok(statements)
}

/// Statement
///   : EmptyStatement
///   | BlockStatement
///   | VariableStatement
///   | IfStatement
///   | ExpressionStatement
///   ;
///
/// Dispatched purely on the lookahead kind; the grammar is LL(1) at the
/// statement level, so no backtracking is needed.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        Some(TokenKind::Semicolon) => parse_empty_stmt(parser),
        Some(TokenKind::OpenCurly) => parse_block_stmt(parser),
        Some(TokenKind::Let) => parse_variable_stmt(parser),
        Some(TokenKind::If) => parse_if_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

/// EmptyStatement
///   : ';'
///   ;
pub fn parse_empty_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Empty)
}

/// BlockStatement
///   : '{' OptStatementList '}'
///   ;
pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let body = if parser.current_token_kind() != Some(TokenKind::CloseCurly) {
        parse_statement_list(parser, Some(TokenKind::CloseCurly))?
    } else {
        Vec::new()
    };

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Stmt::Block { body })
}

/// ExpressionStatement
///   : Expression ';'
///   ;
pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression { expression })
}

/// VariableStatement
///   : 'let' VariableDeclarationList ';'
///   ;
pub fn parse_variable_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Let)?;

    let mut declarations = vec![parse_variable_declaration(parser)?];
    while parser.current_token_kind() == Some(TokenKind::Comma) {
        parser.expect(TokenKind::Comma)?;
        declarations.push(parse_variable_declaration(parser)?);
    }

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Variable { declarations })
}

/// VariableDeclaration
///   : Identifier OptVariableInitializer
///   ;
///
/// The initializer is present unless the declarator is immediately
/// followed by `,` or `;`.
fn parse_variable_declaration(parser: &mut Parser) -> Result<VariableDeclaration, Error> {
    let id = parser.expect(TokenKind::Identifier)?.value;

    let init = match parser.current_token_kind() {
        Some(TokenKind::Comma) | Some(TokenKind::Semicolon) => None,
        _ => {
            parser.expect(TokenKind::SimpleAssign)?;
            Some(parse_assignment_expr(parser)?)
        }
    };

    Ok(VariableDeclaration { id, init })
}

/// IfStatement
///   : 'if' '(' Expression ')' Statement
///   | 'if' '(' Expression ')' Statement 'else' Statement
///   ;
///
/// The `else` branch is taken only when the lookahead after the consequent
/// is exactly the `else` keyword; its absence is not an error.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::If)?;
    parser.expect(TokenKind::OpenParen)?;
    let test = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let consequent = Box::new(parse_stmt(parser)?);

    let alternate = if parser.current_token_kind() == Some(TokenKind::Else) {
        parser.expect(TokenKind::Else)?;
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If {
        test,
        consequent,
        alternate,
    })
}
