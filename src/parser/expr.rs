use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, SyntaxError},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// A production of the expression grammar, used to parameterize the
/// generic binary layer over its operand parser.
type OperandParser = fn(&mut Parser) -> Result<Expr, Error>;

/// Expression
///   : AssignmentExpression
///   ;
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_assignment_expr(parser)
}

/// AssignmentExpression
///   : LogicalORExpression
///   | LeftHandSideExpression AssignmentOperator AssignmentExpression
///   ;
///
/// Right-associative: the right side recurses into this production. The
/// left operand must be an identifier or member expression.
pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_logical_or_expr(parser)?;

    let operator_kind = match parser.current_token_kind() {
        Some(kind @ (TokenKind::SimpleAssign | TokenKind::ComplexAssign)) => kind,
        _ => return Ok(left),
    };

    if !is_valid_assignment_target(&left) {
        return Err(SyntaxError::InvalidAssignmentTarget.into());
    }

    let operator = parser.expect(operator_kind)?.value;
    let right = parse_assignment_expr(parser)?;

    Ok(Expr::Assignment {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// Only identifiers and member expressions may be assigned to.
fn is_valid_assignment_target(expr: &Expr) -> bool {
    matches!(expr, Expr::Identifier { .. } | Expr::Member { .. })
}

/// Generic left-associative binary layer: parse one operand at the next
/// lower precedence, then fold further operands of this layer's operator
/// class into a left-deepening chain. `fold` selects the node tag, so the
/// logical layers and the arithmetic/relational/equality layers share
/// this single routine.
fn parse_binary_layer(
    parser: &mut Parser,
    operand: OperandParser,
    operator: TokenKind,
    fold: fn(String, Box<Expr>, Box<Expr>) -> Expr,
) -> Result<Expr, Error> {
    let mut left = operand(parser)?;

    while parser.current_token_kind() == Some(operator) {
        let op = parser.expect(operator)?.value;
        let right = operand(parser)?;
        left = fold(op, Box::new(left), Box::new(right));
    }

    Ok(left)
}

fn logical_node(operator: String, left: Box<Expr>, right: Box<Expr>) -> Expr {
    Expr::Logical {
        operator,
        left,
        right,
    }
}

fn binary_node(operator: String, left: Box<Expr>, right: Box<Expr>) -> Expr {
    Expr::Binary {
        operator,
        left,
        right,
    }
}

/// LogicalORExpression
///   : LogicalANDExpression ('||' LogicalANDExpression)*
///   ;
fn parse_logical_or_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_layer(
        parser,
        parse_logical_and_expr,
        TokenKind::LogicalOr,
        logical_node,
    )
}

/// LogicalANDExpression
///   : EqualityExpression ('&&' EqualityExpression)*
///   ;
fn parse_logical_and_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_layer(
        parser,
        parse_equality_expr,
        TokenKind::LogicalAnd,
        logical_node,
    )
}

/// EqualityExpression
///   : RelationalExpression (EQUALITY_OPERATOR RelationalExpression)*
///   ;
fn parse_equality_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_layer(
        parser,
        parse_relational_expr,
        TokenKind::Equality,
        binary_node,
    )
}

/// RelationalExpression
///   : AdditiveExpression (RELATIONAL_OPERATOR AdditiveExpression)*
///   ;
fn parse_relational_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_layer(
        parser,
        parse_additive_expr,
        TokenKind::Relational,
        binary_node,
    )
}

/// AdditiveExpression
///   : MultiplicativeExpression (ADDITIVE_OPERATOR MultiplicativeExpression)*
///   ;
fn parse_additive_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_layer(
        parser,
        parse_multiplicative_expr,
        TokenKind::Additive,
        binary_node,
    )
}

/// MultiplicativeExpression
///   : UnaryExpression (MULTIPLICATIVE_OPERATOR UnaryExpression)*
///   ;
fn parse_multiplicative_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_layer(
        parser,
        parse_unary_expr,
        TokenKind::Multiplicative,
        binary_node,
    )
}

/// UnaryExpression
///   : LeftHandSideExpression
///   | ADDITIVE_OPERATOR UnaryExpression
///   | LOGICAL_NOT UnaryExpression
///   ;
///
/// Right-recursive, so `--x` and `!!x` nest.
fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_kind = match parser.current_token_kind() {
        Some(kind @ (TokenKind::Additive | TokenKind::LogicalNot)) => kind,
        _ => return parse_lhs_expr(parser),
    };

    let operator = parser.expect(operator_kind)?.value;
    let argument = parse_unary_expr(parser)?;

    Ok(Expr::Unary {
        operator,
        argument: Box::new(argument),
    })
}

/// LeftHandSideExpression
///   : CallMemberExpression
///   ;
fn parse_lhs_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_call_member_expr(parser)
}

/// CallMemberExpression
///   : MemberExpression
///   | CallExpression
///   ;
///
/// A leading `super` must head a call immediately; it is not a general
/// primary expression.
fn parse_call_member_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.current_token_kind() == Some(TokenKind::Super) {
        parser.expect(TokenKind::Super)?;
        return parse_call_expr(parser, Expr::Super);
    }

    let member = parse_member_expr(parser)?;

    if parser.current_token_kind() == Some(TokenKind::OpenParen) {
        return parse_call_expr(parser, member);
    }

    Ok(member)
}

/// CallExpression
///   : Callee Arguments
///   ;
///
/// Wraps repeatedly while the lookahead stays `(`, so chained calls like
/// `f()()` nest the call nodes.
fn parse_call_expr(parser: &mut Parser, callee: Expr) -> Result<Expr, Error> {
    let mut call = Expr::Call {
        callee: Box::new(callee),
        arguments: parse_arguments(parser)?,
    };

    while parser.current_token_kind() == Some(TokenKind::OpenParen) {
        call = Expr::Call {
            callee: Box::new(call),
            arguments: parse_arguments(parser)?,
        };
    }

    Ok(call)
}

/// Arguments
///   : '(' OptArgumentList ')'
///   ;
fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = Vec::new();
    if parser.current_token_kind() != Some(TokenKind::CloseParen) {
        arguments.push(parse_assignment_expr(parser)?);
        while parser.current_token_kind() == Some(TokenKind::Comma) {
            parser.expect(TokenKind::Comma)?;
            arguments.push(parse_assignment_expr(parser)?);
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(arguments)
}

/// MemberExpression
///   : PrimaryExpression
///   | MemberExpression '.' Identifier
///   | MemberExpression '[' Expression ']'
///   ;
fn parse_member_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut object = parse_primary_expr(parser)?;

    loop {
        match parser.current_token_kind() {
            Some(TokenKind::Dot) => {
                parser.expect(TokenKind::Dot)?;
                let name = parser.expect(TokenKind::Identifier)?.value;
                object = Expr::Member {
                    object: Box::new(object),
                    property: Box::new(Expr::Identifier { name }),
                    computed: false,
                };
            }
            Some(TokenKind::OpenBracket) => {
                parser.expect(TokenKind::OpenBracket)?;
                let property = parse_expr(parser)?;
                parser.expect(TokenKind::CloseBracket)?;
                object = Expr::Member {
                    object: Box::new(object),
                    property: Box::new(property),
                    computed: true,
                };
            }
            _ => return Ok(object),
        }
    }
}

/// PrimaryExpression
///   : Literal
///   | ParenthesizedExpression
///   | Identifier
///   ;
///
/// Any other lookahead here is a hard parse failure.
fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        Some(kind) if is_literal(kind) => parse_literal(parser),
        Some(TokenKind::OpenParen) => parse_parenthesized_expr(parser),
        Some(TokenKind::Identifier) => {
            let name = parser.expect(TokenKind::Identifier)?.value;
            Ok(Expr::Identifier { name })
        }
        _ => Err(SyntaxError::UnexpectedPrimary.into()),
    }
}

/// Whether the token kind opens a literal production.
fn is_literal(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Number
            | TokenKind::String
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null
    )
}

/// ParenthesizedExpression
///   : '(' Expression ')'
///   ;
fn parse_parenthesized_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

/// Literal
///   : NumericLiteral
///   | StringLiteral
///   | BooleanLiteral
///   | NullLiteral
///   ;
fn parse_literal(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        Some(TokenKind::Number) => {
            let token = parser.expect(TokenKind::Number)?;
            let value = token.value.parse().map_err(|_| {
                Error::from(SyntaxError::MalformedNumericLiteral {
                    literal: token.value.clone(),
                })
            })?;
            Ok(Expr::Number { value })
        }
        Some(TokenKind::String) => {
            let token = parser.expect(TokenKind::String)?;
            // Strip exactly the delimiting quotes; no escape processing.
            let value = token.value[1..token.value.len() - 1].to_string();
            Ok(Expr::String { value })
        }
        Some(TokenKind::True) => {
            parser.expect(TokenKind::True)?;
            Ok(Expr::Boolean { value: true })
        }
        Some(TokenKind::False) => {
            parser.expect(TokenKind::False)?;
            Ok(Expr::Boolean { value: false })
        }
        Some(TokenKind::Null) => {
            parser.expect(TokenKind::Null)?;
            Ok(Expr::Null)
        }
        _ => Err(SyntaxError::UnexpectedPrimary.into()),
    }
}
