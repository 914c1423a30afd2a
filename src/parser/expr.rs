use crate::{
    ast::{
        expressions::{
            BlockExpr, BooleanLiteral, CallExpr, Expression, FunctionLiteral, Identifier, IfExpr,
            InfixExpr, IntegerLiteral, PrefixExpr,
        },
        statements::Statement,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_stmt};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// Every nested construct passes through here, so this is where nesting
/// depth is counted.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    parser.enter_nesting()?;
    let expr = parse_nested_expr(parser, bp);
    parser.leave_nesting();

    expr
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.error(ErrorImpl::NoPrefixParseFn { kind: token_kind })),
    };

    let mut left = nud(parser)?;

    // While the next token binds tighter than bp, fold it into lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && parser.peek_binding_power() > bp {
        let led = match parser.get_led_lookup().get(&parser.peek_token_kind()) {
            Some(led) => *led,
            None => return Ok(left),
        };

        let operator_bp = parser.peek_binding_power();
        parser.advance();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    Ok(Expression::Identifier(Identifier {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Ok(Expression::Integer(IntegerLiteral { token, value })),
        Err(_) => Err(parser.error(ErrorImpl::IntegerParseError {
            literal: token.literal,
        })),
    }
}

pub fn parse_boolean_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    Ok(Expression::Boolean(BooleanLiteral {
        value: token.is(TokenKind::True),
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expression::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, Error> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(Expression::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::RParen)?;

    Ok(expr)
}

pub fn parse_block_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.advance();

    let mut statements: Vec<Statement> = Vec::new();
    while !parser.current_token_is(TokenKind::RBrace) {
        if parser.current_token_is(TokenKind::EOF) {
            return Err(parser.error(ErrorImpl::UnexpectedToken {
                expected: TokenKind::RBrace,
                found: TokenKind::EOF,
            }));
        }

        // A broken statement is skipped so the rest of the block still parses
        match parse_stmt(parser) {
            Ok(stmt) => {
                statements.push(stmt);
                parser.advance();
            }
            Err(error) if matches!(error.get_kind(), ErrorImpl::NestingTooDeep { .. }) => {
                return Err(error)
            }
            Err(error) => {
                parser.record_error(error);
                parser.synchronize(true);
            }
        }
    }

    Ok(Expression::Block(BlockExpr { token, statements }))
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.advance();

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.advance();
    let consequence = parse_expr(parser, BindingPower::Default)?;

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.advance();
        parser.advance();
        Some(Box::new(parse_expr(parser, BindingPower::Default)?))
    } else {
        None
    };

    Ok(Expression::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence: Box::new(consequence),
        alternative,
    }))
}

pub fn parse_function_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    parser.expect(TokenKind::LParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.advance();
    let body = parse_expr(parser, BindingPower::Default)?;

    Ok(Expression::Function(FunctionLiteral {
        token,
        parameters,
        body: Box::new(body),
    }))
}

/// `(a, b, c)`, entered on `(` and left on `)`.
fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, Error> {
    let mut parameters = Vec::new();

    if parser.peek_token_is(TokenKind::RParen) {
        parser.advance();
        return Ok(parameters);
    }

    loop {
        let param = parser.expect(TokenKind::Ident)?.clone();
        parameters.push(Identifier {
            value: param.literal.clone(),
            token: param,
        });

        if !parser.peek_token_is(TokenKind::Comma) {
            break;
        }
        parser.advance();
    }

    parser.expect(TokenKind::RParen)?;
    Ok(parameters)
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: Expression,
    _bp: BindingPower,
) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    let mut arguments = Vec::new();

    if parser.peek_token_is(TokenKind::RParen) {
        parser.advance();
    } else {
        loop {
            parser.advance();
            arguments.push(parse_expr(parser, BindingPower::Default)?);

            if !parser.peek_token_is(TokenKind::Comma) {
                break;
            }
            parser.advance();
        }

        parser.expect(TokenKind::RParen)?;
    }

    Ok(Expression::Call(CallExpr {
        token,
        function: Box::new(left),
        arguments,
    }))
}
