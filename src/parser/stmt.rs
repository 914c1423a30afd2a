use crate::{
    ast::{
        expressions::Identifier,
        statements::{ExpressionStmt, LetStmt, ReturnStmt, Statement},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    if let Some(handler) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

/// Consumes a trailing `;` when there is one.
fn skip_semicolon(parser: &mut Parser) {
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let name_token = parser.expect(TokenKind::Ident)?.clone();
    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect(TokenKind::Assign)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;
    skip_semicolon(parser);

    Ok(Statement::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;
    skip_semicolon(parser);

    Ok(Statement::Return(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Default)?;
    skip_semicolon(parser);

    Ok(Statement::Expression(ExpressionStmt { token, expression }))
}
