use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, unexpected},
        },
    },
};

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a primary expression.
/// - `line`: Line of the previous token.
///
/// # Returns
/// An [`Expr::Number`] or [`Expr::Group`].
///
/// # Errors
/// Returns a `ParseError` if the next token starts no expression or the
/// input ends.
pub fn parse_primary<'src, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = Token<'src>>
{
    match tokens.next() {
        Some(Token { kind: TokenKind::Number,
                     literal: Some(value),
                     line,
                     .. }) => Ok(Expr::Number { value, line }),
        Some(Token { kind: TokenKind::LParen,
                     line,
                     .. }) => parse_grouping(tokens, line),
        Some(token) => Err(unexpected(&token)),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses the rest of a parenthesized expression.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token stream positioned right after `(`.
/// - `line`: Line of the `(`.
///
/// # Returns
/// An [`Expr::Group`] wrapping the inner expression.
fn parse_grouping<'src, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = Token<'src>>
{
    let expr = parse_expression(tokens, line)?;
    expect(tokens, TokenKind::RParen, expr.line_number())?;

    Ok(Expr::Group { expr: Box::new(expr),
                     line })
}
