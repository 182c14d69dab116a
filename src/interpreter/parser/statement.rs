use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, unexpected},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an `if` statement,
/// - a `while` statement,
/// - a `for` statement,
/// - an expression used as a statement.
///
/// The leading keyword decides; without one, the input is parsed as an
/// expression statement.
///
/// # Parameters
/// - `tokens`: Lazy token stream.
/// - `line`: Line of the previous token.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'src, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = Token<'src>>
{
    match tokens.peek() {
        Some(Token { kind: TokenKind::If, .. }) => parse_if_statement(tokens),
        Some(Token { kind: TokenKind::While,
                     .. }) => parse_while_statement(tokens),
        Some(Token { kind: TokenKind::For, .. }) => parse_for_statement(tokens),
        Some(token) => {
            let line = token.line;
            let expr = parse_expression(tokens, line)?;
            Ok(Statement::Expression { expr, line })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses an `if` statement. Both branches are mandatory.
///
/// Grammar:
/// ```text
///     if_statement := IF "(" expression ")" THEN statement ELSE statement
/// ```
/// # Errors
/// Returns a `ParseError` if any keyword or parenthesis is missing, or a
/// nested expression or statement fails to parse.
fn parse_if_statement<'src, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = Token<'src>>
{
    let line = expect(tokens, TokenKind::If, 1)?.line;

    let open = expect(tokens, TokenKind::LParen, line)?;
    let condition = parse_expression(tokens, open.line)?;
    let close = expect(tokens, TokenKind::RParen, condition.line_number())?;
    let then = expect(tokens, TokenKind::Then, close.line)?;

    let then_branch = parse_statement(tokens, then.line)?;
    let otherwise = expect(tokens, TokenKind::Else, then_branch.line_number())?;
    let else_branch = parse_statement(tokens, otherwise.line)?;

    Ok(Statement::If { condition,
                       then_branch: Box::new(then_branch),
                       else_branch: Box::new(else_branch),
                       line })
}

/// Parses a `while` statement.
///
/// Grammar:
/// ```text
///     while_statement := WHILE "(" expression ")" DO statement
/// ```
/// # Errors
/// Returns a `ParseError` if any keyword or parenthesis is missing, or the
/// condition or body fails to parse.
fn parse_while_statement<'src, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = Token<'src>>
{
    let line = expect(tokens, TokenKind::While, 1)?.line;

    let open = expect(tokens, TokenKind::LParen, line)?;
    let condition = parse_expression(tokens, open.line)?;
    let close = expect(tokens, TokenKind::RParen, condition.line_number())?;
    let keyword = expect(tokens, TokenKind::Do, close.line)?;

    let body = parse_statement(tokens, keyword.line)?;

    Ok(Statement::While { condition,
                          body: Box::new(body),
                          line })
}

/// Parses a `for` statement.
///
/// The bound must be a number literal; the loop variable is recorded but the
/// body cannot refer to it.
///
/// Grammar:
/// ```text
///     for_statement := FOR ID IN RANGE "(" NUMBER ")" DO statement
/// ```
/// # Errors
/// Returns a `ParseError` if:
/// - the loop variable is missing,
/// - `in`, `range`, a parenthesis or `do` is missing,
/// - the bound is not a number literal,
/// - the body fails to parse.
fn parse_for_statement<'src, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = Token<'src>>
{
    let line = expect(tokens, TokenKind::For, 1)?.line;

    let variable = expect(tokens, TokenKind::Identifier, line)?;
    let keyword_in = expect(tokens, TokenKind::In, variable.line)?;
    let keyword_range = expect(tokens, TokenKind::Range, keyword_in.line)?;
    let open = expect(tokens, TokenKind::LParen, keyword_range.line)?;

    let number = expect(tokens, TokenKind::Number, open.line)?;
    let bound = number.literal.ok_or_else(|| unexpected(&number))?;

    let close = expect(tokens, TokenKind::RParen, number.line)?;
    let keyword_do = expect(tokens, TokenKind::Do, close.line)?;

    let body = parse_statement(tokens, keyword_do.line)?;

    Ok(Statement::For { variable: variable.lexeme.to_string(),
                        bound,
                        body: Box::new(body),
                        line })
}
