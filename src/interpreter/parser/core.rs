use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_comparison, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// A program is exactly one statement followed by the end of input. Any token
/// left over after the statement is a syntax error.
///
/// Grammar: `program := statement`
///
/// Throughout the parser, the `line` parameter is the line of the most
/// recently consumed token; it is what an `UnexpectedEndOfInput` reports.
///
/// # Parameters
/// - `tokens`: Lazy token stream.
///
/// # Returns
/// The parsed program statement.
///
/// # Example
/// ```
/// use bounded_calc::{
///     ast::Statement,
///     interpreter::{lexer::Lexer, parser::core::parse_program},
/// };
///
/// let mut tokens = Lexer::new("while (1 == 1) do 100").peekable();
/// let program = parse_program(&mut tokens).unwrap();
///
/// assert!(matches!(program, Statement::While { .. }));
/// ```
pub fn parse_program<'src, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = Token<'src>>
{
    let statement = parse_statement(tokens, 1)?;

    match tokens.next() {
        Some(token) => Err(ParseError::UnexpectedTrailingTokens { token: token.lexeme.to_string(),
                                                                  line:  token.line, }),
        None => Ok(statement),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, comparison, and descends through the precedence
/// hierarchy.
///
/// Grammar: `expression := comparison`
///
/// # Parameters
/// - `tokens`: Lazy token stream.
/// - `line`: Line of the previous token.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'src, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = Token<'src>>
{
    parse_comparison(tokens, line)
}
