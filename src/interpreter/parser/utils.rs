use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Consumes the next token, which must be of the given kind.
///
/// # Parameters
/// - `tokens`: Lazy token stream.
/// - `kind`: The terminal the grammar requires here.
/// - `line`: Line of the previous token, reported if the input ends.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is of another kind,
/// - the input ends.
pub(in crate::interpreter::parser) fn expect<'src, I>(tokens: &mut Peekable<I>,
                                                      kind: TokenKind,
                                                      line: usize)
                                                      -> ParseResult<Token<'src>>
    where I: Iterator<Item = Token<'src>>
{
    match tokens.next() {
        Some(token) if token.kind == kind => Ok(token),
        Some(token) => Err(unexpected(&token)),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Builds the syntax error for a token no rule accepts.
pub(in crate::interpreter::parser) fn unexpected(token: &Token<'_>) -> ParseError {
    ParseError::UnexpectedToken { token: token.lexeme.to_string(),
                                  line:  token.line, }
}
