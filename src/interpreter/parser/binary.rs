use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses relational and equality operators.
///
/// This is the weakest-binding level and handles `<`, `>`, `<=`, `>=`, `==`
/// and `!=`. Chains are left-associative, so `1 < 2 < 3` is `(1 < 2) < 3`.
///
/// The rule is: `comparison := additive (("<" | ">" | "<=" | ">=" | "==" |
/// "!=") additive)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `line`: Line of the previous token.
///
/// # Returns
/// A possibly nested `Expr::BinaryOp` tree.
pub fn parse_comparison<'src, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = Token<'src>>
{
    let mut left = parse_additive(tokens, line)?;

    while let Some(token) = tokens.peek() {
        let op = match token_to_binary_operator(token.kind) {
            Some(op) if is_relational_op(op) => op,
            _ => break,
        };

        let line = token.line;
        tokens.next(); // consume operator

        let right = parse_additive(tokens, line)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `line`: Line of the previous token.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'src, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = Token<'src>>
{
    let mut left = parse_multiplicative(tokens, line)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = token.line;
            tokens.next();
            let right = parse_multiplicative(tokens, line)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles the strongest-binding, left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `line`: Line of the previous token.
///
/// # Returns
/// A binary expression tree combining primary nodes.
pub fn parse_multiplicative<'src, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = Token<'src>>
{
    let mut left = parse_primary(tokens, line)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let line = token.line;
            tokens.next();
            let right = parse_primary(tokens, line)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a terminal to its corresponding binary operator.
///
/// Returns `None` for all terminals that are not binary operators.
///
/// # Example
/// ```
/// use bounded_calc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::Semicolon), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Times => Some(BinaryOperator::Mul),
        TokenKind::Divide => Some(BinaryOperator::Div),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the relational class.
///
/// # Example
/// ```
/// use bounded_calc::{ast::BinaryOperator, interpreter::parser::binary::is_relational_op};
///
/// assert!(is_relational_op(BinaryOperator::Less));
/// assert!(is_relational_op(BinaryOperator::NotEqual));
/// assert!(!is_relational_op(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual
             | BinaryOperator::Equal
             | BinaryOperator::NotEqual)
}
