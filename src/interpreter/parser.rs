/// Program entry point and shared parser types.
pub mod core;

/// Statement parsing: `if`, `while`, `for` and expression statements.
///
/// Keyword-led statements are recognized by their first token; anything else
/// is parsed as an expression.
pub mod statement;

/// Binary operator parsing.
///
/// One function per precedence level, from comparisons (weakest) down to
/// multiplication and division (strongest). Every level is left-associative.
pub mod binary;

/// Primary expressions: number literals and parenthesized groups.
pub mod primary;

/// Token-matching helpers shared by the other parser modules.
pub mod utils;
