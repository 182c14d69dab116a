/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, performs arithmetic and comparisons,
/// selects conditional branches and runs the bounded loops. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Enforces the iteration cap on `while` and `for`.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and lazily produces a stream of
/// tokens: numbers, identifiers, keywords and operators. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Carves reserved words out of identifier matches.
/// - Reports and skips illegal characters without stopping.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token stream produced by the lexer and constructs
/// a single statement honoring the operator precedence and associativity of
/// the language.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Integers, reals (produced by division), booleans (produced by
/// comparisons) and sequences (produced by loops).
pub mod value;
