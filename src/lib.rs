//! # bounded-calc
//!
//! bounded-calc is a small calculator language written in Rust.
//! It lexes, parses, and evaluates one statement at a time: integer
//! arithmetic, comparisons, `if`/`then`/`else`, and `while` and `for` loops
//! that can never run more than ten times.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::{debug, error};

use crate::{
    error::Diagnostic,
    interpreter::{
        evaluator::core::Context, lexer::Lexer, parser::core::parse_program, value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a program.
/// Each carries the source line it refers to and renders as a one-line
/// message.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Wraps them in a single `Diagnostic` type for reporting.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion and loop bounds.
pub mod util;

/// Everything one program run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The program's value, or `None` if it failed to parse, failed to
    /// evaluate, or contains a `for` loop that recovered from a fault.
    pub value:       Option<Value>,
    /// Every problem reported along the way, in the order it arose.
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs a program and returns its value together with all diagnostics.
///
/// The source is lexed lazily while it is parsed as a single statement, and
/// the statement is then evaluated in a fresh context. Nothing is kept between
/// calls, so running the same source twice gives equal outcomes.
///
/// Lexical problems are reported but do not stop the run. A syntax error
/// abandons the program; an evaluation fault makes it yield no value.
///
/// # Examples
/// ```
/// use bounded_calc::{get_result, interpreter::value::core::Value};
///
/// let outcome = get_result("2 + 3 * 4");
/// assert_eq!(outcome.value, Some(Value::Integer(14)));
/// assert!(outcome.diagnostics.is_empty());
///
/// // The illegal character is skipped and reported.
/// let outcome = get_result("1 + @2");
/// assert_eq!(outcome.value, Some(Value::Integer(3)));
/// assert_eq!(outcome.diagnostics.len(), 1);
///
/// // A syntax error yields no value.
/// let outcome = get_result("if (1) then 2");
/// assert_eq!(outcome.value, None);
/// ```
#[must_use]
pub fn get_result(source: &str) -> Outcome {
    let mut lexer = Lexer::new(source);
    let parsed = parse_program(&mut (&mut lexer).peekable());

    let mut diagnostics: Vec<Diagnostic> =
        lexer.take_diagnostics().into_iter().map(Diagnostic::from).collect();

    let value = match parsed {
        Ok(program) => {
            debug!(?program, "parsed");

            let mut context = Context::new();
            let value = context.eval_program(&program);
            diagnostics.extend(context.diagnostics.into_iter().map(Diagnostic::from));
            value
        },
        Err(e) => {
            error!("{e}");
            diagnostics.push(e.into());
            None
        },
    };

    if let Some(value) = &value {
        debug!(%value, "result");
    }

    Outcome { value, diagnostics }
}

/// Runs a program and returns only its value.
///
/// # Examples
/// ```
/// use bounded_calc::{interpreter::value::core::Value, run};
///
/// assert_eq!(run("10 == 10"), Some(Value::Bool(true)));
/// assert_eq!(run("1 / 0"), None);
/// ```
#[must_use]
pub fn run(source: &str) -> Option<Value> {
    get_result(source).value
}
