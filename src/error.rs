/// Lexical errors.
///
/// Raised while turning source text into tokens. Lexical errors never stop
/// the scan: the offending input is reported and skipped.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while matching tokens against the
/// grammar. A parse error abandons the current program.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero, integer overflow, or a failed loop body.
pub mod runtime_error;
/// Collected diagnostics.
///
/// Wraps the errors of every phase so a single program run can report all of
/// them in the order they arose.
pub mod diagnostic;

pub use diagnostic::Diagnostic;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
