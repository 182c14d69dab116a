use crate::error::{LexError, ParseError, RuntimeError};

/// A human-readable report produced while running one program.
///
/// Diagnostics never abort the process. Lexical diagnostics are recoverable
/// and the program keeps going; parse and runtime diagnostics mean the program
/// (or, for a failed `for` body, the loop) produced no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A lexical problem; the offending input was skipped.
    Lex(LexError),
    /// A syntax error; the parse was abandoned.
    Parse(ParseError),
    /// An evaluation fault.
    Runtime(RuntimeError),
}

impl Diagnostic {
    /// Gets the line the diagnostic refers to.
    ///
    /// # Example
    /// ```
    /// use bounded_calc::error::{Diagnostic, RuntimeError};
    ///
    /// let diagnostic = Diagnostic::from(RuntimeError::DivisionByZero { line: 3 });
    ///
    /// assert_eq!(diagnostic.line(), 3);
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line(),
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}

impl From<LexError> for Diagnostic {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Diagnostic {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Diagnostic {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Diagnostic {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
