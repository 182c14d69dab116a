#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The body of a `for` loop failed; the loop yields no value.
    ForLoopFault {
        /// The fault raised by the body.
        source: Box<Self>,
        /// The line of the `for` keyword.
        line:   usize,
    },
}

impl RuntimeError {
    /// Gets the line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::DivisionByZero { line }
            | Self::Overflow { line }
            | Self::TypeError { line, .. }
            | Self::ForLoopFault { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::ForLoopFault { source, line } => {
                write!(f, "Error on line {line}: For loop error: {source}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ForLoopFault { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
