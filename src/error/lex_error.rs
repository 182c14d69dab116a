#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// A character that starts no token.
    IllegalCharacter {
        /// The skipped character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A digit run that does not fit into a 64-bit signed integer.
    LiteralTooLarge {
        /// The digits as written in the source.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl LexError {
    /// Gets the line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::IllegalCharacter { line, .. } | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character, line } => {
                write!(f, "Error on line {line}: Illegal character '{character}'.")
            },
            Self::LiteralTooLarge { lexeme, line } => write!(f,
                                                             "Error on line {line}: Literal {lexeme} is too large."),
        }
    }
}

impl std::error::Error for LexError {}
