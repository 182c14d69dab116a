use logos::Logos;
use tracing::{trace, warn};

use crate::error::LexError;

/// The raw lexical rules, matched by `logos`.
///
/// Keywords have no rule of their own: they are carved out of [`Word`]
/// matches by [`keyword`] so that `in`, `range` and friends are never
/// tokenized twice.
///
/// [`Word`]: RawToken::Word
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum RawToken {
    /// A maximal run of digits.
    #[regex(r"[0-9]+")]
    Number,
    /// Identifiers and keywords.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// Runs of newlines advance the line counter.
    #[regex(r"\n+", |lex| {
        lex.extras.line += lex.slice().len();
        logos::Skip
    })]
    NewLine,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

impl RawToken {
    /// Maps an operator or punctuation rule to its terminal.
    const fn operator(self) -> Option<TokenKind> {
        match self {
            Self::Plus => Some(TokenKind::Plus),
            Self::Minus => Some(TokenKind::Minus),
            Self::Star => Some(TokenKind::Times),
            Self::Slash => Some(TokenKind::Divide),
            Self::LParen => Some(TokenKind::LParen),
            Self::RParen => Some(TokenKind::RParen),
            Self::Semicolon => Some(TokenKind::Semicolon),
            Self::LessEqual => Some(TokenKind::LessEqual),
            Self::GreaterEqual => Some(TokenKind::GreaterEqual),
            Self::EqualEqual => Some(TokenKind::EqualEqual),
            Self::BangEqual => Some(TokenKind::BangEqual),
            Self::Less => Some(TokenKind::Less),
            Self::Greater => Some(TokenKind::Greater),
            Self::Number | Self::Word | Self::NewLine | Self::Ignored => None,
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// The terminal symbols of the grammar.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// Integer literal, such as `42`.
    Number,
    /// Identifier, such as the loop variable in `for x in range(3) do 1`.
    Identifier,
    /// `if`
    If,
    /// `while`
    While,
    /// `for`
    For,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `do`
    Do,
    /// `in`
    In,
    /// `range`
    Range,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    Semicolon,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "NUMBER",
            Self::Identifier => "ID",
            Self::If => "IF",
            Self::While => "WHILE",
            Self::For => "FOR",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::Do => "DO",
            Self::In => "IN",
            Self::Range => "RANGE",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Times => "TIMES",
            Self::Divide => "DIVIDE",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Semicolon => "SEMICOLON",
            Self::Less => "LT",
            Self::Greater => "GT",
            Self::LessEqual => "LE",
            Self::GreaterEqual => "GE",
            Self::EqualEqual => "EQ",
            Self::BangEqual => "NE",
        };
        write!(f, "{name}")
    }
}

/// Reserved words and the terminals they are reclassified to.
const KEYWORDS: [(&str, TokenKind); 8] = [("if", TokenKind::If),
                                          ("while", TokenKind::While),
                                          ("for", TokenKind::For),
                                          ("then", TokenKind::Then),
                                          ("else", TokenKind::Else),
                                          ("do", TokenKind::Do),
                                          ("in", TokenKind::In),
                                          ("range", TokenKind::Range)];

/// Looks up an identifier in the keyword table.
///
/// The match is exact and case-sensitive: `If` stays an identifier.
///
/// # Example
/// ```
/// use bounded_calc::interpreter::lexer::{TokenKind, keyword};
///
/// assert_eq!(keyword("range"), Some(TokenKind::Range));
/// assert_eq!(keyword("ranges"), None);
/// assert_eq!(keyword("If"), None);
/// ```
#[must_use]
pub fn keyword(text: &str) -> Option<TokenKind> {
    KEYWORDS.iter()
            .find(|(word, _)| *word == text)
            .map(|(_, kind)| *kind)
}

/// A lexical token: a terminal plus where and how it was written.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'src> {
    /// The terminal symbol.
    pub kind:    TokenKind,
    /// The source text of the token.
    pub lexeme:  &'src str,
    /// The integer value of a `Number` token.
    pub literal: Option<i64>,
    /// The source line the token starts on.
    pub line:    usize,
}

/// A lazy token stream over one source string.
///
/// The stream is finite and cannot be restarted; its exhaustion marks the end
/// of input. Illegal characters are reported and skipped. Literals too large
/// for an `i64` are reported and saturate to `i64::MAX`. Both kinds of report
/// are kept for [`Lexer::take_diagnostics`].
pub struct Lexer<'src> {
    inner:       logos::Lexer<'src, RawToken>,
    diagnostics: Vec<LexError>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:       RawToken::lexer_with_extras(source, LexerExtras { line: 1 }),
               diagnostics: Vec::new(), }
    }

    /// The line the lexer has reached.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.inner.extras.line
    }

    /// Removes and returns the diagnostics reported so far.
    pub fn take_diagnostics(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.diagnostics)
    }

    fn report(&mut self, error: LexError) {
        warn!("{error}");
        self.diagnostics.push(error);
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        loop {
            let raw = self.inner.next()?;
            let lexeme = self.inner.slice();
            let line = self.inner.extras.line;

            let token = match raw {
                Ok(RawToken::Number) => {
                    // Digit runs only overflow upwards, so saturate at the top.
                    let value = match lexeme.parse::<i64>() {
                        Ok(value) => value,
                        Err(_) => {
                            self.report(LexError::LiteralTooLarge { lexeme: lexeme.to_string(),
                                                                    line });
                            i64::MAX
                        },
                    };
                    Token { kind: TokenKind::Number,
                            lexeme,
                            literal: Some(value),
                            line }
                },
                Ok(RawToken::Word) => Token { kind: keyword(lexeme).unwrap_or(TokenKind::Identifier),
                                              lexeme,
                                              literal: None,
                                              line },
                Ok(raw) => match raw.operator() {
                    Some(kind) => Token { kind,
                                          lexeme,
                                          literal: None,
                                          line },
                    None => continue,
                },
                Err(()) => {
                    // logos' error span is the single character no rule starts with.
                    let character = lexeme.chars().next().unwrap_or('\u{FFFD}');
                    self.report(LexError::IllegalCharacter { character, line });
                    continue;
                },
            };

            trace!(kind = %token.kind, lexeme = token.lexeme, line = token.line, "token");
            return Some(token);
        }
    }
}
