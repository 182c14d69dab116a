use bounded_calc::{
    error::LexError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source).map(|token| token.kind).collect()
}

#[test]
fn keywords_are_carved_out_of_identifiers() {
    use TokenKind::{
        Do, Else, For, Identifier, If, In, LParen, Number, RParen, Range, Then, While,
    };

    assert_eq!(kinds("for x in range(5) do 1"),
               vec![For, Identifier, In, Range, LParen, Number, RParen, Do, Number]);
    assert_eq!(kinds("if then else while"), vec![If, Then, Else, While]);
    assert_eq!(kinds("iffy ranges in_ _do For"),
               vec![Identifier, Identifier, Identifier, Identifier, Identifier]);
}

#[test]
fn operators_match_greedily() {
    use TokenKind::{
        BangEqual, Divide, EqualEqual, Greater, GreaterEqual, Less, LessEqual, Minus, Plus,
        Semicolon, Times,
    };

    assert_eq!(kinds("<= >= == != < > + - * / ;"),
               vec![LessEqual,
                    GreaterEqual,
                    EqualEqual,
                    BangEqual,
                    Less,
                    Greater,
                    Plus,
                    Minus,
                    Times,
                    Divide,
                    Semicolon]);
    assert_eq!(kinds("1<=2"), vec![TokenKind::Number, LessEqual, TokenKind::Number]);
    assert_eq!(kinds("1<2"), vec![TokenKind::Number, Less, TokenKind::Number]);
}

#[test]
fn numbers_carry_their_value() {
    let tokens: Vec<Token<'_>> = Lexer::new("007 42").collect();

    assert_eq!(tokens[0].literal, Some(7));
    assert_eq!(tokens[0].lexeme, "007");
    assert_eq!(tokens[1].literal, Some(42));
    assert_eq!(tokens.len(), 2);
}

#[test]
fn digits_and_letters_split() {
    let tokens: Vec<Token<'_>> = Lexer::new("12abc").collect();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "abc");
}

#[test]
fn newlines_advance_the_line() {
    let lines: Vec<usize> = Lexer::new("1\n2\n\n\n3 \t 4").map(|token| token.line).collect();

    assert_eq!(lines, vec![1, 2, 5, 5]);
}

#[test]
fn illegal_characters_are_reported_and_skipped() {
    let mut lexer = Lexer::new("1 @ 2\n#");
    let tokens: Vec<Token<'_>> = (&mut lexer).collect();

    assert_eq!(tokens.iter().map(|t| t.lexeme).collect::<Vec<_>>(), vec!["1", "2"]);
    assert_eq!(lexer.take_diagnostics(),
               vec![LexError::IllegalCharacter { character: '@',
                                                 line:      1, },
                    LexError::IllegalCharacter { character: '#',
                                                 line:      2, }]);
    assert!(lexer.take_diagnostics().is_empty());
}

#[test]
fn carriage_returns_are_illegal() {
    let mut lexer = Lexer::new("1\r\n");
    let tokens: Vec<Token<'_>> = (&mut lexer).collect();

    assert_eq!(tokens.len(), 1);
    assert_eq!(lexer.take_diagnostics(),
               vec![LexError::IllegalCharacter { character: '\r',
                                                 line:      1, }]);
    assert_eq!(lexer.line(), 2);
}

#[test]
fn oversized_literals_are_reported_and_saturated() {
    let mut lexer = Lexer::new("1 + 92233720368547758070");
    let tokens: Vec<Token<'_>> = (&mut lexer).collect();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].lexeme, "92233720368547758070");
    assert_eq!(tokens[2].literal, Some(i64::MAX));
    assert!(matches!(lexer.take_diagnostics().as_slice(),
                     [LexError::LiteralTooLarge { line: 1, .. }]));
}

#[test]
fn largest_literal_fits() {
    let mut lexer = Lexer::new("9223372036854775807");

    assert_eq!(lexer.next().and_then(|token| token.literal), Some(i64::MAX));
    assert!(lexer.take_diagnostics().is_empty());
}

#[test]
fn multi_byte_characters_are_skipped_whole() {
    let mut lexer = Lexer::new("1 é 2 日本");
    let tokens: Vec<Token<'_>> = (&mut lexer).collect();

    assert_eq!(tokens.iter().map(|t| t.lexeme).collect::<Vec<_>>(), vec!["1", "2"]);
    assert_eq!(lexer.take_diagnostics(),
               vec![LexError::IllegalCharacter { character: 'é',
                                                 line:      1, },
                    LexError::IllegalCharacter { character: '日',
                                                 line:      1, },
                    LexError::IllegalCharacter { character: '本',
                                                 line:      1, }]);
}

#[test]
fn end_of_input_is_exhaustion() {
    let mut lexer = Lexer::new("  1  ");

    assert!(lexer.next().is_some());
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
    assert_eq!(Lexer::new("").count(), 0);
}

#[test]
fn token_kinds_display_as_terminals() {
    assert_eq!(TokenKind::LessEqual.to_string(), "LE");
    assert_eq!(TokenKind::Identifier.to_string(), "ID");
    assert_eq!(TokenKind::Range.to_string(), "RANGE");
}
