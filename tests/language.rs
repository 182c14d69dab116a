use std::fs::{self};

use bounded_calc::{
    error::{Diagnostic, LexError, ParseError, RuntimeError},
    get_result,
    interpreter::value::core::Value,
    run,
};
use walkdir::WalkDir;

#[test]
fn guide_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("docs").into_iter()
                            .filter_map(Result::ok)
                            .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_calc_blocks(&content).into_iter().enumerate() {
            count += 1;
            let outcome = get_result(&code);
            if outcome.value.is_none() || !outcome.diagnostics.is_empty() {
                panic!("Example {} in {:?} failed:\n{}\nDiagnostics: {:?}",
                       i + 1,
                       path,
                       code,
                       outcome.diagnostics);
            }
        }
    }

    assert!(count > 0, "No examples found in docs");
}

fn extract_calc_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```calc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_value(src: &str, expected: Value) {
    let outcome = get_result(src);
    assert!(outcome.diagnostics.is_empty(),
            "Program {src:?} reported {:?}",
            outcome.diagnostics);
    assert_eq!(outcome.value, Some(expected), "Program {src:?}");
}

fn assert_sequence(src: &str, element: Value, len: usize) {
    assert_value(src, Value::from(vec![element; len]));
}

fn assert_failure(src: &str) -> Vec<Diagnostic> {
    let outcome = get_result(src);
    assert_eq!(outcome.value, None, "Program {src:?} succeeded but was expected to fail");
    assert!(!outcome.diagnostics.is_empty(), "Program {src:?} failed silently");
    outcome.diagnostics
}

#[test]
fn arithmetic_precedence() {
    assert_value("2 + 3 * 4", Value::Integer(14));
    assert_value("(2 + 3) * 4", Value::Integer(20));
    assert_value("10 - 4 - 3", Value::Integer(3));
    assert_value("2 * 3 - 4 * 5", Value::Integer(-14));
    assert_value("((7))", Value::Integer(7));
}

#[test]
fn division_is_real() {
    assert_value("7 / 2", Value::Real(3.5));
    assert_value("10 / 2", Value::Real(5.0));
    assert_value("8 / 2 / 2", Value::Real(2.0));
    assert_value("1 + 6 / 4", Value::Real(2.5));
    assert_eq!(run("10 / 2").map(|v| v.to_string()), Some("5.0".to_string()));
}

#[test]
fn comparisons() {
    assert_value("5 > 3", Value::Bool(true));
    assert_value("10 == 10", Value::Bool(true));
    assert_value("2 + 2 == 5", Value::Bool(false));
    assert_value("3 != 4", Value::Bool(true));
    assert_value("4 <= 4", Value::Bool(true));
    assert_value("3 >= 4", Value::Bool(false));
    assert_value("1 < 2 + 3", Value::Bool(true));
    assert_value("1 / 2 < 1", Value::Bool(true));
    assert_value("6 / 3 == 2", Value::Bool(true));
}

#[test]
fn chained_comparisons_use_booleans_as_integers() {
    // (3 > 2) > 1 is true > 1, which is 1 > 1
    assert_value("3 > 2 > 1", Value::Bool(false));
    assert_value("1 < 2 < 3", Value::Bool(true));
    assert_value("(1 < 2) + (2 < 3)", Value::Integer(2));
}

#[test]
fn if_selects_one_branch() {
    assert_value("if (5 > 3) then 1 else 0", Value::Integer(1));
    assert_value("if (2 + 3 > 4) then 1 + 2 else 3 + 4", Value::Integer(3));
    assert_value("if (0) then 1 else 2", Value::Integer(2));
    assert_value("if (1 / 2) then 1 else 2", Value::Integer(1));
    assert_value("if (1) then if (0) then 1 else 2 else 3", Value::Integer(2));
}

#[test]
fn untaken_branch_is_never_evaluated() {
    assert_value("if (1) then 5 else 1 / 0", Value::Integer(5));
    assert_value("if (0) then 1 / 0 else 6", Value::Integer(6));
}

#[test]
fn while_is_capped() {
    assert_sequence("while (1 == 1) do 100", Value::Integer(100), 10);
    assert_sequence("while (0) do 1", Value::Integer(1), 0);
    assert_sequence("while (1) do 2 < 3", Value::Bool(true), 10);
}

#[test]
fn for_is_clamped() {
    assert_sequence("for x in range(5) do 1", Value::Integer(1), 5);
    assert_sequence("for i in range(20) do 42", Value::Integer(42), 10);
    assert_sequence("for i in range(10) do 42", Value::Integer(42), 10);
    assert_sequence("for x in range(0) do 9", Value::Integer(9), 0);
}

#[test]
fn nested_loops() {
    let inner = Value::from(vec![Value::Integer(7); 2]);
    assert_sequence("for a in range(3) do for b in range(2) do 7", inner, 3);

    let outcome = get_result("while (1) do for i in range(0) do 1");
    assert_eq!(outcome.value, Some(Value::from(vec![Value::from(Vec::<Value>::new()); 10])));
    assert_eq!(outcome.value.map(|v| v.to_string()),
               Some("[[], [], [], [], [], [], [], [], [], []]".to_string()));
}

#[test]
fn loop_results_cannot_be_used_as_numbers() {
    // A loop is a statement, so it cannot appear inside an expression at all.
    let diagnostics = assert_failure("1 + while (1) do 1");
    assert!(matches!(diagnostics[0], Diagnostic::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn illegal_characters_are_skipped() {
    let outcome = get_result("1 + @2");
    assert_eq!(outcome.value, Some(Value::Integer(3)));
    assert_eq!(outcome.diagnostics,
               vec![Diagnostic::Lex(LexError::IllegalCharacter { character: '@',
                                                                  line:      1, })]);

    let outcome = get_result("if (5 $> 3) then 1 else 0");
    assert_eq!(outcome.value, Some(Value::Integer(1)));
    assert_eq!(outcome.diagnostics.len(), 1);

    // `=` and `!` alone are not tokens.
    let outcome = get_result("4 = 4");
    assert_eq!(outcome.value, None);
    assert!(matches!(outcome.diagnostics[0],
                     Diagnostic::Lex(LexError::IllegalCharacter { character: '=', .. })));
    assert!(matches!(outcome.diagnostics[1], Diagnostic::Parse(_)));
}

#[test]
fn syntax_errors() {
    let diagnostics = assert_failure("if (1) then 2");
    assert_eq!(diagnostics,
               vec![Diagnostic::Parse(ParseError::UnexpectedEndOfInput { line: 1 })]);

    let diagnostics = assert_failure("2 +");
    assert_eq!(diagnostics[0].to_string(), "Error on line 1: Syntax error at EOF.");

    let diagnostics = assert_failure("2 + * 3");
    assert_eq!(diagnostics[0].to_string(), "Error on line 1: Syntax error at '*'.");

    assert_failure("");
    assert_failure("for x in range(y) do 1");
    assert_failure("for 3 in range(3) do 1");
    assert_failure("while 1 do 2");
    assert_failure("x");
}

#[test]
fn trailing_tokens_are_rejected() {
    let diagnostics = assert_failure("1 2");
    assert!(matches!(diagnostics[0],
                     Diagnostic::Parse(ParseError::UnexpectedTrailingTokens { .. })));

    assert_failure("1 + 2;");
}

#[test]
fn errors_report_their_line() {
    let diagnostics = assert_failure("if (1)\nthen\n2");
    assert_eq!(diagnostics, vec![Diagnostic::Parse(ParseError::UnexpectedEndOfInput { line: 3 })]);

    let diagnostics = assert_failure("1 +\n\n1 / 0");
    assert_eq!(diagnostics,
               vec![Diagnostic::Runtime(RuntimeError::DivisionByZero { line: 3 })]);
}

#[test]
fn division_by_zero_yields_no_value() {
    let diagnostics = assert_failure("1 / 0");
    assert_eq!(diagnostics, vec![Diagnostic::Runtime(RuntimeError::DivisionByZero { line: 1 })]);

    assert_failure("1 / (2 - 2)");
    assert_failure("1 / (1 > 2)");
    assert_failure("while (1) do 1 / 0");
}

#[test]
fn for_loop_recovers_from_faults() {
    let outcome = get_result("for i in range(3) do 1 / 0");
    assert_eq!(outcome.value, None);
    assert_eq!(outcome.diagnostics.len(), 1);
    assert!(matches!(&outcome.diagnostics[0],
                     Diagnostic::Runtime(RuntimeError::ForLoopFault { source, line: 1 })
                         if **source == (RuntimeError::DivisionByZero { line: 1 })));
    assert!(outcome.diagnostics[0].to_string().contains("For loop error"));

    // A loop that never runs never faults.
    assert_sequence("for i in range(0) do 1 / 0", Value::Integer(0), 0);

    // The inner loop recovers; the outer one sees no value and yields none.
    let outcome = get_result("for a in range(2) do for b in range(2) do 1 / 0");
    assert_eq!(outcome.value, None);
    assert_eq!(outcome.diagnostics.len(), 1);
}

#[test]
fn overflow_is_a_fault() {
    let diagnostics = assert_failure("9223372036854775807 + 1");
    assert_eq!(diagnostics, vec![Diagnostic::Runtime(RuntimeError::Overflow { line: 1 })]);

    assert_failure("3037000500 * 3037000500");
    assert_value("9223372036854775807 - 1", Value::Integer(9_223_372_036_854_775_806));
}

#[test]
fn large_integers_divide_and_compare_as_reals() {
    assert_value("10000000000000000 / 10", Value::Real(1e15));
    assert_value("9007199254740993 / 1", Value::Real(9_007_199_254_740_992.0));
    assert_value("9007199254740993 > 1 / 2", Value::Bool(true));
    assert_value("9223372036854775807 / 1 > 0", Value::Bool(true));
    assert_eq!(run("10000000000000000 / 10").map(|v| v.to_string()),
               Some("1000000000000000.0".to_string()));
}

#[test]
fn oversized_literals_saturate() {
    let too_large = Diagnostic::Lex(LexError::LiteralTooLarge { lexeme: "99999999999999999999".to_string(),
                                                                line:   1, });

    let outcome = get_result("for x in range(99999999999999999999) do 1");
    assert_eq!(outcome.value, Some(Value::from(vec![Value::Integer(1); 10])));
    assert_eq!(outcome.diagnostics, vec![too_large.clone()]);

    let outcome = get_result("99999999999999999999");
    assert_eq!(outcome.value, Some(Value::Integer(i64::MAX)));
    assert_eq!(outcome.diagnostics, vec![too_large.clone()]);

    let outcome = get_result("99999999999999999999 + 1");
    assert_eq!(outcome.value, None);
    assert_eq!(outcome.diagnostics,
               vec![too_large, Diagnostic::Runtime(RuntimeError::Overflow { line: 1 })]);
}

#[test]
fn runs_are_idempotent() {
    for source in ["while (1 == 1) do 100", "1 + @2", "for i in range(3) do 1 / 0", "2 +"] {
        let first = get_result(source);
        for _ in 0..5 {
            assert_eq!(get_result(source), first);
        }
    }
}

#[test]
fn keywords_are_case_sensitive() {
    assert_failure("If (1) then 1 else 2");
    assert_value("if (1) then 1 else 2", Value::Integer(1));
}
