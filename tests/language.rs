use std::fs::{self};

use boolex::{
    config::{Options, ParenPolicy},
    error::{Error, ParseError, RuntimeError},
    evaluate, evaluate_lines, evaluate_script, evaluate_with,
    interpreter::value::core::Value,
    postfix,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            let lenient = evaluate_lines(&code, &Options::default());
            let strict = evaluate_lines(&code, &Options::strict());

            for (evaluation, strict) in lenient.iter().zip(&strict) {
                count += 1;
                if let Err(e) = &evaluation.result {
                    panic!("Example {} in {:?} failed on line {}:\n{}\nError: {:?}",
                           i + 1,
                           path,
                           evaluation.line,
                           code,
                           e);
                }
                assert_eq!(evaluation.result,
                           strict.result,
                           "Example {} in {:?} differs under the strict policy on line {}",
                           i + 1,
                           path,
                           evaluation.line);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```boolex") {
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
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "Expression '{src}' gave the wrong value"),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_postfix(src: &str, expected: &str) {
    match postfix(src, &Options::default()) {
        Ok(postfix) => assert_eq!(postfix.to_string(), expected, "Postfix of '{src}'"),
        Err(e) => panic!("Expression '{src}' failed to convert: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src) {
        Ok(value) => panic!("Expression '{src}' gave {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn comparisons_bind_tighter_than_logic() {
    assert_postfix("3 > 4 | 1 < 2", "3 4 > 1 2 < |");
    assert_value("3 > 4 | 1 < 2", Value::Bool(true));
    assert_postfix("1<2&3>4", "1 2 < 3 4 > &");
    assert_value("1<2&3>4", Value::Bool(false));
}

#[test]
fn equal_ranks_are_left_associative() {
    assert_postfix("1<2<0", "1 2 < 0 <");
    assert_value("1<2<0", Value::Bool(false));
    assert_postfix("9>5>0", "9 5 > 0 >");
    assert_value("9>5>0", Value::Bool(true));
    assert_postfix("1&0|1", "1 0 & 1 |");
    assert_value("1&0|1", Value::Bool(true));
    assert_postfix("0|1&0", "0 1 | 0 &");
    assert_value("0|1&0", Value::Bool(false));
}

#[test]
fn parentheses_override_precedence() {
    assert_postfix("(3|1)>2", "3 1 | 2 >");
    assert_value("(3|1)>2", Value::Bool(false));
    assert_postfix("0|(1&0)", "0 1 0 & |");
    assert_value("0|(1&0)", Value::Bool(false));
    assert_value("((((7))))", Value::Integer(7));
    assert_value("(1<2)&((3>2)|(0>1))", Value::Bool(true));
}

#[test]
fn lone_literal_is_returned_unchanged() {
    for digit in 0..=9 {
        assert_value(&digit.to_string(), Value::Integer(digit));
    }
    assert_value("  5  ", Value::Integer(5));
}

#[test]
fn logic_uses_truthiness_and_returns_booleans() {
    assert_value("1&0", Value::Bool(false));
    assert_value("3&7", Value::Bool(true));
    assert_value("0|0", Value::Bool(false));
    assert_value("3|0", Value::Bool(true));
    assert_value("(1<2)&5", Value::Bool(true));
    assert_value("(1>2)|0", Value::Bool(false));
}

#[test]
fn comparisons_treat_booleans_as_digits() {
    assert_value("(1<2)>0", Value::Bool(true));
    assert_value("(1<2)<1", Value::Bool(false));
    assert_value("0<(2>1)", Value::Bool(true));
}

#[test]
fn whitespace_is_ignored_everywhere() {
    assert_value("\t3>\n4 |1 <   2 ", Value::Bool(true));
    assert_postfix(" ( 3 | 1 ) > 2 ", "3 1 | 2 >");
}

#[test]
fn digits_are_separate_literals() {
    assert_postfix("12", "1 2");
    assert_eq!(assert_failure("12"),
               Error::Runtime(RuntimeError::TrailingOperands { count: 2 }));
}

#[test]
fn missing_operands_are_reported() {
    assert_eq!(assert_failure("3>)"),
               Error::Runtime(RuntimeError::InsufficientOperands { operator: '>', column: 2 }));
    assert_eq!(assert_failure("&"),
               Error::Runtime(RuntimeError::InsufficientOperands { operator: '&', column: 1 }));
    assert_eq!(assert_failure("1|"),
               Error::Runtime(RuntimeError::InsufficientOperands { operator: '|', column: 2 }));
}

#[test]
fn empty_expression_is_reported() {
    assert_eq!(assert_failure(""), Error::Runtime(RuntimeError::EmptyExpression));
    assert_eq!(assert_failure("   "), Error::Runtime(RuntimeError::EmptyExpression));
    assert_eq!(assert_failure("()"), Error::Runtime(RuntimeError::EmptyExpression));
}

#[test]
fn unknown_characters_are_rejected() {
    assert_eq!(assert_failure("1+2"),
               Error::Parse(ParseError::UnknownOperator { token: '+', column: 2 }));
    assert_eq!(assert_failure("1 < x"),
               Error::Parse(ParseError::UnknownOperator { token: 'x', column: 5 }));
    assert_eq!(assert_failure("1=1"),
               Error::Parse(ParseError::UnknownOperator { token: '=', column: 2 }));
}

#[test]
fn lenient_policy_skips_unpaired_parentheses() {
    assert_postfix("1<2)", "1 2 <");
    assert_value("1<2)", Value::Bool(true));
    assert_postfix("(1<2", "1 2 <");
    assert_value("((1<2", Value::Bool(true));
}

#[test]
fn strict_policy_rejects_unpaired_parentheses() {
    let strict = Options::default().with_paren_policy(ParenPolicy::Strict);

    assert_eq!(evaluate_with("1<2)", &strict),
               Err(Error::Parse(ParseError::UnbalancedParenthesis { paren: ')', column: 4 })));
    assert_eq!(evaluate_with("(1<2", &strict),
               Err(Error::Parse(ParseError::UnbalancedParenthesis { paren: '(', column: 1 })));
    assert_eq!(evaluate_with("3>)", &strict),
               Err(Error::Parse(ParseError::UnbalancedParenthesis { paren: ')', column: 3 })));
    assert_eq!(evaluate_with("(3|1)>2", &strict), Ok(Value::Bool(false)));
}

#[test]
fn batch_mode_keeps_going_after_failures() {
    let evaluations = evaluate_lines("3>4|1<2\n1+1\n\n(3|1)>2\n", &Options::default());
    let lines: Vec<usize> = evaluations.iter().map(|evaluation| evaluation.line).collect();

    assert_eq!(lines, vec![1, 2, 4]);
    assert_eq!(evaluations[0].result, Ok(Value::Bool(true)));
    assert!(evaluations[1].result.is_err());
    assert!(evaluations[1].postfix.is_none());
    assert_eq!(evaluations[2].result, Ok(Value::Bool(false)));
}

#[test]
fn blank_expression_is_not_skipped() {
    for src in ["", "   ", "\t"] {
        let evaluations = evaluate_script(src, false, &Options::default());

        assert_eq!(evaluations.len(), 1, "Expression '{src}' was skipped");
        assert_eq!(evaluations[0].result, Err(Error::Runtime(RuntimeError::EmptyExpression)));
    }

    assert!(evaluate_script("\n  \n", true, &Options::default()).is_empty());
}

#[test]
fn script_mode_carries_the_postfix() {
    let evaluations = evaluate_script("3 > 4 | 1 < 2\n3>)\n1 ? 2", true, &Options::default());

    let postfixes: Vec<Option<String>> =
        evaluations.iter()
                   .map(|evaluation| evaluation.postfix.as_ref().map(ToString::to_string))
                   .collect();
    assert_eq!(postfixes,
               vec![Some("3 4 > 1 2 < |".to_string()), Some("3 >".to_string()), None]);

    assert_eq!(evaluations[1].result,
               Err(Error::Runtime(RuntimeError::InsufficientOperands { operator: '>',
                                                                       column:   2, })));

    let single = evaluate_script("(3|1)>2", false, &Options::default());
    assert_eq!(single[0].line, 1);
    assert_eq!(single[0].postfix.as_ref().map(|p| p.symbols()),
               Some(vec!['3', '1', '|', '2', '>']));
}

#[test]
fn error_messages_point_at_the_column() {
    let message = assert_failure("1 ? 2").to_string();
    assert_eq!(message, "Error on column 3: Unknown operator '?'.");

    let message = assert_failure("3>)").to_string();
    assert_eq!(message, "Error on column 2: Operator '>' is missing an operand.");
}
