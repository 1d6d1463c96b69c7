//! # boolex
//!
//! boolex evaluates boolean logic expressions written in infix notation.
//! An expression is built from single-digit literals, the comparisons `<` and
//! `>`, the logical operators `&` and `|`, and parentheses. It is converted
//! to postfix order with the shunting-yard algorithm and then reduced on a
//! value stack.

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

use log::debug;

use crate::{
    ast::Postfix,
    config::Options,
    error::Error,
    interpreter::{
        evaluator::core::evaluate_postfix, lexer::tokenize, parser::core::parse_expression,
        value::core::Value,
    },
};

/// Defines the operators and the postfix representation.
///
/// This module declares `BinaryOperator` together with the precedence table,
/// and the `Postfix` sequence that connects the converter to the evaluator.
///
/// # Responsibilities
/// - Maps operator characters to operators and ranks.
/// - Carries source columns on every postfix entry for error reporting.
pub mod ast;
/// Evaluation options.
///
/// Holds the knobs that change how malformed input is treated, such as the
/// policy for unpaired parentheses.
pub mod config;
/// Provides unified error types for conversion and evaluation.
///
/// This module defines all errors that can be raised while converting an
/// expression to postfix or while evaluating it, each carrying the source
/// column of the offending character when there is one.
pub mod error;
/// Orchestrates the pipeline stages.
///
/// Ties together the lexer, the shunting-yard converter, the postfix
/// evaluator and the value type.
pub mod interpreter;

/// Converts an expression to postfix order without evaluating it.
///
/// # Errors
/// Returns an error if the expression contains an unknown character, or an
/// unpaired parenthesis under the strict policy.
///
/// # Examples
/// ```
/// use boolex::{config::Options, postfix};
///
/// let postfix = postfix("3 > 4 | 1 < 2", &Options::default()).unwrap();
/// assert_eq!(postfix.symbols(), vec!['3', '4', '>', '1', '2', '<', '|']);
/// ```
pub fn postfix(source: &str, options: &Options) -> Result<Postfix, Error> {
    let tokens = tokenize(source);
    let postfix = parse_expression(&tokens, options)?;
    debug!("postfix of '{source}': {postfix}");
    Ok(postfix)
}

/// Evaluates an expression with the given options.
///
/// # Errors
/// Returns an error if conversion fails or if the postfix sequence does not
/// reduce to exactly one value.
///
/// # Examples
/// ```
/// use boolex::{config::Options, error::Error, evaluate_with};
///
/// // Unbalanced input is rejected up front under the strict policy.
/// let res = evaluate_with("(1<2", &Options::strict());
/// assert!(matches!(res, Err(Error::Parse(_))));
/// ```
pub fn evaluate_with(source: &str, options: &Options) -> Result<Value, Error> {
    let postfix = postfix(source, options)?;
    Ok(evaluate_postfix(&postfix)?)
}

/// Evaluates an expression with the default options.
///
/// # Errors
/// See [`evaluate_with`].
///
/// # Examples
/// ```
/// use boolex::{evaluate, interpreter::value::core::Value};
///
/// assert_eq!(evaluate("3 > 4 | 1 < 2").unwrap(), Value::Bool(true));
/// assert_eq!(evaluate("5").unwrap(), Value::Integer(5));
///
/// // `>` has nothing to compare 3 against.
/// assert!(evaluate("3>)").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Value, Error> {
    evaluate_with(source, &Options::default())
}

/// The outcome of evaluating one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// 1-based line of the expression in its script.
    pub line:    usize,
    /// The postfix form, if conversion succeeded.
    pub postfix: Option<Postfix>,
    /// The value, or the first error of either stage.
    pub result:  Result<Value, Error>,
}

/// Evaluates one expression, keeping the intermediate postfix form.
///
/// Blank input is not skipped: it fails with
/// [`RuntimeError::EmptyExpression`](crate::error::RuntimeError::EmptyExpression).
///
/// # Examples
/// ```
/// use boolex::{config::Options, evaluate_line, interpreter::value::core::Value};
///
/// let evaluation = evaluate_line("(3|1)>2", 1, &Options::default());
/// assert_eq!(evaluation.postfix.unwrap().to_string(), "3 1 | 2 >");
/// assert_eq!(evaluation.result, Ok(Value::Bool(false)));
/// ```
#[must_use]
pub fn evaluate_line(source: &str, line: usize, options: &Options) -> Evaluation {
    match postfix(source, options) {
        Ok(postfix) => {
            let result = evaluate_postfix(&postfix).map_err(Error::from);
            Evaluation { line,
                         postfix: Some(postfix),
                         result }
        },
        Err(e) => Evaluation { line,
                               postfix: None,
                               result: Err(e) },
    }
}

/// Evaluates every non-blank line of `source` as its own expression.
///
/// A failing line does not stop the others.
///
/// # Examples
/// ```
/// use boolex::{config::Options, evaluate_lines};
///
/// let evaluations = evaluate_lines("1<2\n\n1&0\n", &Options::default());
/// assert_eq!(evaluations.len(), 2);
/// assert_eq!(evaluations[1].line, 3);
/// ```
#[must_use]
pub fn evaluate_lines(source: &str, options: &Options) -> Vec<Evaluation> {
    source.lines()
          .enumerate()
          .filter(|(_, line)| !line.trim().is_empty())
          .map(|(i, line)| evaluate_line(line, i + 1, options))
          .collect()
}

/// Evaluates a script the way the command line does.
///
/// With `per_line` set every non-blank line is an expression, as for
/// `--file`. Otherwise the whole script is one expression, blank or not.
#[must_use]
pub fn evaluate_script(script: &str, per_line: bool, options: &Options) -> Vec<Evaluation> {
    if per_line {
        evaluate_lines(script, options)
    } else {
        vec![evaluate_line(script, 1, options)]
    }
}
