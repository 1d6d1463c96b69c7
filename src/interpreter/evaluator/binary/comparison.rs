use crate::{ast::BinaryOperator, interpreter::value::core::Value};

/// Evaluates a comparison of the form `Value <Operator> Value`.
///
/// Both operands are compared as integers, so a boolean produced by an
/// earlier operator takes part as `1` or `0`: `(3|1)>2` compares `1 > 2`.
///
/// # Parameters
/// - `op`: `Less` or `Greater`.
/// - `left`: The left-hand value.
/// - `right`: The right-hand value.
///
/// # Returns
/// A `Value::Bool`.
///
/// # Example
/// ```
/// use boolex::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let result = eval_comparison(BinaryOperator::Less, Value::Bool(true), Value::Integer(2));
/// assert_eq!(result, Value::Bool(true));
/// ```
#[must_use]
pub fn eval_comparison(op: BinaryOperator, left: Value, right: Value) -> Value {
    let left = left.as_integer();
    let right = right.as_integer();

    Value::Bool(match op {
                    BinaryOperator::Less => left < right,
                    BinaryOperator::Greater => left > right,
                    BinaryOperator::And | BinaryOperator::Or => {
                        unreachable!("eval_comparison used with a logical operator")
                    },
                })
}
