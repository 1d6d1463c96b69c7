use crate::{ast::BinaryOperator, interpreter::value::core::Value};

/// Evaluates a logical operation between two values.
///
/// The operands are converted with [`Value::as_bool`], so raw literals mix
/// freely with comparison results. The result is always a strict boolean,
/// never one of the operands: `3|1` is `true`, not `3`.
///
/// Both operands are already on the stack when this runs; there is no short
/// circuit.
///
/// # Example
/// ```
/// use boolex::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::logic::eval_logic, value::core::Value},
/// };
///
/// let result = eval_logic(BinaryOperator::And, Value::Integer(1), Value::Integer(0));
/// assert_eq!(result, Value::Bool(false));
/// ```
#[must_use]
pub fn eval_logic(op: BinaryOperator, left: Value, right: Value) -> Value {
    let left = left.as_bool();
    let right = right.as_bool();

    Value::Bool(match op {
                    BinaryOperator::And => left && right,
                    BinaryOperator::Or => left || right,
                    BinaryOperator::Less | BinaryOperator::Greater => {
                        unreachable!("eval_logic used with a comparison operator")
                    },
                })
}
