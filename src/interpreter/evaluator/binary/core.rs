use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::binary::{comparison::eval_comparison, logic::eval_logic},
        value::core::Value,
    },
};

/// Applies a binary operator to two values.
///
/// Comparisons go to [`eval_comparison`], logical operators to
/// [`eval_logic`]. No operator can fail once both operands are present.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand, the deeper of the two stack entries.
/// - `right`: Right operand, the top of the stack.
///
/// # Example
/// ```
/// use boolex::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let result = eval_binary(BinaryOperator::Greater, Value::Integer(3), Value::Integer(4));
/// assert_eq!(result, Value::Bool(false));
/// ```
#[must_use]
pub fn eval_binary(op: BinaryOperator, left: Value, right: Value) -> Value {
    if op.is_comparison() {
        eval_comparison(op, left, right)
    } else {
        eval_logic(op, left, right)
    }
}
