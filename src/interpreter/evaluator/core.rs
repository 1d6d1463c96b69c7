use log::trace;

use crate::{
    ast::{Postfix, PostfixItem},
    error::RuntimeError,
    interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The value stack of one evaluation.
///
/// ## Usage
///
/// A `Context` is created empty for every postfix sequence, fed its items in
/// order through [`Context::eval_item`], and consumed by
/// [`Context::into_result`].
#[derive(Debug, Default)]
pub struct Context {
    /// Values waiting for an operator. The last entry is the top.
    pub stack: Vec<Value>,
}

impl Context {
    /// Creates a context with an empty value stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Applies one postfix item to the stack.
    ///
    /// A literal is pushed as an integer. An operator pops its right operand,
    /// then its left operand, and pushes the result.
    ///
    /// # Errors
    /// `RuntimeError::InsufficientOperands` if the stack holds fewer than two
    /// values when an operator arrives.
    pub fn eval_item(&mut self, item: &PostfixItem) -> EvalResult<()> {
        match *item {
            PostfixItem::Literal { value, .. } => self.stack.push(Value::from(value)),
            PostfixItem::Operator { op, column } => {
                let missing = || RuntimeError::InsufficientOperands { operator: op.symbol(),
                                                                     column };
                let right = self.stack.pop().ok_or_else(missing)?;
                let left = self.stack.pop().ok_or_else(missing)?;

                let result = eval_binary(op, left, right);
                trace!("{left} {op} {right} = {result}");
                self.stack.push(result);
            },
        }
        Ok(())
    }

    /// Returns the single value left on the stack.
    ///
    /// # Errors
    /// - `RuntimeError::EmptyExpression` if the stack is empty.
    /// - `RuntimeError::TrailingOperands` if more than one value is left.
    pub fn into_result(mut self) -> EvalResult<Value> {
        match self.stack.len() {
            0 => Err(RuntimeError::EmptyExpression),
            1 => self.stack.pop().ok_or(RuntimeError::EmptyExpression),
            count => Err(RuntimeError::TrailingOperands { count }),
        }
    }
}

/// Evaluates a postfix sequence to a single value.
///
/// # Returns
/// A `Value::Bool` for any expression containing an operator, otherwise the
/// `Value::Integer` of the lone literal.
///
/// # Example
/// ```
/// use boolex::{
///     config::Options,
///     interpreter::{
///         evaluator::core::evaluate_postfix, lexer::tokenize, parser::core::parse_expression,
///         value::core::Value,
///     },
/// };
///
/// let postfix = parse_expression(&tokenize("(3|1)>2"), &Options::default()).unwrap();
/// assert_eq!(evaluate_postfix(&postfix).unwrap(), Value::Bool(false));
/// ```
pub fn evaluate_postfix(postfix: &Postfix) -> EvalResult<Value> {
    let mut context = Context::new();

    for item in &postfix.items {
        context.eval_item(item)?;
    }

    context.into_result()
}
