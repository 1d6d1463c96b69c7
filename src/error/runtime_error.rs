use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// An operator found fewer than two values on the stack.
    #[error("Error on column {column}: Operator '{operator}' is missing an operand.")]
    InsufficientOperands {
        /// The operator being applied.
        operator: char,
        /// The source column of the operator.
        column:   usize,
    },
    /// There was nothing to evaluate.
    #[error("Error: Expression is empty.")]
    EmptyExpression,
    /// Evaluation ended with more than one value on the stack.
    #[error("Error: Expression left {count} values but exactly one was expected.")]
    TrailingOperands {
        /// Number of values left on the stack.
        count: usize,
    },
}
