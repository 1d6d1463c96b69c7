use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while converting to postfix.
pub enum ParseError {
    /// Found a character that is neither a digit, an operator nor a
    /// parenthesis.
    #[error("Error on column {column}: Unknown operator '{token}'.")]
    UnknownOperator {
        /// The offending character.
        token:  char,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A parenthesis has no partner.
    #[error("Error on column {column}: Unbalanced parenthesis '{paren}'.")]
    UnbalancedParenthesis {
        /// Either `(` or `)`.
        paren:  char,
        /// The source column of the parenthesis.
        column: usize,
    },
}
