/// Conversion errors.
///
/// Raised while turning the infix token sequence into postfix order: an
/// unknown character, or an unpaired parenthesis when the strict policy is in
/// effect.
pub mod parse_error;
/// Evaluation errors.
///
/// Raised by the postfix stack machine when the sequence does not reduce to
/// exactly one value.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure of the full pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The expression could not be converted to postfix.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The postfix sequence could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
