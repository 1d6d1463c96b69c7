/// Entry point of the converter.
///
/// Declares the result type shared by the parsing routines and the function
/// that turns a token sequence into a [`crate::ast::Postfix`].
pub mod core;

/// The shunting-yard algorithm.
///
/// Holds the operator stack and the rules deciding when pending operators
/// are flushed to the output.
pub mod shunting_yard;
