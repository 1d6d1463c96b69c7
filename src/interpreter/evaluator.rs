/// Core evaluation logic.
///
/// Contains the value stack machine that reduces a postfix sequence and the
/// result type shared by the evaluator.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the comparison and logical operators over [`Value`]s.
///
/// [`Value`]: crate::interpreter::value::core::Value
pub mod binary;
