/// The runtime value type.
///
/// Defines `Value`, the integer-or-boolean entries of the evaluator stack, and
/// the explicit coercions the operators rely on.
pub mod core;
