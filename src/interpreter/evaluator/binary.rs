/// Operator dispatch.
pub mod core;

/// Relational operators `<` and `>`.
pub mod comparison;

/// Logical operators `&` and `|`.
pub mod logic;
