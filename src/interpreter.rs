/// The evaluator module reduces postfix sequences to values.
///
/// Runs the value stack machine over the converter's output, applying each
/// operator to the two values below it.
///
/// # Responsibilities
/// - Pushes literals and applies comparison and logical operators.
/// - Coerces between integers and booleans where operators mix them.
/// - Reports missing operands and leftover values.
pub mod evaluator;
/// The lexer module tokenizes raw expressions.
///
/// The first stage of the pipeline: drops whitespace and turns every other
/// character into a single-character token tagged with its column.
pub mod lexer;
/// The parser module converts infix tokens to postfix order.
///
/// Implements the shunting-yard algorithm over the precedence table.
///
/// # Responsibilities
/// - Orders operators by rank and associativity.
/// - Resolves parenthesized groups.
/// - Rejects unknown characters and, under the strict policy, unpaired
///   parentheses.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;
