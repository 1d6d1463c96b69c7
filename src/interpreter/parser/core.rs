use crate::{
    ast::Postfix,
    config::Options,
    error::ParseError,
    interpreter::{lexer::Token, parser::shunting_yard::ShuntingYard},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Converts an infix token sequence to postfix order.
///
/// Tokens are consumed left to right with a single operator stack. Digits go
/// straight to the output, operators wait on the stack until an operator of
/// equal or looser rank arrives, and parentheses delimit groups.
///
/// # Parameters
/// - `tokens`: `(Token, column)` pairs as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
/// - `options`: Conversion options.
///
/// # Returns
/// The postfix sequence.
///
/// # Example
/// ```
/// use boolex::{
///     config::Options,
///     interpreter::{lexer::tokenize, parser::core::parse_expression},
/// };
///
/// let postfix = parse_expression(&tokenize("3 > 4 | 1 < 2"), &Options::default()).unwrap();
/// assert_eq!(postfix.to_string(), "3 4 > 1 2 < |");
/// ```
pub fn parse_expression(tokens: &[(Token, usize)], options: &Options) -> ParseResult<Postfix> {
    let mut converter = ShuntingYard::new(options.paren_policy);

    for &(token, column) in tokens {
        converter.push(token, column)?;
    }

    converter.finish()
}
