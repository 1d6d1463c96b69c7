use logos::Logos;

/// Represents a lexical token in the source input.
///
/// Every token is exactly one character wide. Multi-digit numbers are not a
/// thing in this language: `12` is the two literals `1` and `2`.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// A single digit literal, such as `7`.
    #[regex(r"[0-9]", parse_digit)]
    Digit(u8),
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any other visible character. Passed through untouched; the converter
    /// decides what to do with it.
    #[regex(r"[^\s0-9&|<>()]", |lex| lex.slice().chars().next())]
    Other(char),
    /// Whitespace.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

/// Splits a raw expression into tokens, dropping whitespace.
///
/// Every token is paired with its 1-based column in `source`. This function
/// never fails: characters the language does not know come out as
/// [`Token::Other`].
///
/// # Example
/// ```
/// use boolex::interpreter::lexer::{tokenize, Token};
///
/// let tokens = tokenize("3 > 4");
/// assert_eq!(tokens, vec![(Token::Digit(3), 1), (Token::Greater, 3), (Token::Digit(4), 5)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let column = lexer.span().start + 1;
        match token {
            Ok(tok) => tokens.push((tok, column)),
            // Unreachable with the patterns above, kept so the lexer stays
            // total if they change.
            Err(()) => tokens.extend(lexer.slice()
                                          .chars()
                                          .filter(|c| !c.is_whitespace())
                                          .map(|c| (Token::Other(c), column))),
        }
    }

    tokens
}

/// Parses a digit literal from the current token slice.
///
/// # Returns
/// - `Some(u8)`: The digit value.
/// - `None`: If the slice is not a digit.
fn parse_digit(lex: &logos::Lexer<Token>) -> Option<u8> {
    lex.slice().parse().ok()
}
