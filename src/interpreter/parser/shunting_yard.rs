use log::warn;

use crate::{
    ast::{BinaryOperator, Postfix, PostfixItem},
    config::ParenPolicy,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    /// An opening parenthesis and its column.
    Group(usize),
    /// An operator waiting for its right operand.
    Operator(BinaryOperator, usize),
}

/// Converter state for one expression.
///
/// Created empty, fed one token at a time with [`ShuntingYard::push`] and
/// consumed by [`ShuntingYard::finish`].
#[derive(Debug)]
pub struct ShuntingYard {
    output: Vec<PostfixItem>,
    stack:  Vec<Pending>,
    policy: ParenPolicy,
}

impl ShuntingYard {
    #[must_use]
    pub const fn new(policy: ParenPolicy) -> Self {
        Self { output: Vec::new(),
               stack: Vec::new(),
               policy }
    }

    /// Feeds the next token.
    ///
    /// # Errors
    /// - `ParseError::UnknownOperator` for characters outside the language.
    /// - `ParseError::UnbalancedParenthesis` for a `)` without a partner
    ///   under [`ParenPolicy::Strict`].
    pub fn push(&mut self, token: Token, column: usize) -> ParseResult<()> {
        match token {
            Token::Digit(value) => self.output.push(PostfixItem::Literal { value, column }),
            Token::LParen => self.stack.push(Pending::Group(column)),
            Token::RParen => self.close_group(column)?,
            Token::Ampersand => self.push_operator(BinaryOperator::And, column),
            Token::Pipe => self.push_operator(BinaryOperator::Or, column),
            Token::Greater => self.push_operator(BinaryOperator::Greater, column),
            Token::Less => self.push_operator(BinaryOperator::Less, column),
            Token::Other(c) => return Err(ParseError::UnknownOperator { token: c, column }),
            Token::Ignored => {},
        }
        Ok(())
    }

    /// Flushes the remaining operators and returns the postfix sequence.
    ///
    /// # Errors
    /// `ParseError::UnbalancedParenthesis` when a `(` was never closed under
    /// [`ParenPolicy::Strict`].
    pub fn finish(mut self) -> ParseResult<Postfix> {
        while let Some(pending) = self.stack.pop() {
            match pending {
                Pending::Operator(op, column) => {
                    self.output.push(PostfixItem::Operator { op, column });
                },
                Pending::Group(column) => match self.policy {
                    ParenPolicy::Strict => {
                        return Err(ParseError::UnbalancedParenthesis { paren: '(', column });
                    },
                    ParenPolicy::Lenient => warn!("dropping unclosed '(' at column {column}"),
                },
            }
        }

        Ok(Postfix { items: self.output })
    }

    /// Pops operators until the matching `(` and discards it.
    fn close_group(&mut self, column: usize) -> ParseResult<()> {
        while let Some(Pending::Operator(op, op_column)) = self.stack.last().copied() {
            self.stack.pop();
            self.output.push(PostfixItem::Operator { op, column: op_column });
        }

        if self.stack.pop().is_none() {
            match self.policy {
                ParenPolicy::Strict => {
                    return Err(ParseError::UnbalancedParenthesis { paren: ')', column });
                },
                ParenPolicy::Lenient => warn!("ignoring unmatched ')' at column {column}"),
            }
        }
        Ok(())
    }

    /// Flushes every pending operator whose rank is at most the incoming
    /// one, then parks the incoming operator. Equal ranks flush, which makes
    /// operators of the same rank left associative.
    fn push_operator(&mut self, op: BinaryOperator, column: usize) {
        while let Some(Pending::Operator(top, top_column)) = self.stack.last().copied() {
            if top.precedence() > op.precedence() {
                break;
            }
            self.stack.pop();
            self.output.push(PostfixItem::Operator { op: top, column: top_column });
        }
        self.stack.push(Pending::Operator(op, column));
    }
}
