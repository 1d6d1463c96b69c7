use std::fmt;

/// Binary operators understood by the converter and the evaluator.
///
/// The set is closed: two comparisons and two logical connectives. Every
/// operator takes exactly two operands from the value stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Logical and (`&`)
    And,
    /// Logical or (`|`)
    Or,
}

impl BinaryOperator {
    /// Returns the operator for a source character, if there is one.
    ///
    /// # Example
    /// ```
    /// use boolex::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_char('&'), Some(BinaryOperator::And));
    /// assert_eq!(BinaryOperator::from_char('+'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Less),
            '>' => Some(Self::Greater),
            '&' => Some(Self::And),
            '|' => Some(Self::Or),
            _ => None,
        }
    }

    /// The source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Less => '<',
            Self::Greater => '>',
            Self::And => '&',
            Self::Or => '|',
        }
    }

    /// Rank of the operator in the precedence table.
    ///
    /// `&` and `|` share rank 2, `>` and `<` share rank 1. Anything that is
    /// not an operator, `(` included, has rank 0 (see [`precedence`]).
    ///
    /// A higher rank binds looser: a pending operator on the converter stack
    /// is flushed when its rank is less than or equal to the incoming one, so
    /// comparisons are grouped before the logical connectives combine them.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::And | Self::Or => 2,
            Self::Less | Self::Greater => 1,
        }
    }

    /// Returns `true` for `<` and `>`.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self, Self::Less | Self::Greater)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The precedence table over raw characters.
///
/// # Example
/// ```
/// use boolex::ast::precedence;
///
/// assert_eq!(precedence('|'), 2);
/// assert_eq!(precedence('<'), 1);
/// assert_eq!(precedence('('), 0);
/// ```
#[must_use]
pub const fn precedence(c: char) -> u8 {
    match BinaryOperator::from_char(c) {
        Some(op) => op.precedence(),
        None => 0,
    }
}

/// A single entry of a postfix sequence.
///
/// Each entry keeps the column it came from so that evaluation errors can
/// point back into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixItem {
    /// A single digit literal.
    Literal {
        /// The digit value, `0..=9`.
        value:  u8,
        /// The source column of the digit.
        column: usize,
    },
    /// A binary operator applied to the two values below it.
    Operator {
        /// The operator.
        op:     BinaryOperator,
        /// The source column of the operator.
        column: usize,
    },
}

impl PostfixItem {
    /// The character this entry was written as.
    #[must_use]
    pub fn symbol(&self) -> char {
        match self {
            Self::Literal { value, .. } => char::from(b'0' + value),
            Self::Operator { op, .. } => op.symbol(),
        }
    }
}

/// An expression in reverse Polish order, as produced by the converter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
    /// Entries in evaluation order.
    pub items: Vec<PostfixItem>,
}

impl Postfix {
    /// The sequence as raw characters, e.g. `['3', '4', '>']`.
    #[must_use]
    pub fn symbols(&self) -> Vec<char> {
        self.items.iter().map(PostfixItem::symbol).collect()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item.symbol())?;
        }
        Ok(())
    }
}
