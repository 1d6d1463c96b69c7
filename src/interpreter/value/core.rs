use std::fmt;

/// Represents a runtime value in the evaluator.
///
/// Digit literals enter the value stack as integers; every operator pushes a
/// boolean. Both kinds may meet as operands of any operator, so each carries
/// an explicit coercion to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// An integer value, produced by a digit literal.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparisons (`<`, `>`) and logical operators (`&`, `|`).
    Bool(bool),
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl Value {
    /// Converts the value to an integer for comparison.
    ///
    /// Booleans count as `1` and `0`.
    ///
    /// # Example
    /// ```
    /// use boolex::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_integer(), 1);
    /// assert_eq!(Value::Integer(7).as_integer(), 7);
    /// ```
    #[must_use]
    pub const fn as_integer(&self) -> i64 {
        match self {
            Self::Integer(n) => *n,
            Self::Bool(b) => *b as i64,
        }
    }

    /// Converts the value to a boolean for logical operations.
    ///
    /// Zero is false, every other integer is true.
    ///
    /// # Example
    /// ```
    /// use boolex::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(3).as_bool());
    /// assert!(!Value::Integer(0).as_bool());
    /// ```
    #[must_use]
    pub const fn as_bool(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Bool(b) => *b,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
