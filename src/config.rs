use std::{fmt, str::FromStr};

/// How the converter treats parentheses that do not pair up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParenPolicy {
    /// A `)` without a matching `(` is ignored, as the plain shunting-yard
    /// pass does. A `(` that is never closed is dropped instead of being
    /// flushed into the output. Errors show up later, usually as missing
    /// operands.
    #[default]
    Lenient,
    /// Any unpaired parenthesis fails the conversion.
    Strict,
}

impl FromStr for ParenPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown paren policy '{other}', expected 'lenient' or 'strict'")),
        }
    }
}

impl fmt::Display for ParenPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// Options for a single evaluation.
///
/// `Options` holds no state between calls; the same value can be shared by
/// any number of evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Treatment of unpaired parentheses.
    pub paren_policy: ParenPolicy,
}

impl Options {
    /// Options with [`ParenPolicy::Strict`].
    #[must_use]
    pub const fn strict() -> Self {
        Self { paren_policy: ParenPolicy::Strict }
    }

    #[must_use]
    pub const fn with_paren_policy(mut self, paren_policy: ParenPolicy) -> Self {
        self.paren_policy = paren_policy;
        self
    }
}
