//! Error taxonomy for the calculator core.

use thiserror::Error;

/// Errors produced while evaluating calculator input.
///
/// Every variant is a value-level result; nothing here terminates the
/// process or leaves partial output behind.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// Division, modulo or floor quotient with a zero divisor.
    #[error("Division by zero.")]
    DivisionByZero,

    /// A function argument outside the function's valid range.
    #[error("Invalid input for {function} (domain error).")]
    Domain { function: &'static str },

    /// An operator or function token nobody recognises.
    #[error("Unknown operator '{0}'.")]
    UnknownOperator(String),

    /// A digit key outside `0..=9`.
    #[error("Invalid digit {0}.")]
    InvalidDigit(u8),

    /// A console token in a number position that is not a number.
    #[error("Invalid number '{0}'.")]
    InvalidNumber(String),
}

impl CalcError {
    pub fn domain(function: &'static str) -> Self {
        Self::Domain { function }
    }

    pub fn unknown_operator(token: impl Into<String>) -> Self {
        Self::UnknownOperator(token.into())
    }

    pub fn invalid_number(token: impl Into<String>) -> Self {
        Self::InvalidNumber(token.into())
    }

    /// Check if this error came from a zero divisor.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }

    /// Generic category message, without the offending token.
    ///
    /// Keypad front ends show this instead of the detailed message.
    pub fn category(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "Division by zero.",
            Self::Domain { .. } | Self::InvalidDigit(_) | Self::InvalidNumber(_) => {
                "Invalid input."
            }
            Self::UnknownOperator(_) => "Unknown operator.",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_token() {
        assert_eq!(
            CalcError::unknown_operator("foo").to_string(),
            "Unknown operator 'foo'."
        );
        assert_eq!(
            CalcError::domain("sqrt").to_string(),
            "Invalid input for sqrt (domain error)."
        );
    }

    #[test]
    fn test_categories_are_generic() {
        assert_eq!(CalcError::DivisionByZero.category(), "Division by zero.");
        assert_eq!(CalcError::domain("ln").category(), "Invalid input.");
        assert!(CalcError::DivisionByZero.is_division_by_zero());
        assert!(!CalcError::domain("ln").is_division_by_zero());
    }
}
