//! Binary operators and their arithmetic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{CalcError, Result};

/// A two-operand operator.
///
/// The first six are the keypad operators; `Percent` and `Quotient` are
/// only reachable from the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    /// `a` percent of `b`.
    Percent,
    /// Floor of `a / b`.
    Quotient,
}

impl BinaryOperator {
    /// The operators that have a key on the keypad.
    pub const KEYPAD: [Self; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
        Self::Power,
    ];

    /// Symbol used in expression previews and history lines.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Power => "^",
            Self::Percent => "p",
            Self::Quotient => "//",
        }
    }

    /// Combine `a` and `b`.
    ///
    /// Modulo truncates both operands toward zero before taking the
    /// remainder, so the sign follows the dividend. Power never fails;
    /// NaN and infinities pass through.
    pub fn apply(self, a: f64, b: f64) -> Result<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(a / b)
            }
            Self::Modulo => {
                let divisor = truncate(b);
                if divisor == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(truncate(a).wrapping_rem(divisor) as f64)
            }
            Self::Power => Ok(a.powf(b)),
            Self::Percent => Ok((a / 100.0) * b),
            Self::Quotient => {
                if truncate(b) == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok((a / b).floor())
            }
        }
    }
}

/// Truncate toward zero into an integer, saturating at the `i64` bounds.
fn truncate(value: f64) -> i64 {
    value as i64
}

/// Pure table lookup: `combine(a, b, op)`.
pub fn combine(a: f64, b: f64, op: BinaryOperator) -> Result<f64> {
    op.apply(a, b)
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinaryOperator {
    type Err = CalcError;

    fn from_str(token: &str) -> Result<Self> {
        match token.to_ascii_lowercase().as_str() {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            "%" => Ok(Self::Modulo),
            "^" | "pow" => Ok(Self::Power),
            "p" => Ok(Self::Percent),
            "//" => Ok(Self::Quotient),
            _ => Err(CalcError::unknown_operator(token)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_is_ieee() {
        assert_eq!(combine(1.0, 3.0, BinaryOperator::Divide), Ok(1.0 / 3.0));
        assert_eq!(combine(-7.5, 2.5, BinaryOperator::Divide), Ok(-3.0));
        assert_eq!(
            combine(8.0, 0.0, BinaryOperator::Divide),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_modulo_truncates_operands() {
        assert_eq!(combine(7.9, 2.9, BinaryOperator::Modulo), Ok(1.0));
        assert_eq!(combine(-7.0, 2.0, BinaryOperator::Modulo), Ok(-1.0));
        assert_eq!(combine(7.0, -2.0, BinaryOperator::Modulo), Ok(1.0));
        assert_eq!(
            combine(5.0, 0.4, BinaryOperator::Modulo),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_power_passes_non_finite_through() {
        assert_eq!(combine(2.0, 10.0, BinaryOperator::Power), Ok(1024.0));
        let nan = combine(-8.0, 0.5, BinaryOperator::Power).unwrap();
        assert!(nan.is_nan());
        let inf = combine(0.0, -1.0, BinaryOperator::Power).unwrap();
        assert!(inf.is_infinite());
    }

    #[test]
    fn test_console_only_operators() {
        assert_eq!(combine(50.0, 80.0, BinaryOperator::Percent), Ok(40.0));
        assert_eq!(combine(7.0, 2.0, BinaryOperator::Quotient), Ok(3.0));
        assert_eq!(combine(-7.0, 2.0, BinaryOperator::Quotient), Ok(-4.0));
        assert_eq!(
            combine(7.0, 0.5, BinaryOperator::Quotient),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!("+".parse::<BinaryOperator>(), Ok(BinaryOperator::Add));
        assert_eq!("POW".parse::<BinaryOperator>(), Ok(BinaryOperator::Power));
        assert_eq!("//".parse::<BinaryOperator>(), Ok(BinaryOperator::Quotient));
        assert_eq!(
            "=".parse::<BinaryOperator>(),
            Err(CalcError::unknown_operator("="))
        );
        for op in BinaryOperator::KEYPAD {
            assert_eq!(op.symbol().parse::<BinaryOperator>(), Ok(op));
        }
    }
}
