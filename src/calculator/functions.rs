//! Single-argument functions and the angle mode they read.

use std::f64::consts::{E, PI};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{CalcError, Result};

/// How trigonometric functions interpret their argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    /// Convert an angle in this mode into radians.
    pub fn angle_to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle * PI / 180.0,
            Self::Radians => angle,
        }
    }

    /// Convert an angle in radians into this mode.
    pub fn radians_to_mode(self, radians: f64) -> f64 {
        match self {
            Self::Degrees => radians * 180.0 / PI,
            Self::Radians => radians,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Degrees => "deg",
            Self::Radians => "rad",
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AngleMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(Self::Degrees),
            "rad" | "radian" | "radians" => Ok(Self::Radians),
            other => Err(format!("unknown angle mode '{}', expected deg or rad", other)),
        }
    }
}

/// A function of the current display value.
///
/// The first thirteen have keys on the keypad. The rest come from the
/// console's scientific set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryFunction {
    Sqrt,
    Square,
    Reciprocal,
    Sin,
    Cos,
    Tan,
    /// The keypad's inverse-trig key. It only ever computes arcsine.
    Arcsin,
    Ln,
    Log10,
    Exp,
    Abs,
    Pi,
    E,
    Arccos,
    Arctan,
    Sinh,
    Cosh,
    Tanh,
    Factorial,
    Floor,
    Ceil,
    Negate,
}

impl UnaryFunction {
    pub const KEYPAD: [Self; 13] = [
        Self::Sqrt,
        Self::Square,
        Self::Reciprocal,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Arcsin,
        Self::Ln,
        Self::Log10,
        Self::Exp,
        Self::Abs,
        Self::Pi,
        Self::E,
    ];

    /// Name shown in history lines.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Square => "x^2",
            Self::Reciprocal => "1/x",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Arcsin => "asin",
            Self::Ln => "ln",
            Self::Log10 => "log",
            Self::Exp => "exp",
            Self::Abs => "abs",
            Self::Pi => "pi",
            Self::E => "e",
            Self::Arccos => "acos",
            Self::Arctan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Factorial => "fact",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Negate => "neg",
        }
    }

    /// Constants ignore their argument.
    pub fn is_constant(self) -> bool {
        matches!(self, Self::Pi | Self::E)
    }

    /// Apply the function to `x`.
    ///
    /// Forward trig functions read `x` in `angle` units; inverse ones
    /// return their result in `angle` units.
    pub fn apply(self, x: f64, angle: AngleMode) -> Result<f64> {
        let value = match self {
            Self::Sqrt => {
                if x < 0.0 {
                    return Err(CalcError::domain(self.name()));
                }
                x.sqrt()
            }
            Self::Square => x * x,
            Self::Reciprocal => {
                if x == 0.0 {
                    return Err(CalcError::domain(self.name()));
                }
                1.0 / x
            }
            Self::Sin => angle.angle_to_radians(x).sin(),
            Self::Cos => angle.angle_to_radians(x).cos(),
            Self::Tan => angle.angle_to_radians(x).tan(),
            Self::Arcsin | Self::Arccos => {
                if !(-1.0..=1.0).contains(&x) {
                    return Err(CalcError::domain(self.name()));
                }
                let radians = if self == Self::Arcsin { x.asin() } else { x.acos() };
                angle.radians_to_mode(radians)
            }
            Self::Arctan => angle.radians_to_mode(x.atan()),
            Self::Ln => {
                if x <= 0.0 {
                    return Err(CalcError::domain(self.name()));
                }
                x.ln()
            }
            Self::Log10 => {
                if x <= 0.0 {
                    return Err(CalcError::domain(self.name()));
                }
                x.log10()
            }
            Self::Exp => x.exp(),
            Self::Abs => x.abs(),
            Self::Pi => PI,
            Self::E => E,
            Self::Sinh => x.sinh(),
            Self::Cosh => x.cosh(),
            Self::Tanh => x.tanh(),
            Self::Factorial => factorial(x).ok_or_else(|| CalcError::domain(self.name()))?,
            Self::Floor => x.floor(),
            Self::Ceil => x.ceil(),
            Self::Negate => -x,
        };
        Ok(value)
    }
}

/// `n!` for non-negative integral `n`; `None` otherwise.
fn factorial(n: f64) -> Option<f64> {
    if n < 0.0 || n != n.floor() {
        return None;
    }
    // 171! already overflows a double
    if n > 170.0 {
        return Some(f64::INFINITY);
    }
    Some((2..=n as u32).fold(1.0, |acc, i| acc * f64::from(i)))
}

/// Pure table lookup: `apply(x, f)`.
pub fn apply(x: f64, function: UnaryFunction, angle: AngleMode) -> Result<f64> {
    function.apply(x, angle)
}

impl fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnaryFunction {
    type Err = CalcError;

    fn from_str(token: &str) -> Result<Self> {
        let function = match token.to_ascii_lowercase().as_str() {
            "sqrt" => Self::Sqrt,
            "sq" | "square" | "x^2" | "x2" => Self::Square,
            "inv" | "recip" | "1/x" => Self::Reciprocal,
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Arcsin,
            "acos" => Self::Arccos,
            "atan" => Self::Arctan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "ln" => Self::Ln,
            "log" | "log10" => Self::Log10,
            "exp" => Self::Exp,
            "abs" => Self::Abs,
            "fact" => Self::Factorial,
            "floor" => Self::Floor,
            "ceil" => Self::Ceil,
            "neg" => Self::Negate,
            "pi" => Self::Pi,
            "e" => Self::E,
            _ => return Err(CalcError::unknown_operator(token)),
        };
        Ok(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_sin_respects_angle_mode() {
        let deg = UnaryFunction::Sin.apply(90.0, AngleMode::Degrees).unwrap();
        assert!((deg - 1.0).abs() < EPS);
        let rad = UnaryFunction::Sin.apply(PI / 2.0, AngleMode::Radians).unwrap();
        assert!((rad - 1.0).abs() < EPS);
        let cos = UnaryFunction::Cos.apply(60.0, AngleMode::Degrees).unwrap();
        assert!((cos - 0.5).abs() < EPS);
    }

    #[test]
    fn test_arcsin_result_in_degrees() {
        let deg = UnaryFunction::Arcsin.apply(1.0, AngleMode::Degrees).unwrap();
        assert!((deg - 90.0).abs() < EPS);
        let rad = UnaryFunction::Arcsin.apply(1.0, AngleMode::Radians).unwrap();
        assert!((rad - PI / 2.0).abs() < EPS);
        assert_eq!(
            UnaryFunction::Arcsin.apply(1.5, AngleMode::Degrees),
            Err(CalcError::domain("asin"))
        );
    }

    #[test]
    fn test_domain_errors() {
        let angle = AngleMode::Radians;
        assert_eq!(
            UnaryFunction::Sqrt.apply(-4.0, angle),
            Err(CalcError::domain("sqrt"))
        );
        assert_eq!(UnaryFunction::Ln.apply(0.0, angle), Err(CalcError::domain("ln")));
        assert_eq!(
            UnaryFunction::Log10.apply(-1.0, angle),
            Err(CalcError::domain("log"))
        );
        assert_eq!(
            UnaryFunction::Reciprocal.apply(0.0, angle),
            Err(CalcError::domain("1/x"))
        );
        assert_eq!(
            UnaryFunction::Factorial.apply(2.5, angle),
            Err(CalcError::domain("fact"))
        );
    }

    #[test]
    fn test_plain_functions() {
        let angle = AngleMode::Degrees;
        assert_eq!(UnaryFunction::Sqrt.apply(16.0, angle), Ok(4.0));
        assert_eq!(UnaryFunction::Square.apply(-3.0, angle), Ok(9.0));
        assert_eq!(UnaryFunction::Reciprocal.apply(4.0, angle), Ok(0.25));
        let log = UnaryFunction::Log10.apply(1000.0, angle).unwrap();
        assert!((log - 3.0).abs() < EPS);
        assert_eq!(UnaryFunction::Abs.apply(-2.5, angle), Ok(2.5));
        assert_eq!(UnaryFunction::Factorial.apply(5.0, angle), Ok(120.0));
        assert_eq!(UnaryFunction::Factorial.apply(0.0, angle), Ok(1.0));
        assert_eq!(UnaryFunction::Negate.apply(3.0, angle), Ok(-3.0));
    }

    #[test]
    fn test_constants_ignore_argument() {
        assert_eq!(UnaryFunction::Pi.apply(42.0, AngleMode::Degrees), Ok(PI));
        assert_eq!(UnaryFunction::E.apply(-1.0, AngleMode::Radians), Ok(E));
        assert!(UnaryFunction::Pi.is_constant());
        assert!(!UnaryFunction::Sqrt.is_constant());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("SQRT".parse::<UnaryFunction>(), Ok(UnaryFunction::Sqrt));
        assert_eq!("log".parse::<UnaryFunction>(), Ok(UnaryFunction::Log10));
        assert_eq!("inv".parse::<UnaryFunction>(), Ok(UnaryFunction::Reciprocal));
        assert!("cot".parse::<UnaryFunction>().is_err());
        assert_eq!("rad".parse::<AngleMode>(), Ok(AngleMode::Radians));
        assert!("grad".parse::<AngleMode>().is_err());
    }
}
