//! Desk calculator: a key-driven evaluation engine with console front ends.
//!
//! ```
//! use deskcalc::calculator::{BinaryOperator, Calculator};
//!
//! let mut calc = Calculator::new();
//! calc.press_digit(5).unwrap();
//! calc.press_operator(BinaryOperator::Add).unwrap();
//! calc.press_digit(3).unwrap();
//! calc.press_equals().unwrap();
//! assert_eq!(calc.display(), "8");
//! assert_eq!(calc.history_entries(), vec!["5 + 3 = 8"]);
//! ```

pub mod calculator;
pub mod config;
pub mod console;
