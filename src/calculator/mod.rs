//! Calculator core.
//!
//! This module provides:
//! - The key-driven evaluation state machine
//! - Binary operator and unary function tables
//! - Display formatting and lenient parsing
//! - The bounded history log

mod clipboard;
mod engine;
mod error;
mod format;
mod functions;
mod history;
mod operators;

pub use clipboard::copy_to_clipboard;
pub use engine::{Calculator, DEFAULT_MAX_DISPLAY_LEN, Key, Phase};
pub use error::{CalcError, Result};
pub use format::{
    DISPLAY_DIGITS, OPERAND_DIGITS, format_number, format_significant, parse_number,
};
pub use functions::{AngleMode, UnaryFunction, apply};
pub use history::{DEFAULT_HISTORY_CAPACITY, EMPTY_HISTORY, HistoryEntry, HistoryLog};
pub use operators::{BinaryOperator, combine};
