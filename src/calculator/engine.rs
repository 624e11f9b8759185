//! The accumulator / pending-operator state machine.
//!
//! A [`Calculator`] consumes key presses one at a time and keeps the
//! display string, the stored left operand, the queued operator and the
//! history log consistent with each other. It performs no I/O; front
//! ends read the observers after each press and render them.

use std::str::FromStr;

use super::error::{CalcError, Result};
use super::format::{OPERAND_DIGITS, format_number, format_significant, parse_number};
use super::functions::{AngleMode, UnaryFunction};
use super::history::{HistoryEntry, HistoryLog};
use super::operators::BinaryOperator;

/// Longest display string the keypad will build by typing.
pub const DEFAULT_MAX_DISPLAY_LEN: usize = 79;

/// A single input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Dot,
    Backspace,
    Clear,
    Operator(BinaryOperator),
    Equals,
    Function(UnaryFunction),
}

impl FromStr for Key {
    type Err = CalcError;

    /// Parse a keypad token such as `7`, `.`, `+`, `=`, `bs` or `sqrt`.
    fn from_str(token: &str) -> Result<Self> {
        let lower = token.to_ascii_lowercase();
        let key = match lower.as_str() {
            "." => Self::Dot,
            "=" => Self::Equals,
            "c" | "clear" => Self::Clear,
            "bs" | "back" | "backspace" => Self::Backspace,
            digit if digit.len() == 1 && digit.as_bytes()[0].is_ascii_digit() => {
                Self::Digit(digit.as_bytes()[0] - b'0')
            }
            other => {
                // Console-only operators and functions have no key
                if let Ok(op) = other.parse::<BinaryOperator>()
                    && BinaryOperator::KEYPAD.contains(&op)
                {
                    Self::Operator(op)
                } else {
                    match other.parse::<UnaryFunction>() {
                        Ok(function) if UnaryFunction::KEYPAD.contains(&function) => {
                            Self::Function(function)
                        }
                        _ => return Err(CalcError::unknown_operator(token)),
                    }
                }
            }
        };
        Ok(key)
    }
}

/// Where the machine is between key presses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Showing a result or the initial zero; the next digit starts a number.
    Idle,
    /// Digits are being appended to the display.
    Entering,
    /// An operator is queued and the second operand has not been typed yet.
    OperatorPending,
}

/// Calculator state owned by one front end.
#[derive(Clone, Debug)]
pub struct Calculator {
    display: String,
    accumulator: f64,
    pending: Option<BinaryOperator>,
    fresh: bool,
    expression: String,
    feedback: String,
    angle_mode: AngleMode,
    max_display_len: usize,
    history: HistoryLog,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: 0.0,
            pending: None,
            fresh: true,
            expression: String::new(),
            feedback: String::new(),
            angle_mode: AngleMode::default(),
            max_display_len: DEFAULT_MAX_DISPLAY_LEN,
            history: HistoryLog::default(),
        }
    }

    /// Replace the history log with an empty one of the given capacity.
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history = HistoryLog::new(capacity);
        self
    }

    pub fn with_max_display_len(mut self, len: usize) -> Self {
        // Room for at least "0."
        self.max_display_len = len.max(2);
        self
    }

    pub fn with_angle_mode(mut self, mode: AngleMode) -> Self {
        self.angle_mode = mode;
        self
    }

    /// Dispatch any key.
    pub fn press(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Digit(digit) => self.press_digit(digit),
            Key::Dot => self.press_dot(),
            Key::Backspace => self.press_backspace(),
            Key::Clear => self.press_clear(),
            Key::Operator(op) => self.press_operator(op),
            Key::Equals => self.press_equals(),
            Key::Function(function) => self.press_function(function),
        }
    }

    /// Type a digit. Ignored once the display is at its maximum length.
    pub fn press_digit(&mut self, digit: u8) -> Result<()> {
        if digit > 9 {
            return Err(CalcError::InvalidDigit(digit));
        }
        let ch = char::from(b'0' + digit);

        if self.fresh {
            self.display = ch.to_string();
            self.fresh = false;
        } else if self.display.len() < self.max_display_len {
            // No leading zeros
            if self.display == "0" {
                self.display.clear();
            }
            self.display.push(ch);
        }
        Ok(())
    }

    /// Type the decimal point. A fresh display becomes `0.`.
    ///
    /// Never fails; a second point is ignored.
    pub fn press_dot(&mut self) -> Result<()> {
        if self.fresh {
            self.display = "0.".to_string();
            self.fresh = false;
        } else if !self.display.contains('.') && self.display.len() < self.max_display_len {
            self.display.push('.');
        }
        Ok(())
    }

    /// Remove the last typed character. Does nothing on a fresh display.
    ///
    /// Never fails.
    pub fn press_backspace(&mut self) -> Result<()> {
        if self.fresh {
            return Ok(());
        }
        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
            self.fresh = true;
        }
        Ok(())
    }

    /// Reset everything except the history log and the angle mode.
    ///
    /// Never fails.
    pub fn press_clear(&mut self) -> Result<()> {
        self.display = "0".to_string();
        self.accumulator = 0.0;
        self.pending = None;
        self.fresh = true;
        self.expression.clear();
        self.feedback.clear();
        Ok(())
    }

    /// Queue `op`, first folding any pending operation into the accumulator.
    ///
    /// On a zero divisor the machine is reset to a clean zero display and
    /// the error is returned.
    pub fn press_operator(&mut self, op: BinaryOperator) -> Result<()> {
        self.do_operation(Some(op))
    }

    /// Complete the pending operation, if any, and log it.
    pub fn press_equals(&mut self) -> Result<()> {
        self.do_operation(None)
    }

    fn do_operation(&mut self, next: Option<BinaryOperator>) -> Result<()> {
        let operand = self.display_value();

        let combined = match self.pending {
            Some(pending) => match pending.apply(self.accumulator, operand) {
                Ok(result) => Some((pending, result)),
                Err(err) => {
                    self.reset_after_error();
                    return Err(err);
                }
            },
            None => None,
        };

        match next {
            None => {
                if let Some((pending, result)) = combined {
                    self.history.append(HistoryEntry::binary(
                        self.accumulator,
                        pending,
                        operand,
                        result,
                    ));
                    self.publish(result);
                    self.accumulator = result;
                }
                self.pending = None;
                self.expression.clear();
                self.fresh = true;
            }
            Some(op) => {
                self.accumulator = match combined {
                    Some((_, result)) => {
                        self.publish(result);
                        result
                    }
                    None => operand,
                };
                self.pending = Some(op);
                self.fresh = true;
                self.expression = format!(
                    "{} {} ",
                    format_significant(self.accumulator, OPERAND_DIGITS),
                    op
                );
            }
        }
        Ok(())
    }

    /// Apply `function` to the display value.
    ///
    /// A successful application drops any pending operator. A domain error
    /// leaves every part of the state untouched.
    pub fn press_function(&mut self, function: UnaryFunction) -> Result<()> {
        let argument = self.display_value();
        let result = function.apply(argument, self.angle_mode)?;

        self.publish(result);
        self.pending = None;
        self.expression.clear();
        self.history
            .append(HistoryEntry::function(function, argument, result));
        Ok(())
    }

    /// Switch how trig functions read and return angles.
    ///
    /// Cannot fail. The mode survives Clear.
    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        self.angle_mode = mode;
    }

    fn publish(&mut self, value: f64) {
        self.display = format_number(value);
        self.feedback = format!("Result: {}", self.display);
        self.fresh = true;
    }

    fn reset_after_error(&mut self) {
        self.display = "0".to_string();
        self.accumulator = 0.0;
        self.pending = None;
        self.fresh = true;
        self.expression.clear();
    }

    /// Numeric value of the display.
    pub fn display_value(&self) -> f64 {
        parse_number(&self.display)
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// `"<accumulator> <op> "` while an operator is pending, empty otherwise.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// `"Result: <display>"` after the last published result.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn pending_operator(&self) -> Option<BinaryOperator> {
        self.pending
    }

    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn phase(&self) -> Phase {
        if !self.fresh {
            Phase::Entering
        } else if self.pending.is_some() {
            Phase::OperatorPending
        } else {
            Phase::Idle
        }
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// History lines, oldest first.
    pub fn history_entries(&self) -> Vec<String> {
        self.history.lines()
    }
}
