//! Bounded record of completed calculations.

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use super::format::{OPERAND_DIGITS, format_number, format_significant};
use super::functions::UnaryFunction;
use super::operators::BinaryOperator;

/// Default number of entries kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Shown by front ends when nothing has been calculated yet.
pub const EMPTY_HISTORY: &str = "(No calculations yet)";

/// One completed operation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HistoryEntry {
    /// `lhs operator rhs = result`
    Binary {
        lhs: f64,
        operator: BinaryOperator,
        rhs: f64,
        result: f64,
    },
    /// `name(argument) = result`, or `name = result` for constants.
    Function {
        function: UnaryFunction,
        argument: Option<f64>,
        result: f64,
    },
}

impl HistoryEntry {
    pub fn binary(lhs: f64, operator: BinaryOperator, rhs: f64, result: f64) -> Self {
        Self::Binary {
            lhs,
            operator,
            rhs,
            result,
        }
    }

    /// Record a function application; constants drop their argument.
    pub fn function(function: UnaryFunction, argument: f64, result: f64) -> Self {
        Self::Function {
            function,
            argument: (!function.is_constant()).then_some(argument),
            result,
        }
    }

    pub fn result(&self) -> f64 {
        match self {
            Self::Binary { result, .. } | Self::Function { result, .. } => *result,
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary {
                lhs,
                operator,
                rhs,
                result,
            } => write!(
                f,
                "{} {} {} = {}",
                format_significant(*lhs, OPERAND_DIGITS),
                operator,
                format_significant(*rhs, OPERAND_DIGITS),
                format_number(*result)
            ),
            Self::Function {
                function,
                argument: Some(argument),
                result,
            } => write!(
                f,
                "{}({}) = {}",
                function,
                format_significant(*argument, OPERAND_DIGITS),
                format_number(*result)
            ),
            Self::Function {
                function,
                argument: None,
                result,
            } => write!(f, "{} = {}", function, format_number(*result)),
        }
    }
}

/// Append-only log that evicts its oldest entry once full.
#[derive(Clone, Debug)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryLog {
    /// Create an empty log. A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Entries in insertion order, oldest first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Rendered lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
