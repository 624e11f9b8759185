//! Console mode: `<number> <operator> <number>` triples read from a stream.
//!
//! Unary functions take the first number and ignore the second, so
//! `16 sqrt 0` prints `4`. Entering `quit` or `q` in place of the
//! operator or either number ends the session.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::debug;

use super::suggest::suggest;
use crate::calculator::{
    self, AngleMode, BinaryOperator, CalcError, OPERAND_DIGITS, UnaryFunction, format_significant,
};

/// Every operator and function token the console understands.
pub const OPERATOR_TOKENS: &[&str] = &[
    "+", "-", "*", "/", "%", "^", "pow", "p", "//", "sqrt", "sin", "cos", "tan", "asin", "acos",
    "atan", "sinh", "cosh", "tanh", "log", "ln", "exp", "abs", "fact", "floor", "ceil", "inv",
    "neg", "pi", "e",
];

const BANNER: &str = "\
=== Calculator (Basic + Scientific) ===

Basic:      + - * / % ^ p(percent) //(quotient)
Scientific: sqrt sin cos tan asin acos atan sinh cosh tanh
            log ln exp abs fact floor ceil inv neg pi e
Format: number operator number  (unary: number op 0)
Quit: 0 quit 0
";

/// An operator token resolved to its table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleOp {
    Binary(BinaryOperator),
    Unary(UnaryFunction),
}

impl FromStr for ConsoleOp {
    type Err = CalcError;

    fn from_str(token: &str) -> calculator::Result<Self> {
        if let Ok(op) = token.parse::<BinaryOperator>() {
            return Ok(Self::Binary(op));
        }
        token
            .parse::<UnaryFunction>()
            .map(Self::Unary)
            .map_err(|_| CalcError::unknown_operator(token))
    }
}

impl ConsoleOp {
    pub fn evaluate(self, a: f64, b: f64, angle: AngleMode) -> calculator::Result<f64> {
        match self {
            Self::Binary(op) => op.apply(a, b),
            Self::Unary(function) => function.apply(a, angle),
        }
    }
}

pub fn is_quit(token: &str) -> bool {
    token.eq_ignore_ascii_case("quit") || token.eq_ignore_ascii_case("q")
}

fn parse_operand(token: &str) -> calculator::Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| CalcError::invalid_number(token))
}

/// Evaluate one triple of raw tokens.
pub fn evaluate_tokens(a: &str, op: &str, b: &str, angle: AngleMode) -> calculator::Result<f64> {
    let a = parse_operand(a)?;
    let op: ConsoleOp = op.parse()?;
    let b = parse_operand(b)?;
    op.evaluate(a, b, angle)
}

/// Text echoed after `=>` for one evaluation.
pub fn render_reply(outcome: &calculator::Result<f64>) -> String {
    match outcome {
        Ok(value) => format_significant(*value, OPERAND_DIGITS),
        Err(err) => {
            let mut reply = format!("Error: {}", err);
            if let CalcError::UnknownOperator(token) = err
                && let Some(hint) = suggest(&token.to_ascii_lowercase(), OPERATOR_TOKENS)
            {
                reply.push_str(&format!(" Did you mean '{}'?", hint));
            }
            reply
        }
    }
}

/// Run the console loop until end of input or a quit token.
///
/// Triples may span lines or share a line; tokens are consumed three at
/// a time as they arrive.
pub fn run_console<R: BufRead, W: Write>(input: R, output: &mut W, angle: AngleMode) -> Result<()> {
    writeln!(output, "{}", BANNER).context("failed to write banner")?;
    write!(output, "> ")?;
    output.flush()?;

    let mut tokens: VecDeque<String> = VecDeque::new();

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        tokens.extend(line.split_whitespace().map(str::to_owned));

        loop {
            // A bare quit word cannot be a number, so it ends the session too
            if tokens.front().is_some_and(|t| is_quit(t)) {
                return finish(output);
            }
            if tokens.len() < 3 {
                break;
            }
            let (Some(a), Some(op), Some(b)) =
                (tokens.pop_front(), tokens.pop_front(), tokens.pop_front())
            else {
                break;
            };
            if is_quit(&op) || is_quit(&b) {
                return finish(output);
            }

            let outcome = evaluate_tokens(&a, &op, &b, angle);
            debug!(%a, %op, %b, ?outcome, "console evaluation");
            writeln!(output, "  => {}\n", render_reply(&outcome))?;
            write!(output, "> ")?;
            output.flush()?;
        }
    }

    finish(output)
}

fn finish<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "\nDone.")?;
    output.flush()?;
    Ok(())
}
