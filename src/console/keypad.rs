//! Keypad mode: key names typed on a line drive a [`Calculator`].
//!
//! Stands in for the graphical keypad. Single-character keys may be run
//! together (`12+7=`), named keys are separated by anything that is not
//! a letter or digit (`9 sqrt`). After each line the expression preview,
//! the display and the feedback line are printed.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use super::suggest::suggest;
use crate::calculator::{
    AngleMode, Calculator, EMPTY_HISTORY, HistoryEntry, Key, copy_to_clipboard,
};

/// Key names accepted besides digits and operator symbols.
pub const KEY_NAMES: &[&str] = &[
    "c", "clear", "bs", "back", "sqrt", "sq", "square", "inv", "recip", "sin", "cos", "tan",
    "asin", "ln", "log", "exp", "abs", "pi", "e", "deg", "rad", "history", "json", "copy", "quit",
];

const BANNER: &str = "\
Scientific Calculator (keypad)
Keys: 0-9 . + - * / % ^ = c bs
Functions: sqrt sq inv sin cos tan asin ln log exp abs pi e
Commands: deg rad history json copy quit";

lazy_static! {
    /// One key per match: a digit, a dot, an operator symbol, a word,
    /// or any other single character (reported as unknown).
    static ref KEY_TOKEN: Regex = Regex::new(r"[0-9]|\.|[-+*/%^=]|[A-Za-z][A-Za-z0-9]*|\S").unwrap();
}

/// Whether the session should keep reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Split a line into key tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    KEY_TOKEN.find_iter(line).map(|m| m.as_str()).collect()
}

/// Apply every key on `line`, then render the calculator.
pub fn process_line<W: Write>(calc: &mut Calculator, line: &str, output: &mut W) -> Result<Flow> {
    for token in tokenize(line) {
        match token.to_ascii_lowercase().as_str() {
            "quit" | "q" => return Ok(Flow::Quit),
            "deg" => calc.set_angle_mode(AngleMode::Degrees),
            "rad" => calc.set_angle_mode(AngleMode::Radians),
            "history" => write_history(calc, output)?,
            "json" => write_history_json(calc, output)?,
            "copy" => {
                if let Err(e) = copy_to_clipboard(calc.display()) {
                    warn!("{:#}", e);
                    writeln!(output, "  ! Could not copy to clipboard.")?;
                }
            }
            _ => press_token(calc, token, output)?,
        }
    }

    render(calc, output)?;
    Ok(Flow::Continue)
}

fn press_token<W: Write>(calc: &mut Calculator, token: &str, output: &mut W) -> Result<()> {
    let key = match token.parse::<Key>() {
        Ok(key) => key,
        Err(_) => {
            let mut message = format!("  ! Unknown key '{}'.", token);
            if let Some(hint) = suggest(&token.to_ascii_lowercase(), KEY_NAMES) {
                message.push_str(&format!(" Did you mean '{}'?", hint));
            }
            writeln!(output, "{}", message)?;
            return Ok(());
        }
    };

    if let Err(e) = calc.press(key) {
        debug!(?key, error = %e, "key rejected");
        writeln!(output, "  ! {}", e.category())?;
    }
    Ok(())
}

fn render<W: Write>(calc: &Calculator, output: &mut W) -> Result<()> {
    if !calc.expression().is_empty() {
        writeln!(output, "    {}", calc.expression().trim_end())?;
    }
    writeln!(output, "[{}] {}", calc.angle_mode(), calc.display())?;
    if !calc.feedback().is_empty() {
        writeln!(output, "    {}", calc.feedback())?;
    }
    Ok(())
}

/// History lines, newest first.
fn write_history<W: Write>(calc: &Calculator, output: &mut W) -> Result<()> {
    if calc.history().is_empty() {
        writeln!(output, "  {}", EMPTY_HISTORY)?;
        return Ok(());
    }
    for entry in calc.history().entries().rev() {
        writeln!(output, "  {}", entry)?;
    }
    Ok(())
}

fn write_history_json<W: Write>(calc: &Calculator, output: &mut W) -> Result<()> {
    let entries: Vec<&HistoryEntry> = calc.history().entries().collect();
    let json = serde_json::to_string_pretty(&entries).context("failed to encode history")?;
    writeln!(output, "{}", json)?;
    Ok(())
}

/// Interactive keypad session over `input`.
pub fn run_keypad<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    calc: &mut Calculator,
) -> Result<()> {
    writeln!(output, "{}\n", BANNER).context("failed to write banner")?;
    render(calc, output)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        if process_line(calc, &line, output)? == Flow::Quit {
            break;
        }
    }

    output.flush()?;
    Ok(())
}
