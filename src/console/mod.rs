//! Console front ends for the calculator core.
//!
//! - `triple`: the `<number> <operator> <number>` REPL
//! - `keypad`: key names on stdin driving the keypad state machine

mod keypad;
mod suggest;
mod triple;

pub use keypad::{Flow, KEY_NAMES, process_line, run_keypad, tokenize};
pub use suggest::suggest;
pub use triple::{ConsoleOp, OPERATOR_TOKENS, evaluate_tokens, is_quit, render_reply, run_console};
