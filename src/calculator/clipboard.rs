//! Copy displayed values to the system clipboard.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Put `display` on the clipboard.
///
/// Front ends call this for the "copy" key; the engine never touches the
/// clipboard itself. Headless sessions surface the arboard error.
pub fn copy_to_clipboard(display: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(display.to_owned())
        .with_context(|| format!("could not copy '{}' to the clipboard", display))
}
