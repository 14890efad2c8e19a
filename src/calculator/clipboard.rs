//! Copying calculator results to the system clipboard.

use crate::error::ClipboardError;
use arboard::Clipboard;

/// Put `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Access)?;

    clipboard
        .set_text(text.to_string())
        .map_err(ClipboardError::Copy)?;

    tracing::debug!(text, "copied result to clipboard");
    Ok(())
}
