//! Copy-to-clipboard via the system clipboard.

/// Write `text` to the clipboard.
///
/// Failure (no clipboard, denied access) is recovered locally: it is logged
/// and reported as `false` so the caller simply leaves the "copied"
/// indicator unset. Never surfaced as a user-facing error.
pub fn copy(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text.to_string()) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, "failed to copy text");
                false
            }
        },
        Err(err) => {
            tracing::warn!(%err, "clipboard unavailable");
            false
        }
    }
}
