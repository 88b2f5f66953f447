//! Copying text to the user's clipboard through the terminal.
//!
//! Uses the OSC 52 escape sequence, which most modern terminal emulators
//! (and tmux with `set-clipboard on`) forward to the system clipboard.

use std::io::Write;

use base64::Engine;

/// The OSC 52 sequence that sets the clipboard to `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!(
        "\x1b]52;c;{}\x07",
        base64::engine::general_purpose::STANDARD.encode(text)
    )
}

/// Writes the clipboard sequence to `out`. Returns whether the write succeeded.
pub fn copy_to<W: Write>(out: &mut W, text: &str) -> bool {
    out.write_all(osc52_sequence(text).as_bytes())
        .and_then(|_| out.flush())
        .is_ok()
}

/// Copies `text` via the terminal attached to stdout.
pub fn copy_to_clipboard(text: &str) -> bool {
    copy_to(&mut std::io::stdout(), text)
}
