//! 1-based line/column numbers from byte offsets.
//!
//! Error reports name source positions as humans read them: lines and
//! columns counted from 1. These helpers convert an absolute byte offset
//! into that form by counting newlines.

use memchr::{memchr_iter, memrchr};

/// 1-based line number of the byte offset `pos` in `text`.
///
/// # Panics
///
/// Panics when `pos > text.len()`; an out-of-range offset is a programming
/// error, not a recoverable condition. `pos == text.len()` is allowed and
/// reports the position just past the last byte.
pub fn line_number_at(text: &str, pos: usize) -> usize {
    assert!(
        pos <= text.len(),
        "offset {pos} is out of bounds of a text of {} bytes",
        text.len()
    );
    memchr_iter(b'\n', &text.as_bytes()[..pos]).count() + 1
}

/// 1-based line and column numbers of the byte offset `pos` in `text`.
///
/// The column restarts at 1 after every newline; a `pos` pointing directly
/// at a newline byte reports the column past the end of that line.
///
/// # Panics
///
/// Panics when `pos > text.len()`, as [`line_number_at`] does.
pub fn line_column_at(text: &str, pos: usize) -> (usize, usize) {
    let line = line_number_at(text, pos);
    let column = match memrchr(b'\n', &text.as_bytes()[..pos]) {
        Some(newline) => pos - newline,
        None => pos + 1,
    };
    (line, column)
}
