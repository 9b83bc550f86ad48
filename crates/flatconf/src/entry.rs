//! Tokenizer for one configuration line.
//!
//! Grammar, informally:
//!
//! ```text
//! entry     := identifier WS* '=' WS* value WS*
//! identifier:= ALPHA (ALNUM | '_')*
//! value     := quoted | unquoted | ε
//! quoted    := "'" (escaped-char | [^'\\])* "'"
//! unquoted  := [^ \t']+
//! ```
//!
//! Quoting exists solely to allow embedded spaces in values, so the escape
//! rule is intentionally narrow: `\` is meaningful only before the quote
//! character. Before anything else it degrades to a no-op and both
//! characters land in the value — `'a\nb'` stores the four characters
//! `a`, `\`, `n`, `b`.

use flatconf_scan::{Ascii, Classify, LineCursor};

use crate::error::EntryError;

/// The value delimiter.
const QUOTE: u8 = b'\'';
/// The escape character inside quoted values.
const ESCAPE: u8 = b'\\';

/// One parsed `name=value` pair from a single configuration line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigEntry {
    /// Parameter name: a letter followed by letters, digits, or
    /// underscores.
    pub name: String,
    /// Parameter value, possibly empty.
    pub value: String,
}

/// Tokenize one line into a [`ConfigEntry`] using ASCII classification.
pub fn parse_entry(line: &str) -> Result<ConfigEntry, EntryError> {
    parse_entry_with(line, &Ascii)
}

/// Tokenize one line under an explicit classification policy.
///
/// A single left-to-right pass: name, `=`, value (quoted or unquoted),
/// then nothing but trailing whitespace.
pub fn parse_entry_with(line: &str, classify: &impl Classify) -> Result<ConfigEntry, EntryError> {
    let mut cursor = LineCursor::new(line);

    cursor.skip_spaces(classify);
    if cursor.is_at_end() {
        return Err(EntryError::EmptyOrBlank);
    }

    // Parameter name.
    let name = cursor.take_identifier(classify);
    if name.is_empty() {
        return Err(EntryError::InvalidName);
    }
    if let Some(byte) = cursor.peek() {
        if !classify.is_space(byte) && byte != b'=' {
            return Err(EntryError::InvalidName);
        }
    }

    // Assignment.
    cursor.skip_spaces(classify);
    if cursor.peek() != Some(b'=') {
        return Err(EntryError::MissingAssignment);
    }
    cursor.advance();
    cursor.skip_spaces(classify);

    // Value: empty at end of line, quoted on a quote, a run of
    // non-space non-quote bytes otherwise.
    let value = match cursor.peek() {
        None => String::new(),
        Some(QUOTE) => take_quoted_value(&mut cursor)?,
        Some(_) => cursor
            .take_while(|b| !classify.is_space(b) && b != QUOTE)
            .to_owned(),
    };

    // Nothing but whitespace may follow the value.
    cursor.skip_spaces(classify);
    if !cursor.is_at_end() {
        return Err(EntryError::TrailingJunk);
    }

    Ok(ConfigEntry {
        name: name.to_owned(),
        value,
    })
}

/// Scan a quoted value with the cursor on the opening quote.
///
/// The body is copied verbatim between the delimiter bytes, which are
/// located with the cursor's memchr-backed search. On `\`: a following
/// quote becomes a literal quote; any other character keeps both the
/// backslash and itself.
fn take_quoted_value(cursor: &mut LineCursor<'_>) -> Result<String, EntryError> {
    cursor.advance(); // opening quote
    let mut value = String::new();
    loop {
        let start = cursor.pos();
        let found = cursor.skip_to_quote_or_escape();
        value.push_str(cursor.slice_from(start));
        match found {
            Some(QUOTE) => {
                cursor.advance(); // discard the closing quote
                return Ok(value);
            }
            Some(ESCAPE) => {
                cursor.advance();
                match cursor.take_char() {
                    Some('\'') => value.push('\''),
                    Some(escaped) => {
                        // Not an escapable character: the escape is a
                        // no-op and both characters are preserved.
                        value.push('\\');
                        value.push(escaped);
                    }
                    // `\` was the last byte of the line.
                    None => return Err(EntryError::UnterminatedQuote),
                }
            }
            // End of line before a closing quote. (The search yields only
            // the two delimiter bytes, so the remaining case is `None`.)
            _ => return Err(EntryError::UnterminatedQuote),
        }
    }
}
