//! Copy-by-value cursor over one line of text.
//!
//! The cursor is the single scanning abstraction: an explicit
//! `(line, position)` pair advanced through the line and handed around by
//! value. There are no iterator-returning or index-returning helper
//! families; every scan reads as "advance the cursor, look at where it
//! stopped".
//!
//! # Byte Predicates
//!
//! Scanning methods take byte predicates, not `char` predicates. The
//! contract for slice safety: a predicate must either reject `0x80..=0xBF`
//! continuation bytes outright (then it never accepts any multibyte
//! character) or accept every byte of each multibyte character it enters.
//! All predicates used by this crate and by `flatconf` stop only at ASCII
//! bytes, which satisfies the contract.

use crate::Classify;

/// Cursor over one line of text.
///
/// `Copy`, enabling cheap state snapshots for backtracking. Never persisted:
/// the cursor is created per line, threaded through the scanning functions,
/// and dropped.
#[derive(Clone, Copy, Debug)]
pub struct LineCursor<'a> {
    /// The line being scanned. Must not contain `\n` or `\r` (the line
    /// reader strips terminators before handing lines to the scanner).
    line: &'a str,
    /// Current read position (byte index into `line`), always on a
    /// character boundary.
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    /// Create a cursor at byte position `start`.
    ///
    /// # Panics
    ///
    /// Panics when `start > line.len()` or when `start` is not a character
    /// boundary. Both are programming errors of the caller, not recoverable
    /// parse failures, so the violation fails fast.
    pub fn at(line: &'a str, start: usize) -> Self {
        assert!(
            start <= line.len(),
            "cursor start {start} is out of bounds of a line of {} bytes",
            line.len()
        );
        assert!(
            line.is_char_boundary(start),
            "cursor start {start} is not a character boundary"
        );
        Self { line, pos: start }
    }

    /// The full line this cursor scans.
    #[inline]
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Current byte offset into the line.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns `true` once the cursor has consumed the whole line.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// The byte at the current position, or `None` at end of line.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.line.as_bytes().get(self.pos).copied()
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consume and return one full character, or `None` at end of line.
    pub fn take_char(&mut self) -> Option<char> {
        let ch = self.rest().chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// The unconsumed remainder of the line.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// Extract the slice from `start` to the current position.
    ///
    /// `start` must be a position previously obtained from [`pos()`](Self::pos)
    /// on this cursor, so it is `<=` the current position and on a
    /// character boundary.
    pub fn slice_from(&self, start: usize) -> &'a str {
        debug_assert!(start <= self.pos, "slice start {start} exceeds position");
        &self.line[start..self.pos]
    }

    /// Advance to the first byte at or after the current position that is
    /// not a space per `classify`, or to end of line.
    ///
    /// The position after the call is the position-of-non-space of the
    /// position before it.
    pub fn skip_spaces(&mut self, classify: &impl Classify) {
        while let Some(byte) = self.peek() {
            if !classify.is_space(byte) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Greedily capture bytes while `pred` holds.
    ///
    /// Stops at the first non-matching byte or at end of line; the cursor is
    /// left at the stop position and the captured slice is returned
    /// (possibly empty). See the module docs for the predicate contract.
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if !pred(byte) {
                break;
            }
            self.pos += 1;
        }
        self.slice_from(start)
    }

    /// Capture a simple identifier: a letter followed by letters, digits,
    /// or underscores.
    ///
    /// Returns the empty slice without moving the cursor unless the current
    /// byte is alphabetic per `classify`. The asymmetry — identifiers must
    /// *start* with a letter but may *continue* with digits and underscores
    /// — is what rejects `1abc` while accepting `a1_b`.
    pub fn take_identifier(&mut self, classify: &impl Classify) -> &'a str {
        match self.peek() {
            Some(byte) if classify.is_alphabetic(byte) => {
                self.take_while(|b| classify.is_identifier(b))
            }
            _ => "",
        }
    }

    /// Advance to the next `'` or `\`, whichever comes first.
    ///
    /// Returns the byte found with the cursor positioned on it, or `None`
    /// with the cursor at end of line. Uses `memchr2` so quoted-value bodies
    /// are skipped without a per-byte loop.
    pub fn skip_to_quote_or_escape(&mut self) -> Option<u8> {
        let rest = &self.line.as_bytes()[self.pos..];
        match memchr::memchr2(b'\'', b'\\', rest) {
            Some(offset) => {
                self.pos += offset;
                Some(rest[offset])
            }
            None => {
                self.pos = self.line.len();
                None
            }
        }
    }
}
