//! Line-scanning primitives for flat configuration parsing.
//!
//! Three pieces, leaves first:
//!
//! - [`Classify`] / [`Ascii`]: injectable byte-classification policy
//!   (what counts as a space, a letter, an identifier byte). Deliberately
//!   explicit instead of consulting the process locale, so scanning behaves
//!   identically on every platform.
//! - [`LineCursor`]: a `Copy` `(line, position)` cursor advanced by value
//!   through one line of text. All higher-level scanning (identifier
//!   capture, whitespace skipping, delimiter search) is expressed as
//!   cursor methods.
//! - [`line_number_at`] / [`line_column_at`]: 1-based source positions from
//!   byte offsets, for error localization.
//!
//! # Byte-Level Scanning
//!
//! The cursor works on bytes, not `char`s. That is sound here because every
//! predicate this crate ships stops only at ASCII bytes: a multibyte UTF-8
//! character is either accepted whole or never entered, so captured slices
//! always end on character boundaries.

mod classify;
mod cursor;
mod position;

pub use classify::{Ascii, Classify};
pub use cursor::LineCursor;
pub use position::{line_column_at, line_number_at};
