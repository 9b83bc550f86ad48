//! Error taxonomy for flat configuration parsing.
//!
//! Two layers, mirroring the parsing layers: [`EntryError`] is raised by the
//! per-line tokenizer and knows nothing about line numbers; [`ConfigError`]
//! is the store's error, wrapping tokenizer failures with the 1-based source
//! line and covering boolean coercion and IO. Nothing is retried and nothing
//! is swallowed; every variant renders a human-readable message.

use std::path::PathBuf;

use thiserror::Error;

/// Why one configuration line failed to tokenize.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EntryError {
    /// The line holds nothing but whitespace. Callers are expected to
    /// pre-filter blank lines; the tokenizer still refuses them.
    #[error("no configuration entry on the line")]
    EmptyOrBlank,

    /// The entry does not start with a letter, or the identifier is
    /// followed by a byte that is neither whitespace nor `=`.
    #[error("invalid parameter name")]
    InvalidName,

    /// No `=` after the parameter name.
    #[error("no value assignment")]
    MissingAssignment,

    /// A quoted value was never closed before end of line.
    #[error("no trailing quote found")]
    UnterminatedQuote,

    /// Non-space content after a fully parsed value.
    #[error("junk in the config entry")]
    TrailingJunk,
}

/// Why a configuration failed to load, or a parameter failed to coerce.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A tokenizer error, annotated with the 1-based number of the
    /// originating line. Lines are counted before comment/blank filtering,
    /// so the number matches what an editor shows.
    #[error("{source} (line {line})")]
    Entry {
        /// 1-based source line number.
        line: usize,
        /// The tokenizer failure on that line.
        #[source]
        source: EntryError,
    },

    /// A stored string did not match the boolean vocabulary
    /// (`y`/`yes`/`t`/`true`/`1` and `n`/`no`/`f`/`false`/`0`,
    /// case-sensitive).
    #[error("invalid value {value:?} of the boolean parameter {name:?}")]
    InvalidBooleanValue {
        /// The parameter that was queried.
        name: String,
        /// The stored string that failed to coerce.
        value: String,
    },

    /// The underlying line source could not be opened or read.
    #[error("cannot read configuration file {path:?}")]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The propagated IO failure.
        #[source]
        source: std::io::Error,
    },
}
