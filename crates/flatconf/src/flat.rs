//! The flat configuration store.
//!
//! A [`FlatConfig`] is built once — from a file or any sequence of lines —
//! and is immutable thereafter. Loading is fail-fast: the first malformed
//! line aborts the whole load and the partial result is discarded, so a
//! `FlatConfig` either reflects the entire file or does not exist.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use flatconf_scan::{Ascii, LineCursor};

use crate::entry::parse_entry;
use crate::error::ConfigError;

/// Immutable mapping from parameter name to optional string value.
///
/// Every key present after a successful load holds `Some(value)`; `None` is
/// reserved for the lookup-miss case returned to callers, never stored.
/// Sharing read-only across threads needs no locking; refreshing means
/// parsing a new instance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlatConfig {
    parameters: BTreeMap<String, Option<String>>,
}

impl FlatConfig {
    /// Load a configuration file.
    ///
    /// Line-ending agnostic: the trailing `\r` of CRLF endings is stripped
    /// before tokenizing. Open/read failures surface as
    /// [`ConfigError::Io`] with the offending path attached.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "reading flat configuration");
        Self::from_lines(
            text.lines()
                .map(|line| line.strip_suffix('\r').unwrap_or(line)),
        )
    }

    /// Load a configuration from a sequence of raw lines.
    ///
    /// Lines that are empty or whose first non-space byte is `#` are
    /// filtered out; every surviving line must tokenize. A tokenizer
    /// failure is wrapped with the 1-based number of the original,
    /// pre-filter line and aborts the load.
    pub fn from_lines<I>(lines: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut parameters = BTreeMap::new();
        let mut total = 0;
        for (index, line) in lines.into_iter().enumerate() {
            total = index + 1;
            let line = line.as_ref();
            if !is_entry_line(line) {
                continue;
            }
            let entry = parse_entry(line).map_err(|source| ConfigError::Entry {
                line: index + 1,
                source,
            })?;
            tracing::trace!(name = %entry.name, "parsed config entry");
            // Duplicate key within one file: the later line silently wins.
            parameters.insert(entry.name, Some(entry.value));
        }
        tracing::debug!(
            lines = total,
            entries = parameters.len(),
            "loaded flat configuration"
        );
        Ok(Self { parameters })
    }

    /// The stored string of the parameter `name`, or `None` when absent.
    ///
    /// Absence is a normal, non-erroring outcome.
    pub fn string_parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).and_then(Option::as_deref)
    }

    /// The parameter `name` coerced to a boolean, or `None` when absent.
    ///
    /// The vocabulary is fixed and case-sensitive: `y`, `yes`, `t`,
    /// `true`, `1` are true; `n`, `no`, `f`, `false`, `0` are false.
    /// Anything else is [`ConfigError::InvalidBooleanValue`], raised only
    /// by this accessor — a bad boolean never fails the load.
    pub fn boolean_parameter(&self, name: &str) -> Result<Option<bool>, ConfigError> {
        let Some(value) = self.string_parameter(name) else {
            return Ok(None);
        };
        match value {
            "y" | "yes" | "t" | "true" | "1" => Ok(Some(true)),
            "n" | "no" | "f" | "false" | "0" => Ok(Some(false)),
            _ => Err(ConfigError::InvalidBooleanValue {
                name: name.to_owned(),
                value: value.to_owned(),
            }),
        }
    }

    /// Read-only view of the full parameter set, for iteration and
    /// debugging.
    pub fn parameters(&self) -> &BTreeMap<String, Option<String>> {
        &self.parameters
    }
}

/// Keep a line only when it is neither blank nor a `#` comment.
fn is_entry_line(line: &str) -> bool {
    let mut cursor = LineCursor::new(line);
    cursor.skip_spaces(&Ascii);
    !matches!(cursor.peek(), Some(b'#') | None)
}
