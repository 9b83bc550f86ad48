//! Flat key/value configuration files.
//!
//! One entry per line, `name=value`, with `#` comments and single-quoted
//! values for embedded spaces:
//!
//! ```text
//! # comment line, ignored
//! param1=value
//! param2 = 'quoted value with spaces'
//! param3='escaped \' quote'
//! param4=
//! ```
//!
//! The crate has two layers: [`entry`] tokenizes one line into a
//! [`ConfigEntry`], and [`flat`] folds a sequence of lines into an immutable
//! [`FlatConfig`] store with typed accessors. Loading is all-or-nothing: the
//! first malformed line aborts the whole load with its 1-based line number
//! attached, and no partial configuration is ever exposed.
//!
//! ```
//! use flatconf::FlatConfig;
//!
//! let config = FlatConfig::from_lines([
//!     "# storage",
//!     "data_dir = '/var/lib/app data'",
//!     "fsync = yes",
//! ])?;
//! assert_eq!(config.string_parameter("data_dir"), Some("/var/lib/app data"));
//! assert_eq!(config.boolean_parameter("fsync")?, Some(true));
//! assert_eq!(config.string_parameter("missing"), None);
//! # Ok::<(), flatconf::ConfigError>(())
//! ```
//!
//! A built [`FlatConfig`] has no interior mutability and is safe to share
//! read-only across threads; refreshing means re-parsing into a new
//! instance.

mod entry;
mod error;
mod flat;

pub use entry::{parse_entry, parse_entry_with, ConfigEntry};
pub use error::{ConfigError, EntryError};
pub use flat::FlatConfig;
