//! Read, edit, and write INI configuration files.
//!
//! ```ignore
//! let mut ini = IniFile::builder()
//!     .path("app.ini")
//!     .parse_flags(ParseFlags::COMMENTS_HASH)
//!     .save_flags(SaveFlags::SPACE_KEYS | SaveFlags::PAD_SECTIONS)
//!     .open()?;
//!
//! let port: u16 = ini.get_as("server", "port", 8080)?;
//! ini.set("server", "host", "0.0.0.0");
//! ini.save()?;
//! ```
//!
//! # Format
//!
//! ```text
//! top = level key        ; belongs to the unnamed default section
//!
//! [server]
//! host = localhost
//! port = 8080
//! ```
//!
//! - A line starting with `[` opens a section; the name is whatever sits
//!   between the brackets, trimmed. `[]` goes back to the default section.
//! - Any other line with an `=` is a key/value pair. The key is everything
//!   before the first `=`, the value everything after it.
//! - Other lines are ignored.
//! - Comments are a parse option, not part of the format: see
//!   [`ParseFlags`].
//!
//! Section names are unique within a document and keys are unique within a
//! section. Parsing rejects duplicates with [`IniError::DuplicateSection`] or
//! [`IniError::DuplicateKey`] rather than letting the later line win, and
//! leaves the document untouched when it does.
//!
//! # Document model
//!
//! [`Document`] maps section names to key maps, both kept in lexicographic
//! order so that saving is deterministic. Values are stored as text;
//! [`get_as`](Document::get_as) converts on read through [`FromValue`].
//!
//! A document also carries a cursor, the "current section", used by the
//! unqualified accessors:
//!
//! - [`select`](Document::select) and [`create`](Document::create) move it.
//! - [`set`](Document::set) with a section name selects that section.
//! - [`remove`](Document::remove) and [`clear`](Document::clear) unset it;
//!   unqualified writes then fail with [`IniError::NoSectionSelected`].
//!
//! # Files and defaults
//!
//! [`IniFile`] binds a document to its [`Source`] (a path or an in-memory
//! buffer) and to default parse/save flags chosen once on the builder.
//! Passing an empty flag set to [`parse_with`](IniFile::parse_with) or
//! [`save_to`](IniFile::save_to) selects those defaults. There is no global
//! flag state.
//!
//! # Clap adapter
//!
//! With the `clap` feature (on by default), [`IniArgs`] gives an application
//! `list|get|set|unset|remove` subcommands over one INI file. The adapter
//! produces an [`IniAction`]; [`IniFile::handle`] executes it.
//!
//! # Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: parse and
//! save summaries at `debug`, per-line decisions at `trace`, rejected
//! duplicates and lossy conversions at `warn`. Install any logger to see
//! them.
//!
//! # Error handling
//!
//! All fallible operations return [`IniError`]. With the `rich-errors`
//! feature it also implements `miette::Diagnostic`.

pub mod error;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod convert;
mod document;
mod ops;
mod parse;
mod render;
mod source;
mod trim;

#[cfg(test)]
mod fixtures;

pub use builder::{IniFile, IniFileBuilder};
#[cfg(feature = "clap")]
pub use cli::{IniArgs, IniSubcommand};
pub use convert::FromValue;
pub use document::{DEFAULT_SECTION, Document, Section};
pub use error::IniError;
pub use ops::IniResult;
pub use parse::{parse_into, parse_str};
pub use render::{render, write_document};
pub use source::Source;
pub use trim::{DEFAULT_TRIM_CHARS, trim};
pub use types::{IniAction, Options, ParseFlags, SaveFlags};
