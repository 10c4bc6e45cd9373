//! Flag sets and framework-agnostic actions.
//!
//! # Parse flags
//!
//! [`ParseFlags`] control comment stripping. Comments are cut from the raw
//! line before trimming, so a comment-only line behaves like a blank line:
//!
//! | Flag | Effect |
//! |------|--------|
//! | `COMMENTS_SLASH` | truncate at the first `//` |
//! | `COMMENTS_HASH` | truncate at the first `#` |
//! | `COMMENTS_ALL` | both of the above |
//!
//! # Save flags
//!
//! [`SaveFlags`] combine freely:
//!
//! | Flag | Output |
//! |------|--------|
//! | `PRUNE` | skip empty sections and empty-valued keys |
//! | `PAD_SECTIONS` | blank line after each section's keys |
//! | `SPACE_SECTIONS` | `[ name ]` instead of `[name]` |
//! | `SPACE_KEYS` | `key = value` instead of `key=value` |
//! | `TAB_KEYS` | indent keys of named sections with a tab |
//! | `SEMICOLON_KEYS` | append `;` to every key line |
//!
//! An empty flag set passed to [`IniFile::parse_with`](crate::IniFile::parse_with)
//! or [`IniFile::save_to`](crate::IniFile::save_to) means "use the defaults
//! configured on the builder".

use bitflags::bitflags;

bitflags! {
    /// Comment handling applied while parsing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ParseFlags: u32 {
        const COMMENTS_SLASH = 1;
        const COMMENTS_HASH = 1 << 1;
        const COMMENTS_ALL = 1 << 2;
    }
}

impl ParseFlags {
    pub(crate) fn strips_slash(self) -> bool {
        self.intersects(Self::COMMENTS_SLASH | Self::COMMENTS_ALL)
    }

    pub(crate) fn strips_hash(self) -> bool {
        self.intersects(Self::COMMENTS_HASH | Self::COMMENTS_ALL)
    }
}

bitflags! {
    /// Formatting applied while saving.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SaveFlags: u32 {
        const PRUNE = 1;
        const PAD_SECTIONS = 1 << 1;
        const SPACE_SECTIONS = 1 << 2;
        const SPACE_KEYS = 1 << 3;
        const TAB_KEYS = 1 << 4;
        const SEMICOLON_KEYS = 1 << 5;
    }
}

/// Default flags for a document, fixed when the document is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub parse: ParseFlags,
    pub save: SaveFlags,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            parse: ParseFlags::empty(),
            save: SaveFlags::empty(),
        }
    }
}

impl Options {
    /// `flags` unless empty, else the configured parse defaults.
    pub fn parse_or_default(&self, flags: ParseFlags) -> ParseFlags {
        if flags.is_empty() { self.parse } else { flags }
    }

    /// `flags` unless empty, else the configured save defaults.
    pub fn save_or_default(&self, flags: SaveFlags) -> SaveFlags {
        if flags.is_empty() { self.save } else { flags }
    }
}

/// A document operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
///
/// `section` is `""` for the unnamed default section.
#[derive(Debug, Clone, PartialEq)]
pub enum IniAction {
    List { section: Option<String>, json: bool },
    Get { section: String, key: String },
    Set { section: String, key: String, value: String },
    Unset { section: String, key: String },
    Remove { section: String },
}
