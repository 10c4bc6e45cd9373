use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::IniError;
use crate::ops::{self, IniResult};
use crate::render;
use crate::source::{self, Source};
use crate::types::{IniAction, Options, ParseFlags, SaveFlags};

/// An INI document bound to the source it was read from.
///
/// Dereferences to [`Document`] for the section and key API. Cloning
/// produces a fully independent copy.
#[derive(Debug, Clone)]
pub struct IniFile {
    source: Source,
    options: Options,
    doc: Document,
}

impl IniFile {
    pub fn builder() -> IniFileBuilder {
        IniFileBuilder::new()
    }

    /// Open and parse `path` with default flags.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, IniError> {
        Self::builder().path(path).open()
    }

    /// Parse INI text held in memory with default flags.
    pub fn from_memory(text: impl Into<String>) -> Result<Self, IniError> {
        Self::builder().memory(text).open()
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    /// Drop every section.
    pub fn clear(&mut self) {
        self.doc.clear();
    }

    /// Parse the source with the configured parse flags.
    pub fn parse(&mut self) -> Result<(), IniError> {
        self.parse_with(ParseFlags::empty())
    }

    /// Parse the source. Empty `flags` means the configured defaults.
    ///
    /// An unreadable source or a duplicate leaves the document unchanged.
    pub fn parse_with(&mut self, flags: ParseFlags) -> Result<(), IniError> {
        let flags = self.options.parse_or_default(flags);
        self.source.read_into(&mut self.doc, flags)
    }

    /// Save to the source file with the configured save flags.
    pub fn save(&self) -> Result<(), IniError> {
        let path = self.source.path().ok_or(IniError::NoPath)?;
        self.save_to(path, SaveFlags::empty())
    }

    /// Save to `path`. Empty `flags` means the configured defaults.
    pub fn save_to(&self, path: &Path, flags: SaveFlags) -> Result<(), IniError> {
        source::write_file(path, &self.doc, self.options.save_or_default(flags))
    }

    /// Render without touching the filesystem. Empty `flags` means the
    /// configured defaults.
    pub fn render(&self, flags: SaveFlags) -> String {
        render::render(&self.doc, self.options.save_or_default(flags))
    }

    /// Handle an `IniAction` and print the result to stdout.
    pub fn handle_and_print(&mut self, action: &IniAction) -> Result<(), IniError> {
        let result = self.handle(action)?;
        println!("{result}");
        Ok(())
    }

    /// Handle an `IniAction` (list / get / set / unset / remove).
    ///
    /// Mutating actions save back to the source with the configured save
    /// flags; removing something that does not exist saves nothing. A
    /// memory source fails with [`IniError::NoPath`] before the document is
    /// touched.
    pub fn handle(&mut self, action: &IniAction) -> Result<IniResult, IniError> {
        match action {
            IniAction::List { section, json: false } => ops::list_values(&self.doc, section.as_deref()),
            IniAction::List { section, json: true } => ops::list_json(&self.doc, section.as_deref()),
            IniAction::Get { section, key } => Ok(ops::get_value(&self.doc, section, key)),
            IniAction::Set { section, key, value } => {
                let path = self.source.path().ok_or(IniError::NoPath)?.to_path_buf();
                self.doc.set(section, key, value.as_str());
                self.save_to(&path, SaveFlags::empty())?;
                Ok(IniResult::ValueSet {
                    section: section.clone(),
                    key: key.clone(),
                    value: value.clone(),
                })
            }
            IniAction::Unset { section, key } => {
                let path = self.source.path().ok_or(IniError::NoPath)?.to_path_buf();
                if self.doc.unset(section, key).is_none() {
                    return Ok(IniResult::NotFound {
                        section: section.clone(),
                        key: Some(key.clone()),
                    });
                }
                self.save_to(&path, SaveFlags::empty())?;
                Ok(IniResult::ValueUnset {
                    section: section.clone(),
                    key: key.clone(),
                })
            }
            IniAction::Remove { section } => {
                let path = self.source.path().ok_or(IniError::NoPath)?.to_path_buf();
                if !self.doc.remove(section) {
                    return Ok(IniResult::NotFound {
                        section: section.clone(),
                        key: None,
                    });
                }
                self.save_to(&path, SaveFlags::empty())?;
                Ok(IniResult::SectionRemoved {
                    section: section.clone(),
                })
            }
        }
    }
}

impl Deref for IniFile {
    type Target = Document;

    fn deref(&self) -> &Document {
        &self.doc
    }
}

impl DerefMut for IniFile {
    fn deref_mut(&mut self) -> &mut Document {
        &mut self.doc
    }
}

/// Builder for an [`IniFile`].
///
/// The source and default flags are fixed once [`open()`](Self::open) is
/// called. Without a source the file starts as an empty in-memory document.
#[derive(Debug, Clone)]
pub struct IniFileBuilder {
    source: Option<Source>,
    options: Options,
    parse_on_open: bool,
}

impl IniFileBuilder {
    fn new() -> Self {
        Self {
            source: None,
            options: Options::default(),
            parse_on_open: true,
        }
    }

    /// Read from (and by default save to) a file.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(Source::File(path.into()));
        self
    }

    /// Read from INI text held in memory.
    pub fn memory(mut self, text: impl Into<String>) -> Self {
        self.source = Some(Source::Memory(text.into()));
        self
    }

    pub fn source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Default flags for [`IniFile::parse`] (default: none).
    pub fn parse_flags(mut self, flags: ParseFlags) -> Self {
        self.options.parse = flags;
        self
    }

    /// Default flags for [`IniFile::save`] (default: none).
    pub fn save_flags(mut self, flags: SaveFlags) -> Self {
        self.options.save = flags;
        self
    }

    /// Parse the source as part of [`open()`](Self::open) (default: `true`).
    pub fn parse_on_open(mut self, parse: bool) -> Self {
        self.parse_on_open = parse;
        self
    }

    pub fn open(self) -> Result<IniFile, IniError> {
        let mut file = IniFile {
            source: self.source.unwrap_or_else(|| Source::Memory(String::new())),
            options: self.options,
            doc: Document::new(),
        };
        if self.parse_on_open {
            file.parse()?;
        }
        Ok(file)
    }
}
