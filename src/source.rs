//! Where a document comes from.
//!
//! A [`Source`] is fixed when the [`IniFile`](crate::IniFile) is built. File
//! sources are opened on every [`parse`](crate::IniFile::parse) and double as
//! the default [`save`](crate::IniFile::save) target; memory sources hold the
//! text to parse and have no save target of their own.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::IniError;
use crate::parse;
use crate::render;
use crate::types::{ParseFlags, SaveFlags};

#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    File(PathBuf),
    Memory(String),
}

impl Source {
    /// `<platform config dir for app_name>/<file_name>` (XDG on Linux,
    /// `~/Library/Application Support` on macOS).
    ///
    /// Returns `None` if no home directory can be determined.
    pub fn platform(app_name: &str, file_name: &str) -> Option<Source> {
        let proj = directories::ProjectDirs::from("", "", app_name)?;
        Some(Source::File(proj.config_dir().join(file_name)))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Source::File(path) => Some(path),
            Source::Memory(_) => None,
        }
    }

    /// Feed this source to the parser.
    ///
    /// The file handle lives only for the duration of the call.
    pub(crate) fn read_into(&self, doc: &mut Document, flags: ParseFlags) -> Result<(), IniError> {
        match self {
            Source::File(path) => {
                let file = File::open(path).map_err(|source| IniError::SourceUnavailable {
                    path: path.clone(),
                    source,
                })?;
                log::debug!("parsing {}", path.display());
                parse::parse_into(doc, BufReader::new(file), flags)
            }
            Source::Memory(text) => {
                log::debug!("parsing {} bytes from memory", text.len());
                parse::parse_str(doc, text, flags)
            }
        }
    }
}

/// Render `doc` and write it to `path`, truncating any existing file.
/// Parent directories are created as needed.
pub(crate) fn write_file(path: &Path, doc: &Document, flags: SaveFlags) -> Result<(), IniError> {
    let unavailable = |source| IniError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(unavailable)?;
    }

    let file = File::create(path).map_err(unavailable)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render::render(doc, flags).as_bytes())
        .and_then(|()| writer.flush())
        .map_err(unavailable)?;

    log::debug!("saved {} sections to {} (flags: {flags:?})", doc.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::server_document;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn platform_source_ends_with_file_name() {
        if let Some(Source::File(path)) = Source::platform("inikit-test", "app.ini") {
            assert!(path.ends_with("app.ini"));
        }
    }

    #[test]
    fn memory_source_has_no_path() {
        assert_eq!(Source::Memory("a=1".into()).path(), None);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let source = Source::File(dir.path().join("absent.ini"));
        let mut doc = Document::new();
        let err = source.read_into(&mut doc, ParseFlags::empty()).unwrap_err();
        assert!(matches!(err, IniError::SourceUnavailable { .. }));
        assert_eq!(doc, Document::new());
    }

    #[test]
    fn write_then_read_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.ini");
        let doc = server_document();
        write_file(&path, &doc, SaveFlags::SPACE_KEYS).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("port = 8080"));

        let mut back = Document::new();
        Source::File(path).read_into(&mut back, ParseFlags::empty()).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn write_truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.ini");
        fs::write(&path, "stale=1\n".repeat(50)).unwrap();

        let mut doc = Document::new();
        doc.set("a", "k", "v");
        write_file(&path, &doc, SaveFlags::empty()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[a]\nk=v\n");
    }

    #[test]
    fn write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sub").join("dir").join("app.ini");
        write_file(&path, &Document::new(), SaveFlags::empty()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_to_directory_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let err = write_file(dir.path(), &Document::new(), SaveFlags::empty()).unwrap_err();
        assert!(matches!(err, IniError::SourceUnavailable { .. }));
    }
}
