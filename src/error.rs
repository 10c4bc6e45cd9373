use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum IniError {
    #[error("Failed to open {path}: {source}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(code(inikit::source_unavailable), help("check that the path exists and is accessible"))
    )]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read line {line}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(inikit::read_error)))]
    ReadError {
        line: usize,
        source: std::io::Error,
    },

    #[error("No file path to save to — the document was loaded from memory")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(code(inikit::no_path), help("use save_to() with an explicit path"))
    )]
    NoPath,

    #[error("Duplicate section '{section}'{}", at_line(.line))]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(code(inikit::duplicate_section), help("each [section] header may appear only once"))
    )]
    DuplicateSection {
        section: String,
        line: Option<usize>,
    },

    #[error("Duplicate key '{key}' in section '{section}' (line {line})")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(code(inikit::duplicate_key), help("remove or rename one of the entries"))
    )]
    DuplicateKey {
        section: String,
        key: String,
        line: usize,
    },

    #[error("No section selected — call select() first")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(inikit::no_section)))]
    NoSectionSelected,

    #[error("Invalid value for '{key}': {reason}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(inikit::invalid_value)))]
    InvalidValue { key: String, reason: String },
}

fn at_line(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" (line {n})"),
        None => String::new(),
    }
}
