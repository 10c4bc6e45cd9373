//! Line-by-line INI parser.
//!
//! Each line goes through the same steps: comment truncation (per
//! [`ParseFlags`]), trimming, then classification as blank, section header,
//! key/value pair, or inert text. There is no lookahead and no line
//! continuation.
//!
//! Duplicates are never merged: a second `[name]` header or a repeated key
//! within one section fails the whole parse. Parsing is transactional, so
//! the target document is only updated when every line was accepted.

use std::io::BufRead;
use std::str::FromStr;

use crate::document::{DEFAULT_SECTION, Document, Section};
use crate::error::IniError;
use crate::trim::{DEFAULT_TRIM_CHARS, SECTION_TRIM_CHARS, trim, trim_end, trim_start};
use crate::types::ParseFlags;

/// Parse every line of `reader` into `doc`.
///
/// Keys that appear before any header go to the default section. On error
/// `doc` is left exactly as it was.
pub fn parse_into<R: BufRead>(doc: &mut Document, reader: R, flags: ParseFlags) -> Result<(), IniError> {
    let mut staged = doc.clone();
    let mut active = DEFAULT_SECTION.to_string();
    let mut pairs = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let number = idx + 1;
        let raw = line.map_err(|source| IniError::ReadError { line: number, source })?;
        let line = trim(strip_comments(&raw, flags), DEFAULT_TRIM_CHARS);

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            let name = trim(line, SECTION_TRIM_CHARS);
            if name.is_empty() {
                log::trace!("line {number}: back to default section");
                staged.sections.entry(DEFAULT_SECTION.to_string()).or_default();
                active = DEFAULT_SECTION.to_string();
                continue;
            }
            if staged.sections.contains_key(name) {
                log::warn!("duplicate section '{name}' at line {number}");
                return Err(IniError::DuplicateSection {
                    section: name.into(),
                    line: Some(number),
                });
            }
            log::trace!("line {number}: section '{name}'");
            staged.sections.insert(name.to_string(), Section::new());
            active = name.to_string();
        } else if let Some((key, value)) = line.split_once('=') {
            let key = trim_end(key, DEFAULT_TRIM_CHARS);
            let value = trim_start(value, DEFAULT_TRIM_CHARS);
            let section = staged.sections.entry(active.clone()).or_default();
            if section.contains_key(key) {
                log::warn!("duplicate key '{key}' in section '{active}' at line {number}");
                return Err(IniError::DuplicateKey {
                    section: active,
                    key: key.into(),
                    line: number,
                });
            }
            section.insert(key.to_string(), value.to_string());
            pairs += 1;
        } else {
            log::trace!("line {number}: ignored");
        }
    }

    log::debug!(
        "parsed {pairs} keys into {} sections (flags: {flags:?})",
        staged.sections.len()
    );
    doc.sections = staged.sections;
    Ok(())
}

/// Parse INI text held in memory.
pub fn parse_str(doc: &mut Document, text: &str, flags: ParseFlags) -> Result<(), IniError> {
    parse_into(doc, text.as_bytes(), flags)
}

/// Truncate `line` at the first enabled comment marker.
fn strip_comments(line: &str, flags: ParseFlags) -> &str {
    let mut line = line;
    if flags.strips_slash()
        && let Some(pos) = line.find("//")
    {
        line = &line[..pos];
    }
    if flags.strips_hash()
        && let Some(pos) = line.find('#')
    {
        line = &line[..pos];
    }
    line
}

/// Parses with no comment stripping.
impl FromStr for Document {
    type Err = IniError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut doc = Document::new();
        parse_str(&mut doc, s, ParseFlags::empty())?;
        Ok(doc)
    }
}
