//! The in-memory document: sections of unique keys plus a section cursor.
//!
//! Sections and keys are kept in lexicographic order, so iteration and
//! saving are deterministic regardless of insertion order.
//!
//! The cursor names the "current section" targeted by the unqualified
//! accessors ([`get_current`](Document::get_current),
//! [`set_current`](Document::set_current)). It is stored as a section name
//! and resolved on every call, and is unset after [`remove`](Document::remove)
//! or [`clear`](Document::clear) until the next [`select`](Document::select).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert::{self, FromValue};
use crate::error::IniError;
use crate::types::SaveFlags;

/// Key/value pairs of one section. Values are raw text.
pub type Section = BTreeMap<String, String>;

/// Name of the unnamed section that holds keys appearing before any header.
pub const DEFAULT_SECTION: &str = "";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub(crate) sections: BTreeMap<String, Section>,
    #[serde(skip)]
    pub(crate) current: Option<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.sections == other.sections
    }
}

impl Document {
    /// An empty document holding only the default section, which is selected.
    pub fn new() -> Self {
        let mut sections = BTreeMap::new();
        sections.insert(DEFAULT_SECTION.to_string(), Section::new());
        Self {
            sections,
            current: Some(DEFAULT_SECTION.to_string()),
        }
    }

    /// Insert a new empty section and select it.
    ///
    /// A named section that already exists is rejected. Re-creating the
    /// default section replaces it with an empty one.
    pub fn create(&mut self, name: &str) -> Result<&mut Section, IniError> {
        if !name.is_empty() && self.sections.contains_key(name) {
            log::warn!("refusing to create duplicate section '{name}'");
            return Err(IniError::DuplicateSection {
                section: name.into(),
                line: None,
            });
        }
        log::trace!("creating section '{name}'");
        self.current = Some(name.to_string());
        let section = self.sections.entry(name.to_string()).or_default();
        section.clear();
        Ok(section)
    }

    /// Point the cursor at `name`, creating the section if needed.
    ///
    /// Returns `true` if the section already existed.
    pub fn select(&mut self, name: &str) -> bool {
        let existed = self.sections.contains_key(name);
        if !existed {
            self.sections.insert(name.to_string(), Section::new());
        }
        self.current = Some(name.to_string());
        existed
    }

    /// Point the cursor at `name` only if it exists. Returns whether it did;
    /// the cursor is left untouched otherwise.
    pub fn select_existing(&mut self, name: &str) -> bool {
        if self.sections.contains_key(name) {
            self.current = Some(name.to_string());
            true
        } else {
            false
        }
    }

    /// Delete a section and all its keys. The cursor is unset either way.
    pub fn remove(&mut self, name: &str) -> bool {
        self.current = None;
        self.sections.remove(name).is_some()
    }

    /// Drop every section, the default one included, and unset the cursor.
    pub fn clear(&mut self) {
        self.sections.clear();
        self.current = None;
    }

    /// Name of the selected section, if any.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    fn current_section(&self) -> Option<&Section> {
        self.current.as_deref().and_then(|name| self.sections.get(name))
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Select `name` (creating it if needed) and hand out its key map.
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        self.current = Some(name.to_string());
        self.sections.entry(name.to_string()).or_default()
    }

    /// Sections in name order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, keys)| (name.as_str(), keys))
    }

    /// Number of sections, the default section included.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Value of `key` in `section`, or `default` if either is missing.
    pub fn get<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.sections
            .get(section)
            .and_then(|keys| keys.get(key))
            .map_or(default, String::as_str)
    }

    /// Value of `key` in the selected section, or `default`.
    pub fn get_current<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.current_section()
            .and_then(|keys| keys.get(key))
            .map_or(default, String::as_str)
    }

    /// Typed lookup. A missing key yields `default`; text that does not
    /// convert is an [`IniError::InvalidValue`].
    pub fn get_as<T: FromValue>(&self, section: &str, key: &str, default: T) -> Result<T, IniError> {
        match self.sections.get(section).and_then(|keys| keys.get(key)) {
            Some(text) => convert::convert(key, text),
            None => Ok(default),
        }
    }

    pub fn get_current_as<T: FromValue>(&self, key: &str, default: T) -> Result<T, IniError> {
        match self.current_section().and_then(|keys| keys.get(key)) {
            Some(text) => convert::convert(key, text),
            None => Ok(default),
        }
    }

    /// Typed lookup that never fails: the longest convertible prefix of the
    /// text is used, and text with none yields `T::default()`.
    pub fn get_as_lossy<T: FromValue + Default>(&self, section: &str, key: &str, default: T) -> T {
        match self.sections.get(section).and_then(|keys| keys.get(key)) {
            Some(text) => convert::convert_lossy(key, text),
            None => default,
        }
    }

    pub fn get_current_as_lossy<T: FromValue + Default>(&self, key: &str, default: T) -> T {
        match self.current_section().and_then(|keys| keys.get(key)) {
            Some(text) => convert::convert_lossy(key, text),
            None => default,
        }
    }

    /// Upsert `key` in `section`, selecting (and if needed creating) it.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.section_mut(section).insert(key.to_string(), value.into());
    }

    /// Upsert `key` in the selected section.
    pub fn set_current(&mut self, key: &str, value: impl Into<String>) -> Result<(), IniError> {
        let name = self.current.as_deref().ok_or(IniError::NoSectionSelected)?;
        let keys = self
            .sections
            .get_mut(name)
            .ok_or(IniError::NoSectionSelected)?;
        keys.insert(key.to_string(), value.into());
        Ok(())
    }

    /// Remove a single key, returning its value.
    pub fn unset(&mut self, section: &str, key: &str) -> Option<String> {
        self.sections.get_mut(section)?.remove(key)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::render::write_document(f, self, SaveFlags::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::server_document;

    #[test]
    fn new_document_selects_default_section() {
        let doc = Document::new();
        assert_eq!(doc.current(), Some(DEFAULT_SECTION));
        assert!(doc.contains_section(""));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn create_selects_new_section() {
        let mut doc = Document::new();
        doc.create("server").unwrap();
        assert_eq!(doc.current(), Some("server"));
        doc.set_current("port", "80").unwrap();
        assert_eq!(doc.get("server", "port", "?"), "80");
    }

    #[test]
    fn create_rejects_duplicate_named_section() {
        let mut doc = Document::new();
        doc.create("server").unwrap();
        let err = doc.create("server").unwrap_err();
        assert!(matches!(err, IniError::DuplicateSection { ref section, line: None } if section == "server"));
    }

    #[test]
    fn create_default_section_again_is_allowed() {
        let mut doc = Document::new();
        doc.set("", "a", "1");
        assert!(doc.create("").is_ok());
        assert_eq!(doc.get("", "a", "gone"), "gone");
    }

    #[test]
    fn select_reports_existence_and_creates() {
        let mut doc = Document::new();
        assert!(!doc.select("new"));
        assert!(doc.contains_section("new"));
        assert!(doc.select("new"));
        assert_eq!(doc.current(), Some("new"));
    }

    #[test]
    fn select_existing_does_not_create() {
        let mut doc = Document::new();
        assert!(!doc.select_existing("ghost"));
        assert!(!doc.contains_section("ghost"));
        assert_eq!(doc.current(), Some(""));
    }

    #[test]
    fn remove_drops_section_and_unsets_cursor() {
        let mut doc = server_document();
        assert!(doc.remove("server"));
        assert!(!doc.contains_section("server"));
        assert_eq!(doc.current(), None);
        assert!(matches!(doc.set_current("k", "v"), Err(IniError::NoSectionSelected)));
        assert_eq!(doc.get_current("host", "none"), "none");
    }

    #[test]
    fn remove_missing_section_still_unsets_cursor() {
        let mut doc = Document::new();
        assert!(!doc.remove("ghost"));
        assert_eq!(doc.current(), None);
    }

    #[test]
    fn missing_key_returns_default() {
        let doc = server_document();
        assert_eq!(doc.get("server", "nope", "fallback"), "fallback");
        assert_eq!(doc.get("ghost", "host", "fallback"), "fallback");
    }

    #[test]
    fn repeated_set_keeps_single_entry() {
        let mut doc = Document::new();
        doc.set("a", "k", "1");
        doc.set("a", "k", "2");
        doc.set("a", "k", "3");
        let section = doc.section("a").unwrap();
        assert_eq!(section.len(), 1);
        assert_eq!(section["k"], "3");
    }

    #[test]
    fn qualified_set_moves_cursor() {
        let mut doc = Document::new();
        doc.set("db", "url", "postgres://");
        assert_eq!(doc.current(), Some("db"));
        assert_eq!(doc.get_current("url", "?"), "postgres://");
    }

    #[test]
    fn get_as_converts_and_defaults() {
        let doc = server_document();
        assert_eq!(doc.get_as::<u16>("server", "port", 0).unwrap(), 8080);
        assert_eq!(doc.get_as::<u16>("server", "missing", 42).unwrap(), 42);
        assert!(matches!(
            doc.get_as::<u16>("server", "host", 0),
            Err(IniError::InvalidValue { .. })
        ));
        assert_eq!(doc.get_as_lossy::<u16>("server", "host", 1), 0);
    }

    #[test]
    fn get_current_as_uses_cursor() {
        let mut doc = server_document();
        doc.select("server");
        assert!(doc.get_current_as::<bool>("debug", false).unwrap());
    }

    #[test]
    fn get_current_as_lossy_uses_cursor() {
        let mut doc = Document::new();
        doc.set("limits", "max", "10 # soft cap");
        assert!(doc.get_current_as::<u32>("max", 0).is_err());
        assert_eq!(doc.get_current_as_lossy::<u32>("max", 0), 10);
        assert_eq!(doc.get_current_as_lossy::<u32>("missing", 5), 5);
        doc.remove("limits");
        assert_eq!(doc.get_current_as_lossy::<u32>("max", 3), 3);
    }

    #[test]
    fn section_mut_gives_bulk_access() {
        let mut doc = Document::new();
        let keys = doc.section_mut("bulk");
        keys.insert("a".into(), "1".into());
        keys.insert("b".into(), "2".into());
        assert_eq!(doc.current(), Some("bulk"));
        assert_eq!(doc.section("bulk").unwrap().len(), 2);
    }

    #[test]
    fn unset_removes_one_key() {
        let mut doc = server_document();
        assert_eq!(doc.unset("server", "port"), Some("8080".into()));
        assert_eq!(doc.unset("server", "port"), None);
        assert_eq!(doc.get("server", "host", "?"), "localhost");
    }

    #[test]
    fn clear_drops_everything() {
        let mut doc = server_document();
        doc.clear();
        assert!(doc.is_empty());
        assert_eq!(doc.current(), None);
    }

    #[test]
    fn clone_is_independent() {
        let original = server_document();
        let mut copy = original.clone();
        copy.set("server", "port", "9090");
        copy.remove("db");
        assert_eq!(original.get("server", "port", "?"), "8080");
        assert!(original.contains_section("db"));
        assert_ne!(original, copy);
    }

    #[test]
    fn sections_iterate_in_name_order() {
        let mut doc = Document::new();
        doc.set("zeta", "k", "v");
        doc.set("alpha", "k", "v");
        let names: Vec<&str> = doc.sections().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["", "alpha", "zeta"]);
    }

    #[test]
    fn serializes_as_nested_map() {
        let doc = server_document();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["server"]["port"], "8080");
        assert_eq!(json["db"]["url"], "postgres://localhost/app");
    }
}
