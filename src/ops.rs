//! Document operations behind `list`, `get`, `set`, `unset`, and `remove`,
//! and the `IniResult` enum callers use to display results.

use std::fmt;

use crate::document::Document;
use crate::error::IniError;

/// Result of an [`IniAction`](crate::IniAction). Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum IniResult {
    /// `section.key = value` lines, in document order.
    Listing { entries: Vec<(String, String)> },
    /// The document (or one section) as pretty-printed JSON.
    Json(String),
    /// A key's stored value.
    KeyValue { section: String, key: String, value: String },
    /// The requested section or key does not exist.
    NotFound { section: String, key: Option<String> },
    /// Confirmation that a value was stored and saved.
    ValueSet { section: String, key: String, value: String },
    /// Confirmation that a key was removed and the file saved.
    ValueUnset { section: String, key: String },
    /// Confirmation that a whole section was removed and the file saved.
    SectionRemoved { section: String },
}

impl fmt::Display for IniResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IniResult::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                Ok(())
            }
            IniResult::Json(json) => write!(f, "{json}"),
            IniResult::KeyValue { section, key, value } => {
                write!(f, "{} = {value}", qualified(section, key))
            }
            IniResult::NotFound { section, key: Some(key) } => {
                write!(f, "{} is not set", qualified(section, key))
            }
            IniResult::NotFound { section, key: None } => {
                write!(f, "No section [{section}]")
            }
            IniResult::ValueSet { section, key, value } => {
                write!(f, "Set {} = {value}", qualified(section, key))
            }
            IniResult::ValueUnset { section, key } => write!(f, "Unset {}", qualified(section, key)),
            IniResult::SectionRemoved { section } => write!(f, "Removed [{section}]"),
        }
    }
}

/// `section.key`, or just `key` for the default section.
fn qualified(section: &str, key: &str) -> String {
    if section.is_empty() {
        key.to_string()
    } else {
        format!("{section}.{key}")
    }
}

/// Every key of the document (or of one section) as display pairs.
pub fn list_values(doc: &Document, section: Option<&str>) -> Result<IniResult, IniError> {
    if let Some(name) = section
        && !doc.contains_section(name)
    {
        return Ok(IniResult::NotFound {
            section: name.into(),
            key: None,
        });
    }
    let entries = doc
        .sections()
        .filter(|(name, _)| section.is_none_or(|wanted| wanted == *name))
        .flat_map(|(name, keys)| {
            keys.iter()
                .map(move |(key, value)| (qualified(name, key), value.clone()))
        })
        .collect();
    Ok(IniResult::Listing { entries })
}

/// The document (or one section) as pretty JSON.
pub fn list_json(doc: &Document, section: Option<&str>) -> Result<IniResult, IniError> {
    let json = match section {
        Some(name) => match doc.section(name) {
            Some(keys) => serde_json::to_string_pretty(keys),
            None => {
                return Ok(IniResult::NotFound {
                    section: name.into(),
                    key: None,
                });
            }
        },
        None => serde_json::to_string_pretty(doc),
    }
    .map_err(|e| IniError::InvalidValue {
        key: "<list>".into(),
        reason: e.to_string(),
    })?;
    Ok(IniResult::Json(json))
}

/// Look up a single key without touching the cursor.
pub fn get_value(doc: &Document, section: &str, key: &str) -> IniResult {
    match doc.section(section).and_then(|keys| keys.get(key)) {
        Some(value) => IniResult::KeyValue {
            section: section.into(),
            key: key.into(),
            value: value.clone(),
        },
        None => IniResult::NotFound {
            section: section.into(),
            key: Some(key.into()),
        },
    }
}
