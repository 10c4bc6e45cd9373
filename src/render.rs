//! Serialize a [`Document`] back to INI text.
//!
//! Output follows the document's iteration order (sections by name, keys by
//! name). Rendering is a pure formatting pass: the document already
//! guarantees unique sections and keys, so nothing is validated here.

use std::fmt::{self, Write};

use crate::document::Document;
use crate::types::SaveFlags;

/// Render `doc` to a string.
pub fn render(doc: &Document, flags: SaveFlags) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_document(&mut out, doc, flags);
    out
}

/// Render `doc` into any formatter sink.
pub fn write_document<W: Write>(out: &mut W, doc: &Document, flags: SaveFlags) -> fmt::Result {
    let prune = flags.contains(SaveFlags::PRUNE);

    for (name, keys) in doc.sections() {
        if prune && keys.values().all(String::is_empty) {
            continue;
        }

        if !name.is_empty() {
            if flags.contains(SaveFlags::SPACE_SECTIONS) {
                writeln!(out, "[ {name} ]")?;
            } else {
                writeln!(out, "[{name}]")?;
            }
        }

        for (key, value) in keys {
            if prune && value.is_empty() {
                continue;
            }
            if flags.contains(SaveFlags::TAB_KEYS) && !name.is_empty() {
                out.write_char('\t')?;
            }
            if flags.contains(SaveFlags::SPACE_KEYS) {
                write!(out, "{key} = {value}")?;
            } else {
                write!(out, "{key}={value}")?;
            }
            if flags.contains(SaveFlags::SEMICOLON_KEYS) {
                out.write_char(';')?;
            }
            out.write_char('\n')?;
        }

        if flags.contains(SaveFlags::PAD_SECTIONS) {
            out.write_char('\n')?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::server_document;
    use crate::types::ParseFlags;

    #[test]
    fn plain_output() {
        let doc = server_document();
        assert_eq!(
            render(&doc, SaveFlags::empty()),
            "name=demo\n[db]\nurl=postgres://localhost/app\n[server]\ndebug=true\nhost=localhost\nport=8080\n"
        );
    }

    #[test]
    fn display_matches_plain_render() {
        let doc = server_document();
        assert_eq!(doc.to_string(), render(&doc, SaveFlags::empty()));
    }

    #[test]
    fn spaced_sections_and_keys() {
        let mut doc = Document::new();
        doc.set("a", "k", "v");
        let text = render(&doc, SaveFlags::SPACE_SECTIONS | SaveFlags::SPACE_KEYS);
        assert_eq!(text, "[ a ]\nk = v\n");
    }

    #[test]
    fn tab_keys_only_in_named_sections() {
        let mut doc = Document::new();
        doc.set("", "top", "1");
        doc.set("a", "k", "v");
        let text = render(&doc, SaveFlags::TAB_KEYS);
        assert_eq!(text, "top=1\n[a]\n\tk=v\n");
    }

    #[test]
    fn semicolon_and_padding() {
        let mut doc = Document::new();
        doc.set("a", "k", "v");
        let text = render(&doc, SaveFlags::SEMICOLON_KEYS | SaveFlags::PAD_SECTIONS);
        assert_eq!(text, "\n[a]\nk=v;\n\n");
    }

    #[test]
    fn prune_drops_empty_sections_and_values() {
        let mut doc = Document::new();
        doc.set("A", "x", "");
        doc.set("A", "y", "1");
        doc.select("B");

        let pruned = render(&doc, SaveFlags::PRUNE);
        assert_eq!(pruned, "[A]\ny=1\n");

        let full = render(&doc, SaveFlags::empty());
        assert_eq!(full, "[A]\nx=\ny=1\n[B]\n");
    }

    #[test]
    fn prune_drops_section_with_only_empty_values() {
        let mut doc = Document::new();
        doc.set("A", "x", "");
        assert_eq!(render(&doc, SaveFlags::PRUNE), "");
    }

    #[test]
    fn round_trip_under_every_style() {
        let original = server_document();
        let styles = [
            SaveFlags::empty(),
            SaveFlags::all() - SaveFlags::PRUNE,
            SaveFlags::SPACE_KEYS | SaveFlags::TAB_KEYS,
        ];
        for flags in styles {
            let text = render(&original, flags);
            let mut reparsed = Document::new();
            crate::parse::parse_str(&mut reparsed, &text, ParseFlags::empty()).unwrap();
            assert_eq!(reparsed, original, "style {flags:?} produced:\n{text}");
        }
    }
}
