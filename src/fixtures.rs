#[cfg(test)]
pub mod test {
    use crate::document::Document;

    /// Hand-edited style file exercising comments, spacing, and a
    /// section name with an interior space.
    pub const SAMPLE_INI: &str = "\
# Demo configuration
name = demo

[server]
host=localhost   # bind address
port = 8080
// toggled by ops
debug=true

[ my db ]
\turl = postgres://localhost/app
";

    /// Three sections: default, `server`, `db`. Cursor on the default section.
    pub fn server_document() -> Document {
        let mut doc = Document::new();
        doc.set("", "name", "demo");
        doc.set("server", "host", "localhost");
        doc.set("server", "port", "8080");
        doc.set("server", "debug", "true");
        doc.set("db", "url", "postgres://localhost/app");
        doc.select("");
        doc
    }

    #[test]
    fn server_document_shape() {
        let doc = server_document();
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.current(), Some(""));
        assert_eq!(doc.section("server").map(|s| s.len()), Some(3));
    }
}
