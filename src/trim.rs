/// Characters stripped from line and token boundaries unless told otherwise.
pub const DEFAULT_TRIM_CHARS: &str = "\t\u{0B}\u{0C}; ";

/// Characters stripped around a section name inside its header line.
pub const SECTION_TRIM_CHARS: &str = "[] ";

/// Remove the longest prefix and suffix made only of characters in `chars`.
pub fn trim<'a>(s: &'a str, chars: &str) -> &'a str {
    s.trim_matches(|c: char| chars.contains(c))
}

pub fn trim_start<'a>(s: &'a str, chars: &str) -> &'a str {
    s.trim_start_matches(|c: char| chars.contains(c))
}

pub fn trim_end<'a>(s: &'a str, chars: &str) -> &'a str {
    s.trim_end_matches(|c: char| chars.contains(c))
}
