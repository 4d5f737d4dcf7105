//! Filename grammar: `root [tag block] [extension]`.
//!
//! A file name such as `shoot #2 #5 #landscape.jpg` is read as
//!
//! - extension: the last `.`-delimited suffix (`.jpg`), empty when absent;
//! - tag block: the first run of `#word` tokens that reaches the end of the
//!   remaining text (`#2 #5 #landscape`), optionally preceded by whitespace;
//! - root: everything before the tag block, without trailing whitespace.
//!
//! Rendering writes `root + " " + tags + extension` with tags concatenated
//! (`shoot #2#5#landscape.jpg`), or `root + extension` when there are no tags.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::tag::TagToken;

static TAG_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(.*?)\s*((?:#\w+\s*)+)$").expect("tag block regex is valid")
});

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("tag regex is valid"));

/// A file name split into its grammatical parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ParsedName {
    /// Text before the tag block, never ending in whitespace
    pub root: String,
    /// Tags in the order they were written
    pub tags: Vec<TagToken>,
    /// Extension including the leading `.`, or empty
    pub extension: String,
}

impl ParsedName {
    #[must_use]
    pub fn parse(filename: &str) -> Self {
        parse(filename)
    }

    #[must_use]
    pub fn render(&self) -> String {
        render(self)
    }

    #[must_use]
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    /// Tags concatenated without separators, e.g. `#5#landscape`
    #[must_use]
    pub fn tag_string(&self) -> String {
        self.tags.iter().map(TagToken::as_str).collect()
    }

    #[must_use]
    pub fn contains(&self, tag: &TagToken) -> bool {
        self.tags.contains(tag)
    }
}

impl fmt::Display for ParsedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

/// Split a file name into base text and extension.
///
/// The extension starts at the last `.`; dots that only lead the name (as in
/// `.hidden`) do not start an extension.
#[must_use]
pub fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) if filename[..idx].bytes().any(|b| b != b'.') => filename.split_at(idx),
        _ => (filename, ""),
    }
}

/// Split base text (no extension) into root and the raw tag block.
///
/// The returned root has trailing whitespace removed. The block, when present,
/// is the original text starting at its first `#`, including any whitespace
/// between or after the tokens.
#[must_use]
pub fn split_tag_block(base: &str) -> (&str, Option<&str>) {
    match TAG_BLOCK_RE.captures(base) {
        Some(caps) => {
            let root = caps.get(1).map_or("", |m| m.as_str());
            let block = caps.get(2).map(|m| m.as_str());
            (root.trim_end(), block)
        }
        None => (base.trim_end(), None),
    }
}

/// Every `#word` token of a tag block, lowercased, in written order.
#[must_use]
pub fn tokens(block: &str) -> Vec<TagToken> {
    TAG_RE
        .find_iter(block)
        .map(|m| TagToken::from_matched(m.as_str()))
        .collect()
}

/// Parse a file name. Never fails: a name without a tag block has no tags.
#[must_use]
pub fn parse(filename: &str) -> ParsedName {
    let (base, extension) = split_extension(filename);
    let (root, block) = split_tag_block(base);
    ParsedName {
        root: root.to_string(),
        tags: block.map(tokens).unwrap_or_default(),
        extension: extension.to_string(),
    }
}

/// Render a parsed name back into a file name.
#[must_use]
pub fn render(name: &ParsedName) -> String {
    let root = name.root.trim_end();
    let mut out = String::with_capacity(root.len() + name.extension.len() + 16);
    out.push_str(root);
    if name.has_tags() {
        if !root.is_empty() {
            out.push(' ');
        }
        for tag in &name.tags {
            out.push_str(tag.as_str());
        }
    }
    out.push_str(&name.extension);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<TagToken> {
        list.iter().map(|t| TagToken::new(t).unwrap()).collect()
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("photo.jpg"), ("photo", ".jpg"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension("noext"), ("noext", ""));
        assert_eq!(split_extension(".hidden"), (".hidden", ""));
        assert_eq!(split_extension("..jpg"), ("..jpg", ""));
        assert_eq!(split_extension("trailing."), ("trailing", "."));
    }

    #[test]
    fn test_parse_without_tags() {
        let parsed = parse("holiday photo.jpg");
        assert_eq!(parsed.root, "holiday photo");
        assert!(parsed.tags.is_empty());
        assert_eq!(parsed.extension, ".jpg");
    }

    #[test]
    fn test_parse_spaced_tags() {
        let parsed = parse("shoot #2 #5 #Landscape.jpg");
        assert_eq!(parsed.root, "shoot");
        assert_eq!(parsed.tags, tags(&["#2", "#5", "#landscape"]));
        assert_eq!(parsed.extension, ".jpg");
    }

    #[test]
    fn test_parse_concatenated_tags() {
        let parsed = parse("alice-beach #1#sea.png");
        assert_eq!(parsed.root, "alice-beach");
        assert_eq!(parsed.tags, tags(&["#1", "#sea"]));
    }

    #[test]
    fn test_tag_block_must_reach_end_of_base() {
        // "#draft v2" is not a tag block: "v2" follows it
        let parsed = parse("notes #draft v2 #final.txt");
        assert_eq!(parsed.root, "notes #draft v2");
        assert_eq!(parsed.tags, tags(&["#final"]));
    }

    #[test]
    fn test_hash_without_word_is_root_text() {
        let parsed = parse("C# tips #code.md");
        assert_eq!(parsed.root, "C# tips");
        assert_eq!(parsed.tags, tags(&["#code"]));

        let parsed = parse("photo #.jpg");
        assert_eq!(parsed.root, "photo #");
        assert!(parsed.tags.is_empty());
    }

    #[test]
    fn test_root_trailing_whitespace_is_trimmed() {
        let parsed = parse("photo   .jpg");
        assert_eq!(parsed.root, "photo");
        assert_eq!(render(&parsed), "photo.jpg");

        let parsed = parse("photo \t #a  .jpg");
        assert_eq!(parsed.root, "photo");
        assert_eq!(parsed.tags, tags(&["#a"]));
    }

    #[test]
    fn test_tags_only_name() {
        let parsed = parse("#a #b.jpg");
        assert_eq!(parsed.root, "");
        assert_eq!(parsed.tags, tags(&["#a", "#b"]));
        assert_eq!(render(&parsed), "#a#b.jpg");
    }

    #[test]
    fn test_render_uses_single_space() {
        let parsed = ParsedName {
            root: "shoot".into(),
            tags: tags(&["#5", "#landscape"]),
            extension: ".jpg".into(),
        };
        assert_eq!(render(&parsed), "shoot #5#landscape.jpg");
        assert_eq!(parsed.to_string(), "shoot #5#landscape.jpg");
    }

    #[test]
    fn test_split_tag_block_keeps_raw_block() {
        assert_eq!(split_tag_block("alice-beach #1 #sea "), ("alice-beach", Some("#1 #sea ")));
        assert_eq!(split_tag_block("plain name  "), ("plain name", None));
    }

    #[test]
    fn test_parse_render_parse_is_stable() {
        for name in ["a #x.jpg", "b.png", "#only.gif", "mixed Case #B#a.webp", "x #1 #2"] {
            let parsed = parse(name);
            assert_eq!(parse(&render(&parsed)), parsed, "{name}");
        }
    }
}
