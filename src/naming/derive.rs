//! Names derived from a file name: the model prefix and the index copy name.

use super::grammar::{split_extension, split_tag_block};

/// Leading token of the base name, up to the first `-` or whitespace.
///
/// `alice-beach #1.jpg` and `alice #1.jpg` both yield `alice`; a name that
/// starts with `-` or whitespace has no model.
#[must_use]
pub fn model_name(filename: &str) -> Option<&str> {
    let (base, _) = split_extension(filename);
    let end = base
        .find(|c: char| c == '-' || c.is_whitespace())
        .unwrap_or(base.len());
    let model = &base[..end];
    (!model.is_empty()).then_some(model)
}

/// Name of the "index" copy of a file: `{model}-index {tags}{ext}`.
///
/// Defined only when the base name has a `-` whose left side is a non-empty
/// run without whitespace. The tag block is carried over as written.
#[must_use]
pub fn index_name(filename: &str) -> Option<String> {
    let (base, extension) = split_extension(filename);
    let (model, _) = base.split_once('-')?;
    if model.is_empty() || model.chars().any(char::is_whitespace) {
        return None;
    }
    let (_, block) = split_tag_block(base);
    let block = block.map_or("", str::trim);

    let mut name = format!("{model}-index");
    if !block.is_empty() {
        name.push(' ');
        name.push_str(block);
    }
    name.push_str(extension);
    Some(name)
}
