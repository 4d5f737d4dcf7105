//! Pure tag mutations on file names.
//!
//! Each function returns the new canonical file name. When nothing changes the
//! returned string equals the input, which callers treat as "nothing to do".

use super::grammar;
use super::scrub::render_canonical;
use super::tag::{Priority, TagToken};

/// Add `tag` (with or without the leading `#`) and canonicalize.
///
/// Tag text that cannot form a hashtag leaves the name untouched.
#[must_use]
pub fn add_tag(filename: &str, tag: &str) -> String {
    match TagToken::normalize(tag) {
        Ok(token) => with_tag(filename, &token),
        Err(_) => filename.to_string(),
    }
}

/// Remove every occurrence of `tag`, compared case-insensitively, and canonicalize.
#[must_use]
pub fn remove_tag(filename: &str, tag: &str) -> String {
    match TagToken::normalize(tag) {
        Ok(token) => without_tag(filename, &token),
        Err(_) => filename.to_string(),
    }
}

/// Make `#n` the priority tag, replacing any other priority.
#[must_use]
pub fn apply_priority_tag(filename: &str, priority: Priority) -> String {
    with_tag(filename, &priority.tag())
}

#[must_use]
pub fn with_tag(filename: &str, tag: &TagToken) -> String {
    let mut parsed = grammar::parse(filename);
    parsed.tags.push(tag.clone());
    render_canonical(filename, &parsed)
}

#[must_use]
pub fn without_tag(filename: &str, tag: &TagToken) -> String {
    let mut parsed = grammar::parse(filename);
    parsed.tags.retain(|t| t != tag);
    render_canonical(filename, &parsed)
}
