//! Canonical tag ordering ("scrub").
//!
//! The canonical tag sequence is the last priority tag written (if any)
//! followed by every other tag, deduplicated and sorted. Earlier priority tags
//! are dropped, so appending `#n` to a name always makes `#n` the priority.

use std::collections::BTreeSet;

use super::grammar::{self, ParsedName};
use super::tag::TagToken;

/// Canonical order of a tag sequence.
#[must_use]
pub fn canonical_tags(tags: &[TagToken]) -> Vec<TagToken> {
    let mut priority: Option<&TagToken> = None;
    let mut others: BTreeSet<&TagToken> = BTreeSet::new();
    for tag in tags {
        if tag.is_priority() {
            priority = Some(tag);
        } else {
            others.insert(tag);
        }
    }
    priority.into_iter().chain(others).cloned().collect()
}

/// Canonical form of a parsed name. Idempotent.
#[must_use]
pub fn canonicalize(name: &ParsedName) -> ParsedName {
    ParsedName {
        root: name.root.trim_end().to_string(),
        tags: canonical_tags(&name.tags),
        extension: name.extension.clone(),
    }
}

#[must_use]
pub fn is_canonical(name: &ParsedName) -> bool {
    canonicalize(name) == *name
}

/// Rewrite a file name into canonical form.
///
/// Returns the input unchanged when it is already canonical.
#[must_use]
pub fn scrub(filename: &str) -> String {
    render_canonical(filename, &grammar::parse(filename))
}

/// Render the canonical form of `name`, which was parsed from `filename` and
/// possibly edited.
///
/// A result with neither root nor tags would be a bare extension (a hidden
/// file that parses back differently), so `filename` is kept instead.
pub(crate) fn render_canonical(filename: &str, name: &ParsedName) -> String {
    let canonical = canonicalize(name);
    if canonical.root.is_empty() && !canonical.has_tags() {
        return filename.to_string();
    }
    grammar::render(&canonical)
}
