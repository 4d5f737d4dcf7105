//! Folder listing: which files the browser shows and how search narrows them.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::naming::{TagToken, grammar};

/// Whether `name` ends with one of `extensions` (lowercase, with leading `.`),
/// ignoring case.
#[must_use]
pub fn has_listed_extension(name: &str, extensions: &BTreeSet<String>) -> bool {
    let lower = name.to_lowercase();
    extensions.iter().any(|ext| lower.ends_with(ext.as_str()))
}

/// Whether every search term occurs in `name`, ignoring case.
///
/// An empty term list matches everything.
#[must_use]
pub fn matches_terms(name: &str, terms: &[String]) -> bool {
    let lower = name.to_lowercase();
    terms.iter().all(|term| lower.contains(&term.to_lowercase()))
}

/// Split a search query into whitespace-separated terms.
#[must_use]
pub fn query_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Names from `names` that have a listed extension and match all `terms`, sorted.
#[must_use]
pub fn filter_names<I>(names: I, extensions: &BTreeSet<String>, terms: &[String]) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut listed: Vec<String> = names
        .into_iter()
        .filter(|n| has_listed_extension(n, extensions) && matches_terms(n, terms))
        .collect();
    listed.sort();
    listed
}

/// Read the regular files of `dir` whose names have a listed extension, sorted.
///
/// Names that are not valid UTF-8 are skipped.
///
/// # Errors
/// Returns the I/O error if the directory cannot be read.
pub fn read_folder(dir: &Path, extensions: &BTreeSet<String>) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => debug!(name = ?raw, "skipping non UTF-8 file name"),
        }
    }
    Ok(filter_names(names, extensions, &[]))
}

/// How many of `names` carry each tag. Priority tags are counted too.
#[must_use]
pub fn tag_counts<'a, I>(names: I) -> BTreeMap<TagToken, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = BTreeMap::new();
    for name in names {
        let tags: BTreeSet<TagToken> = grammar::parse(name).tags.into_iter().collect();
        for tag in tags {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }
    counts
}
