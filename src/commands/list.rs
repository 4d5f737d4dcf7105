//! List command - files of the working folder

use colored::Colorize;

use super::Context;
use crate::naming::grammar;
use crate::{Result, listing, output};

/// List the working folder, keeping files whose names contain all `terms`
///
/// # Errors
/// Returns an error if the folder cannot be read.
pub fn execute(ctx: &Context, terms: &[String]) -> Result<()> {
    let names = listing::read_folder(&ctx.working_dir, &ctx.config.listed_extensions())?;
    let terms: Vec<String> = terms.iter().flat_map(|t| listing::query_terms(t)).collect();
    let names: Vec<String> = names.into_iter().filter(|n| listing::matches_terms(n, &terms)).collect();

    if ctx.json {
        return output::print_json(&names);
    }

    if names.is_empty() {
        if !ctx.quiet {
            println!("No matching files in {}.", ctx.working_dir.display());
        }
        return Ok(());
    }

    for name in &names {
        if ctx.quiet {
            println!("{name}");
            continue;
        }
        println!("  {}", highlight_tags(name));
    }
    if !ctx.quiet {
        println!("\n{} file(s)", names.len());
    }
    Ok(())
}

/// The file name with its tag block colored
fn highlight_tags(name: &str) -> String {
    let (base, extension) = grammar::split_extension(name);
    match grammar::split_tag_block(base) {
        (_, Some(block)) => {
            let head = &base[..base.len() - block.len()];
            format!("{head}{}{extension}", block.cyan())
        }
        (_, None) => name.to_string(),
    }
}
