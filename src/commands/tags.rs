//! Tags command - tags in use in the working folder

use serde::Serialize;

use super::Context;
use crate::{Result, listing, output};

#[derive(Serialize)]
struct TagUsage {
    tag: String,
    count: usize,
}

#[derive(Serialize)]
struct TagReport {
    favorites: Vec<String>,
    tags: Vec<TagUsage>,
}

/// Show the configured favorite tags and every tag used in the folder
///
/// # Errors
/// Returns an error if the folder cannot be read.
pub fn execute(ctx: &Context) -> Result<()> {
    let names = listing::read_folder(&ctx.working_dir, &ctx.config.listed_extensions())?;
    let counts = listing::tag_counts(names.iter().map(String::as_str));
    let favorites: Vec<String> = ctx.config.favorite_tags().into_iter().map(String::from).collect();

    if ctx.json {
        let report = TagReport {
            favorites,
            tags: counts
                .into_iter()
                .map(|(tag, count)| TagUsage { tag: tag.into(), count })
                .collect(),
        };
        return output::print_json(&report);
    }

    if !favorites.is_empty() && !ctx.quiet {
        println!("Favorite tags: {}", favorites.join(" "));
        println!();
    }

    if counts.is_empty() {
        if !ctx.quiet {
            println!("No tags found in {}.", ctx.working_dir.display());
        }
        return Ok(());
    }

    if !ctx.quiet {
        println!("Tags in {}:", ctx.working_dir.display());
    }
    for (tag, count) in &counts {
        println!("{}", output::tag_with_count(tag.as_str(), *count, ctx.quiet));
    }
    Ok(())
}
