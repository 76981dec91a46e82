//! Show the banner view derived from each movie.

use anyhow::Result;
use marquee_banner::view::{Badge, MetaEntry};
use marquee_banner::BannerView;

use super::InspectArgs;
use crate::context::Context;

/// Run the inspect command.
pub fn run(args: InspectArgs, ctx: &Context) -> Result<()> {
    let movies = ctx.load_movies(&args.movies)?;
    let views: Vec<BannerView> = movies
        .iter()
        .map(|movie| BannerView::from_movie(movie, &ctx.config.banner))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&views);
        return Ok(());
    }

    for view in &views {
        ctx.output.header(&view.title);
        ctx.output.kv("key", view.key.as_str());
        ctx.output.kv("image", &view.image_src);
        ctx.output.kv("badges", &badge_line(&view.badges));
        ctx.output.kv("metadata", &metadata_line(&view.metadata));
        ctx.output.kv(
            "description",
            view.description.as_deref().unwrap_or("(none)"),
        );
        let blocks: Vec<&str> = view.blocks().map(|block| block.as_str()).collect();
        ctx.output.kv("blocks", &blocks.join(", "));
    }

    Ok(())
}

fn badge_line(badges: &[Badge]) -> String {
    badges
        .iter()
        .map(|badge| badge.label.as_str())
        .collect::<Vec<_>>()
        .join(" · ")
}

/// The metadata row as shown, with `|` for separators.
fn metadata_line(row: &[MetaEntry]) -> String {
    if row.is_empty() {
        return "(none)".to_string();
    }
    row.iter()
        .map(|entry| match entry {
            MetaEntry::Item { text, .. } => text.as_str(),
            MetaEntry::Separator => "|",
        })
        .collect::<Vec<_>>()
        .join(" ")
}
