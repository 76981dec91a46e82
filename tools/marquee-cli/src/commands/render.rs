//! Render movies to HTML.

use anyhow::{bail, Context as _, Result};
use marquee_banner::{preview_page, render_banner};

use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let movies = ctx.load_movies(&args.movies)?;
    if movies.is_empty() {
        bail!("No movies in {}", args.movies);
    }

    let banner = &ctx.config.banner;
    let html = if args.fragment {
        movies
            .iter()
            .map(|movie| render_banner(movie, banner))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        preview_page(&movies, banner)
    };

    match args.output {
        Some(path) => {
            let path = ctx.resolve_path(&path);
            std::fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), banners = movies.len(), "wrote preview");
            ctx.output.success(&format!(
                "Rendered {} banner(s) to {}",
                movies.len(),
                path.display()
            ));
        }
        None => println!("{}", html),
    }

    Ok(())
}
