//! Document shell for standalone banner previews.

use marquee_catalog::Movie;

use crate::config::BannerConfig;
use crate::html::{escape_html, render_banner, render_banner_styles};

/// Script URL of the utility-class engine used by previews.
pub const UTILITY_ENGINE_SRC: &str = "https://cdn.tailwindcss.com";

/// Theme extensions the banner's classes rely on.
const UTILITY_ENGINE_THEME: &str = r#"tailwind.config = {
    theme: {
        extend: {
            colors: { gold: '#FFD700' },
            fontFamily: { brand: ['"Bebas Neue"', 'Impact', 'sans-serif'] }
        }
    }
};"#;

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Inline style blocks.
    pub styles: Vec<String>,
    /// External scripts.
    pub script_srcs: Vec<String>,
    /// Inline scripts.
    pub scripts: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add inline CSS.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    /// Add an external script.
    pub fn with_script_src(mut self, src: &str) -> Self {
        self.script_srcs.push(src.to_string());
        self
    }

    /// Add an inline script.
    pub fn with_script(mut self, script: &str) -> Self {
        self.scripts.push(script.to_string());
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::new();

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_html(name),
                escape_html(content)
            ));
            html.push('\n');
        }

        for src in &self.script_srcs {
            html.push_str(&format!(
                "<script src=\"{}\"></script>\n",
                escape_html(src)
            ));
        }

        for script in &self.scripts {
            html.push_str(&format!("<script>{}</script>\n", script));
        }

        for css in &self.styles {
            html.push_str(&format!("<style>{}</style>\n", css));
        }

        html
    }
}

/// Page shell wrapped around rendered banners.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Include doctype declaration.
    pub doctype: bool,
    /// Head content.
    pub head: HeadContent,
    /// HTML before the banners.
    pub body_start: String,
    /// HTML after the banners.
    pub body_end: String,
}

impl Shell {
    pub fn new(head: HeadContent) -> Self {
        Self {
            doctype: true,
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Everything up to the first banner.
    pub fn render_opening(&self) -> String {
        let mut html = String::new();

        if self.doctype {
            html.push_str("<!DOCTYPE html>\n");
        }

        html.push_str("<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);

        html
    }

    /// Everything after the last banner.
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }

    /// Full document around `body`.
    pub fn wrap(&self, body: &str) -> String {
        format!("{}{}{}", self.render_opening(), body, self.render_closing())
    }
}

/// Shell for banner previews: dark page, utility-class engine, keyframes.
pub fn preview_shell(title: &str, config: &BannerConfig) -> Shell {
    let head = HeadContent::new(title)
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_script_src(UTILITY_ENGINE_SRC)
        .with_script(UTILITY_ENGINE_THEME)
        .with_style(&render_banner_styles(config));

    Shell::new(head).with_body_start(
        "<body class=\"bg-black text-white min-h-screen\">\n<main class=\"max-w-5xl mx-auto py-6\">\n",
    )
}

/// Standalone document with one banner per movie.
pub fn preview_page(movies: &[Movie], config: &BannerConfig) -> String {
    let title = match movies {
        [only] => format!("{} | Marquee preview", only.title),
        _ => format!("{} featured titles | Marquee preview", movies.len()),
    };

    let banners: String = movies
        .iter()
        .map(|movie| {
            let mut html = render_banner(movie, config);
            html.push('\n');
            html
        })
        .collect();

    preview_shell(&title, config).wrap(&banners)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_render_escapes() {
        let head = HeadContent::new("A & B").with_meta("description", "\"quoted\"");
        let html = head.render();
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains(r#"content="&quot;quoted&quot;""#));
    }

    #[test]
    fn test_shell_wraps_body() {
        let shell = Shell::new(HeadContent::new("T"));
        let page = shell.wrap("<p>x</p>");
        assert!(page.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(page.contains("<main>\n<p>x</p></main>"));
        assert!(page.ends_with("</html>"));
    }

    #[test]
    fn test_preview_page_contains_each_banner() {
        let movies = vec![
            Movie::new("m1", "First", "a.jpg", "Action"),
            Movie::new("m2", "Second", "b.jpg", "Drama"),
        ];
        let page = preview_page(&movies, &BannerConfig::default());

        assert!(page.contains("<title>2 featured titles | Marquee preview</title>"));
        assert_eq!(page.matches(r#"data-section="banner""#).count(), 2);
        assert!(page.contains(r#"data-movie-id="m2""#));
        assert!(page.contains("@keyframes marquee-stage-in"));
        assert!(page.contains(UTILITY_ENGINE_SRC));
        assert!(page.contains("gold: '#FFD700'"));
    }

    #[test]
    fn test_single_movie_title() {
        let page = preview_page(
            &[Movie::new("m1", "Solo", "a.jpg", "Action")],
            &BannerConfig::default(),
        );
        assert!(page.contains("<title>Solo | Marquee preview</title>"));
    }
}
