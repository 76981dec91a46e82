//! # Marquee Banner
//!
//! The featured-title hero banner.
//!
//! A [`BannerView`] is derived from a [`Movie`](marquee_catalog::Movie) and
//! drawn by two renderers:
//!
//! - [`render_banner`] emits an HTML fragment for server rendering and
//!   static previews.
//! - [`Banner`] is a Leptos component that crossfades between titles.
//!
//! ## Example
//!
//! ```rust
//! use marquee_banner::{render_banner, BannerConfig};
//! use marquee_catalog::Movie;
//!
//! let movie = Movie::new("m1", "Test Film", "a.jpg", "Action").with_year("2023");
//! let html = render_banner(&movie, &BannerConfig::default());
//! assert!(html.contains("Test Film"));
//! ```

mod component;
pub mod config;
pub mod error;
pub mod html;
pub mod icons;
pub mod shell;
pub mod style;
pub mod view;

pub use component::{Banner, BannerProps};
pub use config::{BannerConfig, CrossfadeConfig, Labels, StaggerConfig};
pub use error::BannerError;
pub use html::{escape_html, render_banner, render_banner_styles, render_view};
pub use shell::{preview_page, HeadContent, Shell};
pub use view::{BannerView, Block, MetaEntry, MetaField};
