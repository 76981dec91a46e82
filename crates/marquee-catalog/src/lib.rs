//! Movie records for the Marquee featured banner.
//!
//! The banner never owns or mutates catalog data. This crate only describes
//! the shape of a featured title as the browse screen hands it over:
//!
//! - **MovieId**: opaque identity, used as the animation key
//! - **Movie**: required display fields plus independently optional ones
//! - **Loading**: JSON records (single object or array) from strings or files
//!
//! # Example
//!
//! ```rust
//! use marquee_catalog::Movie;
//!
//! let movie = Movie::new("m1", "Test Film", "a.jpg", "Action")
//!     .with_rating("8.5")
//!     .with_year("2023");
//!
//! assert_eq!(movie.backdrop_url(), "a.jpg");
//! assert_eq!(movie.duration(), None);
//! ```

pub mod error;
pub mod ids;
pub mod movie;

pub use error::CatalogError;
pub use ids::MovieId;
pub use movie::{load_movies, movies_from_json, Movie};
