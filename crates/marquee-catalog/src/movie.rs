//! The featured movie record.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CatalogError;
use crate::ids::MovieId;

/// A movie or show as supplied by the browse screen.
///
/// Required fields are always rendered. Every optional field controls its
/// own fragment of the banner; an absent field removes the fragment rather
/// than leaving a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Identity, used only as the animation key.
    pub id: MovieId,
    /// Display title.
    pub title: String,
    /// Poster/thumbnail image URL.
    pub thumbnail: String,
    /// Category label (genre, collection name, ...).
    pub category: String,
    /// Wide banner artwork, preferred over the thumbnail when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_banner: Option<String>,
    /// Quality label such as "4K" or "HDR".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_quality: Option<String>,
    /// Score, accepted as text or number.
    #[serde(
        default,
        deserialize_with = "text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<String>,
    /// Release year, accepted as text or number.
    #[serde(
        default,
        deserialize_with = "text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
    /// Runtime label such as "2h 15m".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Audio language label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_language: Option<String>,
    /// Synopsis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Movie {
    /// Create a movie with only the required display fields.
    pub fn new(
        id: impl Into<MovieId>,
        title: impl Into<String>,
        thumbnail: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            thumbnail: thumbnail.into(),
            category: category.into(),
            detail_banner: None,
            video_quality: None,
            rating: None,
            year: None,
            duration: None,
            audio_language: None,
            description: None,
        }
    }

    pub fn with_detail_banner(mut self, url: impl Into<String>) -> Self {
        self.detail_banner = Some(url.into());
        self
    }

    pub fn with_video_quality(mut self, quality: impl Into<String>) -> Self {
        self.video_quality = Some(quality.into());
        self
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_audio_language(mut self, language: impl Into<String>) -> Self {
        self.audio_language = Some(language.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn detail_banner(&self) -> Option<&str> {
        present(&self.detail_banner)
    }

    pub fn video_quality(&self) -> Option<&str> {
        present(&self.video_quality)
    }

    pub fn rating(&self) -> Option<&str> {
        present(&self.rating)
    }

    pub fn year(&self) -> Option<&str> {
        present(&self.year)
    }

    pub fn duration(&self) -> Option<&str> {
        present(&self.duration)
    }

    pub fn audio_language(&self) -> Option<&str> {
        present(&self.audio_language)
    }

    pub fn description(&self) -> Option<&str> {
        present(&self.description)
    }

    /// Image shown behind the banner: the detail banner when set, otherwise
    /// the thumbnail. A missing thumbnail is passed through as-is.
    pub fn backdrop_url(&self) -> &str {
        self.detail_banner().unwrap_or(&self.thumbnail)
    }

    /// Check that the required display fields are non-empty.
    ///
    /// Rendering never calls this; tools use it to flag bad input files.
    pub fn check_required(&self) -> Result<(), CatalogError> {
        let required = [
            ("id", self.id.as_str()),
            ("title", self.title.as_str()),
            ("thumbnail", self.thumbnail.as_str()),
            ("category", self.category.as_str()),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(CatalogError::MissingField(*name)),
            None => Ok(()),
        }
    }

    /// Parse a single movie from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Parse either a single movie object or an array of movies.
pub fn movies_from_json(json: &str) -> Result<Vec<Movie>, CatalogError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<Movie>),
        One(Box<Movie>),
    }

    let movies = match serde_json::from_str(json)? {
        OneOrMany::Many(movies) => movies,
        OneOrMany::One(movie) => vec![*movie],
    };
    tracing::debug!(count = movies.len(), "parsed movie records");
    Ok(movies)
}

/// Read movie records from a JSON file.
pub fn load_movies(path: impl AsRef<Path>) -> Result<Vec<Movie>, CatalogError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    movies_from_json(&content)
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.trim().is_empty())
}

/// Accept `"8.5"`, `8.5`, `2023` or `"2023"`. A numeric zero counts as
/// absent, the same as an empty string.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(
        match Option::<TextOrNumber>::deserialize(deserializer)? {
            Some(TextOrNumber::Text(text)) => Some(text),
            Some(TextOrNumber::Number(n)) if n.as_f64() == Some(0.0) => None,
            Some(TextOrNumber::Number(n)) => Some(n.to_string()),
            None => None,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Movie {
        Movie::new("m1", "Test Film", "a.jpg", "Action")
    }

    #[test]
    fn test_backdrop_prefers_detail_banner() {
        assert_eq!(sample().backdrop_url(), "a.jpg");
        assert_eq!(sample().with_detail_banner("b.jpg").backdrop_url(), "b.jpg");
    }

    #[test]
    fn test_empty_detail_banner_falls_back_to_thumbnail() {
        let movie = sample().with_detail_banner("");
        assert_eq!(movie.backdrop_url(), "a.jpg");
    }

    #[test]
    fn test_blank_optional_fields_are_absent() {
        let movie = sample().with_duration("   ").with_description("");
        assert_eq!(movie.duration(), None);
        assert_eq!(movie.description(), None);
    }

    #[test]
    fn test_parse_mixed_number_and_text_fields() {
        let movie = Movie::from_json(
            r#"{"id":"m1","title":"Test Film","thumbnail":"a.jpg","category":"Action","rating":"8.5","year":2023}"#,
        )
        .unwrap();

        assert_eq!(movie.rating(), Some("8.5"));
        assert_eq!(movie.year(), Some("2023"));
        assert_eq!(movie.detail_banner(), None);
        assert_eq!(movie.video_quality(), None);
    }

    #[test]
    fn test_parse_camel_case_fields() {
        let movie = Movie::from_json(
            r#"{"id":"m2","title":"T","thumbnail":"a.jpg","category":"Drama",
                "detailBanner":"b.jpg","videoQuality":"4K","audioLanguage":"English","rating":7.25}"#,
        )
        .unwrap();

        assert_eq!(movie.backdrop_url(), "b.jpg");
        assert_eq!(movie.video_quality(), Some("4K"));
        assert_eq!(movie.audio_language(), Some("English"));
        assert_eq!(movie.rating(), Some("7.25"));
    }

    #[test]
    fn test_numeric_zero_is_absent() {
        let movie = Movie::from_json(
            r#"{"id":"m3","title":"T","thumbnail":"a.jpg","category":"C","rating":0,"year":null}"#,
        )
        .unwrap();
        assert_eq!(movie.rating(), None);
        assert_eq!(movie.year(), None);
    }

    #[test]
    fn test_movies_from_json_accepts_object_or_array() {
        let one = movies_from_json(r#"{"id":"a","title":"A","thumbnail":"a.jpg","category":"C"}"#)
            .unwrap();
        assert_eq!(one.len(), 1);

        let many = movies_from_json(
            r#"[{"id":"a","title":"A","thumbnail":"a.jpg","category":"C"},
                {"id":"b","title":"B","thumbnail":"b.jpg","category":"C"}]"#,
        )
        .unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].id.as_str(), "b");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = movies_from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_check_required() {
        assert!(sample().check_required().is_ok());

        let mut movie = sample();
        movie.title = String::new();
        assert!(matches!(
            movie.check_required(),
            Err(CatalogError::MissingField("title"))
        ));
    }

    #[test]
    fn test_load_movies_missing_file() {
        let err = load_movies("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let json = serde_json::to_string(&sample().with_year("2023")).unwrap();
        assert!(json.contains(r#""year":"2023""#));
        assert!(!json.contains("detailBanner"));
        assert!(!json.contains("rating"));
    }
}
