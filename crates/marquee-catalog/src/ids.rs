//! Newtype identifier for featured titles.
//!
//! The id is opaque: the banner compares it for equality to decide whether
//! a new title is being featured, and never parses it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a movie or show.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    /// Create a new ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MovieId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for MovieId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_str() {
        let id: MovieId = "m-456".into();
        assert_eq!(id.as_str(), "m-456");
        assert_eq!(format!("{}", id), "m-456");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(MovieId::new("same"), MovieId::new("same"));
        assert_ne!(MovieId::new("same"), MovieId::new("different"));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&MovieId::new("m1")).unwrap();
        assert_eq!(json, "\"m1\"");
        let back: MovieId = serde_json::from_str("\"m2\"").unwrap();
        assert_eq!(back.as_str(), "m2");
    }
}
