use serde::{Deserialize, Serialize};
use validator::Validate;

/// Store-assigned movie identifier
pub type MovieId = i64;

/// Movie record as held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Comma-separated genre names, e.g. "Action,Comedy"
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub description: String,
}

impl Movie {
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        genres: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            genres: genres.into(),
            description: description.into(),
        }
    }
}

/// Movie record before the store has assigned an identifier
///
/// This is the shape of each entry in the seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewMovie {
    #[validate(length(min = 1))]
    pub title: String,
    pub genres: String,
    pub description: String,
}

impl NewMovie {
    pub fn new(
        title: impl Into<String>,
        genres: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            genres: genres.into(),
            description: description.into(),
        }
    }

    pub fn with_id(self, id: MovieId) -> Movie {
        Movie {
            id,
            title: self.title,
            genres: self.genres,
            description: self.description,
        }
    }
}

/// Resolved recommendation input
///
/// Built from a [`RecommendationRequest`](crate::models::RecommendationRequest);
/// exactly one branch applies per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationQuery {
    /// Recommend movies sharing a genre with this movie, excluding itself
    FavoriteMovie(MovieId),
    /// Recommend movies carrying any of these genre tokens
    Genres(Vec<String>),
    /// Nothing to base a recommendation on
    Insufficient,
}
