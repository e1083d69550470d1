use serde::{Deserialize, Serialize};
use crate::models::domain::{MovieId, RecommendationQuery};

/// Request to recommend movies
///
/// Both fields are optional and neither being set is a valid request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    #[serde(alias = "favoriteMovieId", rename = "favorite_movie_id")]
    pub favorite_movie_id: Option<MovieId>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
}

impl RecommendationRequest {
    pub fn for_favorite(id: MovieId) -> Self {
        Self {
            favorite_movie_id: Some(id),
            genres: None,
        }
    }

    pub fn for_genres<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            favorite_movie_id: None,
            genres: Some(genres.into_iter().map(Into::into).collect()),
        }
    }

    /// Resolve which recommendation branch applies
    ///
    /// A favorite id of zero counts as absent. A favorite id wins over genres.
    pub fn into_query(self) -> RecommendationQuery {
        match (self.favorite_movie_id, self.genres) {
            (Some(id), _) if id != 0 => RecommendationQuery::FavoriteMovie(id),
            (_, Some(genres)) if !genres.is_empty() => RecommendationQuery::Genres(genres),
            _ => RecommendationQuery::Insufficient,
        }
    }
}

impl From<RecommendationRequest> for RecommendationQuery {
    fn from(request: RecommendationRequest) -> Self {
        request.into_query()
    }
}
