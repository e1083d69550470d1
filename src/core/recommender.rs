use crate::core::genres::{shares_genre, tokens, tokens_from_list, GenreSet};
use crate::models::{Movie, MovieId, RecommendationQuery};
use crate::services::{MovieStore, StoreError};

/// Recommend movies that share at least one genre with the query's reference set
///
/// # Branches
/// 1. `FavoriteMovie(id)`: reference set comes from the favorite's genres and
///    the favorite itself is excluded. A dangling id yields no results.
/// 2. `Genres(list)`: reference set is the trimmed list; nothing is excluded.
/// 3. `Insufficient`: no results.
///
/// Matches keep the store's enumeration order. Store failures propagate
/// unchanged; the store is never written to.
pub async fn recommend(
    store: &dyn MovieStore,
    query: &RecommendationQuery,
) -> Result<Vec<Movie>, StoreError> {
    match query {
        RecommendationQuery::FavoriteMovie(id) => {
            let Some(favorite) = store.get_by_id(*id).await? else {
                tracing::debug!("Favorite movie {} not found, nothing to recommend", id);
                return Ok(Vec::new());
            };

            let reference = tokens(&favorite.genres);
            let candidates = store.list_all().await?;

            Ok(select_matches(&reference, candidates, Some(favorite.id)))
        }
        RecommendationQuery::Genres(genres) => {
            let reference = tokens_from_list(genres);
            if reference.is_empty() {
                return Ok(Vec::new());
            }

            let candidates = store.list_all().await?;

            Ok(select_matches(&reference, candidates, None))
        }
        RecommendationQuery::Insufficient => Ok(Vec::new()),
    }
}

/// Keep candidates whose genres intersect the reference set
///
/// `exclude` drops one movie by id regardless of its genres.
pub fn select_matches(
    reference: &GenreSet,
    candidates: Vec<Movie>,
    exclude: Option<MovieId>,
) -> Vec<Movie> {
    if reference.is_empty() {
        return Vec::new();
    }

    candidates
        .into_iter()
        .filter(|movie| Some(movie.id) != exclude)
        .filter(|movie| shares_genre(&movie.genres, reference))
        .collect()
}
