use std::collections::{BTreeSet, HashSet};

use crate::models::Movie;

/// Set of trimmed, case-preserved genre tokens
pub type GenreSet = HashSet<String>;

/// Iterate the trimmed, non-empty pieces of a comma-separated genre string
#[inline]
pub fn split_genres(genres: &str) -> impl Iterator<Item = &str> {
    genres
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Parse a comma-separated genre string into a token set
///
/// Never fails: an empty or malformed string yields an empty set.
///
/// ```
/// use movie_rec_service::core::tokens;
///
/// assert_eq!(tokens("Action , Comedy "), tokens("Action,Comedy"));
/// assert!(tokens("").is_empty());
/// ```
pub fn tokens(genres: &str) -> GenreSet {
    split_genres(genres).map(str::to_owned).collect()
}

/// Build a token set from an already-split list, trimming each entry
pub fn tokens_from_list<I, S>(genres: I) -> GenreSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    genres
        .into_iter()
        .filter_map(|g| {
            let token = g.as_ref().trim();
            (!token.is_empty()).then(|| token.to_owned())
        })
        .collect()
}

/// Whether a genre string shares at least one token with the reference set
#[inline]
pub fn shares_genre(genres: &str, reference: &GenreSet) -> bool {
    split_genres(genres).any(|token| reference.contains(token))
}

/// Distinct genre tokens across a catalog, sorted
pub fn catalog_genres(movies: &[Movie]) -> Vec<String> {
    movies
        .iter()
        .flat_map(|m| split_genres(&m.genres))
        .map(str::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
