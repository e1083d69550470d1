use std::path::Path;
use validator::Validate;

use crate::models::{Movie, NewMovie};
use crate::services::store::{MovieStore, StoreError};

/// Read and validate a JSON seed file
///
/// The file holds an array of `{title, genres, description}` records.
pub async fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<Vec<NewMovie>, StoreError> {
    let path = path.as_ref();
    let raw = tokio::fs::read(path).await?;
    let movies = parse_seed(&raw)?;

    tracing::debug!("Read {} seed records from {}", movies.len(), path.display());

    Ok(movies)
}

/// Parse and validate seed records from raw JSON
pub fn parse_seed(raw: &[u8]) -> Result<Vec<NewMovie>, StoreError> {
    let movies: Vec<NewMovie> = serde_json::from_slice(raw)?;
    for movie in &movies {
        movie.validate()?;
    }
    Ok(movies)
}

/// Insert every record from the seed file
pub async fn seed_from_file<P: AsRef<Path>>(
    store: &dyn MovieStore,
    path: P,
) -> Result<Vec<Movie>, StoreError> {
    let movies = load_seed_file(path).await?;
    store.add_many(movies).await
}

/// Seed the store only when it holds no movies yet
///
/// Returns the number of inserted movies.
pub async fn seed_if_empty<P: AsRef<Path>>(
    store: &dyn MovieStore,
    path: P,
) -> Result<usize, StoreError> {
    let existing = store.count().await?;
    if existing > 0 {
        tracing::info!("Store already holds {} movies, skipping seed", existing);
        return Ok(0);
    }

    let inserted = seed_from_file(store, path).await?;
    tracing::info!("Seeded {} movies", inserted.len());
    Ok(inserted.len())
}
