use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{Movie, MovieId, NewMovie};

/// Errors that can occur when interacting with a movie store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Seed parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid movie record: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Read access to the movie catalog plus the bulk write used for seeding
///
/// Handlers receive the store as `Arc<dyn MovieStore>` and pass it into
/// [`recommend`](crate::core::recommend) per call.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Look up a single movie
    async fn get_by_id(&self, id: MovieId) -> Result<Option<Movie>, StoreError>;

    /// Every movie in the store's natural enumeration order
    async fn list_all(&self) -> Result<Vec<Movie>, StoreError>;

    /// Insert many records at once, returning them with their assigned ids
    async fn add_many(&self, movies: Vec<NewMovie>) -> Result<Vec<Movie>, StoreError>;

    /// Number of stored movies
    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.list_all().await?.len() as u64)
    }

    /// Health check for the underlying storage
    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}

/// Movie store kept entirely in memory
///
/// Enumerates movies in insertion order. Ids start at 1.
#[derive(Debug, Default)]
pub struct InMemoryMovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-identified movies, keeping their ids
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn get_by_id(&self, id: MovieId) -> Result<Option<Movie>, StoreError> {
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|m| m.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(self.movies.read().await.clone())
    }

    async fn add_many(&self, new_movies: Vec<NewMovie>) -> Result<Vec<Movie>, StoreError> {
        let mut movies = self.movies.write().await;
        let mut next_id = movies.iter().map(|m| m.id).max().unwrap_or(0) + 1;

        let inserted: Vec<Movie> = new_movies
            .into_iter()
            .map(|movie| {
                let movie = movie.with_id(next_id);
                next_id += 1;
                movie
            })
            .collect();

        movies.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.movies.read().await.len() as u64)
    }
}
