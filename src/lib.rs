//! Movie Rec Service - movie catalog with genre-overlap recommendations
//!
//! Given a favorite movie or a list of genres, the service returns the other
//! catalog movies that share at least one genre token. Results are unranked
//! and keep the store's enumeration order.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{recommend, tokens, GenreSet};
pub use models::{Movie, MovieId, MovieView, NewMovie, RecommendationQuery, RecommendationRequest};
pub use services::{InMemoryMovieStore, MovieStore, SqliteMovieStore, StoreError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let genres = tokens("Action, Comedy");
        assert_eq!(genres.len(), 2);
    }
}
