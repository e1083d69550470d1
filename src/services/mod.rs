// Service exports
pub mod seed;
pub mod sqlite;
pub mod store;

pub use seed::{load_seed_file, parse_seed, seed_from_file, seed_if_empty};
pub use sqlite::SqliteMovieStore;
pub use store::{InMemoryMovieStore, MovieStore, StoreError};
