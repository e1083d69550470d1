use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use std::time::Duration;

use crate::models::{Movie, MovieId, NewMovie};
use crate::services::store::{MovieStore, StoreError};

/// SQLite-backed movie catalog
///
/// Movies are enumerated in id order, which is insertion order since ids
/// are assigned by the database.
pub struct SqliteMovieStore {
    pool: SqlitePool,
}

impl SqliteMovieStore {
    /// Connect to the database and run migrations
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    /// Create a store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Opening SQLite database: {}", url);

        Self::new(
            url,
            max_connections.unwrap_or(5),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
        )
        .await
    }

    /// Wrap an existing pool, running migrations on it first
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    fn movie_from_row(row: &SqliteRow) -> Movie {
        // Malformed rows may carry NULL text columns.
        let genres: Option<String> = row.get("genres");
        let description: Option<String> = row.get("description");

        Movie {
            id: row.get("id"),
            title: row.get("title"),
            genres: genres.unwrap_or_default(),
            description: description.unwrap_or_default(),
        }
    }
}

#[async_trait]
impl MovieStore for SqliteMovieStore {
    async fn get_by_id(&self, id: MovieId) -> Result<Option<Movie>, StoreError> {
        let query = r#"
            SELECT id, title, genres, description
            FROM movies
            WHERE id = ?1
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(Self::movie_from_row))
    }

    async fn list_all(&self) -> Result<Vec<Movie>, StoreError> {
        let query = r#"
            SELECT id, title, genres, description
            FROM movies
            ORDER BY id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;
        let movies: Vec<Movie> = rows.iter().map(Self::movie_from_row).collect();

        tracing::debug!("Loaded {} movies", movies.len());

        Ok(movies)
    }

    /// Insert all records in a single transaction
    async fn add_many(&self, movies: Vec<NewMovie>) -> Result<Vec<Movie>, StoreError> {
        let query = r#"
            INSERT INTO movies (title, genres, description)
            VALUES (?1, ?2, ?3)
        "#;

        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::with_capacity(movies.len());

        for movie in movies {
            let result = sqlx::query(query)
                .bind(&movie.title)
                .bind(&movie.genres)
                .bind(&movie.description)
                .execute(&mut *tx)
                .await?;

            inserted.push(movie.with_id(result.last_insert_rowid()));
        }

        tx.commit().await?;

        tracing::info!("Inserted {} movies", inserted.len());

        Ok(inserted)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM movies")
            .fetch_one(&self.pool)
            .await?;
        let total: i64 = row.get("total");
        Ok(total as u64)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
