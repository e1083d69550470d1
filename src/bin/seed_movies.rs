//! Seed the movie catalog from a JSON file.
//!
//! Usage: `seed-movies [path]`. Without a path the configured seed file is used.
//! Records are always inserted, even into a non-empty catalog.

use movie_rec_service::config::Settings;
use movie_rec_service::services::{seed_from_file, SqliteMovieStore};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let settings = Settings::load()?;
    let path = std::env::args().nth(1).unwrap_or(settings.seed.path);

    let store = SqliteMovieStore::from_settings(
        &settings.database.url,
        settings.database.max_connections,
        settings.database.min_connections,
        settings.database.acquire_timeout_secs,
    )
    .await?;

    let inserted = seed_from_file(&store, &path).await?;
    info!("Database seeded with {} movies from {}", inserted.len(), path);

    Ok(())
}
