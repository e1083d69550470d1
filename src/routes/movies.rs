use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::{catalog_genres, recommend};
use crate::models::{ErrorResponse, HealthResponse, MovieId, MovieView, RecommendationRequest};
use crate::services::{MovieStore, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MovieStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self { store }
    }
}

/// Configure all movie-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/movies", web::get().to(list_movies))
        .route("/movies/{movie_id}", web::get().to(get_movie))
        .route("/movie/{movie_id}", web::get().to(get_movie))
        .route("/genres", web::get().to(list_genres))
        .route("/recommend", web::post().to(recommend_movies));
}

fn store_failure(context: &str, e: StoreError) -> HttpResponse {
    tracing::error!("{}: {}", context, e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: context.to_string(),
        message: e.to_string(),
        status_code: 500,
    })
}

fn into_views(movies: Vec<crate::models::Movie>) -> Vec<MovieView> {
    movies.into_iter().map(MovieView::from).collect()
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = state.store.health_check().await.unwrap_or(false);
    let movies = if healthy { state.store.count().await.ok() } else { None };

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        movies,
        timestamp: chrono::Utc::now(),
    })
}

/// List all movies
///
/// GET /movies
async fn list_movies(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_all().await {
        Ok(movies) => HttpResponse::Ok().json(into_views(movies)),
        Err(e) => store_failure("Failed to list movies", e),
    }
}

/// Get a single movie
///
/// GET /movies/{movie_id}
async fn get_movie(
    state: web::Data<AppState>,
    path: web::Path<MovieId>,
) -> impl Responder {
    let movie_id = path.into_inner();

    match state.store.get_by_id(movie_id).await {
        Ok(Some(movie)) => HttpResponse::Ok().json(MovieView::from(movie)),
        Ok(None) => {
            tracing::debug!("Movie {} not found", movie_id);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Movie not found".to_string(),
                message: StoreError::NotFound(format!("movie {}", movie_id)).to_string(),
                status_code: 404,
            })
        }
        Err(e) => store_failure("Failed to fetch movie", e),
    }
}

/// Distinct genres across the catalog, sorted
///
/// GET /genres
async fn list_genres(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_all().await {
        Ok(movies) => HttpResponse::Ok().json(catalog_genres(&movies)),
        Err(e) => store_failure("Failed to list genres", e),
    }
}

/// Recommend movies by favorite movie or genres
///
/// POST /recommend
///
/// Request body:
/// ```json
/// {
///   "favorite_movie_id": 1,
///   "genres": ["Action", "Drama"]
/// }
/// ```
/// Both fields are optional; a favorite id takes precedence over genres.
async fn recommend_movies(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> impl Responder {
    let query = req.into_inner().into_query();

    tracing::debug!("Recommendation query: {:?}", query);

    match recommend(&*state.store, &query).await {
        Ok(movies) => {
            tracing::info!("Returning {} recommendations", movies.len());
            HttpResponse::Ok().json(into_views(movies))
        }
        Err(e) => store_failure("Failed to recommend movies", e),
    }
}
