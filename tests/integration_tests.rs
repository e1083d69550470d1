// Integration tests for the recommendation flow against both store backends

use movie_rec_service::core::recommend;
use movie_rec_service::models::{Movie, MovieId, NewMovie, RecommendationRequest};
use movie_rec_service::services::{
    load_seed_file, seed_if_empty, InMemoryMovieStore, MovieStore, SqliteMovieStore,
};
use std::time::Duration;

fn example_movies() -> Vec<NewMovie> {
    vec![
        NewMovie::new("A", "Action,Drama", "first"),
        NewMovie::new("B", "Comedy", "second"),
        NewMovie::new("C", "Drama,Thriller", "third"),
    ]
}

async fn sqlite_store() -> SqliteMovieStore {
    SqliteMovieStore::new("sqlite::memory:", 1, 1, Duration::from_secs(5))
        .await
        .expect("in-memory sqlite store")
}

async fn recommended_ids(store: &dyn MovieStore, request: RecommendationRequest) -> Vec<MovieId> {
    recommend(store, &request.into_query())
        .await
        .expect("recommendation")
        .into_iter()
        .map(|m| m.id)
        .collect()
}

async fn check_example_scenarios(store: &dyn MovieStore) {
    assert_eq!(
        recommended_ids(store, RecommendationRequest::for_favorite(1)).await,
        vec![3]
    );
    assert_eq!(
        recommended_ids(store, RecommendationRequest::for_genres(["Comedy"])).await,
        vec![2]
    );
    assert!(recommended_ids(store, RecommendationRequest::for_genres(["Nonexistent"]))
        .await
        .is_empty());
    assert!(recommended_ids(store, RecommendationRequest::for_favorite(404))
        .await
        .is_empty());
    assert!(recommended_ids(store, RecommendationRequest::for_genres(Vec::<String>::new()))
        .await
        .is_empty());
    assert!(recommended_ids(store, RecommendationRequest::default())
        .await
        .is_empty());
}

#[tokio::test]
async fn test_example_scenarios_in_memory() {
    let store = InMemoryMovieStore::new();
    store.add_many(example_movies()).await.unwrap();

    check_example_scenarios(&store).await;
}

#[tokio::test]
async fn test_example_scenarios_sqlite() {
    let store = sqlite_store().await;
    store.add_many(example_movies()).await.unwrap();

    check_example_scenarios(&store).await;
}

#[tokio::test]
async fn test_recommend_does_not_mutate_store() {
    let store = InMemoryMovieStore::new();
    store.add_many(example_movies()).await.unwrap();
    let before = store.list_all().await.unwrap();

    recommended_ids(&store, RecommendationRequest::for_favorite(1)).await;
    recommended_ids(&store, RecommendationRequest::for_genres(["Drama"])).await;

    assert_eq!(store.list_all().await.unwrap(), before);
}

#[tokio::test]
async fn test_zero_favorite_matches_absent_favorite() {
    let store = sqlite_store().await;
    store.add_many(example_movies()).await.unwrap();

    for genres in [None, Some(vec![]), Some(vec!["Drama".to_string()])] {
        let with_zero = RecommendationRequest {
            favorite_movie_id: Some(0),
            genres: genres.clone(),
        };
        let without = RecommendationRequest {
            favorite_movie_id: None,
            genres,
        };
        assert_eq!(
            recommended_ids(&store, with_zero).await,
            recommended_ids(&store, without).await
        );
    }
}

#[tokio::test]
async fn test_seed_file_loads_into_sqlite() {
    let seed = load_seed_file("data/seed_movies.json").await.unwrap();
    assert!(!seed.is_empty());

    let store = sqlite_store().await;
    let inserted = seed_if_empty(&store, "data/seed_movies.json").await.unwrap();
    assert_eq!(inserted, seed.len());

    let all: Vec<Movie> = store.list_all().await.unwrap();
    assert_eq!(all.len(), seed.len());
    assert!(all.iter().all(|m| m.id > 0 && !m.title.is_empty()));

    // Every seeded movie shares a genre with at least one other.
    for movie in &all {
        let recs = recommended_ids(&store, RecommendationRequest::for_favorite(movie.id)).await;
        assert!(!recs.is_empty(), "no recommendations for {}", movie.title);
        assert!(!recs.contains(&movie.id));
    }
}
