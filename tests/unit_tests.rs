// Unit tests for genre parsing and match selection

use movie_rec_service::core::{
    genres::{catalog_genres, shares_genre, tokens, tokens_from_list},
    recommender::select_matches,
};
use movie_rec_service::models::{Movie, MovieId};

fn catalog() -> Vec<Movie> {
    vec![
        Movie::new(1, "A", "Action,Drama", "a"),
        Movie::new(2, "B", "Comedy", "b"),
        Movie::new(3, "C", "Drama,Thriller", "c"),
    ]
}

fn ids(movies: &[Movie]) -> Vec<MovieId> {
    movies.iter().map(|m| m.id).collect()
}

#[test]
fn test_tokens_spacing_variants_agree() {
    let a = tokens("Action, Comedy");
    let b = tokens("Action,Comedy");
    let c = tokens("Action , Comedy ");

    assert_eq!(a.len(), 2);
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn test_tokens_are_case_sensitive() {
    let reference = tokens("drama");
    assert!(!shares_genre("Drama", &reference));
}

#[test]
fn test_list_tokens_match_string_tokens() {
    assert_eq!(
        tokens_from_list(["Action ", " Comedy", "Action"]),
        tokens("Action,Comedy")
    );
}

#[test]
fn test_shared_token_always_selected() {
    let movies = catalog();

    for a in &movies {
        let reference = tokens(&a.genres);
        let selected = ids(&select_matches(&reference, movies.clone(), Some(a.id)));

        for b in &movies {
            let overlaps = !tokens(&b.genres).is_disjoint(&reference);
            if b.id == a.id {
                assert!(!selected.contains(&b.id), "movie {} recommended itself", a.id);
            } else {
                assert_eq!(selected.contains(&b.id), overlaps, "pair ({}, {})", a.id, b.id);
            }
        }
    }
}

#[test]
fn test_empty_reference_selects_nothing() {
    let reference = tokens_from_list(["", "   "]);
    assert!(select_matches(&reference, catalog(), None).is_empty());
}

#[test]
fn test_catalog_genres() {
    assert_eq!(
        catalog_genres(&catalog()),
        vec!["Action", "Comedy", "Drama", "Thriller"]
    );
}
