// Core algorithm exports
pub mod genres;
pub mod recommender;

pub use genres::{catalog_genres, shares_genre, split_genres, tokens, tokens_from_list, GenreSet};
pub use recommender::{recommend, select_matches};
