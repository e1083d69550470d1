// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Movie, MovieId, NewMovie, RecommendationQuery};
pub use requests::RecommendationRequest;
pub use responses::{MovieView, HealthResponse, ErrorResponse};
