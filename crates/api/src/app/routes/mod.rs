use axum::{routing::post, Router};

pub mod beers;
pub mod system;

/// Router for all resource endpoints.
pub fn router() -> Router {
    Router::new()
        .nest(beers::BASE_PATH, beers::router())
        // a nested "/" only matches the bare prefix
        .route(&format!("{}/", beers::BASE_PATH), post(beers::save_new_beer))
}
