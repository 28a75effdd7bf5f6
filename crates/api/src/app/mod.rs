//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: storage wiring and the validate/map/store flow
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and their validation rules
//! - `mapper.rs`: record <-> DTO mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod errors;
pub mod mapper;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router with default (in-memory) services.
pub fn build_app() -> Router {
    build_app_with(services::build_services())
}

/// Build the router around the given services.
pub fn build_app_with(services: AppServices) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(Arc::new(services)))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
