use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use brewery_core::BeerId;

use crate::app::dto::{BeerDto, GetBeerParams};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub const BASE_PATH: &str = "/api/v1/beer";

/// Routes relative to [`BASE_PATH`]; `"/"` matches the bare base path.
pub fn router() -> Router {
    Router::new()
        .route("/", post(save_new_beer))
        .route("/:beer_id", get(get_beer_by_id).put(update_beer_by_id))
}

fn parse_beer_id(raw: &str) -> Result<BeerId, ApiError> {
    raw.parse().map_err(|e: brewery_core::DomainError| ApiError::InvalidId(e.to_string()))
}

fn json_body(body: Result<Json<BeerDto>, JsonRejection>) -> Result<BeerDto, ApiError> {
    body.map(|Json(dto)| dto)
        .map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))
}

pub async fn get_beer_by_id(
    Extension(services): Extension<Arc<AppServices>>,
    Path(beer_id): Path<String>,
    params: Result<Query<GetBeerParams>, QueryRejection>,
) -> Result<Json<BeerDto>, ApiError> {
    let id = parse_beer_id(&beer_id)?;
    // isCold is inert; unreadable query strings are ignored.
    match params {
        Ok(Query(GetBeerParams { is_cold: Some(is_cold) })) => {
            tracing::debug!(beer_id = %id, is_cold = %is_cold, "isCold accepted (no effect)");
        }
        Ok(_) => {}
        Err(rejection) => {
            tracing::debug!(beer_id = %id, reason = %rejection.body_text(), "query string ignored");
        }
    }
    services.get_beer(&id).map(Json)
}

pub async fn save_new_beer(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<BeerDto>, JsonRejection>,
) -> Result<Response, ApiError> {
    let created = services.create_beer(json_body(body)?)?;

    let location = match created.id {
        Some(id) => format!("{BASE_PATH}/{id}"),
        None => BASE_PATH.to_string(),
    };
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)).into_response())
}

pub async fn update_beer_by_id(
    Extension(services): Extension<Arc<AppServices>>,
    Path(beer_id): Path<String>,
    body: Result<Json<BeerDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = parse_beer_id(&beer_id)?;
    services.update_beer(&id, json_body(body)?)?;
    Ok(StatusCode::NO_CONTENT)
}
