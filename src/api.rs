use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

use crate::dataset::{RouteDataset, RoutePoint, RouteSummary};
use crate::distance::total_distance;
use crate::validate::validate_window;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Deserialize)]
struct DistanceQuery {
    start: Option<String>,
    end: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DistanceResponse {
    total_distance: f64,
}

pub fn build_router(dataset: Arc<RouteDataset>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/routes", get(list_routes))
        .route("/routes/{id}", get(get_route_locations))
        .route("/distance", get(get_distance))
        .method_not_allowed_fallback(unsupported_method)
        .layer(cors)
        .with_state(dataset)
}

async fn list_routes(State(dataset): State<Arc<RouteDataset>>) -> Json<Vec<RouteSummary>> {
    debug!("listing {} routes", dataset.len());
    Json(dataset.summaries())
}

async fn get_route_locations(
    State(dataset): State<Arc<RouteDataset>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<RoutePoint>>, (StatusCode, Json<ErrorResponse>)> {
    match dataset.find_by_id(&id) {
        Some(route) => {
            debug!("found route {} with {} locations", id, route.locations.len());
            Ok(Json(route.locations.clone()))
        }
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Route not found".to_string(),
            }),
        )),
    }
}

async fn get_distance(
    State(dataset): State<Arc<RouteDataset>>,
    Query(query): Query<DistanceQuery>,
) -> Result<Json<DistanceResponse>, (StatusCode, Json<ErrorResponse>)> {
    let window = validate_window(query.start.as_deref(), query.end.as_deref()).map_err(|err| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
    })?;

    let total = total_distance(dataset.routes(), &window);
    debug!("total distance from {} to {}: {total}", window.start, window.end);
    Ok(Json(DistanceResponse {
        total_distance: total,
    }))
}

// Unsupported methods on defined paths respond 404 rather than 405.
async fn unsupported_method() -> StatusCode {
    StatusCode::NOT_FOUND
}
