//! Load HTTP handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, patch, post};
use axum::Router;
use serde::Deserialize;
use uuid::Uuid;

use super::model::{Load, LoadFilter, LoadInput, LoadStatus};
use crate::core::error::ApiResult;
use crate::core::validation::Validated;
use crate::server::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/load", post(create_load).get(list_loads))
        .route(
            "/load/{load_id}",
            get(get_load).put(update_load).delete(delete_load),
        )
        .route("/load/{load_id}/status", patch(update_load_status))
}

#[derive(Debug, Deserialize)]
struct StatusQuery {
    status: LoadStatus,
}

async fn create_load(
    State(state): State<AppState>,
    Validated(input): Validated<LoadInput>,
) -> ApiResult<(StatusCode, Json<Load>)> {
    let load = state.loads.create_load(input).await?;
    Ok((StatusCode::CREATED, Json(load)))
}

async fn list_loads(
    State(state): State<AppState>,
    Query(filter): Query<LoadFilter>,
) -> ApiResult<Json<Vec<Load>>> {
    let loads = state.loads.list_loads(filter).await?;
    Ok(Json(loads))
}

async fn get_load(
    State(state): State<AppState>,
    Path(load_id): Path<Uuid>,
) -> ApiResult<Json<Load>> {
    let load = state.loads.get_load(&load_id).await?;
    Ok(Json(load))
}

async fn update_load(
    State(state): State<AppState>,
    Path(load_id): Path<Uuid>,
    Validated(input): Validated<LoadInput>,
) -> ApiResult<Json<Load>> {
    let load = state.loads.update_load(&load_id, input).await?;
    Ok(Json(load))
}

async fn delete_load(
    State(state): State<AppState>,
    Path(load_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.loads.delete_load(&load_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn update_load_status(
    State(state): State<AppState>,
    Path(load_id): Path<Uuid>,
    Query(query): Query<StatusQuery>,
) -> ApiResult<Json<Load>> {
    let load = state
        .loads
        .update_load_status(&load_id, query.status)
        .await?;
    Ok(Json(load))
}
