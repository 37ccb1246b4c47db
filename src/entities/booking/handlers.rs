//! Booking HTTP handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, patch, post};
use axum::Router;
use serde::Deserialize;
use uuid::Uuid;

use super::model::{BookingFilter, BookingInput, BookingStatus, BookingView};
use crate::core::error::ApiResult;
use crate::core::validation::Validated;
use crate::server::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/booking", post(create_booking).get(list_bookings))
        .route(
            "/booking/{booking_id}",
            get(get_booking).put(update_booking).delete(delete_booking),
        )
        .route("/booking/{booking_id}/status", patch(update_booking_status))
}

#[derive(Debug, Deserialize)]
struct StatusQuery {
    status: BookingStatus,
}

async fn create_booking(
    State(state): State<AppState>,
    Validated(input): Validated<BookingInput>,
) -> ApiResult<(StatusCode, Json<BookingView>)> {
    let booking = state.bookings.create_booking(input).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

async fn list_bookings(
    State(state): State<AppState>,
    Query(filter): Query<BookingFilter>,
) -> ApiResult<Json<Vec<BookingView>>> {
    let bookings = state.bookings.list_bookings(filter).await?;
    Ok(Json(bookings))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> ApiResult<Json<BookingView>> {
    let booking = state.bookings.get_booking(&booking_id).await?;
    Ok(Json(booking))
}

async fn update_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
    Validated(input): Validated<BookingInput>,
) -> ApiResult<Json<BookingView>> {
    let booking = state.bookings.update_booking(&booking_id, input).await?;
    Ok(Json(booking))
}

async fn delete_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.bookings.delete_booking(&booking_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn update_booking_status(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
    Query(query): Query<StatusQuery>,
) -> ApiResult<Json<BookingView>> {
    let booking = state
        .bookings
        .update_booking_status(&booking_id, query.status)
        .await?;
    Ok(Json(booking))
}
