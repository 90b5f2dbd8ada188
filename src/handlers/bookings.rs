//! Booking handlers. Bookings are insert-only; the status is the one mutable field.

use crate::error::AppError;
use crate::extractors::{EntityId, WireJson};
use crate::model::{Booking, BookingPayload, StatusPatch};
use crate::response::{ack, Ack};
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list_bookings(State(state): State<AppState>) -> Result<Json<Vec<Booking>>, AppError> {
    Ok(Json(state.store.list_bookings().await?))
}

pub async fn create_booking(
    State(state): State<AppState>,
    WireJson(payload): WireJson<BookingPayload>,
) -> Result<Json<Booking>, AppError> {
    let booking = CatalogService::place_booking(state.store.as_ref(), payload).await?;
    Ok(Json(booking))
}

pub async fn patch_booking_status(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    WireJson(patch): WireJson<StatusPatch>,
) -> Result<Json<Ack>, AppError> {
    CatalogService::change_booking_status(state.store.as_ref(), id, &patch.status).await?;
    Ok(ack())
}
