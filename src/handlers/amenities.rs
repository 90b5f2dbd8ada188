//! Amenity handlers: list, upsert, delete.

use crate::error::AppError;
use crate::extractors::{EntityId, WireJson};
use crate::model::{Amenity, AmenityPayload};
use crate::response::{ack, Ack};
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list_amenities(State(state): State<AppState>) -> Result<Json<Vec<Amenity>>, AppError> {
    Ok(Json(state.store.list_amenities().await?))
}

pub async fn upsert_amenity(
    State(state): State<AppState>,
    WireJson(payload): WireJson<AmenityPayload>,
) -> Result<Json<Amenity>, AppError> {
    let amenity = CatalogService::upsert_amenity(state.store.as_ref(), payload).await?;
    Ok(Json(amenity))
}

pub async fn delete_amenity(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Ack>, AppError> {
    state.store.delete_amenity(id).await?;
    Ok(ack())
}
