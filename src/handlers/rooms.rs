//! Room handlers: list, upsert, delete.

use crate::error::AppError;
use crate::extractors::{EntityId, WireJson};
use crate::model::{Room, RoomPayload};
use crate::response::{ack, Ack};
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list_rooms(State(state): State<AppState>) -> Result<Json<Vec<Room>>, AppError> {
    Ok(Json(state.store.list_rooms().await?))
}

pub async fn upsert_room(
    State(state): State<AppState>,
    WireJson(payload): WireJson<RoomPayload>,
) -> Result<Json<Room>, AppError> {
    let room = CatalogService::upsert_room(state.store.as_ref(), payload).await?;
    Ok(Json(room))
}

pub async fn delete_room(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Ack>, AppError> {
    state.store.delete_room(id).await?;
    Ok(ack())
}
