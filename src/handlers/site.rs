//! Site-wide handlers: the settings singleton and dashboard statistics.

use crate::error::AppError;
use crate::extractors::WireJson;
use crate::model::{DashboardStats, Settings, SettingsBody};
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn get_settings(State(state): State<AppState>) -> Result<Json<SettingsBody>, AppError> {
    let settings = CatalogService::settings(state.store.as_ref()).await?;
    Ok(Json(settings.into()))
}

pub async fn replace_settings(
    State(state): State<AppState>,
    WireJson(settings): WireJson<Settings>,
) -> Result<Json<Settings>, AppError> {
    let stored = CatalogService::replace_settings(state.store.as_ref(), settings).await?;
    Ok(Json(stored))
}

pub async fn dashboard_stats(State(state): State<AppState>) -> Result<Json<DashboardStats>, AppError> {
    Ok(Json(CatalogService::dashboard_stats(state.store.as_ref()).await?))
}
