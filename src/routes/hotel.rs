//! Resource routes for rooms, bookings, settings and amenities.

use crate::handlers::{
    create_booking, dashboard_stats, delete_amenity, delete_room, get_settings, list_amenities,
    list_bookings, list_rooms, patch_booking_status, replace_settings, upsert_amenity, upsert_room,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, patch},
    Router,
};

pub fn hotel_routes(state: AppState) -> Router {
    Router::new()
        .route("/rooms", get(list_rooms).post(upsert_room))
        .route("/rooms/:id", delete(delete_room))
        .route("/bookings", get(list_bookings).post(create_booking))
        .route("/bookings/:id", patch(patch_booking_status))
        .route("/settings", get(get_settings).put(replace_settings))
        .route("/amenities", get(list_amenities).post(upsert_amenity))
        .route("/amenities/:id", delete(delete_amenity))
        .route("/stats", get(dashboard_stats))
        .with_state(state)
}
