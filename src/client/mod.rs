//! Client data adapter: the one interface both front-ends use to reach the API.
//!
//! Reads are resilient and writes are honest. List and settings reads never fail; on
//! any error they log and return an empty value. Writes return `ClientResult` so the
//! caller can tell the user something went wrong.

mod error;
mod http;
pub mod views;

pub use error::{ClientError, ClientResult};
pub use http::{HotelClient, HotelClientConfig, DEFAULT_BASE_URL};

use crate::model::{
    Amenity, AmenityPayload, Booking, BookingPayload, BookingStatus, DashboardStats, Room,
    RoomPayload, Settings,
};
use async_trait::async_trait;

#[async_trait]
pub trait HotelApi: Send + Sync {
    async fn rooms(&self) -> Vec<Room>;
    async fn save_room(&self, room: &RoomPayload) -> ClientResult<Room>;
    async fn delete_room(&self, id: i64) -> ClientResult<()>;

    /// Newest first.
    async fn bookings(&self) -> Vec<Booking>;
    async fn add_booking(&self, booking: &BookingPayload) -> ClientResult<Booking>;
    async fn update_booking_status(&self, id: i64, status: BookingStatus) -> ClientResult<()>;

    /// Empty settings when the API is unreachable or unseeded.
    async fn settings(&self) -> Settings;
    /// Like [`HotelApi::settings`], but failures are returned. Read-modify-write paths
    /// use this so a failed read never turns into a blanking save.
    async fn fetch_settings(&self) -> ClientResult<Settings>;
    async fn save_settings(&self, settings: &Settings) -> ClientResult<Settings>;

    async fn amenities(&self) -> Vec<Amenity>;
    async fn save_amenity(&self, amenity: &AmenityPayload) -> ClientResult<Amenity>;
    async fn delete_amenity(&self, id: i64) -> ClientResult<()>;

    async fn dashboard_stats(&self) -> DashboardStats;
}
