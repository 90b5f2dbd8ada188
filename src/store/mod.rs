//! Entity store: the four tables behind the API, their schema and seed data.
//!
//! Every operation is one statement against the backing store. Upserts are split into
//! `insert_*` / `update_*` here; deciding which one to run is the service's job.

mod memory;
mod postgres;
pub mod seed;

pub use memory::MemoryHotelStore;
pub use postgres::{ensure_database_exists, PgHotelStore};

use crate::error::AppError;
use crate::model::{
    Amenity, AmenityPayload, Booking, BookingPayload, BookingStatus, Room, RoomPayload, Settings,
};
use async_trait::async_trait;

/// Which tables `initialize` had to seed. All false on an already-populated store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub rooms: bool,
    pub amenities: bool,
    pub settings: bool,
}

/// Result of a status write on a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusUpdate {
    /// The booking now has the requested status (including when it already had it).
    Applied,
    /// No booking with that id; nothing was written.
    NotFound,
    /// The transition is not allowed; the booking keeps `current`.
    Rejected { current: BookingStatus },
}

impl StatusUpdate {
    pub fn from_previous(previous: Option<BookingStatus>, next: BookingStatus) -> Self {
        match previous {
            None => StatusUpdate::NotFound,
            Some(current) if current.can_become(next) => StatusUpdate::Applied,
            Some(current) => StatusUpdate::Rejected { current },
        }
    }
}

#[async_trait]
pub trait HotelStore: Send + Sync {
    /// Create missing tables, then seed each empty table with its defaults.
    /// Safe to call on every start.
    async fn initialize(&self) -> Result<SeedReport, AppError>;

    /// Round trip to the backing store, for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;

    /// Rooms by id ascending.
    async fn list_rooms(&self) -> Result<Vec<Room>, AppError>;
    async fn insert_room(&self, room: &RoomPayload) -> Result<Room, AppError>;
    /// Returns `None` when no room has this id; nothing is created.
    async fn update_room(&self, id: i64, room: &RoomPayload) -> Result<Option<Room>, AppError>;
    /// Deleting a missing id is not an error.
    async fn delete_room(&self, id: i64) -> Result<(), AppError>;

    /// Amenities by id ascending.
    async fn list_amenities(&self) -> Result<Vec<Amenity>, AppError>;
    async fn insert_amenity(&self, amenity: &AmenityPayload) -> Result<Amenity, AppError>;
    async fn update_amenity(
        &self,
        id: i64,
        amenity: &AmenityPayload,
    ) -> Result<Option<Amenity>, AppError>;
    async fn delete_amenity(&self, id: i64) -> Result<(), AppError>;

    /// Bookings newest first (creation time, then id, descending).
    async fn list_bookings(&self) -> Result<Vec<Booking>, AppError>;
    /// Always inserts, always `Confirmed`.
    async fn insert_booking(&self, booking: &BookingPayload) -> Result<Booking, AppError>;
    /// Writes `status` only when the current status allows it.
    async fn set_booking_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> Result<StatusUpdate, AppError>;

    /// The singleton, or `None` before it has been seeded.
    async fn get_settings(&self) -> Result<Option<Settings>, AppError>;
    /// Overwrites all six fields, creating the singleton if needed.
    async fn replace_settings(&self, settings: &Settings) -> Result<Settings, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_update_from_previous() {
        use BookingStatus::*;
        assert_eq!(StatusUpdate::from_previous(None, Cancelled), StatusUpdate::NotFound);
        assert_eq!(
            StatusUpdate::from_previous(Some(Confirmed), Cancelled),
            StatusUpdate::Applied
        );
        assert_eq!(
            StatusUpdate::from_previous(Some(Cancelled), Confirmed),
            StatusUpdate::Rejected { current: Cancelled }
        );
    }
}
