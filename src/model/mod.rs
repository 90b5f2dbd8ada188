//! Entities and request bodies. Rust field names match the storage columns; serde
//! renames them to camelCase on the wire.

mod amenity;
mod booking;
pub mod coerce;
mod room;
mod settings;
mod stats;

pub use amenity::{Amenity, AmenityPayload};
pub use booking::{Booking, BookingPayload, BookingStatus, StatusPatch, UnknownStatus};
pub use room::{Room, RoomPayload};
pub use settings::{Settings, SettingsBody};
pub use stats::{DashboardStats, RECENT_BOOKINGS};
