//! HTTP handlers for rooms, amenities, bookings and site settings.

pub mod amenities;
pub mod bookings;
pub mod rooms;
pub mod site;
pub use amenities::*;
pub use bookings::*;
pub use rooms::*;
pub use site::*;
