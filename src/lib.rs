//! Hotel CMS: REST API over rooms, amenities, bookings and site settings, plus the
//! client adapter and view state used by the public site and the admin dashboard.

pub mod case;
pub mod client;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use client::{HotelApi, HotelClient, HotelClientConfig};
pub use config::{DatabaseTarget, ServerConfig, StoreKind};
pub use error::{AppError, ConfigError};
pub use routes::{app, common_routes, hotel_routes};
pub use service::CatalogService;
pub use state::AppState;
pub use store::{ensure_database_exists, HotelStore, MemoryHotelStore, PgHotelStore};
