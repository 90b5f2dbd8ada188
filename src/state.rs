//! Shared application state for all routes.

use crate::store::HotelStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn HotelStore>,
}

impl AppState {
    pub fn new(store: impl HotelStore + 'static) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
