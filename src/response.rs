//! Standard response bodies shared by handlers.

use axum::Json;
use serde::{Deserialize, Serialize};

/// Acknowledgement returned by deletes and status patches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ack {
    pub success: bool,
}

pub fn ack() -> Json<Ack> {
    Json(Ack { success: true })
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
    pub message: String,
}

impl HealthBody {
    pub fn ok() -> Self {
        HealthBody {
            status: "OK".into(),
            message: "Hotel Management API is running".into(),
        }
    }
}
