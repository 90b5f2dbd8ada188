//! Amenities: the stored row and the upsert body.

use super::coerce;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Amenity {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub description: String,
    /// Usually a single glyph.
    #[serde(default, deserialize_with = "coerce::text")]
    pub icon: String,
}

/// Body of `POST /api/amenities`; same upsert rules as rooms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmenityPayload {
    #[serde(
        default,
        deserialize_with = "coerce::optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub description: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub icon: String,
}

impl AmenityPayload {
    pub fn into_amenity(self, id: i64) -> Amenity {
        Amenity {
            id,
            name: self.name,
            description: self.description,
            icon: self.icon,
        }
    }
}

impl From<Amenity> for AmenityPayload {
    fn from(amenity: Amenity) -> Self {
        AmenityPayload {
            id: Some(amenity.id),
            name: amenity.name,
            description: amenity.description,
            icon: amenity.icon,
        }
    }
}
