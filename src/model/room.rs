//! Rooms: the stored row and the upsert body.

use super::coerce;
use serde::{Deserialize, Serialize};

/// A bookable room as stored and as served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub description: String,
    #[serde(deserialize_with = "coerce::number")]
    pub price: f64,
    #[serde(deserialize_with = "coerce::integer")]
    pub capacity: i32,
    /// Free text such as `45m²`.
    #[serde(default, deserialize_with = "coerce::text")]
    pub size: String,
    /// URL or inline `data:` URI.
    #[serde(default, deserialize_with = "coerce::text")]
    pub image: String,
    /// Degrees for the display filter only.
    #[serde(default, deserialize_with = "coerce::integer_or_zero")]
    pub hue_rotate: i32,
}

/// Body of `POST /api/rooms`. No id inserts, an id updates that row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPayload {
    #[serde(
        default,
        deserialize_with = "coerce::optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub description: String,
    #[serde(deserialize_with = "coerce::price")]
    pub price: f64,
    #[serde(deserialize_with = "coerce::integer")]
    pub capacity: i32,
    #[serde(default, deserialize_with = "coerce::text")]
    pub size: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub image: String,
    #[serde(default, deserialize_with = "coerce::integer_or_zero")]
    pub hue_rotate: i32,
}

impl RoomPayload {
    /// The row this payload stores as. Price is kept to cents.
    pub fn into_room(self, id: i64) -> Room {
        Room {
            id,
            name: self.name,
            description: self.description,
            price: coerce::round_cents(self.price),
            capacity: self.capacity,
            size: self.size,
            image: self.image,
            hue_rotate: self.hue_rotate,
        }
    }
}

impl From<Room> for RoomPayload {
    fn from(room: Room) -> Self {
        RoomPayload {
            id: Some(room.id),
            name: room.name,
            description: room.description,
            price: room.price,
            capacity: room.capacity,
            size: room.size,
            image: room.image,
            hue_rotate: room.hue_rotate,
        }
    }
}
