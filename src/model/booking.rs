//! Bookings, their closed status set and the create and status-patch bodies.

use super::coerce;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Booking lifecycle. The only transition is `Confirmed -> Cancelled`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    #[default]
    Confirmed,
    Cancelled,
}

#[derive(Debug, Error)]
#[error("unknown booking status '{0}' (expected Confirmed or Cancelled)")]
pub struct UnknownStatus(pub String);

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    /// Whether a booking currently in `self` may be moved to `next`.
    pub fn can_become(self, next: BookingStatus) -> bool {
        self == next || (self == BookingStatus::Confirmed && next == BookingStatus::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Confirmed" => Ok(BookingStatus::Confirmed),
            "Cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for BookingStatus {
    type Error = UnknownStatus;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A reservation request. `room_name` is a copy of the room's name at booking time,
/// not a reference: renaming or deleting the room leaves it untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    #[serde(default, deserialize_with = "coerce::text")]
    pub first_name: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub last_name: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub email: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub room_name: String,
    #[serde(deserialize_with = "coerce::date")]
    pub check_in: NaiveDate,
    #[serde(deserialize_with = "coerce::date")]
    pub check_out: NaiveDate,
    #[serde(default, deserialize_with = "coerce::text")]
    pub guests: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub requests: String,
    #[sqlx(try_from = "String")]
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/bookings`. Any `status` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub room_name: String,
    #[serde(deserialize_with = "coerce::date")]
    pub check_in: NaiveDate,
    #[serde(deserialize_with = "coerce::date")]
    pub check_out: NaiveDate,
    #[serde(default, deserialize_with = "coerce::text")]
    pub guests: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub requests: String,
}

impl BookingPayload {
    /// Materialize a confirmed booking. Used by stores that mint ids themselves.
    pub fn into_booking(self, id: i64, created_at: DateTime<Utc>) -> Booking {
        Booking {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            room_name: self.room_name,
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
            requests: self.requests,
            status: BookingStatus::Confirmed,
            created_at,
        }
    }
}

/// Body of `PATCH /api/bookings/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPatch {
    #[serde(deserialize_with = "coerce::text")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_is_a_closed_set() {
        assert_eq!("Cancelled".parse::<BookingStatus>().unwrap(), BookingStatus::Cancelled);
        assert!("Pending".parse::<BookingStatus>().is_err());
        assert!("cancelled".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn only_cancellation_is_allowed() {
        use BookingStatus::*;
        assert!(Confirmed.can_become(Cancelled));
        assert!(Cancelled.can_become(Cancelled));
        assert!(Confirmed.can_become(Confirmed));
        assert!(!Cancelled.can_become(Confirmed));
    }

    #[test]
    fn payload_ignores_status_and_reads_numeric_guests() {
        let p: BookingPayload = serde_json::from_value(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "roomName": "Deluxe Room",
            "checkIn": "2025-06-01",
            "checkOut": "2025-06-03",
            "guests": 2,
            "status": "Cancelled"
        }))
        .unwrap();
        assert_eq!(p.guests, "2");
        let b = p.into_booking(1, Utc::now());
        assert_eq!(b.status, BookingStatus::Confirmed);
        assert_eq!(b.requests, "");
    }
}
