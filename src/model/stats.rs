//! Admin dashboard figures.

use super::{Booking, BookingStatus, Room};
use serde::{Deserialize, Serialize};

/// Number of bookings shown in the dashboard's "recent" table.
pub const RECENT_BOOKINGS: usize = 5;

/// Admin dashboard figures derived from the booking and room lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_bookings: usize,
    pub active_rooms: usize,
    /// Sum of nightly prices of the rooms named by non-cancelled bookings.
    pub revenue: f64,
    #[serde(default)]
    pub recent_bookings: Vec<Booking>,
}

impl DashboardStats {
    /// `bookings` must already be newest first, as `list_bookings` returns them.
    /// A booking whose room name no longer matches any room adds nothing to revenue.
    pub fn compute(bookings: &[Booking], rooms: &[Room]) -> Self {
        let revenue = bookings
            .iter()
            .filter(|b| b.status != BookingStatus::Cancelled)
            .filter_map(|b| rooms.iter().find(|r| r.name == b.room_name))
            .map(|r| r.price)
            .sum();
        DashboardStats {
            total_bookings: bookings.len(),
            active_rooms: rooms.len(),
            revenue,
            recent_bookings: bookings.iter().take(RECENT_BOOKINGS).cloned().collect(),
        }
    }
}
