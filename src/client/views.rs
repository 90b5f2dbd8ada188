//! View state for the public site and the admin dashboard.
//!
//! Each view is a plain value built from adapter reads by a `load` function; mutations
//! go through named actions instead of page-global handlers. Rendering the values into
//! markup is left to the front-end.

use super::{ClientError, ClientResult, HotelApi};
use crate::model::{
    Amenity, AmenityPayload, Booking, BookingPayload, BookingStatus, DashboardStats, Room,
    RoomPayload, Settings,
};
use chrono::NaiveDate;
use thiserror::Error;

/// Characters of the description shown on an admin room card. The card always appends
/// `...`, short descriptions included.
pub const EXCERPT_CHARS: usize = 60;

/// `1234.5` -> `$1,234.50`, `450` -> `$450`.
pub fn money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    if frac == 0 {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{:02}", sign, grouped, frac)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomCard {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub excerpt: String,
    pub price_label: String,
    pub capacity_label: String,
    pub size: String,
    pub image: String,
    /// CSS `filter` value for the room image.
    pub image_filter: String,
    /// Label for the booking form's room select.
    pub option_label: String,
}

impl From<&Room> for RoomCard {
    fn from(room: &Room) -> Self {
        let head: String = room.description.chars().take(EXCERPT_CHARS).collect();
        let excerpt = format!("{}...", head);
        let price = money(room.price);
        RoomCard {
            id: room.id,
            name: room.name.clone(),
            description: room.description.clone(),
            excerpt,
            capacity_label: format!("{} Guests", room.capacity),
            size: room.size.clone(),
            image: room.image.clone(),
            image_filter: format!("hue-rotate({}deg)", room.hue_rotate),
            option_label: format!("{} - {}/night", room.name, price),
            price_label: price,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingRow {
    pub id: i64,
    /// Short reference: `#` and the last four digits of the id.
    pub reference: String,
    pub guest_name: String,
    pub email: String,
    pub room_name: String,
    pub stay: String,
    pub booked_on: NaiveDate,
    pub status: BookingStatus,
    pub status_class: String,
    pub can_cancel: bool,
}

impl From<&Booking> for BookingRow {
    fn from(b: &Booking) -> Self {
        let id = b.id.to_string();
        let tail = &id[id.len().saturating_sub(4)..];
        BookingRow {
            id: b.id,
            reference: format!("#{}", tail),
            guest_name: format!("{} {}", b.first_name, b.last_name).trim().to_string(),
            email: b.email.clone(),
            room_name: b.room_name.clone(),
            stay: format!("{} - {}", b.check_in, b.check_out),
            booked_on: b.created_at.date_naive(),
            status: b.status,
            status_class: format!("status-{}", b.status.as_str().to_lowercase()),
            can_cancel: b.status != BookingStatus::Cancelled,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmenityCard {
    pub id: i64,
    /// Icon and name, e.g. `🏊 Infinity Pool`.
    pub heading: String,
    pub description: String,
}

impl From<&Amenity> for AmenityCard {
    fn from(a: &Amenity) -> Self {
        AmenityCard {
            id: a.id,
            heading: format!("{} {}", a.icon, a.name).trim().to_string(),
            description: a.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublicSiteView {
    pub settings: Settings,
    pub rooms: Vec<RoomCard>,
    pub amenities: Vec<AmenityCard>,
}

impl PublicSiteView {
    pub async fn load(api: &dyn HotelApi) -> Self {
        let settings = api.settings().await;
        let rooms = api.rooms().await;
        let amenities = api.amenities().await;
        PublicSiteView {
            settings,
            rooms: rooms.iter().map(RoomCard::from).collect(),
            amenities: amenities.iter().map(AmenityCard::from).collect(),
        }
    }

    /// Options for the booking form's room select as `(value, label)`.
    pub fn room_options(&self) -> Vec<(String, String)> {
        self.rooms
            .iter()
            .map(|r| (r.name.clone(), r.option_label.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsPanel {
    pub total_bookings: usize,
    pub active_rooms: usize,
    pub revenue_label: String,
    pub recent: Vec<BookingRow>,
}

impl From<&DashboardStats> for StatsPanel {
    fn from(s: &DashboardStats) -> Self {
        StatsPanel {
            total_bookings: s.total_bookings,
            active_rooms: s.active_rooms,
            revenue_label: money(s.revenue),
            recent: s.recent_bookings.iter().map(BookingRow::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboardView {
    pub stats: StatsPanel,
    pub rooms: Vec<RoomCard>,
    pub bookings: Vec<BookingRow>,
    pub amenities: Vec<AmenityCard>,
    pub settings: Settings,
}

impl AdminDashboardView {
    pub async fn load(api: &dyn HotelApi) -> Self {
        let bookings = api.bookings().await;
        let rooms = api.rooms().await;
        let amenities = api.amenities().await;
        let settings = api.settings().await;
        let stats = DashboardStats::compute(&bookings, &rooms);
        AdminDashboardView {
            stats: StatsPanel::from(&stats),
            rooms: rooms.iter().map(RoomCard::from).collect(),
            bookings: bookings.iter().map(BookingRow::from).collect(),
            amenities: amenities.iter().map(AmenityCard::from).collect(),
            settings,
        }
    }
}

/// Named admin mutations. Each returns the adapter's result so the caller can report
/// failure; callers reload the dashboard view afterwards.
pub struct AdminActions<'a> {
    api: &'a dyn HotelApi,
}

impl<'a> AdminActions<'a> {
    pub fn new(api: &'a dyn HotelApi) -> Self {
        AdminActions { api }
    }

    /// Form values for editing room `id`, or `None` if it no longer exists.
    pub async fn edit_room(&self, id: i64) -> Option<RoomPayload> {
        self.api
            .rooms()
            .await
            .into_iter()
            .find(|r| r.id == id)
            .map(RoomPayload::from)
    }

    pub async fn save_room(&self, room: &RoomPayload) -> ClientResult<Room> {
        self.api.save_room(room).await
    }

    pub async fn delete_room(&self, id: i64) -> ClientResult<()> {
        self.api.delete_room(id).await
    }

    pub async fn cancel_booking(&self, id: i64) -> ClientResult<()> {
        self.api.update_booking_status(id, BookingStatus::Cancelled).await
    }

    /// Current settings for the edit form. Unlike the page read, a failure is returned.
    pub async fn edit_settings(&self) -> ClientResult<Settings> {
        self.api.fetch_settings().await
    }

    /// Change one setting and save the full record. Nothing is written when the current
    /// values cannot be read, since the save replaces all six fields.
    pub async fn set_setting(&self, name: &str, value: &str) -> Result<Settings, SettingsEditError> {
        let mut settings = self.edit_settings().await?;
        let slot = settings
            .field_mut(name)
            .ok_or_else(|| SettingsEditError::UnknownSetting(name.to_string()))?;
        *slot = value.to_string();
        Ok(self.save_settings(&settings).await?)
    }

    pub async fn save_settings(&self, settings: &Settings) -> ClientResult<Settings> {
        self.api.save_settings(settings).await
    }

    pub async fn edit_amenity(&self, id: i64) -> Option<AmenityPayload> {
        self.api
            .amenities()
            .await
            .into_iter()
            .find(|a| a.id == id)
            .map(AmenityPayload::from)
    }

    pub async fn save_amenity(&self, amenity: &AmenityPayload) -> ClientResult<Amenity> {
        self.api.save_amenity(amenity).await
    }

    pub async fn delete_amenity(&self, id: i64) -> ClientResult<()> {
        self.api.delete_amenity(id).await
    }
}

#[derive(Debug, Error)]
pub enum SettingsEditError {
    #[error("unknown setting `{0}`")]
    UnknownSetting(String),
    #[error(transparent)]
    Client(#[from] ClientError),
}

#[derive(Debug, Error)]
pub enum BookingFormError {
    #[error("please select check-in and check-out dates")]
    MissingDates,
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// The public booking form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub room_name: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: String,
    pub requests: String,
}

impl BookingForm {
    /// Preselect a room, as the "Book Now" button on a room card does.
    pub fn for_room(room_name: impl Into<String>) -> Self {
        BookingForm {
            room_name: room_name.into(),
            ..Default::default()
        }
    }

    pub fn to_payload(&self) -> Result<BookingPayload, BookingFormError> {
        let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) else {
            return Err(BookingFormError::MissingDates);
        };
        Ok(BookingPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            room_name: self.room_name.clone(),
            check_in,
            check_out,
            guests: self.guests.clone(),
            requests: self.requests.clone(),
        })
    }

    /// Send the booking. Nothing is sent when either date is missing.
    pub async fn submit(&self, api: &dyn HotelApi) -> Result<Booking, BookingFormError> {
        let payload = self.to_payload()?;
        Ok(api.add_booking(&payload).await?)
    }
}
