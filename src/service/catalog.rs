//! Operation semantics on top of a [`HotelStore`]: upsert dispatch, forced booking
//! status, the one-way status transition and dashboard figures.

use crate::error::AppError;
use crate::model::{
    Amenity, AmenityPayload, Booking, BookingPayload, BookingStatus, DashboardStats, Room,
    RoomPayload, Settings,
};
use crate::store::{HotelStore, StatusUpdate};

pub struct CatalogService;

impl CatalogService {
    /// Insert when the payload has no id, otherwise update that row. Updating an id that
    /// does not exist writes nothing and echoes the payload back under that id.
    pub async fn upsert_room(store: &dyn HotelStore, payload: RoomPayload) -> Result<Room, AppError> {
        match payload.id {
            None => store.insert_room(&payload).await,
            Some(id) => match store.update_room(id, &payload).await? {
                Some(room) => Ok(room),
                None => {
                    tracing::debug!(id, "room upsert matched no row");
                    Ok(payload.into_room(id))
                }
            },
        }
    }

    /// Same rules as [`CatalogService::upsert_room`].
    pub async fn upsert_amenity(
        store: &dyn HotelStore,
        payload: AmenityPayload,
    ) -> Result<Amenity, AppError> {
        match payload.id {
            None => store.insert_amenity(&payload).await,
            Some(id) => match store.update_amenity(id, &payload).await? {
                Some(amenity) => Ok(amenity),
                None => {
                    tracing::debug!(id, "amenity upsert matched no row");
                    Ok(payload.into_amenity(id))
                }
            },
        }
    }

    /// Always creates a new `Confirmed` booking. Dates are not checked against each
    /// other or against existing bookings.
    pub async fn place_booking(
        store: &dyn HotelStore,
        payload: BookingPayload,
    ) -> Result<Booking, AppError> {
        let booking = store.insert_booking(&payload).await?;
        tracing::info!(id = booking.id, room = %booking.room_name, "booking placed");
        Ok(booking)
    }

    /// Parse `status` against the closed set, then apply it. Unknown ids succeed
    /// silently; reinstating a cancelled booking is a conflict.
    pub async fn change_booking_status(
        store: &dyn HotelStore,
        id: i64,
        status: &str,
    ) -> Result<(), AppError> {
        let status: BookingStatus = status
            .parse()
            .map_err(|e: crate::model::UnknownStatus| AppError::Validation(e.to_string()))?;
        match store.set_booking_status(id, status).await? {
            StatusUpdate::Applied => Ok(()),
            StatusUpdate::NotFound => {
                tracing::debug!(id, "status patch matched no booking");
                Ok(())
            }
            StatusUpdate::Rejected { current } => Err(AppError::Conflict(format!(
                "booking {} is {} and cannot become {}",
                id, current, status
            ))),
        }
    }

    pub async fn settings(store: &dyn HotelStore) -> Result<Option<Settings>, AppError> {
        store.get_settings().await
    }

    pub async fn replace_settings(
        store: &dyn HotelStore,
        settings: Settings,
    ) -> Result<Settings, AppError> {
        store.replace_settings(&settings).await
    }

    pub async fn dashboard_stats(store: &dyn HotelStore) -> Result<DashboardStats, AppError> {
        let bookings = store.list_bookings().await?;
        let rooms = store.list_rooms().await?;
        Ok(DashboardStats::compute(&bookings, &rooms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryHotelStore;
    use chrono::NaiveDate;

    fn room(id: Option<i64>, name: &str, price: f64) -> RoomPayload {
        RoomPayload {
            id,
            name: name.into(),
            price,
            capacity: 2,
            ..Default::default()
        }
    }

    fn booking(room_name: &str) -> BookingPayload {
        let day = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        BookingPayload {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            room_name: room_name.into(),
            check_in: day,
            check_out: day,
            guests: "2".into(),
            requests: String::new(),
        }
    }

    #[tokio::test]
    async fn insert_upserts_mint_distinct_ids_for_same_name() {
        let store = MemoryHotelStore::new();
        let a = CatalogService::upsert_room(&store, room(None, "Twin", 90.0)).await.unwrap();
        let b = CatalogService::upsert_room(&store, room(None, "Twin", 90.0)).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.list_rooms().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_upsert_keeps_id_and_touches_one_row() {
        let store = MemoryHotelStore::new();
        let a = CatalogService::upsert_room(&store, room(None, "A", 90.0)).await.unwrap();
        let b = CatalogService::upsert_room(&store, room(None, "B", 95.0)).await.unwrap();
        let updated = CatalogService::upsert_room(&store, room(Some(a.id), "A2", 120.0))
            .await
            .unwrap();
        assert_eq!(updated.id, a.id);
        let rooms = store.list_rooms().await.unwrap();
        assert_eq!(rooms[0].name, "A2");
        assert_eq!(rooms[0].price, 120.0);
        assert_eq!(rooms[1], b);
    }

    #[tokio::test]
    async fn update_upsert_of_unknown_id_is_a_quiet_no_op() {
        let store = MemoryHotelStore::new();
        let echoed = CatalogService::upsert_room(&store, room(Some(99), "Ghost", 10.0))
            .await
            .unwrap();
        assert_eq!(echoed.id, 99);
        assert!(store.list_rooms().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn amenity_upsert_follows_room_rules() {
        let store = MemoryHotelStore::new();
        let pool = CatalogService::upsert_amenity(
            &store,
            AmenityPayload {
                id: None,
                name: "Pool".into(),
                description: String::new(),
                icon: "🏊".into(),
            },
        )
        .await
        .unwrap();
        let renamed = CatalogService::upsert_amenity(
            &store,
            AmenityPayload {
                id: Some(pool.id),
                name: "Rooftop Pool".into(),
                description: "Heated".into(),
                icon: "🏊".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(renamed.id, pool.id);
        assert_eq!(store.list_amenities().await.unwrap(), vec![renamed]);
    }

    #[tokio::test]
    async fn status_must_be_known() {
        let store = MemoryHotelStore::new();
        let b = CatalogService::place_booking(&store, booking("Deluxe Room")).await.unwrap();
        let err = CatalogService::change_booking_status(&store, b.id, "Pending")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn cancellation_is_one_way() {
        let store = MemoryHotelStore::new();
        let b = CatalogService::place_booking(&store, booking("Deluxe Room")).await.unwrap();
        CatalogService::change_booking_status(&store, b.id, "Cancelled").await.unwrap();
        CatalogService::change_booking_status(&store, b.id, "Cancelled").await.unwrap();
        let err = CatalogService::change_booking_status(&store, b.id, "Confirmed")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        let listed = store.list_bookings().await.unwrap();
        assert_eq!(listed[0].status, BookingStatus::Cancelled);
    }

    #[tokio::test]
    async fn patching_unknown_booking_succeeds() {
        let store = MemoryHotelStore::new();
        CatalogService::change_booking_status(&store, 404, "Cancelled").await.unwrap();
    }

    #[tokio::test]
    async fn dashboard_stats_reads_both_lists() {
        let store = MemoryHotelStore::new();
        store.initialize().await.unwrap();
        CatalogService::place_booking(&store, booking("Deluxe Room")).await.unwrap();
        let stats = CatalogService::dashboard_stats(&store).await.unwrap();
        assert_eq!(stats.total_bookings, 1);
        assert_eq!(stats.active_rooms, 3);
        assert_eq!(stats.revenue, 280.0);
    }
}
