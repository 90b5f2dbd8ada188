//! Postgres store, run only when `HOTEL_TEST_DATABASE_URL` points at a scratch database.
//! The tables in that database are dropped and recreated.

use hotel_cms::model::{BookingPayload, BookingStatus, RoomPayload, Settings};
use hotel_cms::store::{SeedReport, StatusUpdate};
use hotel_cms::{HotelStore, PgHotelStore};
use sqlx::postgres::PgPoolOptions;

async fn fresh_store() -> Option<PgHotelStore> {
    let Ok(url) = std::env::var("HOTEL_TEST_DATABASE_URL") else {
        eprintln!("HOTEL_TEST_DATABASE_URL not set, skipping");
        return None;
    };
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .unwrap();
    sqlx::query("DROP TABLE IF EXISTS rooms, bookings, settings, amenities")
        .execute(&pool)
        .await
        .unwrap();
    Some(PgHotelStore::new(pool))
}

fn booking(first_name: &str) -> BookingPayload {
    BookingPayload {
        first_name: first_name.into(),
        last_name: "Guest".into(),
        email: "guest@example.com".into(),
        room_name: "Deluxe Room".into(),
        check_in: "2025-07-10".parse().unwrap(),
        check_out: "2025-07-12".parse().unwrap(),
        guests: "2".into(),
        requests: String::new(),
    }
}

// One test so the shared tables are never touched concurrently.
#[tokio::test]
async fn postgres_store_behaviour() {
    let Some(store) = fresh_store().await else {
        return;
    };

    let first = store.initialize().await.unwrap();
    assert_eq!(
        first,
        SeedReport {
            rooms: true,
            amenities: true,
            settings: true
        }
    );
    assert_eq!(store.initialize().await.unwrap(), SeedReport::default());
    store.ping().await.unwrap();

    let rooms = store.list_rooms().await.unwrap();
    assert_eq!(rooms.len(), 3);
    assert_eq!(rooms[1].price, 280.0);
    assert_eq!(store.list_amenities().await.unwrap().len(), 4);

    let created = store
        .insert_room(&RoomPayload {
            name: "Garden Room".into(),
            price: 199.999,
            capacity: 2,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.price, 200.0);
    assert!(store
        .update_room(999_999, &RoomPayload::default())
        .await
        .unwrap()
        .is_none());
    store.delete_room(created.id).await.unwrap();
    store.delete_room(created.id).await.unwrap();
    assert_eq!(store.list_rooms().await.unwrap().len(), 3);

    let a = store.insert_booking(&booking("a")).await.unwrap();
    let b = store.insert_booking(&booking("b")).await.unwrap();
    assert_eq!(a.status, BookingStatus::Confirmed);
    let listed: Vec<i64> = store
        .list_bookings()
        .await
        .unwrap()
        .iter()
        .map(|x| x.id)
        .collect();
    assert_eq!(listed, vec![b.id, a.id]);

    assert_eq!(
        store
            .set_booking_status(a.id, BookingStatus::Cancelled)
            .await
            .unwrap(),
        StatusUpdate::Applied
    );
    assert_eq!(
        store
            .set_booking_status(a.id, BookingStatus::Confirmed)
            .await
            .unwrap(),
        StatusUpdate::Rejected {
            current: BookingStatus::Cancelled
        }
    );
    assert_eq!(
        store
            .set_booking_status(999_999, BookingStatus::Cancelled)
            .await
            .unwrap(),
        StatusUpdate::NotFound
    );

    let next = Settings {
        hero_title: "Welcome".into(),
        ..Settings::default()
    };
    store.replace_settings(&next).await.unwrap();
    assert_eq!(store.get_settings().await.unwrap(), Some(next));
}
