//! Client adapter and view state against a live server on an ephemeral port.

use axum::{http::StatusCode, routing::get, Json, Router};
use chrono::NaiveDate;
use hotel_cms::client::views::{
    AdminActions, AdminDashboardView, BookingForm, BookingFormError, PublicSiteView,
    SettingsEditError,
};
use hotel_cms::client::ClientError;
use hotel_cms::model::{BookingStatus, RoomPayload, Settings};
use hotel_cms::{app, AppState, HotelApi, HotelClient, HotelClientConfig, HotelStore, MemoryHotelStore};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

async fn spawn_server(seed: bool) -> HotelClient {
    let store = MemoryHotelStore::new();
    if seed {
        store.initialize().await.unwrap();
    }
    serve(app(AppState::new(store), 1024 * 1024)).await
}

async fn serve(router: Router) -> HotelClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    HotelClient::new(&HotelClientConfig::new(format!("http://{}/api", addr))).unwrap()
}

async fn dead_client() -> HotelClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let mut config = HotelClientConfig::new(format!("http://{}/api", addr));
    config.timeout = 2;
    HotelClient::new(&config).unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[tokio::test]
async fn health_round_trip() {
    let client = spawn_server(false).await;
    let health = client.health().await.unwrap();
    assert_eq!(health.status, "OK");
}

#[tokio::test]
async fn reads_degrade_to_empty_when_unreachable() {
    let client = dead_client().await;
    assert!(client.rooms().await.is_empty());
    assert!(client.bookings().await.is_empty());
    assert!(client.amenities().await.is_empty());
    assert_eq!(client.settings().await, Settings::default());
    assert_eq!(client.dashboard_stats().await.total_bookings, 0);
}

#[tokio::test]
async fn writes_surface_transport_errors() {
    let client = dead_client().await;
    let err = client.delete_room(1).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}

#[tokio::test]
async fn unseeded_settings_read_as_blank() {
    let client = spawn_server(false).await;
    assert_eq!(client.settings().await, Settings::default());
}

#[tokio::test]
async fn public_site_loads_seeded_content() {
    let client = spawn_server(true).await;
    let view = PublicSiteView::load(&client).await;
    assert_eq!(view.rooms.len(), 3);
    assert_eq!(view.amenities.len(), 4);
    assert_eq!(view.settings.contact_email, "reservations@luxehaven.com");
    assert_eq!(view.room_options().len(), 3);
}

#[tokio::test]
async fn booking_form_then_admin_cancel() {
    let client = spawn_server(true).await;

    let mut form = BookingForm::for_room("Deluxe Room");
    form.first_name = "Ada".into();
    form.last_name = "Lovelace".into();
    form.email = "ada@example.com".into();
    form.guests = "2".into();
    assert!(matches!(
        form.submit(&client).await,
        Err(BookingFormError::MissingDates)
    ));
    assert!(client.bookings().await.is_empty());

    form.check_in = Some(date("2025-07-10"));
    form.check_out = Some(date("2025-07-12"));
    let booking = form.submit(&client).await.unwrap();
    assert_eq!(booking.status, BookingStatus::Confirmed);

    let admin = AdminDashboardView::load(&client).await;
    assert_eq!(admin.bookings.len(), 1);
    assert!(admin.bookings[0].can_cancel);
    assert_eq!(admin.stats.total_bookings, 1);

    AdminActions::new(&client)
        .cancel_booking(booking.id)
        .await
        .unwrap();

    let admin = AdminDashboardView::load(&client).await;
    assert_eq!(admin.bookings[0].status, BookingStatus::Cancelled);
    assert!(!admin.bookings[0].can_cancel);
}

#[tokio::test]
async fn reinstating_a_cancelled_booking_is_a_conflict() {
    let client = spawn_server(false).await;
    let mut form = BookingForm::for_room("Executive Suite");
    form.check_in = Some(date("2025-09-01"));
    form.check_out = Some(date("2025-09-03"));
    let booking = form.submit(&client).await.unwrap();

    client
        .update_booking_status(booking.id, BookingStatus::Cancelled)
        .await
        .unwrap();
    let err = client
        .update_booking_status(booking.id, BookingStatus::Confirmed)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Conflict(_)));
}

#[tokio::test]
async fn admin_edits_and_deletes_a_room() {
    let client = spawn_server(true).await;
    let actions = AdminActions::new(&client);

    let mut draft = actions.edit_room(2).await.unwrap();
    draft.price = 299.0;
    let saved = actions.save_room(&draft).await.unwrap();
    assert_eq!(saved.id, 2);

    let rooms = client.rooms().await;
    assert_eq!(rooms[1].price, 299.0);

    let created = actions
        .save_room(&RoomPayload {
            id: None,
            name: "Garden Room".into(),
            description: String::new(),
            price: 180.0,
            capacity: 2,
            size: "30m²".into(),
            image: "room.png".into(),
            hue_rotate: 0,
        })
        .await
        .unwrap();
    assert!(created.id > 3);

    actions.delete_room(created.id).await.unwrap();
    actions.delete_room(created.id).await.unwrap();
    assert_eq!(client.rooms().await.len(), 3);
    assert!(actions.edit_room(created.id).await.is_none());
}

#[tokio::test]
async fn saved_settings_replace_everything() {
    let client = spawn_server(true).await;
    let next = Settings {
        hero_title: "Welcome".into(),
        ..Settings::default()
    };
    let stored = AdminActions::new(&client).save_settings(&next).await.unwrap();
    assert_eq!(stored, next);
    assert_eq!(client.settings().await, next);
}

#[tokio::test]
async fn setting_edit_never_saves_after_a_failed_read() {
    let puts = Arc::new(AtomicUsize::new(0));
    let counter = puts.clone();
    let router = Router::new().route(
        "/api/settings",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "database unavailable" })),
            )
        })
        .put(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                StatusCode::OK
            }
        }),
    );
    let client = serve(router).await;

    // The page read still degrades to blank values.
    assert_eq!(client.settings().await, Settings::default());

    let err = AdminActions::new(&client)
        .set_setting("heroTitle", "New")
        .await
        .unwrap_err();
    match err {
        SettingsEditError::Client(ClientError::Server { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(puts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn setting_edit_changes_one_field() {
    let client = spawn_server(true).await;
    let saved = AdminActions::new(&client)
        .set_setting("contactPhone", "555-0199")
        .await
        .unwrap();
    assert_eq!(saved.contact_phone, "555-0199");
    let read = client.settings().await;
    assert_eq!(read.contact_phone, "555-0199");
    assert_eq!(read.contact_email, "reservations@luxehaven.com");
}
