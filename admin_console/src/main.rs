//! Terminal admin dashboard: a separate binary that talks to the hotel API through the
//! client adapter, the same way the browser dashboard does.
//!
//! Run from repo root: `cargo run -p admin-console -- [command]`
//!
//! Commands: `dashboard` (default), `cancel <booking-id>`, `delete-room <id>`,
//! `delete-amenity <id>`, `set <setting> <value>`.

use hotel_cms::client::views::{AdminActions, AdminDashboardView};
use hotel_cms::client::{ClientResult, DEFAULT_BASE_URL};
use hotel_cms::{HotelApi, HotelClient, HotelClientConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hotel_cms=warn")),
        )
        .init();

    let base_url = std::env::var("HOTEL_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
    let client = HotelClient::new(&HotelClientConfig::new(base_url))?;
    let actions = AdminActions::new(&client);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args.as_slice() {
        [] | ["dashboard"] => {}
        ["cancel", id] => report(actions.cancel_booking(id.parse()?).await, "booking cancelled"),
        ["delete-room", id] => report(actions.delete_room(id.parse()?).await, "room deleted"),
        ["delete-amenity", id] => {
            report(actions.delete_amenity(id.parse()?).await, "amenity deleted")
        }
        // Fails without writing when the current settings cannot be read.
        ["set", field, value] => {
            actions.set_setting(field, value).await?;
            println!("settings saved\n");
        }
        _ => {
            return Err(
                "usage: admin-console [dashboard | cancel <id> | delete-room <id> | delete-amenity <id> | set <setting> <value>]"
                    .into(),
            )
        }
    }

    print_dashboard(&client).await;
    Ok(())
}

fn report(result: ClientResult<()>, done: &str) {
    match result {
        Ok(()) => println!("{}\n", done),
        Err(e) => eprintln!("error: {}\n", e),
    }
}

async fn print_dashboard(api: &dyn HotelApi) {
    let view = AdminDashboardView::load(api).await;

    println!("== Overview ==");
    println!(
        "bookings: {}  rooms: {}  revenue: {}",
        view.stats.total_bookings, view.stats.active_rooms, view.stats.revenue_label
    );

    println!("\n== Bookings ==");
    for row in &view.bookings {
        println!(
            "{:>6}  {:<24} {:<20} {:<26} {}{}",
            row.reference,
            row.guest_name,
            row.room_name,
            row.stay,
            row.status,
            if row.can_cancel { "" } else { " (final)" }
        );
    }

    println!("\n== Rooms ==");
    for room in &view.rooms {
        println!(
            "{:>4}  {:<24} {:>10}  {}  {}",
            room.id, room.name, room.price_label, room.capacity_label, room.size
        );
    }

    println!("\n== Amenities ==");
    for amenity in &view.amenities {
        println!("{:>4}  {}", amenity.id, amenity.heading);
    }

    println!("\n== Settings ==");
    let s = &view.settings;
    for (name, value) in [
        ("heroTitle", &s.hero_title),
        ("heroSubtitle", &s.hero_subtitle),
        ("contactEmail", &s.contact_email),
        ("contactPhone", &s.contact_phone),
        ("contactAddress", &s.contact_address),
        ("footerTagline", &s.footer_tagline),
    ] {
        println!("{:<15} {}", name, value);
    }
}
