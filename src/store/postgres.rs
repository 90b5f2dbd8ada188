//! PostgreSQL store: table DDL, seeding and one parameterized statement per operation.

use super::{seed, HotelStore, SeedReport, StatusUpdate};
use crate::error::AppError;
use crate::model::{
    Amenity, AmenityPayload, Booking, BookingPayload, BookingStatus, Room, RoomPayload, Settings,
};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool, Postgres, QueryBuilder};

const SCHEMA: &[(&str, &str)] = &[
    (
        "rooms",
        r#"
        CREATE TABLE IF NOT EXISTS rooms (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            price NUMERIC(10, 2) NOT NULL,
            capacity INTEGER NOT NULL,
            size VARCHAR(50),
            image TEXT,
            hue_rotate INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "bookings",
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id BIGSERIAL PRIMARY KEY,
            first_name VARCHAR(100) NOT NULL,
            last_name VARCHAR(100) NOT NULL,
            email VARCHAR(255) NOT NULL,
            room_name VARCHAR(255) NOT NULL,
            check_in DATE NOT NULL,
            check_out DATE NOT NULL,
            guests VARCHAR(50),
            requests TEXT,
            status VARCHAR(50) NOT NULL DEFAULT 'Confirmed',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "settings",
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            id INTEGER PRIMARY KEY DEFAULT 1 CHECK (id = 1),
            hero_title TEXT,
            hero_subtitle TEXT,
            contact_email VARCHAR(255),
            contact_phone VARCHAR(50),
            contact_address TEXT,
            footer_tagline TEXT,
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "amenities",
        r#"
        CREATE TABLE IF NOT EXISTS amenities (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            icon VARCHAR(16),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
];

const ROOM_COLUMNS: &str = "id, name, COALESCE(description, '') AS description, price::float8 AS price, \
     capacity, COALESCE(size, '') AS size, COALESCE(image, '') AS image, hue_rotate";

const AMENITY_COLUMNS: &str =
    "id, name, COALESCE(description, '') AS description, COALESCE(icon, '') AS icon";

const BOOKING_COLUMNS: &str = "id, first_name, last_name, email, room_name, check_in, check_out, \
     COALESCE(guests, '') AS guests, COALESCE(requests, '') AS requests, status, created_at";

const SETTINGS_COLUMNS: &str = "COALESCE(hero_title, '') AS hero_title, \
     COALESCE(hero_subtitle, '') AS hero_subtitle, COALESCE(contact_email, '') AS contact_email, \
     COALESCE(contact_phone, '') AS contact_phone, COALESCE(contact_address, '') AS contact_address, \
     COALESCE(footer_tagline, '') AS footer_tagline";

/// Store backed by a shared, bounded `PgPool`. Callers wait for a free connection.
#[derive(Clone)]
pub struct PgHotelStore {
    pool: PgPool,
}

impl PgHotelStore {
    pub fn new(pool: PgPool) -> Self {
        PgHotelStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// `CREATE TABLE IF NOT EXISTS` for every table.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        for (table, ddl) in SCHEMA {
            tracing::debug!(table, "ensure table");
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        Ok(())
    }

    async fn is_empty(&self, table: &str) -> Result<bool, AppError> {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        tracing::debug!(sql = %sql, "query");
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count == 0)
    }

    async fn seed_rooms(&self) -> Result<(), AppError> {
        let mut q: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO rooms (name, description, price, capacity, size, image, hue_rotate) ",
        );
        q.push_values(seed::rooms(), |mut b, r| {
            b.push_bind(r.name)
                .push_bind(r.description)
                .push_bind(r.price)
                .push_bind(r.capacity)
                .push_bind(r.size)
                .push_bind(r.image)
                .push_bind(r.hue_rotate);
        });
        tracing::debug!(sql = %q.sql(), "query");
        q.build().execute(&self.pool).await?;
        Ok(())
    }

    async fn seed_amenities(&self) -> Result<(), AppError> {
        let mut q: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO amenities (name, description, icon) ");
        q.push_values(seed::amenities(), |mut b, a| {
            b.push_bind(a.name).push_bind(a.description).push_bind(a.icon);
        });
        tracing::debug!(sql = %q.sql(), "query");
        q.build().execute(&self.pool).await?;
        Ok(())
    }

    async fn seed_settings(&self) -> Result<(), AppError> {
        let s = seed::settings();
        let sql = "INSERT INTO settings (id, hero_title, hero_subtitle, contact_email, contact_phone, \
                   contact_address, footer_tagline) VALUES (1, $1, $2, $3, $4, $5, $6) \
                   ON CONFLICT (id) DO NOTHING";
        tracing::debug!(sql = %sql, "query");
        sqlx::query(sql)
            .bind(&s.hero_title)
            .bind(&s.hero_subtitle)
            .bind(&s.contact_email)
            .bind(&s.contact_phone)
            .bind(&s.contact_address)
            .bind(&s.footer_tagline)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, table: &str, id: i64) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", table);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl HotelStore for PgHotelStore {
    async fn initialize(&self) -> Result<SeedReport, AppError> {
        self.ensure_schema().await?;
        let mut report = SeedReport::default();
        if self.is_empty("rooms").await? {
            self.seed_rooms().await?;
            report.rooms = true;
            tracing::info!("seeded default rooms");
        }
        if self.is_empty("settings").await? {
            self.seed_settings().await?;
            report.settings = true;
            tracing::info!("seeded default settings");
        }
        if self.is_empty("amenities").await? {
            self.seed_amenities().await?;
            report.amenities = true;
            tracing::info!("seeded default amenities");
        }
        Ok(report)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_rooms(&self) -> Result<Vec<Room>, AppError> {
        let sql = format!("SELECT {} FROM rooms ORDER BY id", ROOM_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql).fetch_all(&self.pool).await?)
    }

    async fn insert_room(&self, room: &RoomPayload) -> Result<Room, AppError> {
        let sql = format!(
            "INSERT INTO rooms (name, description, price, capacity, size, image, hue_rotate) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            ROOM_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql)
            .bind(&room.name)
            .bind(&room.description)
            .bind(room.price)
            .bind(room.capacity)
            .bind(&room.size)
            .bind(&room.image)
            .bind(room.hue_rotate)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update_room(&self, id: i64, room: &RoomPayload) -> Result<Option<Room>, AppError> {
        let sql = format!(
            "UPDATE rooms SET name = $1, description = $2, price = $3, capacity = $4, size = $5, \
             image = $6, hue_rotate = $7 WHERE id = $8 RETURNING {}",
            ROOM_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(&sql)
            .bind(&room.name)
            .bind(&room.description)
            .bind(room.price)
            .bind(room.capacity)
            .bind(&room.size)
            .bind(&room.image)
            .bind(room.hue_rotate)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete_room(&self, id: i64) -> Result<(), AppError> {
        self.delete_by_id("rooms", id).await
    }

    async fn list_amenities(&self) -> Result<Vec<Amenity>, AppError> {
        let sql = format!("SELECT {} FROM amenities ORDER BY id", AMENITY_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql).fetch_all(&self.pool).await?)
    }

    async fn insert_amenity(&self, amenity: &AmenityPayload) -> Result<Amenity, AppError> {
        let sql = format!(
            "INSERT INTO amenities (name, description, icon) VALUES ($1, $2, $3) RETURNING {}",
            AMENITY_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql)
            .bind(&amenity.name)
            .bind(&amenity.description)
            .bind(&amenity.icon)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update_amenity(
        &self,
        id: i64,
        amenity: &AmenityPayload,
    ) -> Result<Option<Amenity>, AppError> {
        let sql = format!(
            "UPDATE amenities SET name = $1, description = $2, icon = $3 WHERE id = $4 RETURNING {}",
            AMENITY_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(&sql)
            .bind(&amenity.name)
            .bind(&amenity.description)
            .bind(&amenity.icon)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete_amenity(&self, id: i64) -> Result<(), AppError> {
        self.delete_by_id("amenities", id).await
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, AppError> {
        let sql = format!(
            "SELECT {} FROM bookings ORDER BY created_at DESC, id DESC",
            BOOKING_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql).fetch_all(&self.pool).await?)
    }

    async fn insert_booking(&self, booking: &BookingPayload) -> Result<Booking, AppError> {
        let sql = format!(
            "INSERT INTO bookings (first_name, last_name, email, room_name, check_in, check_out, \
             guests, requests, status) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING {}",
            BOOKING_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql)
            .bind(&booking.first_name)
            .bind(&booking.last_name)
            .bind(&booking.email)
            .bind(&booking.room_name)
            .bind(booking.check_in)
            .bind(booking.check_out)
            .bind(&booking.guests)
            .bind(&booking.requests)
            .bind(BookingStatus::Confirmed.as_str())
            .fetch_one(&self.pool)
            .await?)
    }

    async fn set_booking_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> Result<StatusUpdate, AppError> {
        // The CTE snapshot sees the status from before the UPDATE runs.
        let sql = "WITH previous AS (SELECT status FROM bookings WHERE id = $1), \
                   changed AS (UPDATE bookings SET status = $2 WHERE id = $1 \
                   AND (status = $2 OR status = 'Confirmed') RETURNING id) \
                   SELECT status FROM previous";
        tracing::debug!(sql = %sql, id, status = %status, "query");
        let previous: Option<String> = sqlx::query_scalar(sql)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(&self.pool)
            .await?;
        let previous = previous
            .map(BookingStatus::try_from)
            .transpose()
            .map_err(|e| AppError::Storage(e.to_string()))?;
        Ok(StatusUpdate::from_previous(previous, status))
    }

    async fn get_settings(&self) -> Result<Option<Settings>, AppError> {
        let sql = format!("SELECT {} FROM settings WHERE id = 1", SETTINGS_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql).fetch_optional(&self.pool).await?)
    }

    async fn replace_settings(&self, settings: &Settings) -> Result<Settings, AppError> {
        let sql = format!(
            "INSERT INTO settings (id, hero_title, hero_subtitle, contact_email, contact_phone, \
             contact_address, footer_tagline) VALUES (1, $1, $2, $3, $4, $5, $6) \
             ON CONFLICT (id) DO UPDATE SET hero_title = EXCLUDED.hero_title, \
             hero_subtitle = EXCLUDED.hero_subtitle, contact_email = EXCLUDED.contact_email, \
             contact_phone = EXCLUDED.contact_phone, contact_address = EXCLUDED.contact_address, \
             footer_tagline = EXCLUDED.footer_tagline, updated_at = NOW() RETURNING {}",
            SETTINGS_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql)
            .bind(&settings.hero_title)
            .bind(&settings.hero_subtitle)
            .bind(&settings.contact_email)
            .bind(&settings.contact_phone)
            .bind(&settings.contact_address)
            .bind(&settings.footer_tagline)
            .fetch_one(&self.pool)
            .await?)
    }
}

/// Ensure the database named in `options` exists; create it if not. Connects to the
/// default `postgres` database with the same credentials to run CREATE DATABASE. Call
/// before creating the main pool.
pub async fn ensure_database_exists(options: &PgConnectOptions) -> Result<(), AppError> {
    let db_name = match options.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(()),
    };
    let mut conn: sqlx::PgConnection = options.clone().database("postgres").connect().await?;
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
