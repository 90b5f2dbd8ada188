//! In-process store with the same semantics as the PostgreSQL one. Ids are minted from
//! per-table counters and never reused, like a serial column.

use super::{seed, HotelStore, SeedReport, StatusUpdate};
use crate::error::AppError;
use crate::model::{
    Amenity, AmenityPayload, Booking, BookingPayload, BookingStatus, Room, RoomPayload, Settings,
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Tables {
    rooms: BTreeMap<i64, Room>,
    amenities: BTreeMap<i64, Amenity>,
    bookings: Vec<Booking>,
    settings: Option<Settings>,
    last_room_id: i64,
    last_amenity_id: i64,
    last_booking_id: i64,
    last_created_at: Option<DateTime<Utc>>,
}

impl Tables {
    fn add_room(&mut self, room: &RoomPayload) -> Room {
        self.last_room_id += 1;
        let room = room.clone().into_room(self.last_room_id);
        self.rooms.insert(room.id, room.clone());
        room
    }

    fn add_amenity(&mut self, amenity: &AmenityPayload) -> Amenity {
        self.last_amenity_id += 1;
        let amenity = amenity.clone().into_amenity(self.last_amenity_id);
        self.amenities.insert(amenity.id, amenity.clone());
        amenity
    }

    /// Strictly increasing creation times, so newest-first ordering is total.
    fn next_created_at(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let at = match self.last_created_at {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_created_at = Some(at);
        at
    }
}

#[derive(Default)]
pub struct MemoryHotelStore {
    tables: RwLock<Tables>,
}

impl MemoryHotelStore {
    /// An empty, unseeded store. Call [`HotelStore::initialize`] to seed it.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, AppError> {
        self.tables
            .read()
            .map_err(|_| AppError::Storage("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, AppError> {
        self.tables
            .write()
            .map_err(|_| AppError::Storage("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl HotelStore for MemoryHotelStore {
    async fn initialize(&self) -> Result<SeedReport, AppError> {
        let mut t = self.write()?;
        let mut report = SeedReport::default();
        if t.rooms.is_empty() {
            for room in seed::rooms() {
                t.add_room(&room);
            }
            report.rooms = true;
            tracing::info!("seeded default rooms");
        }
        if t.settings.is_none() {
            t.settings = Some(seed::settings());
            report.settings = true;
            tracing::info!("seeded default settings");
        }
        if t.amenities.is_empty() {
            for amenity in seed::amenities() {
                t.add_amenity(&amenity);
            }
            report.amenities = true;
            tracing::info!("seeded default amenities");
        }
        Ok(report)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }

    async fn list_rooms(&self) -> Result<Vec<Room>, AppError> {
        Ok(self.read()?.rooms.values().cloned().collect())
    }

    async fn insert_room(&self, room: &RoomPayload) -> Result<Room, AppError> {
        Ok(self.write()?.add_room(room))
    }

    async fn update_room(&self, id: i64, room: &RoomPayload) -> Result<Option<Room>, AppError> {
        let mut t = self.write()?;
        Ok(t.rooms.get_mut(&id).map(|stored| {
            *stored = room.clone().into_room(id);
            stored.clone()
        }))
    }

    async fn delete_room(&self, id: i64) -> Result<(), AppError> {
        self.write()?.rooms.remove(&id);
        Ok(())
    }

    async fn list_amenities(&self) -> Result<Vec<Amenity>, AppError> {
        Ok(self.read()?.amenities.values().cloned().collect())
    }

    async fn insert_amenity(&self, amenity: &AmenityPayload) -> Result<Amenity, AppError> {
        Ok(self.write()?.add_amenity(amenity))
    }

    async fn update_amenity(
        &self,
        id: i64,
        amenity: &AmenityPayload,
    ) -> Result<Option<Amenity>, AppError> {
        let mut t = self.write()?;
        Ok(t.amenities.get_mut(&id).map(|stored| {
            *stored = amenity.clone().into_amenity(id);
            stored.clone()
        }))
    }

    async fn delete_amenity(&self, id: i64) -> Result<(), AppError> {
        self.write()?.amenities.remove(&id);
        Ok(())
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, AppError> {
        let mut bookings = self.read()?.bookings.clone();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(bookings)
    }

    async fn insert_booking(&self, booking: &BookingPayload) -> Result<Booking, AppError> {
        let mut t = self.write()?;
        t.last_booking_id += 1;
        let id = t.last_booking_id;
        let created_at = t.next_created_at();
        let booking = booking.clone().into_booking(id, created_at);
        t.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn set_booking_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> Result<StatusUpdate, AppError> {
        let mut t = self.write()?;
        let booking = t.bookings.iter_mut().find(|b| b.id == id);
        let previous = booking.as_ref().map(|b| b.status);
        let outcome = StatusUpdate::from_previous(previous, status);
        if let (StatusUpdate::Applied, Some(b)) = (outcome, booking) {
            b.status = status;
        }
        Ok(outcome)
    }

    async fn get_settings(&self) -> Result<Option<Settings>, AppError> {
        Ok(self.read()?.settings.clone())
    }

    async fn replace_settings(&self, settings: &Settings) -> Result<Settings, AppError> {
        self.write()?.settings = Some(settings.clone());
        Ok(settings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str) -> RoomPayload {
        RoomPayload {
            name: name.into(),
            price: 100.0,
            capacity: 2,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryHotelStore::new();
        let a = store.insert_room(&payload("A")).await.unwrap();
        store.delete_room(a.id).await.unwrap();
        let b = store.insert_room(&payload("B")).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn prices_are_kept_to_cents() {
        let store = MemoryHotelStore::new();
        let mut p = payload("A");
        p.price = 19.999;
        let room = store.insert_room(&p).await.unwrap();
        assert_eq!(room.price, 20.0);
        p.price = 99.994;
        let room = store.update_room(room.id, &p).await.unwrap().unwrap();
        assert_eq!(room.price, 99.99);
        assert_eq!(store.list_rooms().await.unwrap()[0].price, 99.99);
    }

    #[tokio::test]
    async fn update_of_missing_id_creates_nothing() {
        let store = MemoryHotelStore::new();
        assert!(store.update_room(42, &payload("Ghost")).await.unwrap().is_none());
        assert!(store.list_rooms().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn initialize_seeds_once() {
        let store = MemoryHotelStore::new();
        let first = store.initialize().await.unwrap();
        assert_eq!(
            first,
            SeedReport {
                rooms: true,
                amenities: true,
                settings: true
            }
        );
        let second = store.initialize().await.unwrap();
        assert_eq!(second, SeedReport::default());
        assert_eq!(store.list_rooms().await.unwrap().len(), 3);
        assert_eq!(store.list_amenities().await.unwrap().len(), 4);
        assert!(store.list_bookings().await.unwrap().is_empty());
    }
}
