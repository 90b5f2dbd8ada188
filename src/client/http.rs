//! HTTP implementation of the client data adapter.

use super::{ClientError, ClientResult, HotelApi};
use crate::case::value_keys_to_camel_case_recursive;
use crate::error::ErrorBody;
use crate::model::{
    Amenity, AmenityPayload, Booking, BookingPayload, BookingStatus, DashboardStats, Room,
    RoomPayload, Settings, StatusPatch,
};
use crate::response::{Ack, HealthBody};
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Connection settings for [`HotelClient`]
#[derive(Debug, Clone)]
pub struct HotelClientConfig {
    /// API root including the `/api` prefix
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for HotelClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: 30,
        }
    }
}

impl HotelClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// HTTP client for the hotel API
#[derive(Debug, Clone)]
pub struct HotelClient {
    client: Client,
    base_url: String,
}

impl HotelClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &HotelClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a request with a JSON body
    async fn send<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    async fn delete(&self, path: &str) -> ClientResult<Ack> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Read path: any failure is logged and replaced by the empty value.
    async fn get_or_default<T: DeserializeOwned + Default>(&self, path: &str) -> T {
        match self.get(path).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(path, error = %e, "read failed, using empty result");
                T::default()
            }
        }
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            return Err(match status {
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    ClientError::Validation(message)
                }
                StatusCode::CONFLICT => ClientError::Conflict(message),
                _ => ClientError::Server {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        let mut body: Value = response.json().await?;
        value_keys_to_camel_case_recursive(&mut body);
        Ok(serde_json::from_value(body)?)
    }

    pub async fn health(&self) -> ClientResult<HealthBody> {
        self.get("health").await
    }
}

#[async_trait]
impl HotelApi for HotelClient {
    async fn rooms(&self) -> Vec<Room> {
        self.get_or_default("rooms").await
    }

    async fn save_room(&self, room: &RoomPayload) -> ClientResult<Room> {
        self.send(Method::POST, "rooms", room).await
    }

    async fn delete_room(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("rooms/{}", id)).await.map(|_| ())
    }

    async fn bookings(&self) -> Vec<Booking> {
        self.get_or_default("bookings").await
    }

    async fn add_booking(&self, booking: &BookingPayload) -> ClientResult<Booking> {
        self.send(Method::POST, "bookings", booking).await
    }

    async fn update_booking_status(&self, id: i64, status: BookingStatus) -> ClientResult<()> {
        let patch = StatusPatch {
            status: status.to_string(),
        };
        self.send::<Ack, _>(Method::PATCH, &format!("bookings/{}", id), &patch)
            .await
            .map(|_| ())
    }

    async fn settings(&self) -> Settings {
        self.get_or_default("settings").await
    }

    async fn fetch_settings(&self) -> ClientResult<Settings> {
        self.get("settings").await
    }

    async fn save_settings(&self, settings: &Settings) -> ClientResult<Settings> {
        self.send(Method::PUT, "settings", settings).await
    }

    async fn amenities(&self) -> Vec<Amenity> {
        self.get_or_default("amenities").await
    }

    async fn save_amenity(&self, amenity: &AmenityPayload) -> ClientResult<Amenity> {
        self.send(Method::POST, "amenities", amenity).await
    }

    async fn delete_amenity(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("amenities/{}", id)).await.map(|_| ())
    }

    async fn dashboard_stats(&self) -> DashboardStats {
        self.get_or_default("stats").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_onto_base_url() {
        let client = HotelClient::new(&HotelClientConfig::new("http://localhost:3000/api/")).unwrap();
        assert_eq!(client.url("rooms"), "http://localhost:3000/api/rooms");
        assert_eq!(client.url("/rooms/3"), "http://localhost:3000/api/rooms/3");
    }
}
