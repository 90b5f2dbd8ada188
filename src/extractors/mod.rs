//! Request extractors that report failures in the API's error shape.

mod id;
mod wire;

pub use id::EntityId;
pub use wire::WireJson;
