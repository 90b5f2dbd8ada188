//! Service layer: operation semantics shared by the HTTP handlers.

pub mod catalog;

pub use catalog::CatalogService;
