//! Client side of the `/servicos` REST collection.

pub mod api;
pub mod error;
pub mod model;

pub use api::{CatalogApi, HttpCatalogApi};
pub use error::ApiError;
pub use model::{decode_services, ImageRef, Service, ServicePayload};
