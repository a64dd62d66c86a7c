//! Items Client
//!
//! Layered like the rest of the workspace:
//! - model: entities exchanged with the server
//! - api: the HTTP calls behind a trait
//! - service: what the UI handlers run (validation, logging)

mod api;
mod config;
mod error;
mod model;
mod service;


pub use api::{HttpItemsApi, ItemsApi};
pub use config::{ApiConfig, DEFAULT_ITEMS_URL};
pub use error::{ApiError, ApiResult};
pub use model::{is_blank_name, Item, ItemPayload};
pub use service::{ItemsService, Mutation};
