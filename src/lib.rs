// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod error;
pub mod fetch;
pub mod fmt;
pub mod meter;
pub mod model;
pub mod page;
pub mod prefs;
pub mod render;
pub mod ui;
pub mod validate;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::error::LoadError;
pub use crate::fetch::DocumentFetcher;
