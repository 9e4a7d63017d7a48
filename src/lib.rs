//! Shelfmark Library Catalog Server
//!
//! A small REST JSON API for managing a library catalog of authors and
//! books. Duplicate authors are prevented by normalizing entered names to a
//! canonical key (see [`normalize`]).

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
