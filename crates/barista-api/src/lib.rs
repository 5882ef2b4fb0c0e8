//! Barista API service library
//!
//! Exposes the drink catalog, recipe customization and selection history
//! over HTTP.

pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod routes;
pub mod settings;
pub mod state;

// Re-exports
pub use error::{AppError, Result};
