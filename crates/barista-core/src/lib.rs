//! Barista core library
//!
//! Provides the drink catalog, recipe derivation and the JSON-backed
//! selection log used by the Barista API service.

pub mod catalog;
pub mod error;
pub mod recipe;
pub mod selection;

// Re-export commonly used types
pub use catalog::{BaseRecipe, DRINK_IDS, FLAVORS};
pub use error::{CoreError, Result};
pub use recipe::{derive, DerivedRecipe};
pub use selection::{SelectionLog, SelectionRecord};
