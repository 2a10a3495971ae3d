//! Libricat - a personal book catalog
//!
//! Searches a Gutendex-compatible book-metadata API by title, registers
//! matched books and their authors in a local SQLite store, and offers
//! query views over that store (by language, by author, by liveness in a
//! given year).

pub mod api;
pub mod catalog;
pub mod error;
pub mod storage;

// Re-export the main entry points
pub use api::{ClientConfig, GutendexClient};
pub use catalog::{register_by_title, RegisterOutcome};
pub use error::{CatalogError, Result};
pub use storage::Database;
