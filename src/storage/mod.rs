// Libricat - Personal Book Catalog
// Copyright (C) 2026 Libricat contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! Database storage and models
//!
//! All persistence goes through SQLite via sqlx. The store is the sole
//! owner of both entities; callers hold only transient rows fetched for a
//! single operation.
//!
//! # Database Schema
//! - Authors: one row per distinct author name (dedup key: name)
//! - Books: one row per distinct title (dedup key: title), with a nullable
//!   reference to its author
//!
//! # Usage Example
//! ```no_run
//! use libricat::storage::{books, Database};
//! use libricat::storage::models::NewBook;
//!
//! # async fn example() -> libricat::error::Result<()> {
//! let db = Database::new("./catalog.db").await?;
//!
//! let book_id = books::insert_book(db.pool(), &NewBook::new("The Odyssey", "en")).await?;
//! let book = books::find_book_by_title(db.pool(), "The Odyssey").await?;
//! # Ok(())
//! # }
//! ```

pub mod authors;
pub mod books;
pub mod database;
pub mod migrations;
pub mod models;

// Re-export commonly used types
pub use database::Database;
pub use models::{Author, AuthorWithBooks, Book, BookWithAuthor, NewAuthor, NewBook};
