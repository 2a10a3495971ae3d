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


//! External catalog client
//!
//! Talks to a Gutendex-compatible book-metadata API over HTTP and decodes
//! its search responses into typed records. Only the first page of results
//! is ever requested.

pub mod client;
pub mod search;

// Re-export commonly used types
pub use client::{ClientConfig, ClientConfigBuilder, GutendexClient, DEFAULT_BASE_URL};
pub use search::{BookRecord, PersonRecord, SearchResponse};
