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


//! Typed records for the catalog search response
//!
//! Gutendex answers a title search with a JSON document of the shape
//! `{ "count": n, "results": [ { "title", "languages", "download_count",
//! "authors": [ { "name", "birth_year", "death_year" } ] } ] }`.
//! Unknown fields are ignored; optional fields default so a sparse
//! payload still decodes.

use serde::{Deserialize, Serialize};

/// First page of a title search, in API order
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Total number of matches known to the API (may exceed the page)
    #[serde(default)]
    pub count: i64,

    /// Candidate books on this page
    #[serde(default)]
    pub results: Vec<BookRecord>,
}

/// One candidate book as reported by the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,

    /// Short language codes, most relevant first
    #[serde(default)]
    pub languages: Vec<String>,

    #[serde(default)]
    pub download_count: Option<i64>,

    /// Author entries, most relevant first
    #[serde(default)]
    pub authors: Vec<PersonRecord>,
}

impl BookRecord {
    /// Case-insensitive containment check used for candidate selection
    pub fn matches_title(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Author entry attached to a candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,

    #[serde(default)]
    pub birth_year: Option<i64>,

    #[serde(default)]
    pub death_year: Option<i64>,
}
