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


//! Database models
//!
//! Entity rows, insert records, and the display projections used by the
//! query views. Both entities are append-only: created on registration,
//! never updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// MAIN ENTITIES
// ============================================================================

/// Author row
///
/// `name` is the dedup key: at most one row per distinct name,
/// case-sensitive exact match.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Author {
    /// Primary key (auto-increment)
    pub author_id: i64,
    pub name: String,
    #[sqlx(default)]
    pub birth_year: Option<i64>,
    /// Absent means still alive or unknown
    #[sqlx(default)]
    pub death_year: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Author {
    /// Liveness predicate: alive in `year` iff the birth year is known and
    /// not after `year`, and any known death year is not before `year`.
    /// Authors with an unknown birth year are never considered alive.
    pub fn is_alive_in(&self, year: i64) -> bool {
        match self.birth_year {
            Some(birth) => birth <= year && self.death_year.map_or(true, |death| death >= year),
            None => false,
        }
    }
}

/// Book row
///
/// `title` is the dedup key: at most one row per distinct title,
/// case-sensitive exact match. `language` is the first code reported by
/// the source; `author_id` is null when author resolution yielded no
/// usable name.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Book {
    /// Primary key (auto-increment)
    pub book_id: i64,
    pub title: String,
    pub language: String,
    #[sqlx(default)]
    pub download_count: Option<i64>,
    #[sqlx(default)]
    pub author_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// NEW RECORD STRUCTS (for inserts)
// ============================================================================

/// New author record for insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAuthor {
    pub name: String,
    pub birth_year: Option<i64>,
    pub death_year: Option<i64>,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birth_year: None,
            death_year: None,
        }
    }
}

/// New book record for insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub language: String,
    pub download_count: Option<i64>,
    pub author_id: Option<i64>,
}

impl NewBook {
    pub fn new(title: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            language: language.into(),
            download_count: None,
            author_id: None,
        }
    }
}

// ============================================================================
// DISPLAY PROJECTIONS
// ============================================================================

/// Book row joined with its author's name
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BookWithAuthor {
    pub book_id: i64,
    pub title: String,
    pub language: String,
    #[sqlx(default)]
    pub download_count: Option<i64>,
    #[sqlx(default)]
    pub author_name: Option<String>,
}

/// Author row with the titles of its books concatenated
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AuthorWithBooks {
    pub author_id: i64,
    pub name: String,
    #[sqlx(default)]
    pub birth_year: Option<i64>,
    #[sqlx(default)]
    pub death_year: Option<i64>,
    /// Comma-separated titles, null for an author with no books yet
    #[sqlx(default)]
    pub titles: Option<String>,
}

impl AuthorWithBooks {
    /// Split the concatenated titles back into a list
    pub fn book_titles(&self) -> Vec<&str> {
        self.titles
            .as_deref()
            .map(|t| t.split(", ").collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(birth_year: Option<i64>, death_year: Option<i64>) -> Author {
        Author {
            author_id: 1,
            name: "Test Author".to_string(),
            birth_year,
            death_year,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn unknown_birth_year_is_never_alive() {
        let a = author(None, None);
        assert!(!a.is_alive_in(1800));
        assert!(!a.is_alive_in(2000));

        // Even a known death year cannot establish liveness
        let a = author(None, Some(1850));
        assert!(!a.is_alive_in(1820));
    }

    #[test]
    fn open_ended_author_is_alive_from_birth_onward() {
        let a = author(Some(1800), None);
        assert!(!a.is_alive_in(1799));
        assert!(a.is_alive_in(1800));
        assert!(a.is_alive_in(1900));
        assert!(a.is_alive_in(2100));
    }

    #[test]
    fn bounded_lifespan_is_inclusive_on_both_ends() {
        let a = author(Some(1800), Some(1850));
        assert!(!a.is_alive_in(1799));
        assert!(a.is_alive_in(1800));
        assert!(a.is_alive_in(1825));
        assert!(a.is_alive_in(1850));
        assert!(!a.is_alive_in(1851));
    }

    #[test]
    fn book_titles_splits_the_projection() {
        let a = AuthorWithBooks {
            author_id: 1,
            name: "Austen, Jane".to_string(),
            birth_year: Some(1775),
            death_year: Some(1817),
            titles: Some("Pride and Prejudice, Emma".to_string()),
        };
        assert_eq!(a.book_titles(), vec!["Pride and Prejudice", "Emma"]);

        let none = AuthorWithBooks { titles: None, ..a };
        assert!(none.book_titles().is_empty());
    }
}
