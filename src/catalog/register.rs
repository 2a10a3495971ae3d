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


//! Title-search registration pipeline
//!
//! Orchestrates a search against the external catalog and the persistence
//! of the first matching candidate: decode results, select the first title
//! containing the search term (case-insensitive), dedup against the store
//! by exact title, resolve or create the author, insert the book.
//!
//! Per successful non-duplicate registration there is at most one Author
//! insert and exactly one Book insert, in that order.

use crate::api::{BookRecord, GutendexClient};
use crate::error::{CatalogError, Result};
use crate::storage::models::{Book, NewAuthor, NewBook};
use crate::storage::{authors, books, Database};
use sqlx::SqlitePool;
use tracing::{debug, info};

/// Terminal outcome of a registration attempt
#[derive(Debug, Clone)]
pub enum RegisterOutcome {
    /// A new book row was written
    Registered(Book),
    /// The matched title already exists; nothing was written
    AlreadyRegistered(Book),
}

impl RegisterOutcome {
    /// The book this outcome refers to, new or pre-existing
    pub fn book(&self) -> &Book {
        match self {
            RegisterOutcome::Registered(book) | RegisterOutcome::AlreadyRegistered(book) => book,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, RegisterOutcome::Registered(_))
    }
}

/// Search the external catalog for `term` and register the first matching
/// candidate.
///
/// A failed fetch or decode aborts with no side effects.
pub async fn register_by_title(
    client: &GutendexClient,
    db: &Database,
    term: &str,
) -> Result<RegisterOutcome> {
    let response = client.search(term).await?;
    debug!(term, count = response.count, "search returned");

    register_from_candidates(db.pool(), response.results, term).await
}

/// Run the match-and-persist half of the pipeline over an already-fetched
/// candidate list (in API order).
pub async fn register_from_candidates(
    pool: &SqlitePool,
    candidates: Vec<BookRecord>,
    term: &str,
) -> Result<RegisterOutcome> {
    if candidates.is_empty() {
        return Err(CatalogError::NoResults {
            term: term.to_string(),
        });
    }

    // First candidate in API order whose title contains the term
    let candidate = candidates
        .into_iter()
        .find(|record| record.matches_title(term))
        .ok_or_else(|| CatalogError::NoMatch {
            term: term.to_string(),
        })?;

    // Exact-title lookup is the sole dedup gate
    if let Some(existing) = books::find_book_by_title(pool, &candidate.title).await? {
        info!(title = %existing.title, "already registered, nothing written");
        return Ok(RegisterOutcome::AlreadyRegistered(existing));
    }

    // Only the first reported language is kept; a candidate without one
    // violates the external data contract
    let language = candidate.languages.first().cloned().ok_or_else(|| {
        CatalogError::InvalidCandidate(format!(
            "candidate '{}' reports no language",
            candidate.title
        ))
    })?;

    // The first listed author is authoritative; no author entry means the
    // book is stored without an author reference
    let author_id = match candidate.authors.first() {
        Some(person) => {
            let author = authors::resolve_or_create_author(
                pool,
                &NewAuthor {
                    name: person.name.clone(),
                    birth_year: person.birth_year,
                    death_year: person.death_year,
                },
            )
            .await?;
            Some(author.author_id)
        }
        None => None,
    };

    let new_book = NewBook {
        title: candidate.title,
        language,
        download_count: candidate.download_count,
        author_id,
    };
    let book_id = books::insert_book(pool, &new_book).await?;
    let book = books::find_book_by_id(pool, book_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    info!(title = %book.title, book_id, "registered book");
    Ok(RegisterOutcome::Registered(book))
}
