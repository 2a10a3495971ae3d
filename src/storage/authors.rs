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


//! Author repository
//!
//! Query functions over the Authors table. `find_author_by_name` is the
//! dedup gate; `resolve_or_create_author` wraps the find-or-create step
//! used during registration.

use crate::error::Result;
use crate::storage::models::{Author, AuthorWithBooks, NewAuthor};
use sqlx::SqlitePool;

/// Insert a new author
///
/// Returns the author_id of the inserted author.
pub async fn insert_author(pool: &SqlitePool, author: &NewAuthor) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO Authors (name, birth_year, death_year)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(&author.name)
    .bind(author.birth_year)
    .bind(author.death_year)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Find author by exact name (case-sensitive)
pub async fn find_author_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Author>> {
    let author = sqlx::query_as::<_, Author>("SELECT * FROM Authors WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    Ok(author)
}

/// Find author by ID
pub async fn find_author_by_id(pool: &SqlitePool, author_id: i64) -> Result<Option<Author>> {
    let author = sqlx::query_as::<_, Author>("SELECT * FROM Authors WHERE author_id = ?")
        .bind(author_id)
        .fetch_optional(pool)
        .await?;

    Ok(author)
}

/// Find or create the author with this exact name
///
/// Returns the existing row when the name is already registered; birth and
/// death years of an existing row are left untouched.
pub async fn resolve_or_create_author(pool: &SqlitePool, author: &NewAuthor) -> Result<Author> {
    if let Some(existing) = find_author_by_name(pool, &author.name).await? {
        return Ok(existing);
    }

    let author_id = insert_author(pool, author).await?;
    let created = find_author_by_id(pool, author_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    Ok(created)
}

/// List all authors in insertion order
pub async fn list_authors(pool: &SqlitePool) -> Result<Vec<Author>> {
    let authors = sqlx::query_as::<_, Author>("SELECT * FROM Authors ORDER BY author_id")
        .fetch_all(pool)
        .await?;

    Ok(authors)
}

/// List authors alive in the given year
///
/// The liveness predicate is evaluated per author in Rust, so the same
/// rule holds regardless of the backing store.
pub async fn list_authors_alive_in(pool: &SqlitePool, year: i64) -> Result<Vec<Author>> {
    let authors = list_authors(pool).await?;

    Ok(authors.into_iter().filter(|a| a.is_alive_in(year)).collect())
}

/// List all authors with the titles of their books, in insertion order
pub async fn list_authors_with_books(pool: &SqlitePool) -> Result<Vec<AuthorWithBooks>> {
    let authors = sqlx::query_as::<_, AuthorWithBooks>(
        r#"
        SELECT a.author_id, a.name, a.birth_year, a.death_year,
               GROUP_CONCAT(b.title, ', ') AS titles
        FROM Authors a
        LEFT JOIN Books b ON b.author_id = a.author_id
        GROUP BY a.author_id
        ORDER BY a.author_id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(authors)
}

/// Count total authors
pub async fn count_authors(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Authors")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
