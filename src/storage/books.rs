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


//! Book repository
//!
//! Query functions over the Books table. `find_book_by_title` is the sole
//! dedup gate: callers treat a non-empty result as "do not insert".

use crate::error::Result;
use crate::storage::models::{Book, BookWithAuthor, NewBook};
use sqlx::SqlitePool;

/// Insert a new book
///
/// Returns the book_id of the inserted book.
pub async fn insert_book(pool: &SqlitePool, book: &NewBook) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO Books (title, language, download_count, author_id)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&book.title)
    .bind(&book.language)
    .bind(book.download_count)
    .bind(book.author_id)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Find book by exact title (case-sensitive)
pub async fn find_book_by_title(pool: &SqlitePool, title: &str) -> Result<Option<Book>> {
    let book = sqlx::query_as::<_, Book>("SELECT * FROM Books WHERE title = ?")
        .bind(title)
        .fetch_optional(pool)
        .await?;

    Ok(book)
}

/// Find book by ID
pub async fn find_book_by_id(pool: &SqlitePool, book_id: i64) -> Result<Option<Book>> {
    let book = sqlx::query_as::<_, Book>("SELECT * FROM Books WHERE book_id = ?")
        .bind(book_id)
        .fetch_optional(pool)
        .await?;

    Ok(book)
}

/// List all books in insertion order
pub async fn list_books(pool: &SqlitePool) -> Result<Vec<Book>> {
    let books = sqlx::query_as::<_, Book>("SELECT * FROM Books ORDER BY book_id")
        .fetch_all(pool)
        .await?;

    Ok(books)
}

/// List books whose stored language matches `code` (case-insensitive)
pub async fn list_books_by_language(pool: &SqlitePool, code: &str) -> Result<Vec<Book>> {
    let books = sqlx::query_as::<_, Book>(
        "SELECT * FROM Books WHERE language = ? COLLATE NOCASE ORDER BY book_id",
    )
    .bind(code)
    .fetch_all(pool)
    .await?;

    Ok(books)
}

/// List all books joined with their author's name, in insertion order
pub async fn list_books_with_authors(pool: &SqlitePool) -> Result<Vec<BookWithAuthor>> {
    let books = sqlx::query_as::<_, BookWithAuthor>(
        r#"
        SELECT b.book_id, b.title, b.language, b.download_count, a.name AS author_name
        FROM Books b
        LEFT JOIN Authors a ON a.author_id = b.author_id
        ORDER BY b.book_id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(books)
}

/// Language-filtered variant of [`list_books_with_authors`]
pub async fn list_books_by_language_with_authors(
    pool: &SqlitePool,
    code: &str,
) -> Result<Vec<BookWithAuthor>> {
    let books = sqlx::query_as::<_, BookWithAuthor>(
        r#"
        SELECT b.book_id, b.title, b.language, b.download_count, a.name AS author_name
        FROM Books b
        LEFT JOIN Authors a ON a.author_id = b.author_id
        WHERE b.language = ? COLLATE NOCASE
        ORDER BY b.book_id
        "#,
    )
    .bind(code)
    .fetch_all(pool)
    .await?;

    Ok(books)
}

/// Count total books
pub async fn count_books(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Books")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
