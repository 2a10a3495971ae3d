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


//! Read-only catalog views
//!
//! Pure presentations over the repositories with no side effects. The
//! language view validates its code against the fixed allow-list before
//! touching the store.

use crate::error::{CatalogError, Result};
use crate::storage::models::{Author, AuthorWithBooks, BookWithAuthor};
use crate::storage::{authors, books, Database};

/// Language codes the catalog can be filtered by
pub const SUPPORTED_LANGUAGES: [&str; 4] = ["es", "en", "fr", "pt"];

/// Check a language code against the allow-list (case-insensitive)
pub fn validate_language(code: &str) -> Result<()> {
    if SUPPORTED_LANGUAGES.iter().any(|l| l.eq_ignore_ascii_case(code)) {
        Ok(())
    } else {
        Err(CatalogError::InvalidLanguage(code.to_string()))
    }
}

/// All registered books with their author names, in insertion order
pub async fn all_books(db: &Database) -> Result<Vec<BookWithAuthor>> {
    books::list_books_with_authors(db.pool()).await
}

/// All registered authors with their book titles, in insertion order
pub async fn all_authors(db: &Database) -> Result<Vec<AuthorWithBooks>> {
    authors::list_authors_with_books(db.pool()).await
}

/// Books in the given language
///
/// Fails with `InvalidLanguage` before querying when the code is outside
/// the allow-list; the stored-code comparison itself is case-insensitive.
pub async fn books_by_language(db: &Database, code: &str) -> Result<Vec<BookWithAuthor>> {
    validate_language(code)?;

    books::list_books_by_language_with_authors(db.pool(), code).await
}

/// Authors alive in the given year
pub async fn authors_alive_in(db: &Database, year: i64) -> Result<Vec<Author>> {
    authors::list_authors_alive_in(db.pool(), year).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::models::NewBook;
    use crate::storage::Database;

    #[test]
    fn allow_list_is_case_insensitive() {
        for code in ["es", "en", "fr", "pt", "EN", "Es"] {
            assert!(validate_language(code).is_ok(), "{code} should be accepted");
        }

        for code in ["de", "it", "english", ""] {
            let err = validate_language(code).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidLanguage(_)), "{code} should be rejected");
        }
    }

    #[tokio::test]
    async fn invalid_code_fails_before_querying() {
        let db = Database::new_in_memory().await.expect("Failed to create database");

        let err = books_by_language(&db, "de").await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidLanguage(_)));
    }

    #[tokio::test]
    async fn upper_and_lower_case_codes_return_identical_results() {
        let db = Database::new_in_memory().await.expect("Failed to create database");

        books::insert_book(db.pool(), &NewBook::new("Hamlet", "en"))
            .await
            .expect("Failed to insert book");
        books::insert_book(db.pool(), &NewBook::new("Don Quijote", "es"))
            .await
            .expect("Failed to insert book");

        let lower = books_by_language(&db, "en").await.expect("Failed to query");
        let upper = books_by_language(&db, "EN").await.expect("Failed to query");

        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].title, "Hamlet");
        assert_eq!(
            lower.iter().map(|b| b.book_id).collect::<Vec<_>>(),
            upper.iter().map(|b| b.book_id).collect::<Vec<_>>()
        );
    }
}
