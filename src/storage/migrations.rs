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


//! Database migrations
//!
//! Schema creation and upgrades are implemented as runtime SQL execution
//! and tracked in the `_migrations` table, so opening a database always
//! brings it up to date.

use crate::error::Result;
use sqlx::{Executor, SqlitePool};

/// Run all database migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    create_migrations_table(pool).await?;

    run_migration(pool, 1, "initial_schema", create_initial_schema(pool)).await?;

    Ok(())
}

/// Create migrations tracking table
async fn create_migrations_table(pool: &SqlitePool) -> Result<()> {
    pool.execute(
        r#"
        CREATE TABLE IF NOT EXISTS _migrations (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .await?;

    Ok(())
}

/// Run a single migration if it hasn't been applied yet
async fn run_migration(
    pool: &SqlitePool,
    id: i32,
    name: &str,
    migration_fn: impl std::future::Future<Output = Result<()>>,
) -> Result<()> {
    let applied: Option<i32> = sqlx::query_scalar("SELECT id FROM _migrations WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    if applied.is_some() {
        return Ok(());
    }

    migration_fn.await?;

    sqlx::query("INSERT INTO _migrations (id, name) VALUES (?, ?)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await?;

    Ok(())
}

/// Create initial database schema
///
/// The UNIQUE constraints on `Authors.name` and `Books.title` are the
/// storage-level backing for the dedup keys; the pipeline's
/// find-then-insert sequence stays correct even if it were ever driven
/// concurrently.
async fn create_initial_schema(pool: &SqlitePool) -> Result<()> {
    pool.execute(
        r#"
-- Authors table: one row per distinct author name
CREATE TABLE IF NOT EXISTS Authors (
    author_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    birth_year INTEGER,
    death_year INTEGER,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

-- Books table: one row per distinct title
CREATE TABLE IF NOT EXISTS Books (
    book_id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL UNIQUE,
    language TEXT NOT NULL,
    download_count INTEGER,
    author_id INTEGER REFERENCES Authors(author_id),
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_books_language ON Books(language);
CREATE INDEX IF NOT EXISTS idx_books_author ON Books(author_id);
        "#,
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    #[tokio::test]
    async fn migrations_are_recorded_once() {
        let db = Database::new_in_memory().await.expect("Failed to create database");

        // Database::new_in_memory already migrated; running again is a no-op
        run_migrations(db.pool()).await.expect("Re-running migrations failed");

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _migrations")
            .fetch_one(db.pool())
            .await
            .expect("Failed to count migrations");

        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn dedup_keys_are_backed_by_unique_constraints() {
        let db = Database::new_in_memory().await.expect("Failed to create database");

        sqlx::query("INSERT INTO Books (title, language) VALUES ('X', 'en')")
            .execute(db.pool())
            .await
            .expect("first insert should succeed");

        let duplicate = sqlx::query("INSERT INTO Books (title, language) VALUES ('X', 'fr')")
            .execute(db.pool())
            .await;

        assert!(duplicate.is_err(), "duplicate title must violate UNIQUE");
    }
}
