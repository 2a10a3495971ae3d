//! End-to-end catalog flow
//!
//! Drives the match-and-persist half of the registration pipeline with
//! injected candidate lists (no network) and checks the query views over
//! the resulting store.

use libricat::api::{BookRecord, PersonRecord};
use libricat::catalog::{register_from_candidates, views, RegisterOutcome};
use libricat::error::CatalogError;
use libricat::storage::Database;

fn melville() -> PersonRecord {
    PersonRecord {
        name: "Melville, Herman".to_string(),
        birth_year: Some(1819),
        death_year: Some(1891),
    }
}

fn verne() -> PersonRecord {
    PersonRecord {
        name: "Verne, Jules".to_string(),
        birth_year: Some(1828),
        death_year: Some(1905),
    }
}

fn record(title: &str, language: &str, author: Option<PersonRecord>) -> BookRecord {
    BookRecord {
        title: title.to_string(),
        languages: vec![language.to_string()],
        download_count: Some(1000),
        authors: author.into_iter().collect(),
    }
}

#[tokio::test]
async fn register_then_query_through_the_views() {
    let db = Database::new_in_memory().await.expect("in-memory database");

    register_from_candidates(
        db.pool(),
        vec![record("Moby Dick", "en", Some(melville()))],
        "moby dick",
    )
    .await
    .expect("registration");

    register_from_candidates(
        db.pool(),
        vec![record("Le Tour du monde en quatre-vingts jours", "fr", Some(verne()))],
        "tour du monde",
    )
    .await
    .expect("registration");

    let all = views::all_books(&db).await.expect("all books");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title, "Moby Dick");
    assert_eq!(all[0].author_name.as_deref(), Some("Melville, Herman"));

    let french = views::books_by_language(&db, "fr").await.expect("by language");
    assert_eq!(french.len(), 1);
    assert_eq!(french[0].author_name.as_deref(), Some("Verne, Jules"));

    let authors = views::all_authors(&db).await.expect("all authors");
    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].book_titles(), vec!["Moby Dick"]);

    // Both were alive in 1870; only Verne outlived 1891
    let alive_1870 = views::authors_alive_in(&db, 1870).await.expect("alive");
    assert_eq!(alive_1870.len(), 2);
    let alive_1900 = views::authors_alive_in(&db, 1900).await.expect("alive");
    assert_eq!(alive_1900.len(), 1);
    assert_eq!(alive_1900[0].name, "Verne, Jules");
}

#[tokio::test]
async fn duplicate_registration_leaves_a_single_row() {
    let db = Database::new_in_memory().await.expect("in-memory database");
    let candidates = || vec![record("Moby Dick", "en", Some(melville()))];

    let first = register_from_candidates(db.pool(), candidates(), "moby")
        .await
        .expect("first registration");
    assert!(matches!(first, RegisterOutcome::Registered(_)));

    let second = register_from_candidates(db.pool(), candidates(), "moby")
        .await
        .expect("second registration");
    assert!(matches!(second, RegisterOutcome::AlreadyRegistered(_)));

    assert_eq!(views::all_books(&db).await.expect("all books").len(), 1);
}

#[tokio::test]
async fn failed_registrations_leave_the_store_untouched() {
    let db = Database::new_in_memory().await.expect("in-memory database");

    let no_results = register_from_candidates(db.pool(), vec![], "zzzqqq").await;
    assert!(matches!(no_results, Err(CatalogError::NoResults { .. })));

    let no_match = register_from_candidates(
        db.pool(),
        vec![record("Moby Dick", "en", Some(melville()))],
        "hobbit",
    )
    .await;
    assert!(matches!(no_match, Err(CatalogError::NoMatch { .. })));

    assert!(views::all_books(&db).await.expect("all books").is_empty());
    assert!(views::all_authors(&db).await.expect("all authors").is_empty());
}

#[tokio::test]
async fn catalog_survives_a_reopen() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("catalog.db");

    {
        let db = Database::new(&path).await.expect("open database");
        register_from_candidates(
            db.pool(),
            vec![record("Moby Dick", "en", Some(melville()))],
            "moby",
        )
        .await
        .expect("registration");
        db.close().await.expect("close database");
    }

    let db = Database::new(&path).await.expect("reopen database");
    let books = views::all_books(&db).await.expect("all books");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Moby Dick");
}
