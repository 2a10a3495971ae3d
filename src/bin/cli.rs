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


//! Interactive catalog menu
//!
//! Runs a numbered menu loop over stdin. Operation failures are printed
//! and the loop continues; only option 0 exits, always with code 0.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use libricat::catalog::{register_by_title, views};
use libricat::storage::models::{Author, AuthorWithBooks, BookWithAuthor};
use libricat::{ClientConfig, Database, GutendexClient, RegisterOutcome};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "libricat-cli")]
#[command(about = "Libricat - personal book catalog", long_about = None)]
struct Cli {
    /// Path to the catalog database (defaults to the platform data dir)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Override the catalog API base URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let db_path = cli.database.unwrap_or_else(Database::get_default_path);
    let db = Database::new(&db_path)
        .await
        .with_context(|| format!("opening catalog database at {}", db_path.display()))?;

    let mut config = ClientConfig::default();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    let client = GutendexClient::with_config(config).context("building catalog client")?;

    run_menu(&client, &db).await;

    db.close().await.context("closing catalog database")?;
    Ok(())
}

async fn run_menu(client: &GutendexClient, db: &Database) {
    loop {
        print_menu();

        let choice = match prompt("Select an option: ") {
            Ok(line) => line,
            Err(_) => break, // stdin closed
        };

        match choice.trim() {
            "1" => search_and_register(client, db).await,
            "2" => list_books(db).await,
            "3" => list_authors(db).await,
            "4" => list_authors_alive(db).await,
            "5" => list_books_by_language(db).await,
            "0" => {
                println!("Bye.");
                break;
            }
            other => println!("'{}' is not a menu option. Try again.", other),
        }
    }
}

fn print_menu() {
    println!();
    println!("--- LIBRICAT ---");
    println!("1 - Search and register a book by title");
    println!("2 - List registered books");
    println!("3 - List registered authors");
    println!("4 - List authors alive in a year");
    println!("5 - List books by language");
    println!("0 - Exit");
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}

async fn search_and_register(client: &GutendexClient, db: &Database) {
    let term = match prompt("Book title: ") {
        Ok(term) if !term.is_empty() => term,
        Ok(_) => {
            println!("Nothing to search for.");
            return;
        }
        Err(_) => return,
    };

    match register_by_title(client, db, &term).await {
        Ok(RegisterOutcome::Registered(book)) => {
            println!("Registered '{}'.", book.title);
        }
        Ok(RegisterOutcome::AlreadyRegistered(book)) => {
            println!("'{}' is already in the catalog.", book.title);
        }
        Err(e) => println!("{}", e.user_message()),
    }
}

async fn list_books(db: &Database) {
    match views::all_books(db).await {
        Ok(books) if books.is_empty() => println!("No books registered yet."),
        Ok(books) => {
            for book in &books {
                print_book(book);
            }
        }
        Err(e) => println!("{}", e.user_message()),
    }
}

async fn list_authors(db: &Database) {
    match views::all_authors(db).await {
        Ok(authors) if authors.is_empty() => println!("No authors registered yet."),
        Ok(authors) => {
            for author in &authors {
                print_author(author);
            }
        }
        Err(e) => println!("{}", e.user_message()),
    }
}

async fn list_authors_alive(db: &Database) {
    let year: i64 = match prompt("Year: ").map(|y| y.parse()) {
        Ok(Ok(year)) => year,
        Ok(Err(_)) => {
            println!("That is not a year.");
            return;
        }
        Err(_) => return,
    };

    match views::authors_alive_in(db, year).await {
        Ok(authors) if authors.is_empty() => {
            println!("No registered author was alive in {}.", year)
        }
        Ok(authors) => {
            for author in &authors {
                print_author_years(author);
            }
        }
        Err(e) => println!("{}", e.user_message()),
    }
}

async fn list_books_by_language(db: &Database) {
    let code = match prompt("Language (es, en, fr, pt): ") {
        Ok(code) => code,
        Err(_) => return,
    };

    match views::books_by_language(db, &code).await {
        Ok(books) if books.is_empty() => println!("No books in '{}'.", code),
        Ok(books) => {
            for book in &books {
                print_book(book);
            }
        }
        Err(e) => println!("{}", e.user_message()),
    }
}

fn print_book(book: &BookWithAuthor) {
    println!("------ BOOK ------");
    println!("Title: {}", book.title);
    println!(
        "Author: {}",
        book.author_name.as_deref().unwrap_or("Unknown")
    );
    println!("Language: {}", book.language);
    println!(
        "Downloads: {}",
        book.download_count
            .map(|n| n.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    );
}

fn print_author(author: &AuthorWithBooks) {
    println!("----- AUTHOR -----");
    println!("Name: {}", author.name);
    println!("Born: {}", year_or_unknown(author.birth_year));
    println!("Died: {}", year_or_unknown(author.death_year));
    println!("Books: [ {} ]", author.titles.as_deref().unwrap_or(""));
}

fn print_author_years(author: &Author) {
    println!("----- AUTHOR -----");
    println!("Name: {}", author.name);
    println!("Born: {}", year_or_unknown(author.birth_year));
    println!("Died: {}", year_or_unknown(author.death_year));
}

fn year_or_unknown(year: Option<i64>) -> String {
    year.map(|y| y.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
