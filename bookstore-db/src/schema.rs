//! Table creation and first-run seeding.

use std::path::Path;

use rusqlite::{params, Connection};
use thiserror::Error;

use crate::types::Book;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Outcome of [`initialize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitReport {
    /// The `books` table did not exist and was created.
    pub created: bool,
    /// Rows inserted from the seed list. Always 0 when `created` is false.
    pub seeded: usize,
}

const SEED_BOOKS: [(i64, &str, &str, i64); 5] = [
    (3001, "A Tale of Two Cities", "Charles Dickens", 30),
    (3002, "Harry Potter and the Philosopher's Stone", "J.K. Rowling ", 40),
    (3003, "The Lion, the Witch and the Wardrobe", "C. S. Lewis ", 25),
    (3004, "The Lord of the Rings", "J.R.R Tolkien", 37),
    (3005, "Alice in Wonderland", "Lewis Carroll ", 12),
];

/// The stock rows a freshly created catalog starts with.
pub fn default_seed() -> Vec<Book> {
    SEED_BOOKS
        .iter()
        .map(|&(id, title, author, qty)| Book::new(id, title, author, qty))
        .collect()
}

/// Open or create a catalog database at the given path.
///
/// A new file gets the `books` table and `seed`; an existing table is left
/// untouched.
pub fn open_database(path: &Path, seed: &[Book]) -> Result<(Connection, InitReport), SchemaError> {
    let conn = Connection::open(path)?;
    log::debug!("Opened catalog database at {}", path.display());
    let report = initialize(&conn, seed)?;
    Ok((conn, report))
}

/// Open an in-memory database with the table and default seed. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    initialize(&conn, &default_seed())?;
    Ok(conn)
}

/// Create the `books` table and insert `seed`, unless the table already exists.
///
/// Creation and seeding commit together, so a crash never leaves a created
/// but half-seeded table behind.
pub fn initialize(conn: &Connection, seed: &[Book]) -> Result<InitReport, SchemaError> {
    if table_exists(conn)? {
        log::debug!("books table already present, skipping seed");
        return Ok(InitReport::default());
    }

    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(SCHEMA_SQL)?;
    {
        let mut stmt =
            tx.prepare("INSERT INTO books (id, Title, Author, Qty) VALUES (?1, ?2, ?3, ?4)")?;
        for book in seed {
            stmt.execute(params![book.id, book.title, book.author, book.quantity])?;
        }
    }
    tx.commit()?;

    log::debug!("Created books table with {} seed rows", seed.len());
    Ok(InitReport {
        created: true,
        seeded: seed.len(),
    })
}

/// Close the connection, surfacing any error SQLite reports on shutdown.
pub fn close_database(conn: Connection) -> Result<(), SchemaError> {
    conn.close().map_err(|(_, e)| SchemaError::Sqlite(e))
}

fn table_exists(conn: &Connection) -> Result<bool, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='books')",
        [],
        |row| row.get(0),
    )?;
    Ok(exists)
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE books (
    id INTEGER PRIMARY KEY,
    Title TEXT,
    Author TEXT,
    Qty INTEGER
);
"#;
