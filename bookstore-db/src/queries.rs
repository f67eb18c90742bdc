//! Read queries for the catalog database.
//!
//! Provides lookup by id, substring search, and listing.

use rusqlite::{params, Connection, OptionalExtension};

use crate::operations::OperationError;
use crate::types::{Book, SearchField};

/// Find the book with exactly this id.
pub fn find_book(conn: &Connection, id: i64) -> Result<Option<Book>, OperationError> {
    let book = conn
        .query_row(
            "SELECT id, Title, Author, Qty FROM books WHERE id = ?1",
            params![id],
            row_to_book,
        )
        .optional()?;
    Ok(book)
}

/// Books whose `field` contains `needle` (case-insensitive for ASCII).
///
/// LIKE wildcards in `needle` are matched literally. An empty needle
/// returns every book.
pub fn search_books(
    conn: &Connection,
    field: SearchField,
    needle: &str,
) -> Result<Vec<Book>, OperationError> {
    let pattern = format!("%{}%", escape_like(needle));
    let sql = format!(
        r"SELECT id, Title, Author, Qty FROM books WHERE {} LIKE ?1 ESCAPE '\' ORDER BY id",
        field.column()
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![pattern], row_to_book)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// All books, ordered by id.
pub fn list_books(conn: &Connection) -> Result<Vec<Book>, OperationError> {
    let mut stmt = conn.prepare("SELECT id, Title, Author, Qty FROM books ORDER BY id")?;
    let rows = stmt.query_map([], row_to_book)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

pub fn count_books(conn: &Connection) -> Result<usize, OperationError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
    Ok(count as usize)
}

fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn row_to_book(row: &rusqlite::Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        quantity: row.get(3)?,
    })
}
