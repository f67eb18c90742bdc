//! Write operations on the `books` table.

use rusqlite::{params, Connection, ErrorCode};
use thiserror::Error;

use crate::types::{Book, BookUpdate};

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Book not found: id {id}")]
    NotFound { id: i64 },
    #[error("Book id {id} is already taken")]
    DuplicateId { id: i64 },
}

/// Whether a book with this id is stored.
pub fn book_exists(conn: &Connection, id: i64) -> Result<bool, OperationError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM books WHERE id = ?1)",
        params![id],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Insert a new book. Fails with `DuplicateId` if the id is in use.
pub fn insert_book(conn: &Connection, book: &Book) -> Result<(), OperationError> {
    let result = conn.execute(
        "INSERT INTO books (id, Title, Author, Qty) VALUES (?1, ?2, ?3, ?4)",
        params![book.id, book.title, book.author, book.quantity],
    );
    match result {
        Ok(_) => {
            log::debug!("Inserted book {}", book.id);
            Ok(())
        }
        Err(rusqlite::Error::SqliteFailure(err, _))
            if err.code == ErrorCode::ConstraintViolation =>
        {
            Err(OperationError::DuplicateId { id: book.id })
        }
        Err(e) => Err(e.into()),
    }
}

/// Overwrite one field of an existing book.
pub fn update_book(conn: &Connection, id: i64, update: &BookUpdate) -> Result<(), OperationError> {
    let sql = format!("UPDATE books SET {} = ?1 WHERE id = ?2", update.column());
    let changed = match update {
        BookUpdate::Title(text) | BookUpdate::Author(text) => {
            conn.execute(&sql, params![text, id])?
        }
        BookUpdate::Quantity(qty) => conn.execute(&sql, params![qty, id])?,
    };
    if changed == 0 {
        return Err(OperationError::NotFound { id });
    }
    log::debug!("Updated {} of book {}", update.column(), id);
    Ok(())
}

/// Permanently remove a book.
pub fn delete_book(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(OperationError::NotFound { id });
    }
    log::debug!("Deleted book {}", id);
    Ok(())
}
