//! SQLite persistence layer for the bookstore inventory.
//!
//! Provides table creation and seeding, CRUD operations, and query APIs
//! backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;
pub mod types;

pub use operations::{book_exists, delete_book, insert_book, update_book, OperationError};
pub use queries::{count_books, find_book, list_books, search_books};
pub use rusqlite::Connection;
pub use schema::{
    close_database, default_seed, initialize, open_database, open_memory, InitReport, SchemaError,
};
pub use types::{Book, BookUpdate, Quantity, SearchField};
