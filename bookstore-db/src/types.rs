//! Data model types for the inventory.

use std::fmt;

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

/// One row of the `books` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub quantity: Quantity,
}

impl Book {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            quantity: Quantity::Count(quantity),
        }
    }
}

/// Stock count as stored in `Qty`.
///
/// Catalogs written by older tooling can hold free text in `Qty`; those
/// values are kept verbatim instead of failing the whole read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quantity {
    Count(i64),
    Text(String),
}

impl From<i64> for Quantity {
    fn from(count: i64) -> Self {
        Quantity::Count(count)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Count(count) => write!(f, "{}", count),
            Quantity::Text(text) => f.write_str(text),
        }
    }
}

impl ToSql for Quantity {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Quantity::Count(count) => count.to_sql(),
            Quantity::Text(text) => text.to_sql(),
        }
    }
}

impl FromSql for Quantity {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(match value {
            ValueRef::Integer(count) => Quantity::Count(count),
            ValueRef::Real(real) => Quantity::Text(real.to_string()),
            ValueRef::Null => Quantity::Text(String::new()),
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                let text = String::from_utf8_lossy(bytes);
                match text.trim().parse::<i64>() {
                    Ok(count) => Quantity::Count(count),
                    Err(_) => Quantity::Text(text.into_owned()),
                }
            }
        })
    }
}

/// A single-field change applied to an existing book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookUpdate {
    Title(String),
    Author(String),
    Quantity(i64),
}

impl BookUpdate {
    /// Column written by this update.
    pub fn column(&self) -> &'static str {
        match self {
            BookUpdate::Title(_) => "Title",
            BookUpdate::Author(_) => "Author",
            BookUpdate::Quantity(_) => "Qty",
        }
    }
}

/// Text columns that support substring search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    pub fn column(self) -> &'static str {
        match self {
            SearchField::Title => "Title",
            SearchField::Author => "Author",
        }
    }
}
