pub(crate) mod delete;
pub(crate) mod enter;
pub(crate) mod search;
pub(crate) mod update;
pub(crate) mod view;

use std::io::{BufRead, Write};

use bookstore_db::Connection;

use crate::CliError;
use crate::console::Console;

/// Shown whenever a menu or sub-menu choice is not one of the listed options.
pub(crate) const MENU_CHOICE_ERROR: &str =
    "Ensure you have entered an integer which correlates to the menu options.";

/// Ask for a book id until it names a stored book.
pub(crate) fn existing_id<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<i64, CliError> {
    loop {
        let id = console.prompt_int("\nEnter the id of the book:\n")?;
        if bookstore_db::book_exists(conn, id)? {
            return Ok(id);
        }
        console.warn("id not recognised. Please try again.")?;
    }
}
