use std::io::{BufRead, Write};

use bookstore_db::{Book, Connection, SearchField};

use super::MENU_CHOICE_ERROR;
use crate::CliError;
use crate::console::Console;
use crate::table::render_books;

const SEARCH_MENU: &str = "Search by:
1. id
2. Title
3. Author
Chosen option: ";

/// Run one search chosen from the sub-menu and print the matches.
pub(crate) fn run_search_books<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let books = loop {
        let choice = console.prompt(SEARCH_MENU)?;
        match choice.trim() {
            "1" => {
                let answer = console.prompt("Enter the book id: ")?;
                break search_by_id(conn, &answer)?;
            }
            "2" => {
                let needle = console.prompt("Enter the book title: ")?;
                break bookstore_db::search_books(conn, SearchField::Title, &needle)?;
            }
            "3" => {
                let needle = console.prompt("Enter the book author: ")?;
                break bookstore_db::search_books(conn, SearchField::Author, &needle)?;
            }
            _ => console.warn(MENU_CHOICE_ERROR)?,
        }
    };

    console.say(render_books(&books))
}

/// Exact id match. Text that is not an id matches nothing.
///
/// Only whole integers are ids here, so `3004.0` finds nothing.
fn search_by_id(conn: &Connection, answer: &str) -> Result<Vec<Book>, CliError> {
    match answer.trim().parse::<i64>() {
        Ok(id) => Ok(bookstore_db::find_book(conn, id)?.into_iter().collect()),
        Err(_) => {
            log::debug!("'{}' is not a book id, search is empty", answer);
            Ok(Vec::new())
        }
    }
}
