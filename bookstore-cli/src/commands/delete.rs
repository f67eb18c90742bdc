use std::io::{BufRead, Write};

use bookstore_db::Connection;

use super::existing_id;
use crate::CliError;
use crate::console::Console;

pub(crate) fn run_delete_book<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let id = existing_id(conn, console)?;
    bookstore_db::delete_book(conn, id)?;
    console.say(format!("\nData of book id {} deleted!", id))
}
