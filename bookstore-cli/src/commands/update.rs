use std::io::{BufRead, Write};

use bookstore_db::{BookUpdate, Connection};

use super::{MENU_CHOICE_ERROR, existing_id};
use crate::CliError;
use crate::console::Console;

const UPDATE_MENU: &str = "\nWhich information would you like to update:
1. Title
2. Author
3. Quantity
Chosen option: ";

/// Change one field of an existing book.
pub(crate) fn run_update_book<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let id = existing_id(conn, console)?;

    let update = loop {
        let choice = console.prompt(UPDATE_MENU)?;
        match choice.trim() {
            "1" => break BookUpdate::Title(console.prompt("Enter the desired book title: ")?),
            "2" => break BookUpdate::Author(console.prompt("Enter the desired book author: ")?),
            "3" => {
                break BookUpdate::Quantity(
                    console.prompt_int("Enter the desired book quantity: ")?,
                );
            }
            _ => console.warn(MENU_CHOICE_ERROR)?,
        }
    };

    bookstore_db::update_book(conn, id, &update)?;

    let summary = match &update {
        BookUpdate::Title(title) => format!("Title updated to: {}", title),
        BookUpdate::Author(author) => format!("Author updated to: {}", author),
        BookUpdate::Quantity(qty) => format!("Quantity updated to: {}", qty),
    };
    console.say(format!("\n{}", summary))
}
