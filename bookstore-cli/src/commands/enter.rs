use std::io::{BufRead, Write};

use bookstore_db::{Book, Connection};

use crate::CliError;
use crate::console::Console;

/// Add a new book. Each field is re-asked on its own until valid, so a bad
/// quantity never throws away the id, title or author already entered.
pub(crate) fn run_enter_book<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let mut question = "\nEnter the id of the new book:\n";
    let id = loop {
        let id = console.prompt_int(question)?;
        if !bookstore_db::book_exists(conn, id)? {
            break id;
        }
        console.warn("That id is already taken. Please try a different id.")?;
        question = "Enter the id of the new book:\n";
    };

    let title = console.prompt("Enter the title of the new book:\n")?;
    let author = console.prompt("Enter the author of the new book:\n")?;
    let quantity = console.prompt_int("Enter a quantity for the new book:\n")?;

    let book = Book::new(id, title, author, quantity);
    bookstore_db::insert_book(conn, &book)?;

    console.say(format!(
        "{} of the new book titled {} (id {}) written by {} has been added.\n",
        book.quantity, book.title, book.id, book.author
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::{scripted, transcript};
    use bookstore_db::Quantity;

    #[test]
    fn enters_new_book() {
        let conn = bookstore_db::open_memory().unwrap();
        let mut console = scripted("9001\nDune\nFrank Herbert\n5\n");
        run_enter_book(&conn, &mut console).unwrap();

        assert_eq!(
            bookstore_db::find_book(&conn, 9001).unwrap(),
            Some(Book::new(9001, "Dune", "Frank Herbert", 5))
        );
        assert!(transcript(console).contains(
            "5 of the new book titled Dune (id 9001) written by Frank Herbert has been added."
        ));
    }

    #[test]
    fn taken_id_is_reasked_without_touching_existing_book() {
        let conn = bookstore_db::open_memory().unwrap();
        let mut console = scripted("3001\n3001\n9002\nEmma\nJane Austen\n3\n");
        run_enter_book(&conn, &mut console).unwrap();

        let original = bookstore_db::find_book(&conn, 3001).unwrap().unwrap();
        assert_eq!(original.title, "A Tale of Two Cities");
        assert_eq!(original.quantity, Quantity::Count(30));
        assert_eq!(
            bookstore_db::find_book(&conn, 9002).unwrap(),
            Some(Book::new(9002, "Emma", "Jane Austen", 3))
        );
        assert_eq!(transcript(console).matches("already taken").count(), 2);
    }

    #[test]
    fn bad_quantity_only_reasks_quantity() {
        let conn = bookstore_db::open_memory().unwrap();
        let mut console = scripted("9003\nUlysses\nJames Joyce\nmany\n7\n");
        run_enter_book(&conn, &mut console).unwrap();

        assert_eq!(
            bookstore_db::find_book(&conn, 9003).unwrap(),
            Some(Book::new(9003, "Ulysses", "James Joyce", 7))
        );
        let out = transcript(console);
        assert_eq!(out.matches("Enter the title of the new book:").count(), 1);
        assert_eq!(out.matches("Enter a quantity for the new book:").count(), 2);
    }
}
