use std::io::{BufRead, Write};

use bookstore_db::Connection;

use crate::CliError;
use crate::console::Console;
use crate::table::render_books;

pub(crate) fn run_view_all<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let books = bookstore_db::list_books(conn)?;
    console.say("")?;
    console.say(render_books(&books))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::{scripted, transcript};
    use bookstore_db::Book;

    #[test]
    fn lists_every_book_by_id() {
        let conn = bookstore_db::open_memory().unwrap();
        bookstore_db::insert_book(&conn, &Book::new(9001, "Dune", "Frank Herbert", 5)).unwrap();
        let mut console = scripted("");
        run_view_all(&conn, &mut console).unwrap();

        let out = transcript(console);
        let lines: Vec<&str> = out.lines().collect();
        // blank line, header, rule, six rows
        assert_eq!(lines.len(), 9);
        assert!(lines[3].starts_with("3001  A Tale of Two Cities"));
        assert!(lines[8].starts_with("9001  Dune"));
        assert!(lines[8].contains("Frank Herbert"));
        assert!(lines[8].ends_with(" 5"));
    }
}
