//! Top-level menu loop.

use std::io::{BufRead, Write};

use bookstore_db::Connection;

use crate::CliError;
use crate::commands::delete::run_delete_book;
use crate::commands::enter::run_enter_book;
use crate::commands::search::run_search_books;
use crate::commands::update::run_update_book;
use crate::commands::view::run_view_all;
use crate::commands::MENU_CHOICE_ERROR;
use crate::console::Console;

const MAIN_MENU: &str = "\nPlease select one of the following options:
1. Enter book
2. Update book
3. Delete book
4. Search books
5. View all books
0. Exit
Chosen option: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    Enter,
    Update,
    Delete,
    Search,
    ViewAll,
    Exit,
}

impl MenuChoice {
    pub(crate) fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Enter),
            "2" => Some(Self::Update),
            "3" => Some(Self::Delete),
            "4" => Some(Self::Search),
            "5" => Some(Self::ViewAll),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Serve menu choices until the operator exits or input runs out, then close
/// the catalog.
pub(crate) fn run_menu<R: BufRead, W: Write>(
    conn: Connection,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    console.say("Welcome to the book management program.")?;

    match serve(&conn, console) {
        Ok(()) | Err(CliError::InputClosed) => {}
        Err(e) => return Err(e),
    }

    bookstore_db::close_database(conn)?;
    log::debug!("Catalog closed");
    Ok(())
}

fn serve<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    loop {
        let answer = console.prompt(MAIN_MENU)?;
        let Some(choice) = MenuChoice::parse(&answer) else {
            console.say("")?;
            console.warn(MENU_CHOICE_ERROR)?;
            continue;
        };
        log::debug!("Menu choice: {:?}", choice);

        match choice {
            MenuChoice::Enter => run_enter_book(conn, console)?,
            MenuChoice::Update => run_update_book(conn, console)?,
            MenuChoice::Delete => run_delete_book(conn, console)?,
            MenuChoice::Search => run_search_books(conn, console)?,
            MenuChoice::ViewAll => run_view_all(conn, console)?,
            MenuChoice::Exit => {
                console.say("The program will now terminate.")?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::{scripted, transcript};

    fn shared_catalog() -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books_db");
        (dir, path)
    }

    fn session(path: &std::path::Path, script: &str) -> String {
        let (conn, _) = bookstore_db::open_database(path, &bookstore_db::default_seed()).unwrap();
        let mut console = scripted(script);
        run_menu(conn, &mut console).unwrap();
        transcript(console)
    }

    #[test]
    fn parses_menu_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Enter));
        assert_eq!(MenuChoice::parse(" 5 "), Some(MenuChoice::ViewAll));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn exit_prints_farewell() {
        let (_dir, path) = shared_catalog();
        let out = session(&path, "0\n");
        assert!(out.starts_with("Welcome to the book management program."));
        assert!(out.contains("The program will now terminate."));
    }

    #[test]
    fn unknown_choice_stays_in_menu() {
        let (_dir, path) = shared_catalog();
        let out = session(&path, "7\nfoo\n0\n");
        assert_eq!(out.matches(MENU_CHOICE_ERROR).count(), 2);
        assert_eq!(out.matches("Please select one of the following options:").count(), 3);
    }

    #[test]
    fn closed_input_ends_session_quietly() {
        let (_dir, path) = shared_catalog();
        let out = session(&path, "5\n");
        assert!(out.contains("A Tale of Two Cities"));
        assert!(!out.contains("The program will now terminate."));
    }

    #[test]
    fn create_update_delete_across_sessions() {
        let (_dir, path) = shared_catalog();

        let out = session(&path, "1\n9001\nDune\nFrank Herbert\n5\n5\n0\n");
        assert!(out.contains("9001  Dune"));

        session(&path, "2\n9001\n3\n12\n0\n");
        let out = session(&path, "4\n1\n9001\n0\n");
        let row = out.lines().find(|l| l.starts_with("9001")).unwrap();
        assert!(row.contains("Dune"));
        assert!(row.contains("Frank Herbert"));
        assert!(row.ends_with("12"));

        session(&path, "3\n9001\n0\n");
        let out = session(&path, "4\n1\n9001\n0\n");
        assert!(!out.lines().any(|l| l.starts_with("9001")));
    }

    #[test]
    fn storage_failure_ends_session_with_error() {
        let conn = bookstore_db::open_memory().unwrap();
        conn.execute("DROP TABLE books", []).unwrap();
        let mut console = scripted("5\n0\n");

        let result = run_menu(conn, &mut console);
        assert!(matches!(result, Err(CliError::Operation(_))));
        assert!(!transcript(console).contains("The program will now terminate."));
    }

    #[test]
    fn reopening_does_not_reseed() {
        let (_dir, path) = shared_catalog();
        session(&path, "3\n3001\n0\n");

        let (conn, report) =
            bookstore_db::open_database(&path, &bookstore_db::default_seed()).unwrap();
        assert!(!report.created);
        assert_eq!(bookstore_db::count_books(&conn).unwrap(), 4);
    }
}
