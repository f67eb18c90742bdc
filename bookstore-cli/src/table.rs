//! Plain-text table layout for book listings.

use bookstore_db::Book;

const HEADERS: [&str; 4] = ["id", "Title", "Author", "Qty"];
const NUMERIC: [bool; 4] = [true, false, false, true];

/// Columns are padded to at least this much beyond the header text.
const HEADER_PADDING: usize = 2;
const GAP: &str = "  ";

/// Render `books` under an `id / Title / Author / Qty` header.
///
/// Numeric columns are right-aligned, text columns left-aligned. An empty
/// slice still renders the header and rule.
pub(crate) fn render_books(books: &[Book]) -> String {
    let rows: Vec<[String; 4]> = books
        .iter()
        .map(|b| {
            [
                b.id.to_string(),
                b.title.clone(),
                b.author.clone(),
                b.quantity.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count() + HEADER_PADDING);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&HEADERS, &widths));
    lines.push(
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join(GAP),
    );
    for row in &rows {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

fn format_row<S: AsRef<str>>(cells: &[S; 4], widths: &[usize; 4]) -> String {
    cells
        .iter()
        .zip(widths)
        .zip(NUMERIC)
        .map(|((cell, &width), numeric)| {
            if numeric {
                format!("{:>width$}", cell.as_ref())
            } else {
                format!("{:<width$}", cell.as_ref())
            }
        })
        .collect::<Vec<_>>()
        .join(GAP)
}
