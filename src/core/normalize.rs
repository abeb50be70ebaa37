//! Turns one raw HTML week table into a grid of trimmed, word-wrapped
//! cell strings ready for tabular rendering.

use crate::errors::{AppError, AppResult};
use scraper::{ElementRef, Selector};

/// Normalize the body rows of `table`.
///
/// Cell text is trimmed and word-wrapped to `width` columns; wrapped
/// lines stay inside the cell, joined with `\n`. Cells that end up empty
/// are dropped, as are rows with no cells left. The first `strip_rows`
/// surviving rows are discarded so preamble content can be skipped.
pub fn normalize_table(
    table: ElementRef<'_>,
    strip_rows: usize,
    width: usize,
) -> AppResult<Vec<Vec<String>>> {
    let tbody = Selector::parse("tbody").unwrap();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for body in table.select(&tbody) {
        for node in body.children() {
            // The source markup leaves whitespace-only text nodes between
            // row tags. An empty one means the page's shape changed.
            if let Some(text) = node.value().as_text() {
                if text.is_empty() {
                    return Err(AppError::Structure(
                        "empty text node between table rows".into(),
                    ));
                }
                continue;
            }
            let Some(row) = ElementRef::wrap(node) else {
                continue;
            };

            let mut cells = Vec::new();
            for child in row.children() {
                let content = match ElementRef::wrap(child) {
                    Some(cell) => cell.text().collect::<String>(),
                    None => child
                        .value()
                        .as_text()
                        .map(|text| text.to_string())
                        .unwrap_or_default(),
                };
                let wrapped = wrap_cell(content.trim(), width);
                if !wrapped.is_empty() {
                    cells.push(wrapped);
                }
            }

            if !cells.is_empty() {
                rows.push(cells);
            }
        }
    }

    Ok(rows.into_iter().skip(strip_rows).collect())
}

/// Word-wrap one cell onto lines of at most `width` columns, rejoined
/// with a line break so the cell stays a single string.
fn wrap_cell(text: &str, width: usize) -> String {
    textwrap::wrap(text, width).join("\n")
}
