//! Assembly of the final schedule text: fixed header lines followed by
//! the rendered week grid, or the degraded-mode placeholder when the
//! source table for the week is broken.

use crate::models::schedule::{ScheduleDocument, WeekBody};
use crate::utils::table::Grid;

/// Column headers of the rendered week grid. The leading blank column
/// carries the row numbers the source tables ship with.
pub const GRID_HEADERS: [&str; 5] = ["", "Day/Date", "Topic", "Slides", "TODOs"];

/// Render the whole document. Ends with exactly one newline.
pub fn render(doc: &ScheduleDocument) -> String {
    let body = match &doc.body {
        WeekBody::Table(rows) => {
            let mut grid = Grid::new(GRID_HEADERS);
            for row in rows {
                grid.add_row(row.clone());
            }
            grid.render()
        }
        WeekBody::Degraded => format!(
            "This week is fucked up on the website. You're currently on week {}.",
            doc.week_no
        ),
    };

    format!(
        "Link: {}\nLast Updated: {}\nYou're on Week {}. This week starts on {}\n{}\n",
        doc.link, doc.updated, doc.week_no, doc.week_start, body
    )
}
