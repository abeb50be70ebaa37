//! Domain types for the rendered schedule artifact.

use chrono::NaiveDate;

/// What fills the body of the schedule document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeekBody {
    /// Normalized rows of the current week's table.
    Table(Vec<Vec<String>>),
    /// The week's source table is malformed; the document carries a
    /// placeholder sentence instead of a grid.
    Degraded,
}

/// The final artifact written to the schedule file (and stdout): source
/// link, the date of this update, which week we are on and when it
/// starts, plus the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDocument {
    pub link: String,
    pub updated: NaiveDate,
    /// 1-based week number, the way it is shown to people.
    pub week_no: usize,
    pub week_start: NaiveDate,
    pub body: WeekBody,
}

impl ScheduleDocument {
    pub fn is_degraded(&self) -> bool {
        matches!(self.body, WeekBody::Degraded)
    }
}
