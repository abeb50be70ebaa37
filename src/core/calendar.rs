//! Term calendar: the fixed list of week-start Mondays and the logic
//! deciding which academic week a given day falls into.

use chrono::{Duration, NaiveDate};

/// A resolved academic week: zero-based index into the term plus the
/// Monday it starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub index: usize,
    pub starts_on: NaiveDate,
}

impl Week {
    /// 1-based week number, the way it is shown to people.
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Ordered list of the Mondays each academic week starts on.
#[derive(Debug, Clone)]
pub struct TermCalendar {
    week_starts: Vec<NaiveDate>,
}

impl TermCalendar {
    /// Build a calendar from an ordered list of week-start dates.
    /// The list must be strictly increasing.
    pub fn new(week_starts: Vec<NaiveDate>) -> Self {
        debug_assert!(
            week_starts.windows(2).all(|pair| pair[0] < pair[1]),
            "week starts must be strictly increasing"
        );
        Self { week_starts }
    }

    /// The term this deployment tracks: Trimester 1, 2023.
    pub fn current_term() -> Self {
        Self::new(vec![
            ymd(2023, 2, 27),
            ymd(2023, 3, 6),
            ymd(2023, 3, 13),
            ymd(2023, 3, 20),
            ymd(2023, 3, 27),
            ymd(2023, 4, 3),
            // mid-term break between these two
            ymd(2023, 4, 24),
            ymd(2023, 5, 1),
            ymd(2023, 5, 8),
            ymd(2023, 5, 15),
            ymd(2023, 5, 22),
            ymd(2023, 5, 29),
        ])
    }

    /// Which week does `day` fall into, counting a week as current from
    /// `lead_days` days before its official start? Returns the latest
    /// week whose shifted start is on or before `day`, or `None` when the
    /// day precedes the whole term. Callers must treat `None` as "no
    /// week", never as week zero.
    pub fn resolve_week(&self, day: NaiveDate, lead_days: i64) -> Option<Week> {
        let lead = Duration::days(lead_days);
        self.week_starts
            .iter()
            .rposition(|start| *start - lead <= day)
            .map(|index| Week {
                index,
                starts_on: self.week_starts[index],
            })
    }

    /// Number of weeks in the term.
    pub fn weeks(&self) -> usize {
        self.week_starts.len()
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
