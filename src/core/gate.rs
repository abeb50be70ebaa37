//! The update gate: decides whether the cached schedule needs a refresh.

use super::calendar::Week;
use chrono::{DateTime, Local};

/// Wall-clock hours between two instants, fractional.
pub fn hours_between(start: DateTime<Local>, end: DateTime<Local>) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}

/// Has the cached schedule outlived `max_age_hours`?
pub fn is_stale(now: DateTime<Local>, last_update: DateTime<Local>, max_age_hours: f64) -> bool {
    hours_between(last_update, now) >= max_age_hours
}

/// Should the schedule be refreshed? Two independent triggers, either one
/// is enough: the cached copy has gone stale, or the academic week rolled
/// over since the last update. A transition to or from "no week" counts
/// as a rollover too.
pub fn needs_update(
    now: DateTime<Local>,
    last_update: DateTime<Local>,
    current_week: Option<Week>,
    previous_week: Option<Week>,
    max_age_hours: f64,
) -> bool {
    is_stale(now, last_update, max_age_hours) || current_week != previous_week
}
