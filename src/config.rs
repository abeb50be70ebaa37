//! Runtime configuration and tuning constants.
//! Everything the tool needs from the outside arrives through three
//! environment variables; the rest is fixed per deployment.

use crate::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;

/// Days before a week's official Monday during which that week already
/// counts as current, so the coming week is visible while the previous
/// one winds down.
pub const LEAD_DAYS: i64 = 3;

/// How old the cached schedule may grow before a refresh, in hours.
pub const MAX_AGE_HOURS: f64 = 24.0;

/// Hard cap on rendered cell width; longer text wraps onto extra lines.
pub const MAX_COLUMN_WIDTH: usize = 30;

/// Number of week tables the course page is expected to carry.
pub const EXPECTED_WEEK_TABLES: usize = 9;

/// Orientation preamble rows stripped from the first week's table.
pub const ORIENTATION_ROWS: usize = 2;

#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the schedule page.
    pub link: String,
    /// File holding the Unix timestamp of the last successful update.
    pub last_update_file: PathBuf,
    /// File the rendered schedule text is written to.
    pub schedule_file: PathBuf,
}

impl Config {
    /// Load configuration from the environment. All three variables are
    /// required; there are no sensible defaults for any of them.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            link: require("LINK")?,
            last_update_file: require("LAST_UPDATE_FN")?.into(),
            schedule_file: require("SCHEDULE_OUT_FN")?.into(),
        })
    }
}

fn require(name: &str) -> AppResult<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::Config(format!(
            "missing environment variable {name}"
        ))),
    }
}
