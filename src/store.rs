//! The two files that survive between runs: the last-update timestamp
//! and the rendered schedule text.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

/// Read the instant of the last successful update. The file holds one
/// Unix timestamp in seconds, fractional part allowed.
pub fn read_last_update(path: &Path) -> AppResult<DateTime<Local>> {
    let raw = fs::read_to_string(path)?;
    let value = raw.trim();
    let seconds: f64 = value.parse().map_err(|_| invalid(path, value))?;
    from_unix_seconds(seconds).ok_or_else(|| invalid(path, value))
}

/// Overwrite the timestamp file with `now`, in the same fractional
/// format the reader accepts.
pub fn write_last_update(path: &Path, now: DateTime<Local>) -> AppResult<()> {
    let seconds = now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1e6;
    fs::write(path, format!("{seconds}"))?;
    Ok(())
}

/// Overwrite the schedule file with the rendered document.
pub fn write_schedule(path: &Path, text: &str) -> AppResult<()> {
    fs::write(path, text)?;
    Ok(())
}

fn from_unix_seconds(seconds: f64) -> Option<DateTime<Local>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let nanos = (((seconds - whole) * 1e9).round() as u32).min(999_999_999);
    DateTime::from_timestamp(whole as i64, nanos).map(|utc| utc.with_timezone(&Local))
}

fn invalid(path: &Path, value: &str) -> AppError {
    AppError::InvalidTimestamp {
        path: path.display().to_string(),
        value: value.to_string(),
    }
}
