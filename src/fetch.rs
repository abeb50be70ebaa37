//! One HTTP GET against the schedule page.

use crate::errors::{AppError, AppResult};
use reqwest::StatusCode;
use reqwest::blocking;

/// Fetch the schedule page body. Redirects are followed by the client;
/// anything but a final 200 aborts the run.
pub fn fetch_page(url: &str) -> AppResult<String> {
    let response = blocking::get(url)?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(AppError::Fetch {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.text()?)
}
