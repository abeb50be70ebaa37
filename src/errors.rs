//! Unified application error type.
//! All modules (fetch, page, store, core) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Stored state
    // ---------------------------
    #[error("Invalid timestamp in {path}: {value:?}")]
    InvalidTimestamp { path: String, value: String },

    // ---------------------------
    // Network
    // ---------------------------
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request to {url} returned {status}")]
    Fetch { url: String, status: u16 },

    // ---------------------------
    // Page structure
    // ---------------------------
    #[error("Unexpected page structure: {0}")]
    Structure(String),

    #[error("Today precedes every configured week start; no current week to show")]
    UnresolvedWeek,
}

pub type AppResult<T> = Result<T, AppError>;
