//! schedcache library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod fetch;
pub mod models;
pub mod page;
pub mod store;
pub mod ui;
pub mod utils;

use chrono::{DateTime, Local};
use clap::Parser;
use cli::Cli;
use config::Config;
use crate::core::calendar::TermCalendar;
use crate::core::{gate, normalize, render};
use errors::{AppError, AppResult};
use models::{ScheduleDocument, WeekBody};
use ui::messages;

/// What a run ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The page was fetched and both cache files were rewritten.
    Updated,
    /// The cached schedule was still current; nothing was touched.
    Fresh,
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // parse first so --help and --version work without any configuration
    let _cli = Cli::parse();
    let cfg = Config::from_env()?;
    run_with(&cfg, Local::now(), &TermCalendar::current_term()).map(|_| ())
}

/// The whole pipeline, with the clock and the calendar passed in so tests
/// can pin both.
pub fn run_with(
    cfg: &Config,
    now: DateTime<Local>,
    calendar: &TermCalendar,
) -> AppResult<RunOutcome> {
    let last_update = store::read_last_update(&cfg.last_update_file)?;

    let today = now.date_naive();
    let current_week = calendar.resolve_week(today, config::LEAD_DAYS);
    let previous_week = calendar.resolve_week(last_update.date_naive(), config::LEAD_DAYS);

    if !gate::needs_update(now, last_update, current_week, previous_week, config::MAX_AGE_HOURS) {
        messages::info("No update needed!");
        return Ok(RunOutcome::Fresh);
    }

    let week = current_week.ok_or(AppError::UnresolvedWeek)?;

    let html = fetch::fetch_page(&cfg.link)?;
    let parsed = page::parse(&html);
    let tables = page::week_tables(&parsed)?;
    let malformed = page::malformed_tables(&tables);

    let table = *tables
        .get(week.index)
        .ok_or_else(|| AppError::Structure(format!("no table for week {}", week.number())))?;

    let body = if malformed[week.index] {
        WeekBody::Degraded
    } else {
        let strip = if week.index == page::ORIENTATION_TABLE {
            config::ORIENTATION_ROWS
        } else {
            0
        };
        WeekBody::Table(normalize::normalize_table(
            table,
            strip,
            config::MAX_COLUMN_WIDTH,
        )?)
    };

    let document = ScheduleDocument {
        link: cfg.link.clone(),
        updated: today,
        week_no: week.number(),
        week_start: week.starts_on,
        body,
    };

    if document.is_degraded() {
        messages::warning(format!("Week {} table is malformed on the page", week.number()));
    }

    let text = render::render(&document);
    println!("{text}");

    store::write_last_update(&cfg.last_update_file, now)?;
    store::write_schedule(&cfg.schedule_file, &text)?;
    messages::success(format!("Schedule saved to {}", cfg.schedule_file.display()));

    Ok(RunOutcome::Updated)
}
