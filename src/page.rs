//! Locating and vetting the week tables on the parsed schedule page.

use crate::config::EXPECTED_WEEK_TABLES;
use crate::errors::{AppError, AppResult};
use scraper::{ElementRef, Html, Selector};

/// The course page marks every week table with this class.
const WEEK_TABLE_SELECTOR: &str = ".foswikiTable";

/// Index of the orientation table. Its header carries extra cells on
/// purpose, so it is exempt from the malformed check. This is tied to
/// the current term's page content, not to any general rule.
pub const ORIENTATION_TABLE: usize = 0;

pub fn parse(body: &str) -> Html {
    Html::parse_document(body)
}

/// All week tables in document order. The page must carry exactly
/// `EXPECTED_WEEK_TABLES` of them; any other count means the site
/// layout drifted and nothing scraped from it can be trusted.
pub fn week_tables(doc: &Html) -> AppResult<Vec<ElementRef<'_>>> {
    let selector = Selector::parse(WEEK_TABLE_SELECTOR).unwrap();
    let tables: Vec<ElementRef<'_>> = doc.select(&selector).collect();
    if tables.len() != EXPECTED_WEEK_TABLES {
        return Err(AppError::Structure(format!(
            "expected {EXPECTED_WEEK_TABLES} week tables, found {}",
            tables.len()
        )));
    }
    Ok(tables)
}

/// Malformed flags for every table, in order. Some weeks' tables come
/// fused or otherwise mangled; the tell is a header-cell count other
/// than two. The orientation table is exempt, its shape is known-odd.
pub fn malformed_tables(tables: &[ElementRef<'_>]) -> Vec<bool> {
    let th = Selector::parse("th").unwrap();
    tables
        .iter()
        .enumerate()
        .map(|(index, table)| index != ORIENTATION_TABLE && table.select(&th).count() != 2)
        .collect()
}
