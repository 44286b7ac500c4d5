//! Incremental replication windows
//!
//! Computes the `dateFrom` (and, for bounded streams, `dateTo`) query
//! parameters for a sync run. When a bookmark exists the window opens one
//! calendar day before it: the replication keys are not perfectly
//! monotonic relative to wall-clock fetch time, so the overlap trades a
//! little duplicate re-delivery for completeness.

use crate::config::DATE_FORMAT;
use crate::error::{Error, Result};
use chrono::{Days, NaiveDate};

/// Upper-bound behavior of a stream's replication window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowVariant {
    /// `dateFrom` only; the vendor defaults the upper bound to "now"
    OpenEnded,
    /// `dateFrom` plus an explicit `dateTo` of the current date
    BoundedToToday,
}

/// Compute the date-window query parameters for one sync run.
///
/// Without a bookmark the window starts at the configured start date; with
/// one it starts a day earlier than the bookmark. Dates are rendered as
/// `YYYY-MM-DD`.
pub fn window_params(
    variant: WindowVariant,
    bookmark: Option<&str>,
    start_date: NaiveDate,
    today: NaiveDate,
) -> Result<Vec<(String, String)>> {
    let date_from = match bookmark {
        Some(raw) => bookmark_date(raw)?
            .checked_sub_days(Days::new(1))
            .ok_or_else(|| Error::state(format!("Bookmark date underflow: {raw}")))?,
        None => start_date,
    };

    let mut params = vec![("dateFrom".to_string(), format_date(date_from))];
    if variant == WindowVariant::BoundedToToday {
        params.push(("dateTo".to_string(), format_date(today)));
    }

    Ok(params)
}

/// Render a date in the vendor's `YYYY-MM-DD` form
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse the calendar date out of a bookmark value.
///
/// Bookmarks hold the raw replication-key value, which may be a bare date
/// or a full timestamp (`2024-03-10T14:02:11Z`); only the leading date
/// portion matters for windowing.
fn bookmark_date(raw: &str) -> Result<NaiveDate> {
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .map_err(|e| Error::state(format!("Malformed bookmark '{raw}': {e}")))
}

#[cfg(test)]
mod tests;
