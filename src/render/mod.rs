//! View models derived from application state.
//!
//! Each renderer is a pure function of the current state; the `ui` module
//! turns its output into widgets. Nothing here is incremental: every call
//! re-derives the whole view.

pub mod analytics;
pub mod canvas;
pub mod config_panel;
pub mod dashboard;
pub mod field;
pub mod preview;

use chrono::{DateTime, Local, TimeZone, Utc};

/// Creation date as shown in lists, in the local timezone.
pub fn local_date(created_at: &DateTime<Utc>) -> String {
    format_date(created_at, &Local)
}

fn format_date<Tz: TimeZone>(created_at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    created_at.with_timezone(tz).format("%-m/%-d/%Y").to_string()
}
