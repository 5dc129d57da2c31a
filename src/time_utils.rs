// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

//! Shared helpers for date/time parsing and formatting.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse a backend timestamp.
///
/// Accepts RFC3339 and zone-less ISO 8601 (`2025-03-01T08:15:00.123`),
/// which is read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Date-only label for activity cards, e.g. `Mar 1, 2025`.
pub fn format_display_date(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|dt| dt.format("%b %-d, %Y").to_string())
}

/// Date and time label for the detail view, e.g. `Mar 1, 2025 08:15`.
pub fn format_display_datetime(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|dt| dt.format("%b %-d, %Y %H:%M").to_string())
}
